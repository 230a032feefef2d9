//! Canonical endpoint identifiers and their synthesis from structured fields.
//!
//! An endpoint identifier names one side of a link as `<owner>:<interface>`.
//! The owner is a topology node, or for the host side of a host-attachment
//! link, the kind's own name (`host`, `macvlan`, `macvtap`, `mgmt-net`).

use crate::{LinkError, LinkKind};

/// Separator between owner and interface name.
pub const ENDPOINT_SEPARATOR: char = ':';

/// A canonical `<owner>:<interface>` endpoint identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndpointId(String);

impl EndpointId {
    /// Parses an authored endpoint string.
    ///
    /// The string is kept verbatim. The owner is everything before the first
    /// separator; both owner and interface must be non-empty.
    pub fn parse(s: &str) -> Result<Self, LinkError> {
        let Some((owner, interface)) = s.split_once(ENDPOINT_SEPARATOR) else {
            return Err(LinkError::InvalidEndpoint {
                endpoint: s.to_string(),
                reason: "expected '<node>:<interface>'",
            });
        };

        if owner.is_empty() {
            return Err(LinkError::InvalidEndpoint {
                endpoint: s.to_string(),
                reason: "owner is empty",
            });
        }

        if interface.is_empty() {
            return Err(LinkError::InvalidEndpoint {
                endpoint: s.to_string(),
                reason: "interface is empty",
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Builds the in-topology endpoint `<node>:<interface>`.
    #[must_use]
    pub fn for_node(node: &str, interface: &str) -> Self {
        Self(format!("{node}{ENDPOINT_SEPARATOR}{interface}"))
    }

    /// Builds the host-side endpoint `<kind>:<host-interface>`.
    #[must_use]
    pub fn for_host_side(kind: LinkKind, host_interface: &str) -> Self {
        Self(format!("{kind}{ENDPOINT_SEPARATOR}{host_interface}"))
    }

    /// Orders a host-attachment pair: in-topology side first, host side second.
    #[must_use]
    pub fn host_attachment_pair(
        node_side: Self,
        kind: LinkKind,
        host_interface: &str,
    ) -> [Self; 2] {
        [node_side, Self::for_host_side(kind, host_interface)]
    }

    /// Returns the owner portion (node name or reserved kind name).
    pub fn owner(&self) -> &str {
        self.split().0
    }

    /// Returns the interface portion.
    pub fn interface(&self) -> &str {
        self.split().1
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the reserved kind this endpoint's owner names, if any.
    pub fn reserved_owner(&self) -> Option<LinkKind> {
        LinkKind::parse(self.owner())
            .ok()
            .filter(LinkKind::is_host_attachment)
    }

    fn split(&self) -> (&str, &str) {
        self.0
            .split_once(ENDPOINT_SEPARATOR)
            .unwrap_or((self.0.as_str(), ""))
    }
}

impl std::fmt::Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EndpointId {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EndpointId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EndpointId> for String {
    fn from(id: EndpointId) -> Self {
        id.0
    }
}

impl serde::Serialize for EndpointId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EndpointId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

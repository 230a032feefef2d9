//! The closed registry of link kinds.

use crate::LinkError;

/// Kind of a link.
///
/// `Deprecate` marks a link declared with the legacy untyped endpoint list.
/// It behaves like a `Veth` point-to-point link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkKind {
    Veth,
    Host,
    MacVlan,
    MacVtap,
    MgmtNet,
    Deprecate,
}

impl LinkKind {
    /// Every registered kind, in registry order.
    pub const ALL: [LinkKind; 6] = [
        LinkKind::Veth,
        LinkKind::Host,
        LinkKind::MacVlan,
        LinkKind::MacVtap,
        LinkKind::MgmtNet,
        LinkKind::Deprecate,
    ];

    /// Returns the identifier used in declarations and endpoint owners.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Veth => "veth",
            LinkKind::Host => "host",
            LinkKind::MacVlan => "macvlan",
            LinkKind::MacVtap => "macvtap",
            LinkKind::MgmtNet => "mgmt-net",
            LinkKind::Deprecate => "deprecate",
        }
    }

    /// Parses a kind identifier.
    ///
    /// Matching is exact and case-sensitive. Anything outside the registry is
    /// an error; nothing falls back to `Deprecate`.
    pub fn parse(s: &str) -> Result<Self, LinkError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| LinkError::UnknownKind {
                kind: s.to_string(),
            })
    }

    /// Returns true for kinds whose second endpoint lives on the host side.
    #[must_use]
    pub const fn is_host_attachment(&self) -> bool {
        matches!(
            self,
            LinkKind::Host | LinkKind::MacVlan | LinkKind::MacVtap | LinkKind::MgmtNet
        )
    }

    /// Returns the kind an endpoint owner name may not stand for in a legacy
    /// endpoint list.
    pub(crate) fn typed_only_owner(owner: &str) -> Option<Self> {
        match owner {
            "macvlan" => Some(LinkKind::MacVlan),
            "macvtap" => Some(LinkKind::MacVtap),
            _ => None,
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LinkKind {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for LinkKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for LinkKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_registered_kind() {
        for kind in LinkKind::ALL {
            assert_eq!(LinkKind::parse(kind.as_str()).unwrap(), kind);
            assert_eq!(kind.to_string().parse::<LinkKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = LinkKind::parse("foobar").unwrap_err();
        assert_eq!(
            err,
            LinkError::UnknownKind {
                kind: "foobar".to_string()
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(LinkKind::parse("MacVlan").is_err());
        assert!(LinkKind::parse("MGMT-NET").is_err());
        assert!(LinkKind::parse("mgmt_net").is_err());
        assert!(LinkKind::parse(" veth").is_err());
        assert!(LinkKind::parse("").is_err());
    }

    #[test]
    fn test_host_attachment_family() {
        let family: Vec<_> = LinkKind::ALL
            .into_iter()
            .filter(LinkKind::is_host_attachment)
            .collect();
        assert_eq!(
            family,
            vec![
                LinkKind::Host,
                LinkKind::MacVlan,
                LinkKind::MacVtap,
                LinkKind::MgmtNet
            ]
        );
    }

    #[test]
    fn test_typed_only_owner() {
        assert_eq!(LinkKind::typed_only_owner("macvlan"), Some(LinkKind::MacVlan));
        assert_eq!(LinkKind::typed_only_owner("macvtap"), Some(LinkKind::MacVtap));
        assert_eq!(LinkKind::typed_only_owner("host"), None);
        assert_eq!(LinkKind::typed_only_owner("mgmt-net"), None);
        assert_eq!(LinkKind::typed_only_owner("srl1"), None);
    }

    #[test]
    fn test_kind_json_roundtrip() {
        let json = serde_json::to_string(&LinkKind::MgmtNet).unwrap();
        assert_eq!(json, "\"mgmt-net\"");
        let parsed: LinkKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LinkKind::MgmtNet);

        let bad: Result<LinkKind, _> = serde_json::from_str("\"vxlan\"");
        assert!(bad.is_err());
    }
}

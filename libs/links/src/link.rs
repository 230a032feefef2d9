//! The canonical decoded link.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{EndpointId, LinkError, LinkKind, LinkParams};

/// A decoded link: a kind tag plus exactly two ordered endpoints.
///
/// Deserializing a `CanonicalLink` runs the full declaration decoder, so any
/// self-describing serde format yields either a valid link or a [`LinkError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct CanonicalLink {
    kind: LinkKind,

    endpoints: [EndpointId; 2],

    #[serde(flatten)]
    params: LinkParams,
}

impl CanonicalLink {
    pub(crate) fn new(kind: LinkKind, endpoints: [EndpointId; 2], params: LinkParams) -> Self {
        Self {
            kind,
            endpoints,
            params,
        }
    }

    /// Returns the link kind.
    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// Returns both endpoints in declaration order.
    pub fn endpoints(&self) -> &[EndpointId; 2] {
        &self.endpoints
    }

    /// Returns the common link parameters.
    pub fn params(&self) -> &LinkParams {
        &self.params
    }

    /// Returns the host-side endpoint of a host-attachment link.
    pub fn host_endpoint(&self) -> Option<&EndpointId> {
        self.kind
            .is_host_attachment()
            .then_some(&self.endpoints[1])
    }

    /// Consumes the link, returning its parts.
    pub fn into_parts(self) -> (LinkKind, [EndpointId; 2], LinkParams) {
        (self.kind, self.endpoints, self.params)
    }
}

impl TryFrom<Value> for CanonicalLink {
    type Error = LinkError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        crate::decode_value(value)
    }
}

impl std::fmt::Display for CanonicalLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = &self.endpoints;
        write!(f, "{} {} <-> {}", self.kind, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_runs_decoder() {
        let link: CanonicalLink = serde_json::from_value(json!({
            "type": "host",
            "host-interface": "srl1_e1-5",
            "endpoint": {"node": "srl1", "interface": "e1-5"},
        }))
        .unwrap();
        assert_eq!(link.kind(), LinkKind::Host);
        assert_eq!(link.host_endpoint().unwrap().as_str(), "host:srl1_e1-5");
    }

    #[test]
    fn test_deserialize_surfaces_decode_error() {
        let result: Result<CanonicalLink, _> =
            serde_json::from_value(json!({"endpoints": ["srl1:e1-5", "macvtap:e1-5"]}));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("macvtap"));
    }

    #[test]
    fn test_serialize_shape() {
        let link = crate::decode_value(json!({
            "endpoints": ["srl1:e1-5", "srl2:e1-5"],
            "labels": {"tier": "spine"},
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({
                "kind": "deprecate",
                "endpoints": ["srl1:e1-5", "srl2:e1-5"],
                "labels": {"tier": "spine"},
            })
        );
    }

    #[test]
    fn test_point_to_point_has_no_host_endpoint() {
        let link = crate::decode_value(json!({"endpoints": ["srl1:e1-5", "host:eth1"]})).unwrap();
        assert_eq!(link.host_endpoint(), None);
    }

    #[test]
    fn test_display() {
        let link = crate::decode_value(json!({
            "type": "macvlan",
            "host-interface": "enp0s3",
            "endpoint": {"node": "srl1", "interface": "e1-1"},
        }))
        .unwrap();
        assert_eq!(link.to_string(), "macvlan srl1:e1-1 <-> macvlan:enp0s3");
    }
}

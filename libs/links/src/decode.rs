//! Dispatch of a raw declaration to the decoder for its shape.
//!
//! The `type` discriminator decides everything:
//!
//! - absent: the legacy endpoint list decoder runs.
//! - present and registered: the decoder for that kind runs.
//! - present and unregistered: decoding stops with [`LinkError::UnknownKind`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::legacy;
use crate::typed;
use crate::{CanonicalLink, LinkError, LinkKind, LinkParams};

/// Name of the kind discriminator field.
pub const DISCRIMINATOR_FIELD: &str = "type";

/// A link declaration as authored, before any kind-specific decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLinkDeclaration {
    discriminator: Option<Value>,
    fields: Map<String, Value>,
}

impl RawLinkDeclaration {
    /// Splits a parsed document fragment into discriminator and fields.
    ///
    /// A `null` discriminator counts as absent.
    pub fn from_value(value: Value) -> Result<Self, LinkError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(LinkError::NotAMapping {
                    found: value_kind(&other),
                })
            }
        };

        let discriminator = fields
            .remove(DISCRIMINATOR_FIELD)
            .filter(|value| !value.is_null());

        Ok(Self {
            discriminator,
            fields,
        })
    }

    /// Returns true when the declaration carries no discriminator.
    pub fn is_legacy(&self) -> bool {
        self.discriminator.is_none()
    }

    /// Resolves the discriminator against the kind registry.
    ///
    /// Returns `Deprecate` when the discriminator is absent.
    pub fn kind(&self) -> Result<LinkKind, LinkError> {
        match &self.discriminator {
            None => Ok(LinkKind::Deprecate),
            Some(Value::String(s)) => LinkKind::parse(s),
            Some(other) => Err(LinkError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }

    /// Decodes the declaration into its canonical form.
    pub fn decode(self) -> Result<CanonicalLink, LinkError> {
        if self.is_legacy() {
            debug!("no link type given, decoding legacy endpoints");
            return self.decode_as(LinkKind::Deprecate);
        }

        let kind = self.kind()?;
        debug!(kind = %kind, "decoding typed link");
        self.decode_as(kind)
    }

    fn decode_as(mut self, kind: LinkKind) -> Result<CanonicalLink, LinkError> {
        let params = LinkParams::take_from(kind, &mut self.fields)?;
        let fields = self.fields;

        let endpoints = match kind {
            LinkKind::Deprecate => legacy::decode(payload(kind, fields)?)?,
            LinkKind::Veth => typed::decode_veth(payload(kind, fields)?)?,
            LinkKind::Host | LinkKind::MacVlan | LinkKind::MacVtap | LinkKind::MgmtNet => {
                typed::decode_host_attachment(kind, payload(kind, fields)?)?
            }
        };

        Ok(CanonicalLink::new(kind, endpoints, params))
    }
}

/// Decodes one already-parsed link declaration.
pub fn decode_value(value: Value) -> Result<CanonicalLink, LinkError> {
    RawLinkDeclaration::from_value(value)?.decode()
}

/// Deserializes the kind-specific fields, rejecting unknown or mistyped ones.
fn payload<T: DeserializeOwned>(
    kind: LinkKind,
    fields: Map<String, Value>,
) -> Result<T, LinkError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| LinkError::InvalidField {
        kind,
        message: e.to_string(),
    })
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn endpoints(link: &CanonicalLink) -> [&str; 2] {
        let [a, b] = link.endpoints();
        [a.as_str(), b.as_str()]
    }

    #[test]
    fn test_absent_discriminator_is_legacy() {
        let link = decode_value(json!({"endpoints": ["srl1:e1-5", "srl2:e1-5"]})).unwrap();
        assert_eq!(link.kind(), LinkKind::Deprecate);
        assert_eq!(endpoints(&link), ["srl1:e1-5", "srl2:e1-5"]);
    }

    #[test]
    fn test_null_discriminator_is_legacy() {
        let raw = RawLinkDeclaration::from_value(json!({
            "type": null,
            "endpoints": ["srl1:e1-5", "srl2:e1-5"],
        }))
        .unwrap();
        assert!(raw.is_legacy());
        assert_eq!(raw.decode().unwrap().kind(), LinkKind::Deprecate);
    }

    #[test]
    fn test_explicit_deprecate_runs_legacy_guard() {
        let err = decode_value(json!({
            "type": "deprecate",
            "endpoints": ["srl1:e1-5", "macvlan:e1-5"],
        }))
        .unwrap_err();
        assert!(err.is_misclassified());
    }

    #[test]
    fn test_unknown_discriminator_stops_before_fields() {
        // The payload is invalid for every kind; the kind error must win.
        let err = decode_value(json!({"type": "vxlan", "mtu": "bogus", "bogus": 1})).unwrap_err();
        assert_eq!(
            err,
            LinkError::UnknownKind {
                kind: "vxlan".to_string()
            }
        );
    }

    #[test]
    fn test_non_string_discriminator() {
        let err = decode_value(json!({"type": 7, "endpoints": []})).unwrap_err();
        assert!(err.is_unknown_kind());
    }

    #[test]
    fn test_empty_discriminator_is_unknown() {
        let err = decode_value(json!({"type": "", "endpoints": ["a:e1", "b:e1"]})).unwrap_err();
        assert!(err.is_unknown_kind());
    }

    #[test]
    fn test_typed_host_attachment() {
        let link = decode_value(json!({
            "type": "mgmt-net",
            "host-interface": "srl1_e1-5",
            "endpoint": {"node": "srl1", "interface": "e1-5"},
        }))
        .unwrap();
        assert_eq!(link.kind(), LinkKind::MgmtNet);
        assert_eq!(endpoints(&link), ["srl1:e1-5", "mgmt-net:srl1_e1-5"]);
    }

    #[test]
    fn test_typed_veth() {
        let link = decode_value(json!({
            "type": "veth",
            "endpoints": [
                {"node": "srl1", "interface": "e1-1"},
                {"node": "srl2", "interface": "e1-1"},
            ],
            "mtu": 9500,
        }))
        .unwrap();
        assert_eq!(link.kind(), LinkKind::Veth);
        assert_eq!(endpoints(&link), ["srl1:e1-1", "srl2:e1-1"]);
        assert_eq!(link.params().mtu, Some(9500));
    }

    #[test]
    fn test_typed_rejects_legacy_fields() {
        let err = decode_value(json!({
            "type": "host",
            "endpoints": ["srl1:e1-5", "host:eth1"],
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            LinkError::InvalidField {
                kind: LinkKind::Host,
                ..
            }
        ));
    }

    #[test]
    fn test_legacy_rejects_typed_fields() {
        let err = decode_value(json!({
            "endpoints": ["srl1:e1-5", "srl2:e1-5"],
            "host-interface": "eth1",
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            LinkError::InvalidField {
                kind: LinkKind::Deprecate,
                ..
            }
        ));
    }

    #[test]
    fn test_not_a_mapping() {
        let err = decode_value(json!(["srl1:e1-5", "srl2:e1-5"])).unwrap_err();
        assert_eq!(err, LinkError::NotAMapping { found: "sequence" });
    }
}

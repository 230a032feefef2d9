//! Decoders for typed declarations, one per kind family.
//!
//! - Point-to-point (`veth`): `endpoints` lists two endpoints, each either a
//!   canonical string or a `{node, interface}` pair.
//! - Host attachment (`host`, `macvlan`, `macvtap`, `mgmt-net`): one
//!   `endpoint {node, interface}` plus the `host-interface` name.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::decode::value_kind;
use crate::{EndpointId, LinkError, LinkKind, ENDPOINT_SEPARATOR};

/// A structured `{node, interface}` endpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NodeEndpoint {
    #[serde(default, deserialize_with = "scalar_string")]
    node: Option<String>,

    #[serde(default, deserialize_with = "scalar_string")]
    interface: Option<String>,
}

impl NodeEndpoint {
    fn resolve(self, kind: LinkKind) -> Result<EndpointId, LinkError> {
        let node = required(kind, "endpoint.node", self.node)?;
        let interface = required(kind, "endpoint.interface", self.interface)?;

        // The node name becomes the owner, so it cannot hold the separator.
        if node.contains(ENDPOINT_SEPARATOR) {
            return Err(LinkError::InvalidEndpoint {
                endpoint: format!("{node}{ENDPOINT_SEPARATOR}{interface}"),
                reason: "node name contains ':'",
            });
        }

        Ok(EndpointId::for_node(&node, &interface))
    }
}

/// One entry of a typed `veth` endpoint list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum EndpointRef {
    /// `"srl1:e1-1"`
    Canonical(String),
    /// `{node: srl1, interface: e1-1}`
    Structured(NodeEndpoint),
}

impl EndpointRef {
    fn resolve(self, kind: LinkKind) -> Result<EndpointId, LinkError> {
        match self {
            EndpointRef::Canonical(s) => EndpointId::parse(&s),
            EndpointRef::Structured(endpoint) => endpoint.resolve(kind),
        }
    }
}

/// Fields of a `veth` declaration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct VethFields {
    #[serde(default)]
    endpoints: Option<Vec<EndpointRef>>,
}

/// Fields of a host-attachment declaration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct HostAttachmentFields {
    #[serde(default)]
    endpoint: Option<NodeEndpoint>,

    #[serde(default, deserialize_with = "scalar_string")]
    host_interface: Option<String>,
}

/// Decodes a typed point-to-point declaration.
pub(crate) fn decode_veth(fields: VethFields) -> Result<[EndpointId; 2], LinkError> {
    let kind = LinkKind::Veth;
    let endpoints = fields.endpoints.ok_or(LinkError::Incomplete {
        kind,
        field: "endpoints",
    })?;

    let [a, b]: [EndpointRef; 2] = endpoints
        .try_into()
        .map_err(|rest: Vec<EndpointRef>| LinkError::EndpointCount {
            kind,
            count: rest.len(),
        })?;

    Ok([a.resolve(kind)?, b.resolve(kind)?])
}

/// Decodes a host-attachment declaration of the given kind.
pub(crate) fn decode_host_attachment(
    kind: LinkKind,
    fields: HostAttachmentFields,
) -> Result<[EndpointId; 2], LinkError> {
    debug_assert!(kind.is_host_attachment());

    let endpoint = fields
        .endpoint
        .ok_or(LinkError::Incomplete {
            kind,
            field: "endpoint",
        })?
        .resolve(kind)?;
    let host_interface = required(kind, "host-interface", fields.host_interface)?;

    Ok(EndpointId::host_attachment_pair(
        endpoint,
        kind,
        &host_interface,
    ))
}

/// Accepts a string, or a bare number or boolean as its text.
///
/// YAML authors write `host-interface: 100` or `interface: 1` unquoted.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid type: {}, expected a string",
            value_kind(&other)
        ))),
    }
}

/// Empty strings count as absent.
fn required(
    kind: LinkKind,
    field: &'static str,
    value: Option<String>,
) -> Result<String, LinkError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(LinkError::Incomplete { kind, field })
}

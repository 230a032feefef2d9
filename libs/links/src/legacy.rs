//! Decoder for the legacy untyped endpoint list.
//!
//! ```yaml
//! endpoints: ["srl1:e1-5", "srl2:e1-5"]
//! ```
//!
//! The two strings are taken verbatim. The legacy shape cannot express a
//! host-interface attachment, so an endpoint owned by `macvlan` or `macvtap`
//! is refused rather than decoded into a link of the wrong kind.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::decode::value_kind;
use crate::{EndpointId, LinkError, LinkKind, ENDPOINT_SEPARATOR};

/// Fields of a legacy declaration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LegacyFields {
    #[serde(default)]
    endpoints: Option<Vec<Value>>,
}

/// Decodes a legacy endpoint list into an ordered endpoint pair.
///
/// Checks run in a fixed order: list length, entry types, the reserved-owner
/// guard over both entries, then endpoint syntax.
pub(crate) fn decode(fields: LegacyFields) -> Result<[EndpointId; 2], LinkError> {
    let endpoints = fields.endpoints.ok_or(LinkError::Incomplete {
        kind: LinkKind::Deprecate,
        field: "endpoints",
    })?;

    let [a, b]: [Value; 2] = endpoints
        .try_into()
        .map_err(|rest: Vec<Value>| LinkError::MalformedLegacy { count: rest.len() })?;

    let raw = [entry(0, a)?, entry(1, b)?];
    for endpoint in &raw {
        guard(endpoint)?;
    }

    let [a, b] = raw;
    Ok([parse(&a)?, parse(&b)?])
}

fn entry(position: usize, value: Value) -> Result<String, LinkError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(LinkError::InvalidField {
            kind: LinkKind::Deprecate,
            message: format!(
                "endpoints[{position}] must be a \"node:interface\" string, found {}",
                value_kind(&other)
            ),
        }),
    }
}

fn guard(raw: &str) -> Result<(), LinkError> {
    let owner = raw
        .split_once(ENDPOINT_SEPARATOR)
        .map_or(raw, |(owner, _)| owner);

    match LinkKind::typed_only_owner(owner) {
        Some(kind) => Err(LinkError::Misclassified {
            owner: kind,
            endpoint: raw.to_string(),
        }),
        None => Ok(()),
    }
}

fn parse(raw: &str) -> Result<EndpointId, LinkError> {
    trace!(endpoint = raw, "legacy endpoint accepted");
    EndpointId::parse(raw)
}

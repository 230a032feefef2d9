//! Optional parameters shared by every link shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{LinkError, LinkKind};

/// Field names that carry [`LinkParams`] in any declaration shape.
const PARAM_FIELDS: [&str; 3] = ["mtu", "labels", "vars"];

/// Common link parameters, passed through decoding unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkParams {
    /// MTU to configure on both ends of the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,

    /// Free-form labels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Free-form variables for downstream templating.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, Value>,
}

impl LinkParams {
    /// Returns true when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.mtu.is_none() && self.labels.is_empty() && self.vars.is_empty()
    }

    /// Removes the parameter fields from a declaration and decodes them.
    ///
    /// The remaining fields are left for the kind-specific decoder.
    pub(crate) fn take_from(
        kind: LinkKind,
        fields: &mut Map<String, Value>,
    ) -> Result<Self, LinkError> {
        let mut taken = Map::new();
        for name in PARAM_FIELDS {
            if let Some(value) = fields.remove(name) {
                if !value.is_null() {
                    taken.insert(name.to_string(), value);
                }
            }
        }

        if taken.is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_value(Value::Object(taken)).map_err(|e| LinkError::InvalidField {
            kind,
            message: e.to_string(),
        })
    }
}

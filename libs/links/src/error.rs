//! Error types for link decoding.

use thiserror::Error;

use crate::LinkKind;

/// Errors that can occur when decoding a link declaration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LinkError {
    /// The `type` discriminator does not name a known link kind.
    #[error("unknown link type '{kind}' (expected one of: veth, host, macvlan, macvtap, mgmt-net)")]
    UnknownKind { kind: String },

    /// A legacy endpoint list uses an owner reserved for a typed-only kind.
    #[error(
        "endpoint '{endpoint}' uses reserved owner '{owner}' in a legacy endpoints list; \
         declare it with `type: {owner}` and `host-interface` instead"
    )]
    Misclassified { owner: LinkKind, endpoint: String },

    /// A typed declaration is missing a field its kind requires.
    #[error("{kind} link is missing required field '{field}'")]
    Incomplete { kind: LinkKind, field: &'static str },

    /// A legacy endpoint list does not contain exactly two entries.
    #[error("legacy link must list exactly 2 endpoints, got {count}")]
    MalformedLegacy { count: usize },

    /// An endpoint string is not in `<owner>:<interface>` form.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        endpoint: String,
        reason: &'static str,
    },

    /// A typed point-to-point declaration does not list exactly two endpoints.
    #[error("{kind} link must list exactly 2 endpoints, got {count}")]
    EndpointCount { kind: LinkKind, count: usize },

    /// A field is unknown for the kind or has the wrong type.
    #[error("invalid {kind} link: {message}")]
    InvalidField { kind: LinkKind, message: String },

    /// The declaration is not a mapping of fields.
    #[error("link declaration must be a mapping, got {found}")]
    NotAMapping { found: &'static str },
}

impl LinkError {
    /// Returns true if the discriminator named no known kind.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, LinkError::UnknownKind { .. })
    }

    /// Returns true if a legacy declaration disguised a typed-only kind.
    pub fn is_misclassified(&self) -> bool {
        matches!(self, LinkError::Misclassified { .. })
    }

    /// Returns true if a required field was absent.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, LinkError::Incomplete { .. })
    }

    /// Returns true if the legacy endpoint list had the wrong length.
    pub fn is_malformed_legacy(&self) -> bool {
        matches!(self, LinkError::MalformedLegacy { .. })
    }

    /// The reserved owner that triggered a misclassification, if any.
    pub fn reserved_owner(&self) -> Option<LinkKind> {
        match self {
            LinkError::Misclassified { owner, .. } => Some(*owner),
            _ => None,
        }
    }
}

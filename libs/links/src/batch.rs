//! Decoding of ordered link lists.
//!
//! Callers choose between failing on the first bad declaration
//! ([`decode_links`]) and collecting every failure for batch reporting
//! ([`decode_links_collect`]). Either way each error carries the zero-based
//! position of the declaration that produced it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{decode_value, CanonicalLink, LinkError};

/// A decoding failure tagged with the position of its declaration.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("link #{index}: {error}")]
pub struct IndexedLinkError {
    /// Zero-based position in the input list.
    pub index: usize,

    /// The decoding error.
    #[source]
    pub error: LinkError,
}

/// A decoded link tagged with the position of its declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedLink {
    /// Zero-based position in the input list.
    pub index: usize,

    /// The decoded link.
    pub link: CanonicalLink,
}

/// Outcome of decoding every declaration in a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkReport {
    /// Successfully decoded links, in input order.
    pub links: Vec<IndexedLink>,

    /// Failures, in input order.
    pub errors: Vec<IndexedLinkError>,
}

impl LinkReport {
    /// Returns true if every declaration decoded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of declarations seen.
    pub fn total(&self) -> usize {
        self.links.len() + self.errors.len()
    }

    /// Converts into the decoded links, or the first error.
    pub fn into_result(self) -> Result<Vec<CanonicalLink>, IndexedLinkError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.links.into_iter().map(|l| l.link).collect()),
        }
    }
}

/// Decodes every declaration, stopping at the first failure.
pub fn decode_links<I>(declarations: I) -> Result<Vec<CanonicalLink>, IndexedLinkError>
where
    I: IntoIterator<Item = Value>,
{
    declarations
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            decode_value(value).map_err(|error| IndexedLinkError { index, error })
        })
        .collect()
}

/// Decodes every declaration, collecting all failures.
pub fn decode_links_collect<I>(declarations: I) -> LinkReport
where
    I: IntoIterator<Item = Value>,
{
    let mut report = LinkReport::default();

    for (index, value) in declarations.into_iter().enumerate() {
        match decode_value(value) {
            Ok(link) => report.links.push(IndexedLink { index, link }),
            Err(error) => report.errors.push(IndexedLinkError { index, error }),
        }
    }

    debug!(
        links = report.links.len(),
        errors = report.errors.len(),
        "decoded link list"
    );

    report
}

/// The link section of a topology document.
///
/// Accepts links at the top level or nested under `topology`:
///
/// ```yaml
/// topology:
///   links:
///     - endpoints: ["srl1:e1-1", "srl2:e1-1"]
/// ```
///
/// Other sections of the document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinksDocument {
    #[serde(default)]
    topology: Option<TopologySection>,

    #[serde(default)]
    links: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct TopologySection {
    #[serde(default)]
    links: Vec<Value>,
}

impl LinksDocument {
    /// Returns the raw declarations, nested ones first.
    pub fn declarations(&self) -> impl Iterator<Item = &Value> {
        self.topology
            .iter()
            .flat_map(|t| t.links.iter())
            .chain(self.links.iter())
    }

    /// Number of raw declarations.
    pub fn len(&self) -> usize {
        self.declarations().count()
    }

    /// Returns true if the document declares no links.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the document, returning the raw declarations.
    pub fn into_declarations(self) -> Vec<Value> {
        let mut out = self.topology.map(|t| t.links).unwrap_or_default();
        out.extend(self.links);
        out
    }

    /// Decodes every declaration, stopping at the first failure.
    pub fn decode(self) -> Result<Vec<CanonicalLink>, IndexedLinkError> {
        decode_links(self.into_declarations())
    }

    /// Decodes every declaration, collecting all failures.
    pub fn decode_collect(self) -> LinkReport {
        decode_links_collect(self.into_declarations())
    }
}

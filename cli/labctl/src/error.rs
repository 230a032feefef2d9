//! Error handling and display for the CLI.

use colored::Colorize;
use labwire_links::{IndexedLinkError, LinkError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{count} of {total} link(s) failed to decode")]
    InvalidLinks { count: usize, total: usize },

    #[error("Topology declares no links: {0}")]
    NoLinks(String),

    #[error("Unsupported output format '{0}' (expected table or json)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Link(#[from] IndexedLinkError),
}

/// Migration hint for a decoding error, if one applies.
pub fn hint_for(err: &LinkError) -> Option<String> {
    match err {
        LinkError::Misclassified { owner, .. } => Some(format!(
            "Hint: rewrite this link as `type: {owner}` with `endpoint: {{node, interface}}` \
             and `host-interface`."
        )),
        LinkError::MalformedLegacy { .. } => Some(
            "Hint: a legacy `endpoints` list needs exactly two \"node:interface\" entries."
                .to_string(),
        ),
        LinkError::UnknownKind { .. } => Some(
            "Hint: omit `type` for the legacy endpoints list, or use one of veth, host, \
             macvlan, macvtap, mgmt-net."
                .to_string(),
        ),
        _ => None,
    }
}

/// Print one per-link decoding failure with its hint.
pub fn print_link_error(err: &IndexedLinkError) {
    eprintln!("{} {}", "Invalid:".red().bold(), err);
    if let Some(hint) = hint_for(&err.error) {
        eprintln!("  {}", hint.yellow());
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in causes(err) {
        eprintln!("  caused by: {}", cause);
    }

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Link(indexed) => {
                if let Some(hint) = hint_for(&indexed.error) {
                    eprintln!("\n{}", hint.yellow());
                }
            }
            CliError::NoLinks(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: links live under `topology.links` or a top-level `links` list.".yellow()
                );
            }
            _ => {}
        }
    }
}

/// Causes below the top-level message, skipping any whose text the
/// previous message already includes.
fn causes(err: &anyhow::Error) -> Vec<String> {
    let mut shown = err.to_string();
    let mut causes = Vec::new();

    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !shown.contains(&text) {
            causes.push(text.clone());
        }
        shown = text;
    }

    causes
}

//! Link commands.
//!
//! These commands operate purely on local topology files (offline).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use labwire_links::{IndexedLinkError, LinkReport};
use serde::Serialize;
use tracing::info;

use crate::error::{print_link_error, CliError};
use crate::output::{
    print_info, print_output, print_single, print_success, row, LinkRow, OutputFormat,
};
use crate::topology::{load_links, DEFAULT_TOPOLOGY_FILE};

use super::CommandContext;

/// Link commands.
#[derive(Debug, Args)]
pub struct LinksCommand {
    #[command(subcommand)]
    command: LinksSubcommand,
}

#[derive(Debug, Subcommand)]
enum LinksSubcommand {
    /// Decode every link and report all failures.
    Validate(FileArgs),

    /// Decode every link and print the canonical endpoint pairs.
    Show(FileArgs),
}

#[derive(Debug, Args)]
struct FileArgs {
    /// Topology file path (YAML or JSON). Defaults to ./topology.yml.
    #[arg(long, short = 'f', value_name = "PATH", env = "LABCTL_TOPOLOGY")]
    file: Option<PathBuf>,
}

impl FileArgs {
    fn path(self) -> PathBuf {
        self.file.unwrap_or_else(|| PathBuf::from(DEFAULT_TOPOLOGY_FILE))
    }
}

impl LinksCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            LinksSubcommand::Validate(args) => validate_links(ctx, args),
            LinksSubcommand::Show(args) => show_links(ctx, args),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationSummary {
    valid: bool,
    links: usize,
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Serialize)]
struct ErrorEntry {
    index: usize,
    error: String,
}

impl From<&IndexedLinkError> for ErrorEntry {
    fn from(err: &IndexedLinkError) -> Self {
        Self {
            index: err.index,
            error: err.error.to_string(),
        }
    }
}

fn summarize(report: &LinkReport) -> ValidationSummary {
    ValidationSummary {
        valid: report.is_ok(),
        links: report.total(),
        errors: report.errors.iter().map(ErrorEntry::from).collect(),
    }
}

fn validate_links(ctx: CommandContext, args: FileArgs) -> Result<()> {
    let path = args.path();
    let doc = load_links(&path)?;
    if doc.is_empty() {
        return Err(CliError::NoLinks(path.display().to_string()).into());
    }

    let report = doc.decode_collect();
    info!(
        path = %path.display(),
        links = report.links.len(),
        errors = report.errors.len(),
        "validated topology links"
    );

    match ctx.format {
        OutputFormat::Json => print_single(&summarize(&report)),
        OutputFormat::Table => {
            for err in &report.errors {
                print_link_error(err);
            }
            if report.is_ok() {
                print_success(&format!("All links are valid: {}", path.display()));
                print_info(&format!("{} link(s) decoded", report.total()));
            }
        }
    }

    if !report.is_ok() {
        return Err(CliError::InvalidLinks {
            count: report.errors.len(),
            total: report.total(),
        }
        .into());
    }

    Ok(())
}

fn show_links(ctx: CommandContext, args: FileArgs) -> Result<()> {
    let path = args.path();
    let links = load_links(&path)?.decode().map_err(CliError::from)?;

    match ctx.format {
        OutputFormat::Json => print_single(&links),
        OutputFormat::Table => {
            let rows: Vec<LinkRow> = links
                .iter()
                .enumerate()
                .map(|(index, link)| row(index, link))
                .collect();
            print_output(&rows, OutputFormat::Table);
        }
    }

    Ok(())
}

//! CLI commands.

mod links;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::output::OutputFormat;

/// labctl - Validate and inspect topology link declarations.
#[derive(Debug, Parser)]
#[command(name = "labctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, env = "LABCTL_FORMAT", default_value = "table")]
    format: String,

    /// Log level filter, overridden by RUST_LOG.
    #[arg(long, global = true, env = "LABCTL_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode and check link declarations (offline).
    Links(links::LinksCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Log level requested on the command line.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Whether logs should be JSON.
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format)?,
        };

        match self.command {
            Commands::Links(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("labctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}

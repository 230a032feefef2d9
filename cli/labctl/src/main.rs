//! labctl - offline link checker for labwire topologies
//!
//! Loads a topology file, decodes every link declaration, and reports the
//! canonical links or every declaration that failed to decode.

use clap::Parser;

mod commands;
mod error;
mod logging;
mod output;
mod topology;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.log_level(), cli.log_json());

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }
}

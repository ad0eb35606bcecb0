mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("protlens v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let file_config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Diameter(args) => commands::diameter::run(args),
        Commands::Ligands(args) => commands::ligands::run(args),
        Commands::Contacts(args) => commands::contacts::run(args, &file_config),
    }
}

// mediaprobe-cli/src/main.rs
//
// This file defines the entry point for the mediaprobe binary.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging.
// - Configuring the mediaprobe-core library based on CLI arguments.
// - Dispatching to the command implementations.
// - Managing process exit codes based on success or failure.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use colored::Colorize;
use mediaprobe_core::{CoreConfig, CoreResult};
use std::process;

use cli::{Cli, Commands};

fn run(cli: Cli) -> CoreResult<()> {
    let config = CoreConfig {
        ffprobe_path: cli.ffprobe,
    };
    config.validate()?;

    match cli.command {
        Commands::Probe(args) => commands::probe::run_probe(&config, args),
        Commands::Scan(args) => commands::scan::run_scan(&config, args),
        Commands::Info => commands::info::run_info(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        process::exit(1);
    }
}

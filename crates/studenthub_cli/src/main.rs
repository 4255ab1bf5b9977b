//! `studenthub` command-line dashboard.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open storage.
//! - Translate subcommands into widget calls and print the results.

mod args;
mod commands;
mod config;
mod timer_session;

use anyhow::Result;
use clap::Parser;
use log::error;

fn main() {
    if let Err(err) = run() {
        error!("event=cli_exit module=cli status=error error={err:#}");
        eprintln!("studenthub: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = args::Cli::parse();
    let config = config::Config::resolve(cli.settings)?;
    studenthub_core::init_logging(&config.log_level, &config.log_dir)
        .map_err(anyhow::Error::msg)?;
    commands::dispatch(cli.command, &config)
}

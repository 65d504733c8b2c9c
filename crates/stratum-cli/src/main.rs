//! `stratum`: parse colors and flatten translucent layer stacks from the shell.

mod app;
mod batch;
mod cli;
mod input;
mod logging;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log_level.clone(),
        ..LoggingConfig::default()
    });

    match app::run(cli, io::stdin().lock(), io::stdout().lock(), io::stderr().lock()) {
        Ok(status) => status.into(),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

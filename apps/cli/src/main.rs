//! `pomoshtnik`: decode bot payloads and chat commands from the shell.
//!
//! Usage:
//!   pomoshtnik decode api-request request.json
//!   pomoshtnik decode webhook --event push < delivery.json
//!   pomoshtnik parse '!movie' The Matrix
//!
//! Exit status: 0 when the input decodes, 1 when it is rejected, 2 for
//! usage and I/O errors.

mod cli;
mod run;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pomoshtnik_log::Config;

use crate::cli::{Cli, Command};
use crate::run::Outcome;

fn init_logging(cli: &Cli) -> Result<()> {
    let mut config = Config::quiet();
    if let Some(level) = &cli.log_level {
        config.level.clone_from(level);
    }
    if let Some(format) = cli.log_format {
        config.format = format;
    }
    pomoshtnik_log::init(config)?;
    Ok(())
}

fn dispatch(cli: Cli) -> Result<Outcome> {
    init_logging(&cli)?;

    match cli.command {
        Command::Decode { kind, file, event } => {
            run::decode(kind, file.as_deref(), event.as_deref(), cli.errors)
        }
        Command::Parse { tokens } => run::parse(&tokens, cli.errors),
        Command::Types => run::types(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(Outcome::Accepted) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

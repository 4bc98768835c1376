#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod describe;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use describe::Describe;
use std::io;
use std::process::ExitCode;
use validate::Validate;

#[derive(Debug, Parser)]
#[command(name = "vaunt")]
#[command(about = "Check consumer expectations against provider contracts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Validate a consumer representation against a provider representation")]
    Validate(Validate),

    #[command(about = "Print the capabilities and expectations of a service")]
    Describe(Describe),
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Validate(validate) => {
            if validate::handle_validate(&validate, &mut out)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Describe(describe) => {
            describe::handle_describe(&describe, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

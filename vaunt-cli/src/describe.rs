use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use vaunt::core::Service;
use vaunt::representation::read_service;

#[derive(Debug, Parser)]
pub struct Describe {
    #[arg(help = "Path to a service representation")]
    pub file: PathBuf,
}

pub fn handle_describe(args: &Describe, out: &mut impl Write) -> Result<()> {
    let service = read_service(&args.file)
        .with_context(|| format!("Failed to read service {}", args.file.display()))?;
    print_service(&service, out)
}

fn print_service(service: &Service, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Service: {}", service.name)?;

    writeln!(out, "Capabilities ({}):", service.capabilities.contracts.len())?;
    for contract in &service.capabilities.contracts {
        writeln!(out, "  {contract}")?;
    }

    writeln!(out, "Expectations ({}):", service.expectations.len())?;
    for (provider, contracts) in service.expectations.iter() {
        writeln!(out, "  from {provider}:")?;
        for contract in contracts {
            writeln!(out, "    {contract}")?;
        }
    }
    Ok(())
}

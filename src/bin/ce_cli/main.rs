//! ce-cli: terminal views over the Cloud Elements platform API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod print;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use args::{Cli, Commands};
use client::{CliError, build_ctx, load_settings};
use handlers::{catalog, elements, formulas, instances, platform};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(curl) = err.curl() {
                debug!(%curl, "failed request");
            }
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(&cli)?;
    ce::telemetry::init(&settings.logging)?;
    let ctx = build_ctx(settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None => elements::names(&ctx, &mut out)?,
        Some(Commands::Elements(args)) => elements::handle(&ctx, &args, &mut out)?,
        Some(Commands::Instances { id }) => instances::handle(&ctx, id.as_deref(), &mut out)?,
        Some(Commands::Formulas { id }) => formulas::handle(&ctx, id.as_deref(), &mut out)?,
        Some(Commands::Metadata(args)) => catalog::metadata(&ctx, &args, &mut out)?,
        Some(Commands::Resources) => catalog::resources(&ctx, &mut out)?,
        Some(Commands::Jobs) => platform::jobs(&ctx, &mut out)?,
        Some(Commands::Branding) => platform::branding(&ctx, &mut out)?,
        Some(Commands::Metrics { kind }) => platform::metrics(&ctx, kind, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

#![deny(clippy::all, clippy::pedantic)]

use ce::config::{self, LoadError, Settings};
use ce::presentation::RenderError;
use ce::telemetry::TelemetryError;
use ce::{ClientError, Ctx};
use thiserror::Error;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to render output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Curl equivalent of the failed request, if the failure came from one.
    pub fn curl(&self) -> Option<&str> {
        match self {
            Self::Client(err) | Self::Render(RenderError::Decode(err)) => err.curl(),
            _ => None,
        }
    }
}

pub fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let file = config::config_file(cli.config_file.as_ref());
    Ok(config::load(file, &cli.overrides)?)
}

pub fn build_ctx(settings: Settings) -> Result<Ctx, CliError> {
    Ok(Ctx::new(settings.client)?)
}

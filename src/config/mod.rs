//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use clap::{Args, ValueEnum, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::client::Auth;

const LOCAL_CONFIG_BASENAME: &str = "ce";
const ENV_PREFIX: &str = "CE";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    pub client: ClientSettings,
    pub logging: LoggingSettings,
}

/// Everything a [`crate::Ctx`] needs; built once at process start and passed
/// to every call.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base: Url,
    pub auth: Auth,
    pub instance_enable_endpoint: InstanceEnableEndpoint,
    pub connect_timeout: Duration,
}

impl ClientSettings {
    pub fn new(base: Url, auth: Auth) -> Self {
        Self {
            base,
            auth,
            instance_enable_endpoint: InstanceEnableEndpoint::default(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Where enable/disable requests for an element instance are sent.
///
/// The platform has exposed both shapes over time, so the choice is left to
/// configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InstanceEnableEndpoint {
    /// `PUT`/`DELETE /instances/{id}`
    #[default]
    Instance,
    /// `PUT`/`DELETE /instances/enabled`
    Shared,
}

impl FromStr for InstanceEnableEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instance" => Ok(Self::Instance),
            "shared" | "enabled" => Ok(Self::Shared),
            other => Err(format!("unknown endpoint `{other}` (expected instance|shared)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Command-line overrides applied on top of file and environment sources.
#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Override the platform base URL, e.g. <https://api.cloud-elements.com/elements/api-v2>
    #[arg(long = "base", value_name = "URL")]
    pub base: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Endpoint used to enable or disable element instances.
    #[arg(long = "instance-enable-endpoint", value_name = "MODE")]
    pub instance_enable_endpoint: Option<InstanceEnableEndpoint>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Environment source reading `CE_BASE`, `CE_AUTH`, `CE_LOGGING__LEVEL`, ...
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> Result<Settings, LoadError> {
    load_from(config_file, environment(), overrides)
}

/// Same as [`load`] with an explicit environment source.
pub fn load_from(
    config_file: Option<&Path>,
    env: Environment,
    overrides: &Overrides,
) -> Result<Settings, LoadError> {
    let mut builder =
        Config::builder().add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(env);

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(overrides);
    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    base: Option<String>,
    auth: Option<String>,
    org: Option<String>,
    user: Option<String>,
    instance_enable_endpoint: Option<String>,
    connect_timeout_seconds: Option<u64>,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(base) = overrides.base.as_ref() {
            self.base = Some(base.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(endpoint) = overrides.instance_enable_endpoint {
            let name = match endpoint {
                InstanceEnableEndpoint::Instance => "instance",
                InstanceEnableEndpoint::Shared => "shared",
            };
            self.instance_enable_endpoint = Some(name.to_string());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            base,
            auth,
            org,
            user,
            instance_enable_endpoint,
            connect_timeout_seconds,
            logging,
        } = raw;

        let base = build_base(base)?;
        let auth = build_auth(auth, org, user)?;

        let instance_enable_endpoint = match instance_enable_endpoint {
            Some(value) => value
                .parse()
                .map_err(|reason| LoadError::invalid("instance_enable_endpoint", reason))?,
            None => InstanceEnableEndpoint::default(),
        };

        let timeout_secs = connect_timeout_seconds.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(LoadError::invalid(
                "connect_timeout_seconds",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            client: ClientSettings {
                base,
                auth,
                instance_enable_endpoint,
                connect_timeout: Duration::from_secs(timeout_secs),
            },
            logging: build_logging_settings(logging)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn build_base(base: Option<String>) -> Result<Url, LoadError> {
    let base = non_empty(base)
        .ok_or_else(|| LoadError::invalid("base", "platform base URL is required (CE_BASE)"))?;
    let url = Url::parse(base.trim_end_matches('/'))
        .map_err(|err| LoadError::invalid("base", format!("failed to parse: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(LoadError::invalid("base", "must be an absolute http(s) URL"));
    }
    Ok(url)
}

fn build_auth(
    auth: Option<String>,
    org: Option<String>,
    user: Option<String>,
) -> Result<Auth, LoadError> {
    if let Some(header) = non_empty(auth) {
        return Ok(Auth::from_header(header));
    }
    match (non_empty(org), non_empty(user)) {
        (Some(org), Some(user)) => Ok(Auth::organization_user(&org, &user)),
        _ => Err(LoadError::invalid(
            "auth",
            "credentials are required (CE_AUTH, or CE_ORG and CE_USER)",
        )),
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

/// Resolve the optional configuration file path, ignoring blank values.
pub fn config_file(path: Option<&PathBuf>) -> Option<&Path> {
    path.map(PathBuf::as_path)
        .filter(|p| !p.as_os_str().is_empty())
}

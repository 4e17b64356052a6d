//! Command-line surface for `ce-cli`.

use std::path::PathBuf;

use ce::config::Overrides;
use ce::resources::metrics::MetricsKind;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ce-cli",
    version,
    about = "Cloud Elements platform CLI",
    long_about = "Cloud Elements platform CLI.\n\nWithout a subcommand, lists element names sorted by name. \
Credentials come from CE_BASE plus CE_AUTH (or CE_ORG and CE_USER)."
)]
pub struct Cli {
    /// Extra configuration file layered over `ce.toml` in the working directory
    #[arg(long, env = "CE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Element catalog as a table or CSV
    Elements(ElementsArgs),
    /// Element instances, or one instance by id
    Instances {
        /// Instance id
        id: Option<String>,
    },
    /// Formula templates, or one formula's details by id
    Formulas {
        /// Formula id
        id: Option<String>,
    },
    /// Element metadata with usage figures
    Metadata(MetadataArgs),
    /// Common resources and their mappings
    Resources,
    /// Scheduled jobs
    Jobs,
    /// Organization branding
    Branding,
    /// Raw platform metrics
    Metrics {
        #[arg(value_enum)]
        kind: MetricsKind,
    },
}

#[derive(Args, Debug, Default)]
pub struct ElementsArgs {
    /// id (default), name, hub or authn
    #[arg(long, default_value = "")]
    pub order_by: String,
    /// `custom` for private elements, otherwise an element key
    #[arg(long, default_value = "")]
    pub filter: String,
    /// Header-less CSV instead of a table
    #[arg(long)]
    pub csv: bool,
}

#[derive(Args, Debug, Default)]
pub struct MetadataArgs {
    /// id (default), name, hub, api, authn, traffic, customers or instances
    #[arg(long, default_value = "")]
    pub order_by: String,
    /// Header-less CSV instead of a table
    #[arg(long)]
    pub csv: bool,
}

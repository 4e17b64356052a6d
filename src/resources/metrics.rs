//! Platform usage metrics.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::{ClientError, Ctx, Exchange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricsKind {
    Api,
    BulkJobs,
    ElementsCreated,
    ElementInstancesCreated,
    Events,
    FormulaExecutions,
    FormulasCreated,
    VdrsCreated,
    VdrsInvoked,
    HubApi,
    HubsCreated,
}

impl MetricsKind {
    pub const ALL: [Self; 11] = [
        Self::Api,
        Self::BulkJobs,
        Self::ElementsCreated,
        Self::ElementInstancesCreated,
        Self::Events,
        Self::FormulaExecutions,
        Self::FormulasCreated,
        Self::VdrsCreated,
        Self::VdrsInvoked,
        Self::HubApi,
        Self::HubsCreated,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::BulkJobs => "bulk-jobs",
            Self::ElementsCreated => "elements-created",
            Self::ElementInstancesCreated => "element-instances-created",
            Self::Events => "events",
            Self::FormulaExecutions => "formula-executions",
            Self::FormulasCreated => "formulas-created",
            Self::VdrsCreated => "vdrs-created",
            Self::VdrsInvoked => "vdrs-invoked",
            Self::HubApi => "hub-api",
            Self::HubsCreated => "hubs-created",
        }
    }

    pub fn path(self) -> String {
        format!("/metrics/{}", self.slug())
    }
}

impl fmt::Display for MetricsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for MetricsKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| ClientError::invalid_request(format!("unknown metrics kind `{s}`")))
    }
}

pub fn get_json_metrics_for(ctx: &Ctx, kind: MetricsKind) -> Result<Exchange, ClientError> {
    ctx.get(&kind.path())
}

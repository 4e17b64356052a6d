#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use ce::Ctx;
use ce::resources::branding::get_branding;
use ce::resources::jobs::list_jobs;
use ce::resources::metrics::{MetricsKind, get_json_metrics_for};

use crate::client::CliError;
use crate::print::print_body;

pub fn jobs<W: Write>(ctx: &Ctx, out: &mut W) -> Result<(), CliError> {
    let listing = list_jobs(ctx)?.error_for_status()?;
    print_body(out, &listing)
}

pub fn branding<W: Write>(ctx: &Ctx, out: &mut W) -> Result<(), CliError> {
    let branding = get_branding(ctx)?.error_for_status()?;
    print_body(out, &branding)
}

pub fn metrics<W: Write>(ctx: &Ctx, kind: MetricsKind, out: &mut W) -> Result<(), CliError> {
    let report = get_json_metrics_for(ctx, kind)?.error_for_status()?;
    print_body(out, &report)
}

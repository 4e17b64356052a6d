#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use ce::Ctx;
use ce::presentation::SortKey;
use ce::presentation::metadata::write_metadata_table;
use ce::presentation::resources::write_resources_list;
use ce::resources::common_resources::resources_list;
use ce::resources::intelligence::get_intelligence;

use crate::args::MetadataArgs;
use crate::client::CliError;

pub fn metadata<W: Write>(ctx: &Ctx, args: &MetadataArgs, out: &mut W) -> Result<(), CliError> {
    let listing = get_intelligence(ctx)?.error_for_status()?;
    write_metadata_table(
        &listing.body,
        SortKey::from_param(&args.order_by),
        args.csv,
        out,
    )?;
    Ok(())
}

pub fn resources<W: Write>(ctx: &Ctx, out: &mut W) -> Result<(), CliError> {
    let listing = resources_list(ctx)?.error_for_status()?;
    write_resources_list(&listing.body, out)?;
    Ok(())
}

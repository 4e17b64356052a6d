#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use ce::Ctx;
use ce::presentation::elements::{write_element_names, write_elements_csv, write_elements_table};
use ce::presentation::{ElementFilter, SortKey};
use ce::resources::elements::get_all_elements;

use crate::args::ElementsArgs;
use crate::client::CliError;

pub fn handle<W: Write>(ctx: &Ctx, args: &ElementsArgs, out: &mut W) -> Result<(), CliError> {
    let listing = get_all_elements(ctx)?.error_for_status()?;
    let order_by = SortKey::from_param(&args.order_by);
    let filter = ElementFilter::from_param(&args.filter);

    if args.csv {
        write_elements_csv(&listing.body, order_by, &filter, out)?;
    } else {
        write_elements_table(&listing.body, order_by, &filter, out)?;
    }
    Ok(())
}

/// Element names in name order; the default view.
pub fn names<W: Write>(ctx: &Ctx, out: &mut W) -> Result<(), CliError> {
    let listing = get_all_elements(ctx)?.error_for_status()?;
    write_element_names(&listing.body, SortKey::Name, out)?;
    Ok(())
}

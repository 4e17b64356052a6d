#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use ce::Ctx;
use ce::presentation::instances::{write_element_instances_table, write_instance_details};
use ce::resources::instances::{get_all_instances, get_instance_info};

use crate::client::CliError;

pub fn handle<W: Write>(ctx: &Ctx, id: Option<&str>, out: &mut W) -> Result<(), CliError> {
    match id {
        Some(id) => {
            let instance = get_instance_info(ctx, id)?.error_for_status()?;
            write_instance_details(&instance.body, out)?;
        }
        None => {
            let listing = get_all_instances(ctx)?.error_for_status()?;
            write_element_instances_table(&listing.body, out)?;
        }
    }
    Ok(())
}

#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use ce::Ctx;
use ce::presentation::formulas::{write_formula_details, write_formulas_table};
use ce::resources::formulas::{formula_details, formulas_list, get_instances_of_formula};
use ce::types::Formula;
use tracing::warn;

use crate::client::CliError;

pub fn handle<W: Write>(ctx: &Ctx, id: Option<&str>, out: &mut W) -> Result<(), CliError> {
    match id {
        Some(id) => {
            let formula: Formula = formula_details(ctx, id)?.json()?;
            write_formula_details(&formula, out)?;
        }
        None => {
            let formulas: Vec<Formula> = formulas_list(ctx)?.json()?;
            write_formulas_table(&formulas, |formula| instance_count(ctx, formula), out)?;
        }
    }
    Ok(())
}

fn instance_count(ctx: &Ctx, formula: &Formula) -> Option<usize> {
    match get_instances_of_formula(ctx, formula.id) {
        Ok(instances) => Some(instances.len()),
        Err(err) => {
            warn!(formula_id = formula.id, error = %err, "instance lookup failed");
            None
        }
    }
}

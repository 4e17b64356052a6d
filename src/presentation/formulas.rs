use std::io::{self, Write};

use ce_api_types::Formula;
use tracing::warn;

use super::table::bracketed;
use super::{RenderError, Table, decode_list};
use crate::error::ClientError;

const NOT_AVAILABLE: &str = "N/A";

/// One row per trigger. Follow-up trigger rows of the same formula leave the
/// formula columns blank. `instance_count` returns `None` when the count
/// could not be fetched. Formulas without triggers are reported on `out` and
/// skipped.
pub fn write_formulas_table<W, F>(
    formulas: &[Formula],
    mut instance_count: F,
    out: &mut W,
) -> Result<(), RenderError>
where
    W: Write,
    F: FnMut(&Formula) -> Option<usize>,
{
    let mut table = Table::new(&[
        "ID", "Name", "active", "steps", "instances", "trigger", "id", "success", "api",
    ]);

    for formula in formulas {
        let Some(trigger_type) = formula.primary_trigger_type() else {
            warn!(formula_id = formula.id, "formula is malformed, no trigger present");
            writeln!(out, "Formula {} is malformed, no trigger present", formula.id)?;
            continue;
        };

        let instances = instance_count(formula)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string());
        let api = if trigger_type == "manual" {
            formula.api.clone()
        } else {
            NOT_AVAILABLE.to_string()
        };

        for (i, trigger) in formula.triggers.iter().enumerate() {
            let mut row = if i == 0 {
                vec![
                    formula.id.to_string(),
                    formula.name.clone(),
                    formula.active.to_string(),
                    formula.steps.len().to_string(),
                    instances.clone(),
                ]
            } else {
                vec![String::new(); 5]
            };
            row.extend([
                trigger.kind.clone(),
                trigger.id.to_string(),
                bracketed(&trigger.on_success),
                api.clone(),
            ]);
            table.push(row);
        }
    }

    table.write_to(out)
}

/// Decode a `GET /formulas` body and render it with per-formula counts.
pub fn output_formulas_list<F>(body: &[u8], instance_count: F) -> Result<(), RenderError>
where
    F: FnMut(&Formula) -> Option<usize>,
{
    let formulas: Vec<Formula> = decode_list(body)?;
    write_formulas_table(&formulas, instance_count, &mut io::stdout().lock())
}

/// Summary, triggers, steps and configuration of one formula.
pub fn write_formula_details<W: Write>(formula: &Formula, out: &mut W) -> Result<(), RenderError> {
    let Some(trigger_type) = formula.primary_trigger_type() else {
        writeln!(out, "Formula {} is malformed, no trigger present", formula.id)?;
        return Ok(());
    };

    let mut summary = Table::new(&["ID", "Name", "active", "steps", "trigger"]);
    summary.push(vec![
        formula.id.to_string(),
        formula.name.clone(),
        formula.active.to_string(),
        formula.steps.len().to_string(),
        trigger_type.to_string(),
    ]);
    summary.write_to(out)?;
    writeln!(out)?;

    let mut triggers = Table::new(&["ID", "Name", "Type", "Async", "Success"]);
    for trigger in &formula.triggers {
        triggers.push(vec![
            trigger.id.to_string(),
            trigger.name.clone(),
            trigger.kind.clone(),
            trigger.is_async.to_string(),
            bracketed(&trigger.on_success),
        ]);
    }
    triggers.write_to(out)?;

    writeln!(out, "\nSteps")?;
    let mut steps = Table::new(&["ID", "Name", "Type", "Success", "Failure"]);
    for step in &formula.steps {
        steps.push(vec![
            step.id.to_string(),
            step.name.clone(),
            step.kind.clone(),
            bracketed(&step.on_success),
            bracketed(&step.on_failure),
        ]);
    }
    steps.write_to(out)?;

    writeln!(out, "\nConfiguration")?;
    if formula.configuration.is_empty() {
        writeln!(out, "No configuration parameters needed.")?;
    } else {
        let mut configuration = Table::new(&["ID", "Name", "Key", "Value", "Required"]);
        for parameter in &formula.configuration {
            configuration.push(vec![
                parameter.id.to_string(),
                parameter.name.clone(),
                parameter.key.clone(),
                parameter.kind.clone(),
                parameter.required.to_string(),
            ]);
        }
        configuration.write_to(out)?;
    }

    if !formula.api.is_empty() {
        writeln!(out, "\n{} -H 'Elements-Formula-Instance-Id: '", formula.api)?;
    }
    Ok(())
}

pub fn output_formula_details(body: &[u8]) -> Result<(), RenderError> {
    let formula: Formula = serde_json::from_slice(body).map_err(|source| ClientError::Decode {
        body: body.to_vec(),
        source,
    })?;
    write_formula_details(&formula, &mut io::stdout().lock())
}

use std::io::{self, Write};

use ce_api_types::ElementInstance;

use super::{RenderError, Table, decode_list};
use crate::error::ClientError;

const HEADERS: [&str; 8] = [
    "ID", "Key", "Name", "Valid", "Disabled", "Events", "Tags", "Token",
];

fn instance_row(instance: &ElementInstance) -> Vec<String> {
    vec![
        instance.id.to_string(),
        instance.element.key.clone(),
        instance.name.clone(),
        instance.valid.to_string(),
        instance.disabled.to_string(),
        instance.events_enabled.to_string(),
        instance.tag_list(),
        instance.token.clone(),
    ]
}

/// Table of a `GET /instances` or `GET /elements/{id}/instances` body, in
/// response order.
pub fn write_element_instances_table<W: Write>(
    body: &[u8],
    out: &mut W,
) -> Result<(), RenderError> {
    let instances: Vec<ElementInstance> = decode_list(body)?;
    let mut table = Table::new(&HEADERS);
    for instance in &instances {
        table.push(instance_row(instance));
    }
    table.write_to(out)
}

/// Single-row table of a `GET /instances/{id}` body.
pub fn write_instance_details<W: Write>(body: &[u8], out: &mut W) -> Result<(), RenderError> {
    let instance: ElementInstance =
        serde_json::from_slice(body).map_err(|source| ClientError::Decode {
            body: body.to_vec(),
            source,
        })?;
    let mut table = Table::new(&HEADERS);
    table.push(instance_row(&instance));
    table.write_to(out)
}

pub fn output_element_instances_table(body: &[u8]) -> Result<(), RenderError> {
    write_element_instances_table(body, &mut io::stdout().lock())
}

pub fn output_instance_details(body: &[u8]) -> Result<(), RenderError> {
    write_instance_details(body, &mut io::stdout().lock())
}

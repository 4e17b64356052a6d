use std::io::{self, Write};

use ce_api_types::CommonResource;

use super::{RenderError, Table, decode_list};

/// Table of a `GET /common-resources` body: name, mapped instance ids and
/// field paths.
pub fn write_resources_list<W: Write>(body: &[u8], out: &mut W) -> Result<(), RenderError> {
    let resources: Vec<CommonResource> = decode_list(body)?;

    let mut table = Table::new(&["Name", "Mapped Instances", "#", "Fields"]);
    for resource in &resources {
        let mut mapped = resource.element_instance_ids.len().to_string();
        if !resource.element_instance_ids.is_empty() {
            let ids: Vec<String> = resource
                .element_instance_ids
                .iter()
                .map(ToString::to_string)
                .collect();
            mapped.push_str(&format!(" [{}]", ids.join(", ")));
        }
        let fields = if resource.fields.is_empty() {
            String::new()
        } else {
            format!("[{}]", resource.field_paths().join(", "))
        };
        table.push(vec![
            resource.name.clone(),
            mapped,
            resource.fields.len().to_string(),
            fields,
        ]);
    }
    table.write_to(out)
}

pub fn output_resources_list(body: &[u8]) -> Result<(), RenderError> {
    write_resources_list(body, &mut io::stdout().lock())
}

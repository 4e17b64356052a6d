use std::io::{self, Write};

use ce_api_types::Metadata;

use super::{RenderError, SortKey, Sortable, Table, decode_list, sort_rows};

impl Sortable for Metadata {
    fn id(&self) -> i64 {
        self.id
    }

    fn text(&self, key: SortKey) -> Option<&str> {
        match key {
            SortKey::Name => Some(&self.name),
            SortKey::Hub => Some(&self.hub),
            SortKey::Api => Some(&self.api.kind),
            SortKey::Authn => Some(&self.authentication_type),
            _ => None,
        }
    }

    fn count(&self, key: SortKey) -> Option<i64> {
        match key {
            SortKey::Traffic => Some(self.usage.traffic),
            SortKey::Customers => Some(self.usage.customer_count),
            SortKey::Instances => Some(self.usage.instance_count),
            _ => None,
        }
    }
}

fn metadata_table(body: &[u8], order_by: SortKey) -> Result<Table, RenderError> {
    let mut metadata: Vec<Metadata> = decode_list(body)?;
    sort_rows(&mut metadata, order_by);

    let mut table = Table::new(&[
        "ID",
        "Key",
        "Name",
        "Hub",
        "API",
        "Authn",
        "Transforms",
        "Hidden",
        "Beta",
        "Class",
        "Traffic",
        "Customers",
        "Instances",
    ]);
    for m in &metadata {
        table.push(vec![
            m.id.to_string(),
            m.key.clone(),
            m.name.clone(),
            m.hub.clone(),
            m.api.kind.clone(),
            m.authentication_type.clone(),
            m.transformations.to_string(),
            // printed as-is under the Hidden header
            m.active.to_string(),
            m.beta.to_string(),
            m.element_class.clone(),
            m.usage.traffic.to_string(),
            m.usage.customer_count.to_string(),
            m.usage.instance_count.to_string(),
        ]);
    }
    Ok(table)
}

/// Render a `GET /elements/metadata` body as a table, or as CSV rows when
/// `as_csv` is set.
pub fn write_metadata_table<W: Write>(
    body: &[u8],
    order_by: SortKey,
    as_csv: bool,
    out: &mut W,
) -> Result<(), RenderError> {
    let table = metadata_table(body, order_by)?;
    if as_csv {
        table.write_csv(out)
    } else {
        table.write_to(out)
    }
}

pub fn output_metadata_table(body: &[u8], order_by: &str, as_csv: bool) -> Result<(), RenderError> {
    write_metadata_table(
        body,
        SortKey::from_param(order_by),
        as_csv,
        &mut io::stdout().lock(),
    )
}

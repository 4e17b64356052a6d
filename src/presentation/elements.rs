use std::io::{self, Write};

use ce_api_types::Element;

use super::{ElementFilter, RenderError, SortKey, Sortable, Table, decode_list, sort_rows};

const HEADERS: [&str; 9] = [
    "ID",
    "Key",
    "Name",
    "Hub",
    "Auth",
    "Configs",
    "Private",
    "Active",
    "Extendable",
];

impl Sortable for Element {
    fn id(&self) -> i64 {
        self.id
    }

    fn text(&self, key: SortKey) -> Option<&str> {
        match key {
            SortKey::Name => Some(&self.name),
            SortKey::Hub => Some(&self.hub),
            SortKey::Authn => Some(&self.authentication.kind),
            _ => None,
        }
    }
}

/// Decode, filter and order a `GET /elements` body.
pub fn prepare_elements(
    body: &[u8],
    order_by: SortKey,
    filter: &ElementFilter,
) -> Result<Vec<Element>, RenderError> {
    let mut elements: Vec<Element> = decode_list(body)?;
    match filter {
        ElementFilter::All => {}
        ElementFilter::Custom => elements.retain(|e| e.private),
        ElementFilter::Key(key) => elements.retain(|e| &e.key == key),
    }
    sort_rows(&mut elements, order_by);
    Ok(elements)
}

fn elements_table(elements: &[Element]) -> Table {
    let mut table = Table::new(&HEADERS);
    for element in elements {
        table.push(vec![
            element.id.to_string(),
            element.key.clone(),
            element.name.clone(),
            element.hub.clone(),
            element.authentication.kind.clone(),
            element.configuration.len().to_string(),
            element.private.to_string(),
            element.active.to_string(),
            element.extendable.to_string(),
        ]);
    }
    table
}

pub fn write_elements_table<W: Write>(
    body: &[u8],
    order_by: SortKey,
    filter: &ElementFilter,
    out: &mut W,
) -> Result<(), RenderError> {
    let elements = prepare_elements(body, order_by, filter)?;
    elements_table(&elements).write_to(out)
}

pub fn write_elements_csv<W: Write>(
    body: &[u8],
    order_by: SortKey,
    filter: &ElementFilter,
    out: W,
) -> Result<(), RenderError> {
    let elements = prepare_elements(body, order_by, filter)?;
    elements_table(&elements).write_csv(out)
}

/// Element names only, one per line.
pub fn write_element_names<W: Write>(
    body: &[u8],
    order_by: SortKey,
    out: &mut W,
) -> Result<(), RenderError> {
    for element in prepare_elements(body, order_by, &ElementFilter::All)? {
        writeln!(out, "{}", element.name)?;
    }
    Ok(())
}

pub fn output_elements_table(
    body: &[u8],
    order_by: &str,
    filter_by: &str,
) -> Result<(), RenderError> {
    write_elements_table(
        body,
        SortKey::from_param(order_by),
        &ElementFilter::from_param(filter_by),
        &mut io::stdout().lock(),
    )
}

pub fn output_elements_csv(
    body: &[u8],
    order_by: &str,
    filter_by: &str,
) -> Result<(), RenderError> {
    write_elements_csv(
        body,
        SortKey::from_param(order_by),
        &ElementFilter::from_param(filter_by),
        io::stdout().lock(),
    )
}

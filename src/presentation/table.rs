use std::io::Write;

use unicode_width::UnicodeWidthStr;

use super::RenderError;

const SEPARATOR: &str = " | ";

/// Borderless aligned table: upper-cased header, a rule, then rows.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_uppercase()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), RenderError> {
        let widths = self.widths();

        write_line(out, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(out, "{}", rule.join("-+-"))?;
        for row in &self.rows {
            write_line(out, row, &widths)?;
        }
        Ok(())
    }

    /// Rows only, no header line.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<(), RenderError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(out);
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        (0..columns)
            .map(|i| {
                std::iter::once(&self.headers)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_line<W: Write>(
    out: &mut W,
    cells: &[String],
    widths: &[usize],
) -> Result<(), RenderError> {
    // trailing empty cells are dropped with their separators
    let used = cells.iter().rposition(|cell| !cell.is_empty()).map_or(0, |i| i + 1);
    let padded: Vec<String> = widths
        .iter()
        .take(used)
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map_or("", String::as_str);
            let fill = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(fill))
        })
        .collect();
    writeln!(out, "{}", padded.join(SEPARATOR).trim_end())?;
    Ok(())
}

/// `[a b c]`, the bracketed list form used for tags and step links.
pub fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        table.write_to(&mut out).expect("render");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn aligns_columns_and_trims_trailing_space() {
        let mut table = Table::new(&["Id", "Key", "Name"]);
        table.push(vec!["1".into(), "dropbox".into(), "Dropbox".into()]);
        table.push(vec!["22".into(), "box".into(), String::new()]);

        assert_eq!(
            render(&table),
            "ID | KEY     | NAME\n\
             ---+---------+--------\n\
             1  | dropbox | Dropbox\n\
             22 | box\n"
        );
    }

    #[test]
    fn inner_empty_cells_keep_their_column() {
        let mut table = Table::new(&["Id", "Key", "Name"]);
        table.push(vec!["1".into(), String::new(), "Dropbox".into()]);
        table.push(vec![String::new(); 3]);

        assert_eq!(
            render(&table),
            "ID | KEY | NAME\n\
             ---+-----+--------\n\
             1  |     | Dropbox\n\
             \n"
        );
    }

    #[test]
    fn pads_by_display_width() {
        let mut table = Table::new(&["Name", "Hub"]);
        table.push(vec!["日本".into(), "crm".into()]);
        table.push(vec!["abcd".into(), "docs".into()]);

        let text = render(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "日本 | crm");
        assert_eq!(lines[3], "abcd | docs");
    }

    #[test]
    fn csv_has_no_header_and_quotes_commas() {
        let mut table = Table::new(&["Id", "Name"]);
        table.push(vec!["1".into(), "Box, Inc".into()]);

        let mut out = Vec::new();
        table.write_csv(&mut out).expect("csv");
        assert_eq!(String::from_utf8(out).expect("utf8"), "1,\"Box, Inc\"\n");
    }
}

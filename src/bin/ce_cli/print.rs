#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;

use ce::Exchange;
use serde::Serialize;
use serde_json::Value;

use crate::client::CliError;

pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

/// Pretty-print a JSON body, or write it as text when it is not JSON.
pub fn print_body<W: Write>(out: &mut W, exchange: &Exchange) -> Result<(), CliError> {
    match serde_json::from_slice::<Value>(&exchange.body) {
        Ok(value) => print_json(out, &value),
        Err(_) => {
            writeln!(out, "{}", exchange.text())?;
            Ok(())
        }
    }
}

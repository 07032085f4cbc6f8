pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use crate::OutputFormat;
use colored::Colorize;
use serde_json::Value;

/// Column keys of a calculated schedule row, in display order.
pub static SCHEDULE_KEYS: [&str; 4] = ["payment_number", "interest", "principal", "balance"];

/// Column keys of a form table row, in display order.
pub static FORM_ROW_KEYS: [&str; 4] = ["number", "interest", "principal", "balance"];

/// Dispatch output to the appropriate formatter.
///
/// Computation envelopes are unwrapped: warnings go to stderr and only the
/// result document reaches the formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    let (document, warnings) = split_envelope(value);
    for w in warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), w);
    }

    match format {
        OutputFormat::Text => text::print_text(document),
        OutputFormat::Json => json::print_json(document),
        OutputFormat::Table => table::print_table(document),
        OutputFormat::Csv => csv_out::print_csv(document),
        OutputFormat::Minimal => minimal::print_minimal(document),
    }
}

fn split_envelope(value: &Value) -> (&Value, Vec<&str>) {
    match (value.get("result"), value.get("metadata")) {
        (Some(result), Some(_)) => {
            let warnings = value
                .get("warnings")
                .and_then(Value::as_array)
                .map(|ws| ws.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            (result, warnings)
        }
        _ => (value, Vec::new()),
    }
}

/// Schedule rows of a calculation (`schedule`) or form (`rows`) document,
/// with the keys to read from each row.
pub fn schedule_rows(document: &Value) -> Option<(&'static [&'static str], &Vec<Value>)> {
    let (keys, rows): (&'static [&'static str], _) = match document.get("schedule") {
        Some(rows) => (&SCHEDULE_KEYS[..], rows),
        None => (&FORM_ROW_KEYS[..], document.get("rows")?),
    };
    rows.as_array().map(|rows| (keys, rows))
}

/// Render a scalar JSON value without quotes.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

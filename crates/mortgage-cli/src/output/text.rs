use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, schedule_rows};

const SUMMARY_LABELS: [(&str, &str); 7] = [
    ("principal", "Principal:        "),
    ("annual_rate", "Annual Rate (%):  "),
    ("years", "Years:            "),
    ("payments_per_year", "Payments/Year:    "),
    ("payment_amount", "Payment Amount:   "),
    ("total_cost", "Total Cost:       "),
    ("total_interest", "Total Interest:   "),
];

/// Print the human friendly report for a calculation or form document.
pub fn print_text(value: &Value) {
    println!("{}", render_text(value));
}

pub fn render_text(value: &Value) -> String {
    if let Some(Value::Array(lines)) = value.get("summary_lines") {
        return render_form(value, lines);
    }
    match value.get("summary") {
        Some(summary) => render_calculation(value, summary),
        None => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

fn render_calculation(value: &Value, summary: &Value) -> String {
    let mut lines = vec!["Mortgage Summary:".to_string()];
    for (key, label) in SUMMARY_LABELS {
        let field = summary.get(key).map(format_value).unwrap_or_default();
        lines.push(format!("  {label}{field}"));
    }

    if let Some((keys, rows)) = schedule_rows(value) {
        lines.push(String::new());
        lines.push("Amortization Schedule:".to_string());
        lines.push(format!(
            "{:<4}{:>12}{:>12}{:>14}",
            "#", "Interest", "Principal", "Balance"
        ));
        lines.push("-".repeat(44));
        for row in rows {
            let number = row.get(keys[0]).map(format_value).unwrap_or_default();
            let amount = |k: &str| row.get(k).and_then(Value::as_f64).unwrap_or_default();
            lines.push(format!(
                "{:<4}{:>12.2}{:>12.2}{:>14.2}",
                number,
                amount(keys[1]),
                amount(keys[2]),
                amount(keys[3])
            ));
        }
    }

    lines.join("\n")
}

fn render_form(value: &Value, summary_lines: &[Value]) -> String {
    let mut out: Vec<String> = summary_lines.iter().map(format_value).collect();

    if let Some((keys, rows)) = schedule_rows(value) {
        let columns: Vec<String> = value
            .get("columns")
            .and_then(Value::as_array)
            .map(|cols| cols.iter().map(format_value).collect())
            .unwrap_or_else(|| keys.iter().map(|k| k.to_string()).collect());

        let mut builder = Builder::default();
        builder.push_record(columns);
        for row in rows {
            builder.push_record(
                keys.iter()
                    .map(|k| row.get(*k).map(format_value).unwrap_or_default()),
            );
        }
        out.push(String::new());
        out.push("Amortization (preview):".to_string());
        out.push(Table::from(builder).to_string());
    }

    out.join("\n")
}

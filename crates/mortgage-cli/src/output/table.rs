use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, schedule_rows};

/// Format the summary and any schedule as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value.get("summary") {
        Some(Value::Object(summary)) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in summary {
                builder.push_record([key.as_str(), &format_value(val)]);
            }
            println!("{}", Table::from(builder));
        }
        _ => {
            println!("{}", value);
            return;
        }
    }

    if let Some((keys, rows)) = schedule_rows(value) {
        if rows.is_empty() {
            println!("\n(empty schedule)");
            return;
        }
        let mut builder = Builder::default();
        builder.push_record(keys.iter().copied());
        for row in rows {
            builder.push_record(
                keys.iter()
                    .map(|k| row.get(*k).map(format_value).unwrap_or_default()),
            );
        }
        println!("\n{}", Table::from(builder));
    }
}

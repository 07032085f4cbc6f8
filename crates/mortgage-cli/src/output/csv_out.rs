use serde_json::Value;
use std::io;

use super::{format_value, schedule_rows};

/// Write output as CSV to stdout.
///
/// A document carrying a schedule is written one row per payment; otherwise
/// the summary is written as `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_document(&mut wtr, value) {
        eprintln!("CSV write error: {}", e);
    }
    let _ = wtr.flush();
}

fn write_document<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    if let Some((keys, rows)) = schedule_rows(value) {
        wtr.write_record(keys)?;
        for row in rows {
            wtr.write_record(
                keys.iter()
                    .map(|k| row.get(*k).map(format_value).unwrap_or_default()),
            )?;
        }
        return Ok(());
    }

    wtr.write_record(["field", "value"])?;
    match value.get("summary") {
        Some(Value::Object(summary)) => {
            for (key, val) in summary {
                wtr.write_record([key.as_str(), &format_value(val)])?;
            }
        }
        _ => wtr.write_record(["value", &format_value(value)])?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_document(&mut wtr, value).unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_schedule_rows_in_column_order() {
        let doc = json!({
            "summary": {"payment_amount": 10.0},
            "schedule": [{"balance": 90.0, "interest": 1.0, "payment_number": 1, "principal": 9.0}]
        });
        assert_eq!(
            render(&doc),
            "payment_number,interest,principal,balance\n1,1.0,9.0,90.0\n"
        );
    }

    #[test]
    fn test_summary_pairs() {
        let doc = json!({"summary": {"years": 30}});
        assert_eq!(render(&doc), "field,value\nyears,30\n");
    }
}

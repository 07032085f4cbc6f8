use serde_json::Value;

use super::format_value;

/// Print just the periodic payment amount.
pub fn print_minimal(value: &Value) {
    let payment = value
        .get("summary")
        .and_then(|s| s.get("payment_amount"))
        .filter(|v| !v.is_null());

    match payment {
        Some(val) => println!("{}", format_value(val)),
        None => println!("{}", format_value(value)),
    }
}

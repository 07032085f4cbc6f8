use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amounts. IEEE-754 doubles so published payment figures reproduce exactly.
pub type Money = f64;

/// Periodic rates expressed as decimals (0.0025 = 0.25% per period).
pub type Rate = f64;

/// Annual rates as quoted to borrowers, in percent (3.5 = 3.5%).
pub type Percent = f64;

/// Decimal places kept for monetary fields in summaries and schedule rows.
pub const MONEY_DP: u32 = 2;

/// Decimal places kept for the quoted annual rate.
pub const RATE_DP: u32 = 4;

/// Round a double to `dp` decimal places for display.
///
/// The exact binary value is carried into a `Decimal` and rounded half-to-even,
/// so ties that are only ties in decimal notation do not round up by accident.
/// Values a `Decimal` cannot hold are returned unchanged.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(dp))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Round a monetary amount to cents.
pub fn round_money(value: Money) -> Money {
    round_dp(value, MONEY_DP)
}

/// Render a double the way the JSON documents do (`300000.0`, `1347.13`).
///
/// Non-finite values, which JSON cannot carry, fall back to `Display`.
pub fn format_float(value: f64) -> String {
    match serde_json::Number::from_f64(value) {
        Some(n) => n.to_string(),
        None => value.to_string(),
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_f64".to_string(),
        },
    }
}

//! Text-field form front-end over the mortgage calculator.
//!
//! Field values arrive as raw strings. Parse failures surface as
//! `InvalidInput` before the calculator is ever constructed; rule violations
//! the calculator itself catches surface as `InvalidLoanTerms`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::amortization::{MortgageCalculator, MortgageSummary, PaymentBreakdown};
use crate::error::MortgageError;
use crate::types::format_float;
use crate::MortgageResult;

/// Raw values of the five form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageForm {
    pub principal: String,
    pub annual_rate: String,
    pub years: String,
    pub payments_per_year: String,
    pub schedule_rows: String,
}

impl Default for MortgageForm {
    fn default() -> Self {
        Self {
            principal: "300000".into(),
            annual_rate: "3.5".into(),
            years: "30".into(),
            payments_per_year: "12".into(),
            schedule_rows: "12".into(),
        }
    }
}

/// One pre-formatted schedule table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRowCells {
    pub number: String,
    pub interest: String,
    pub principal: String,
    pub balance: String,
}

impl From<&PaymentBreakdown> for ScheduleRowCells {
    fn from(row: &PaymentBreakdown) -> Self {
        Self {
            number: row.payment_number.to_string(),
            interest: format!("{:.2}", row.interest),
            principal: format!("{:.2}", row.principal),
            balance: format!("{:.2}", row.balance),
        }
    }
}

/// Everything the form displays after a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOutcome {
    pub summary: MortgageSummary,
    pub summary_lines: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<ScheduleRowCells>,
}

impl FormOutcome {
    pub fn summary_text(&self) -> String {
        self.summary_lines.join("\n")
    }
}

/// Table headings, in display order.
pub const SCHEDULE_COLUMNS: [&str; 4] = ["#", "Interest", "Principal", "Balance"];

impl MortgageForm {
    /// Parse the fields, run the calculator and render the results.
    pub fn submit(&self) -> MortgageResult<FormOutcome> {
        let principal: f64 = parse_float(&self.principal, "principal", "Principal", true)?;
        let annual_rate: f64 = parse_float(&self.annual_rate, "annual_rate", "Annual rate", false)?;
        let years: i32 = parse_int(&self.years, "years", "Term", true)?;
        let payments_per_year: i32 =
            parse_int(&self.payments_per_year, "payments_per_year", "Payments per year", true)?;
        let schedule_rows: i64 =
            parse_int(&self.schedule_rows, "schedule_rows", "Schedule rows", true)?;

        let calculator = MortgageCalculator::new(principal, annual_rate, years, payments_per_year)?;
        let summary = calculator.summary();
        let rows = calculator
            .schedule_iter(Some(schedule_rows))
            .map(|row| ScheduleRowCells::from(&row))
            .collect();

        Ok(FormOutcome {
            summary_lines: summary_lines(&summary),
            summary,
            columns: SCHEDULE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}

fn summary_lines(summary: &MortgageSummary) -> Vec<String> {
    vec![
        format!("Principal:      {}", format_float(summary.principal)),
        format!("Annual rate:    {}%", format_float(summary.annual_rate)),
        format!("Term (years):   {}", summary.years),
        format!("Payments/Year:  {}", summary.payments_per_year),
        format!("Payment amount: {}", format_float(summary.payment_amount)),
        format!("Total cost:     {}", format_float(summary.total_cost)),
        format!("Total interest: {}", format_float(summary.total_interest)),
    ]
}

fn parse_float(value: &str, field: &str, label: &str, positive: bool) -> MortgageResult<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| MortgageError::input(field, format!("{label} must be a number.")))?;
    if positive && !(parsed > 0.0) {
        return Err(MortgageError::input(
            field,
            format!("{label} must be greater than zero."),
        ));
    }
    Ok(parsed)
}

fn parse_int<T>(value: &str, field: &str, label: &str, positive: bool) -> MortgageResult<T>
where
    T: FromStr + PartialOrd + Default,
{
    let parsed: T = value
        .trim()
        .parse()
        .map_err(|_| MortgageError::input(field, format!("{label} must be an integer.")))?;
    if positive && parsed <= T::default() {
        return Err(MortgageError::input(
            field,
            format!("{label} must be greater than zero."),
        ));
    }
    Ok(parsed)
}

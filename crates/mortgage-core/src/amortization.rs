//! Fixed-rate mortgage amortization: level payment, schedule and summary.
//!
//! The calculator stores only the four loan terms; every figure is derived on
//! demand in `f64`, so repeated calls regenerate identical schedules. Rounding
//! happens only at serialization time.

use serde::{Deserialize, Serialize, Serializer};
use std::num::{NonZeroU32, NonZeroU64};
use std::time::Instant;

use crate::error::MortgageError;
use crate::time_value;
use crate::types::{
    round_dp, round_money, with_metadata, ComputationOutput, Money, Percent, Rate, RATE_DP,
};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Payment frequency assumed when none is given (monthly).
pub const DEFAULT_PAYMENTS_PER_YEAR: i32 = 12;

/// Annual rates above this (in percent) are flagged as unusual.
const HIGH_RATE_WARNING_PCT: Percent = 25.0;

/// Annual, semi-annual, quarterly, monthly, semi-monthly, bi-weekly, weekly.
const STANDARD_FREQUENCIES: [u32; 7] = [1, 2, 4, 12, 24, 26, 52];

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

fn default_payments_per_year() -> i32 {
    DEFAULT_PAYMENTS_PER_YEAR
}

/// Mortgage calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Loan amount borrowed.
    pub principal: Money,
    /// Nominal annual rate in percent (3.5 = 3.5%).
    pub annual_rate: Percent,
    /// Loan term in years.
    pub years: i32,
    /// Payment periods per year.
    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: i32,
    /// Number of schedule rows to return; absent or non-positive disables the schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

fn serialize_money<S: Serializer>(value: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_money(*value))
}

/// One row of the amortization schedule.
///
/// Fields hold unrounded values; the serialized form rounds the monetary
/// fields to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub payment_number: u64,
    #[serde(serialize_with = "serialize_money")]
    pub interest: Money,
    #[serde(serialize_with = "serialize_money")]
    pub principal: Money,
    #[serde(serialize_with = "serialize_money")]
    pub balance: Money,
}

impl PaymentBreakdown {
    /// Map form of the row with `payment_number`, `interest`, `principal`, `balance` keys.
    pub fn as_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::with_capacity(4);
        map.insert("payment_number".into(), self.payment_number.into());
        map.insert("interest".into(), round_money(self.interest).into());
        map.insert("principal".into(), round_money(self.principal).into());
        map.insert("balance".into(), round_money(self.balance).into());
        map
    }
}

/// Headline figures for a loan, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub principal: Money,
    pub annual_rate: Percent,
    pub years: u32,
    pub payments_per_year: u32,
    pub payment_amount: Money,
    pub total_cost: Money,
    pub total_interest: Money,
}

/// Summary plus the optional (capped) schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageOutput {
    pub summary: MortgageSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<PaymentBreakdown>>,
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// Validated fixed-rate loan terms with derived payment computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageCalculator {
    principal: Money,
    annual_rate: Percent,
    years: NonZeroU32,
    payments_per_year: NonZeroU32,
}

impl MortgageCalculator {
    /// Validate and store the loan terms.
    pub fn new(
        principal: Money,
        annual_rate: Percent,
        years: i32,
        payments_per_year: i32,
    ) -> MortgageResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(MortgageError::loan_terms(
                "principal",
                "Principal must be greater than zero.",
            ));
        }
        if annual_rate.is_nan() || annual_rate < 0.0 {
            return Err(MortgageError::loan_terms(
                "annual_rate",
                "Annual interest rate cannot be negative.",
            ));
        }
        if annual_rate.is_infinite() {
            return Err(MortgageError::loan_terms(
                "annual_rate",
                "Annual interest rate must be finite.",
            ));
        }
        let years = u32::try_from(years)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                MortgageError::loan_terms("years", "Term in years must be greater than zero.")
            })?;
        let payments_per_year = u32::try_from(payments_per_year)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                MortgageError::loan_terms(
                    "payments_per_year",
                    "Payments per year must be greater than zero.",
                )
            })?;

        log::debug!(
            "mortgage terms: principal={principal} rate={annual_rate}% years={years} ppy={payments_per_year}"
        );

        Ok(Self {
            principal,
            annual_rate,
            years,
            payments_per_year,
        })
    }

    /// Monthly-payment loan.
    pub fn monthly(principal: Money, annual_rate: Percent, years: i32) -> MortgageResult<Self> {
        Self::new(principal, annual_rate, years, DEFAULT_PAYMENTS_PER_YEAR)
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Percent {
        self.annual_rate
    }

    pub fn years(&self) -> u32 {
        self.years.get()
    }

    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year.get()
    }

    /// Interest rate applied each period.
    pub fn periodic_rate(&self) -> Rate {
        (self.annual_rate / 100.0) / f64::from(self.payments_per_year.get())
    }

    /// Number of payments over the life of the loan.
    pub fn total_payments(&self) -> u64 {
        self.periods().get()
    }

    fn periods(&self) -> NonZeroU64 {
        // Two u32 factors cannot overflow a u64.
        NonZeroU64::from(self.years).saturating_mul(NonZeroU64::from(self.payments_per_year))
    }

    /// Fixed periodic payment that fully amortizes the principal.
    pub fn payment_amount(&self) -> Money {
        time_value::level_payment(self.periodic_rate(), self.periods(), self.principal)
    }

    pub fn total_cost(&self) -> Money {
        self.payment_amount() * self.total_payments() as f64
    }

    pub fn total_interest(&self) -> Money {
        self.total_cost() - self.principal
    }

    /// Lazily generate schedule rows, capped at `limit` when given.
    ///
    /// A non-positive limit yields no rows. Generation stops early once the
    /// balance reaches zero.
    pub fn schedule_iter(&self, limit: Option<i64>) -> AmortizationIter {
        let n = self.total_payments();
        let max_rows = match limit {
            None => n,
            Some(l) if l <= 0 => 0,
            Some(l) => n.min(l as u64),
        };
        AmortizationIter {
            payment: self.payment_amount(),
            rate: self.periodic_rate(),
            balance: self.principal,
            next_number: 1,
            max_rows,
            finished: max_rows == 0,
        }
    }

    /// Payment-by-payment breakdown of interest, principal and remaining balance.
    pub fn amortization_schedule(&self, limit: Option<i64>) -> Vec<PaymentBreakdown> {
        self.schedule_iter(limit).collect()
    }

    /// Loan terms and derived totals, rounded for display.
    pub fn summary(&self) -> MortgageSummary {
        MortgageSummary {
            principal: round_money(self.principal),
            annual_rate: round_dp(self.annual_rate, RATE_DP),
            years: self.years(),
            payments_per_year: self.payments_per_year(),
            payment_amount: round_money(self.payment_amount()),
            total_cost: round_money(self.total_cost()),
            total_interest: round_money(self.total_interest()),
        }
    }
}

impl TryFrom<&MortgageInput> for MortgageCalculator {
    type Error = MortgageError;

    fn try_from(input: &MortgageInput) -> MortgageResult<Self> {
        Self::new(
            input.principal,
            input.annual_rate,
            input.years,
            input.payments_per_year,
        )
    }
}

/// Iterator over schedule rows; see [`MortgageCalculator::schedule_iter`].
#[derive(Debug, Clone)]
pub struct AmortizationIter {
    payment: Money,
    rate: Rate,
    balance: Money,
    next_number: u64,
    max_rows: u64,
    finished: bool,
}

impl Iterator for AmortizationIter {
    type Item = PaymentBreakdown;

    fn next(&mut self) -> Option<PaymentBreakdown> {
        if self.finished || self.next_number > self.max_rows {
            return None;
        }

        let interest = self.balance * self.rate;
        let principal_paid = self.payment - interest;
        self.balance = (self.balance - principal_paid).max(0.0);

        let row = PaymentBreakdown {
            payment_number: self.next_number,
            interest,
            principal: principal_paid,
            balance: self.balance,
        };

        self.next_number += 1;
        if self.balance <= 0.0 || self.next_number > self.max_rows {
            self.finished = true;
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.max_rows - self.next_number + 1;
        (1, usize::try_from(remaining).ok())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the summary and optional schedule for a mortgage request.
pub fn calculate_mortgage(
    input: &MortgageInput,
) -> MortgageResult<ComputationOutput<MortgageOutput>> {
    let start = Instant::now();
    let calculator = MortgageCalculator::try_from(input)?;
    let warnings = collect_warnings(&calculator, input.schedule_limit);

    let schedule = match input.schedule_limit {
        Some(limit) if limit > 0 => Some(calculator.amortization_schedule(Some(limit))),
        _ => None,
    };

    let output = MortgageOutput {
        summary: calculator.summary(),
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate annuity amortization",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn collect_warnings(calculator: &MortgageCalculator, limit: Option<i64>) -> Vec<String> {
    let mut warnings: Vec<String> = Vec::new();

    if let Some(limit) = limit {
        let n = calculator.total_payments();
        if limit > 0 && limit as u64 > n {
            warnings.push(format!(
                "Schedule limit {limit} exceeds the {n} scheduled payments; showing all payments"
            ));
        }
    }
    if calculator.annual_rate() > HIGH_RATE_WARNING_PCT {
        warnings.push(format!(
            "Annual rate of {}% is unusually high",
            calculator.annual_rate()
        ));
    }
    if !STANDARD_FREQUENCIES.contains(&calculator.payments_per_year()) {
        warnings.push(format!(
            "{} payments per year is not a standard payment frequency",
            calculator.payments_per_year()
        ));
    }

    for w in &warnings {
        log::warn!("{w}");
    }
    warnings
}

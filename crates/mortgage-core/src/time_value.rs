use std::num::NonZeroU64;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Level payment that fully amortizes `present_value` over `nper` periods.
///
/// Uses the annuity form `r * PV / (1 - (1 + r)^-n)`; a zero rate falls back
/// to equal division of the principal.
pub fn level_payment(rate: Rate, nper: NonZeroU64, present_value: Money) -> Money {
    let n = nper.get() as f64;
    if rate == 0.0 {
        return present_value / n;
    }

    let discount = (1.0 + rate).powf(-n);
    (rate * present_value) / (1.0 - discount)
}

/// [`level_payment`] for an unchecked period count.
pub fn payment(rate: Rate, nper: u64, present_value: Money) -> MortgageResult<Money> {
    let nper = NonZeroU64::new(nper).ok_or_else(|| {
        MortgageError::input("nper", "Number of periods must be greater than zero.")
    })?;
    Ok(level_payment(rate, nper, present_value))
}

/// Present value of `nper` level payments discounted at `rate`.
pub fn present_value(rate: Rate, nper: u64, pmt: Money) -> Money {
    if rate == 0.0 {
        return pmt * nper as f64;
    }
    pmt * (1.0 - (1.0 + rate).powf(-(nper as f64))) / rate
}

/// Outstanding balance after `k` level payments, in closed form.
pub fn remaining_balance(
    rate: Rate,
    nper: u64,
    present_value: Money,
    k: u64,
) -> MortgageResult<Money> {
    if k >= nper {
        return Ok(0.0);
    }
    let pmt = payment(rate, nper, present_value)?;
    if rate == 0.0 {
        return Ok(present_value - pmt * k as f64);
    }
    let growth = (1.0 + rate).powf(k as f64);
    Ok(present_value * growth - pmt * (growth - 1.0) / rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_thirty_year() {
        let pmt = payment(0.035 / 12.0, 360, 300_000.0).unwrap();
        assert!((pmt - 1347.13).abs() < 0.01, "got {pmt}");
    }

    #[test]
    fn test_payment_zero_rate() {
        let pmt = payment(0.0, 180, 120_000.0).unwrap();
        assert!((pmt - 666.666_666).abs() < 1e-5);
    }

    #[test]
    fn test_payment_zero_periods_rejected() {
        let err = payment(0.01, 0, 1000.0).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_level_payment_matches_checked_payment() {
        let nper = NonZeroU64::new(360).unwrap();
        let rate = 0.035 / 12.0;
        assert_eq!(
            level_payment(rate, nper, 300_000.0),
            payment(rate, 360, 300_000.0).unwrap()
        );
        assert_eq!(level_payment(0.0, NonZeroU64::new(1).unwrap(), 500.0), 500.0);
    }

    #[test]
    fn test_present_value_inverts_payment() {
        let rate = 0.05 / 12.0;
        let pmt = payment(rate, 120, 100_000.0).unwrap();
        let pv = present_value(rate, 120, pmt);
        assert!((pv - 100_000.0).abs() < 1e-6, "got {pv}");
    }

    #[test]
    fn test_remaining_balance_endpoints() {
        let rate = 0.04 / 12.0;
        assert!((remaining_balance(rate, 360, 250_000.0, 0).unwrap() - 250_000.0).abs() < 1e-9);
        assert_eq!(remaining_balance(rate, 360, 250_000.0, 360).unwrap(), 0.0);
        let mid = remaining_balance(rate, 360, 250_000.0, 180).unwrap();
        assert!(mid > 0.0 && mid < 250_000.0);
    }

    #[test]
    fn test_remaining_balance_zero_rate_linear() {
        let bal = remaining_balance(0.0, 10, 1000.0, 4).unwrap();
        assert!((bal - 600.0).abs() < 1e-9);
    }
}

use mortgage_core::amortization::{self, MortgageCalculator, MortgageInput};
use mortgage_core::time_value;
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Known-answer scenarios
// ===========================================================================

#[test]
fn test_thirty_year_fixed_payment() {
    let calc = MortgageCalculator::new(300_000.0, 3.5, 30, 12).unwrap();
    let payment = calc.payment_amount();
    assert!(
        (payment - 1347.13).abs() < 0.01,
        "Expected payment ~1347.13, got {}",
        payment
    );
}

#[test]
fn test_zero_rate_fifteen_year() {
    let calc = MortgageCalculator::new(120_000.0, 0.0, 15, 12).unwrap();
    assert!((calc.payment_amount() - 666.67).abs() < 0.01);
    assert!(calc.total_interest().abs() < 1e-6);
    assert!((calc.total_cost() - 120_000.0).abs() < 1e-6);
}

#[test]
fn test_single_row_ten_year() {
    let calc = MortgageCalculator::new(100_000.0, 5.0, 10, 12).unwrap();
    let rows = calc.amortization_schedule(Some(1));
    assert_eq!(rows.len(), 1);
    assert!((rows[0].interest - 416.67).abs() < 0.01);
    assert!((rows[0].principal - (calc.payment_amount() - 416.67)).abs() < 0.01);
}

#[test]
fn test_invalid_terms() {
    let bad = [
        MortgageCalculator::new(-10.0, 5.0, 10, 12),
        MortgageCalculator::new(-10.0, 0.0, 1, 12),
        MortgageCalculator::new(100_000.0, -1.0, 10, 12),
        MortgageCalculator::new(100_000.0, 5.0, 0, 12),
        MortgageCalculator::new(100_000.0, 5.0, 10, 0),
    ];
    for result in bad {
        assert!(matches!(
            result,
            Err(MortgageError::InvalidLoanTerms { .. })
        ));
    }
}

// ===========================================================================
// Schedule properties over sampled loan terms
// ===========================================================================

fn sampled_terms(seed: u64, count: usize) -> Vec<MortgageCalculator> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let principal = rng.gen_range(1_000.0..2_000_000.0);
            let rate = if rng.gen_bool(0.1) {
                0.0
            } else {
                rng.gen_range(0.01..15.0)
            };
            let years = rng.gen_range(1..=40);
            let ppy = [1, 2, 4, 12, 26, 52][rng.gen_range(0..6)];
            MortgageCalculator::new(principal, rate, years, ppy).unwrap()
        })
        .collect()
}

#[test]
fn test_total_cost_covers_principal() {
    for calc in sampled_terms(7, 200) {
        if calc.annual_rate() > 0.0 {
            assert!(calc.total_cost() >= calc.principal());
            assert!(calc.total_interest() >= 0.0);
        } else {
            assert!(calc.total_interest().abs() < 1e-6 * calc.principal());
        }
    }
}

#[test]
fn test_principal_portions_sum_to_loan() {
    for calc in sampled_terms(11, 200) {
        let repaid: f64 = calc
            .amortization_schedule(None)
            .iter()
            .map(|row| row.principal)
            .sum();
        let tolerance = 1e-6 * calc.principal();
        assert!(
            (repaid - calc.principal()).abs() < tolerance,
            "repaid {} of {}",
            repaid,
            calc.principal()
        );
    }
}

#[test]
fn test_balance_monotone_and_fully_amortized() {
    for calc in sampled_terms(23, 200) {
        let rows = calc.amortization_schedule(None);
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            assert!(pair[1].balance <= pair[0].balance);
            assert!(pair[1].balance >= 0.0);
            assert_eq!(pair[1].payment_number, pair[0].payment_number + 1);
        }
        let last = rows.last().unwrap();
        assert!(last.balance.abs() < 1e-6 * calc.principal());
        assert!(rows.len() as u64 <= calc.total_payments());
    }
}

#[test]
fn test_schedule_is_repeatable() {
    for calc in sampled_terms(5, 20) {
        assert_eq!(
            calc.amortization_schedule(Some(60)),
            calc.amortization_schedule(Some(60))
        );
        assert_eq!(calc.amortization_schedule(None), calc.amortization_schedule(None));
    }
}

#[test]
fn test_recurrence_tracks_closed_form_balance() {
    let calc = MortgageCalculator::new(450_000.0, 6.25, 25, 12).unwrap();
    let rows = calc.amortization_schedule(Some(120));
    for row in &rows {
        let expected = time_value::remaining_balance(
            calc.periodic_rate(),
            calc.total_payments(),
            calc.principal(),
            row.payment_number,
        )
        .unwrap();
        assert!(
            (row.balance - expected).abs() < 1e-4,
            "payment {}: {} vs {}",
            row.payment_number,
            row.balance,
            expected
        );
    }
}

#[test]
fn test_payment_stream_present_value_is_principal() {
    for calc in sampled_terms(31, 50) {
        let pv = time_value::present_value(
            calc.periodic_rate(),
            calc.total_payments(),
            calc.payment_amount(),
        );
        assert!((pv - calc.principal()).abs() < 1e-6 * calc.principal());
    }
}

// ===========================================================================
// Envelope and serialization
// ===========================================================================

#[test]
fn test_json_document_shape() {
    let input = MortgageInput {
        principal: 100_000.0,
        annual_rate: 5.0,
        years: 10,
        payments_per_year: 12,
        schedule_limit: Some(2),
    };
    let output = amortization::calculate_mortgage(&input).unwrap();
    let json = serde_json::to_value(&output.result).unwrap();

    let summary = json["summary"].as_object().unwrap();
    let mut keys: Vec<&str> = summary.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "annual_rate",
            "payment_amount",
            "payments_per_year",
            "principal",
            "total_cost",
            "total_interest",
            "years",
        ]
    );

    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0]["payment_number"], 1);
    assert_eq!(schedule[0]["interest"], 416.67);
    assert!(schedule[1]["balance"].is_f64());
}

#[test]
fn test_assumptions_echo_input() {
    let input = MortgageInput {
        principal: 250_000.0,
        annual_rate: 4.0,
        years: 20,
        payments_per_year: 12,
        schedule_limit: None,
    };
    let output = amortization::calculate_mortgage(&input).unwrap();
    assert_eq!(output.assumptions["years"], 20);
    assert!(output.assumptions.get("schedule_limit").is_none());
    assert_eq!(output.metadata.version, env!("CARGO_PKG_VERSION"));
}

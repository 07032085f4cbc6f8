use clap::Args;
use serde_json::Value;

use mortgage_core::amortization::{self, MortgageInput, DEFAULT_PAYMENTS_PER_YEAR};

use crate::input;

/// Arguments for a mortgage calculation
#[derive(Args)]
pub struct CalculateArgs {
    /// Loan principal amount
    #[arg(allow_negative_numbers = true)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent (e.g. 3.5 for 3.5%)
    #[arg(allow_negative_numbers = true)]
    pub annual_rate: Option<f64>,

    /// Loan term in years
    #[arg(allow_negative_numbers = true)]
    pub years: Option<i32>,

    /// Number of payments per year [default: 12]
    #[arg(long, allow_negative_numbers = true)]
    pub payments_per_year: Option<i32>,

    /// Show the amortization schedule limited to this many rows (0 disables)
    #[arg(long, allow_negative_numbers = true)]
    pub schedule: Option<i64>,

    /// Output JSON instead of human friendly text (same as --output json)
    #[arg(long)]
    pub json: bool,

    /// Path to JSON input file (overrides positional arguments)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut mortgage_input: MortgageInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let (Some(principal), Some(annual_rate), Some(years)) =
        (args.principal, args.annual_rate, args.years)
    {
        MortgageInput {
            principal,
            annual_rate,
            years,
            payments_per_year: DEFAULT_PAYMENTS_PER_YEAR,
            schedule_limit: None,
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("principal, annual_rate, and years are required (or provide --input)".into());
    };

    if let Some(ppy) = args.payments_per_year {
        mortgage_input.payments_per_year = ppy;
    }
    if let Some(rows) = args.schedule {
        mortgage_input.schedule_limit = Some(rows);
    }

    let result = amortization::calculate_mortgage(&mortgage_input)?;
    Ok(serde_json::to_value(result)?)
}

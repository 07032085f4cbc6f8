use clap::Args;
use serde_json::Value;

use mortgage_core::form::MortgageForm;

use crate::input;

/// Raw form field values; anything omitted keeps the form's default text
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormArgs {
    /// Principal field
    #[arg(long)]
    pub principal: Option<String>,

    /// Annual rate (%) field
    #[arg(long)]
    pub annual_rate: Option<String>,

    /// Term (years) field
    #[arg(long)]
    pub years: Option<String>,

    /// Payments per year field
    #[arg(long)]
    pub payments_per_year: Option<String>,

    /// Schedule rows field
    #[arg(long)]
    pub schedule_rows: Option<String>,

    /// Path to JSON file holding the field values
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_form(args: FormArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut form: MortgageForm = match args.input {
        Some(ref path) => input::file::read_json(path)?,
        None => MortgageForm::default(),
    };

    let overrides = [
        (args.principal, &mut form.principal),
        (args.annual_rate, &mut form.annual_rate),
        (args.years, &mut form.years),
        (args.payments_per_year, &mut form.payments_per_year),
        (args.schedule_rows, &mut form.schedule_rows),
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }

    let outcome = form
        .submit()
        .map_err(|e| format!("{}: {}", e.dialog_title(), e))?;
    Ok(serde_json::to_value(outcome)?)
}

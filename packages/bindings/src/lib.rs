use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::amortization::MortgageInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_core::amortization::calculate_mortgage(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Errors come back as "<dialog title>: <message>" so the front-end can split
/// them for its error dialog.
#[napi]
pub fn submit_mortgage_form(form_json: String) -> NapiResult<String> {
    let form: mortgage_core::form::MortgageForm =
        serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let outcome = form
        .submit()
        .map_err(|e| to_napi_error(format!("{}: {}", e.dialog_title(), e)))?;
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

#[napi]
pub fn default_mortgage_form() -> NapiResult<String> {
    serde_json::to_string(&mortgage_core::form::MortgageForm::default()).map_err(to_napi_error)
}

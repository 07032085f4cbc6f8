pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "form")]
pub mod form;

pub use error::MortgageError;
pub use types::*;

#[cfg(feature = "amortization")]
pub use amortization::{
    calculate_mortgage, MortgageCalculator, MortgageInput, MortgageOutput, MortgageSummary,
    PaymentBreakdown,
};

#[cfg(feature = "form")]
pub use form::{FormOutcome, MortgageForm};

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;

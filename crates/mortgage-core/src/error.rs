use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("{reason}")]
    InvalidLoanTerms { field: String, reason: String },

    #[error("{reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl MortgageError {
    pub(crate) fn loan_terms(field: &str, reason: &str) -> Self {
        MortgageError::InvalidLoanTerms {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn input(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            MortgageError::InvalidLoanTerms { field, .. }
            | MortgageError::InvalidInput { field, .. } => Some(field),
            MortgageError::SerializationError(_) => None,
        }
    }

    /// Title a form front-end shows above the error message.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            MortgageError::InvalidInput { .. } => "Validation error",
            MortgageError::InvalidLoanTerms { .. } => "Mortgage error",
            MortgageError::SerializationError(_) => "Serialization error",
        }
    }
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_reason() {
        let err = MortgageError::loan_terms("years", "Term in years must be greater than zero.");
        assert_eq!(err.to_string(), "Term in years must be greater than zero.");
        assert_eq!(err.field(), Some("years"));
    }

    #[test]
    fn test_dialog_titles() {
        assert_eq!(
            MortgageError::input("principal", "Principal must be a number.").dialog_title(),
            "Validation error"
        );
        assert_eq!(
            MortgageError::loan_terms("annual_rate", "x").dialog_title(),
            "Mortgage error"
        );
    }

    #[test]
    fn test_from_serde_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: MortgageError = parse.unwrap_err().into();
        assert!(matches!(err, MortgageError::SerializationError(_)));
        assert_eq!(err.field(), None);
    }
}

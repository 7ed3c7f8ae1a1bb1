use thiserror::Error;

/// Reasons a calculation is refused.
///
/// Every variant means the form is not ready: the caller shows no result and
/// prompts for the named field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumericInput { field: String, value: String },

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD or MM/DD/YYYY)")]
    InvalidDate { field: String, value: String },

    #[error("{field} must be greater than zero")]
    DegenerateDivision { field: String },
}

impl CalculationError {
    pub fn missing(field: impl Into<String>) -> Self {
        CalculationError::MissingRequiredField {
            field: field.into(),
        }
    }

    pub fn degenerate(field: impl Into<String>) -> Self {
        CalculationError::DegenerateDivision {
            field: field.into(),
        }
    }

    /// Field path the error refers to, e.g. `comparisonLeases[1].term`
    pub fn field(&self) -> &str {
        match self {
            CalculationError::MissingRequiredField { field }
            | CalculationError::InvalidNumericInput { field, .. }
            | CalculationError::InvalidDate { field, .. }
            | CalculationError::DegenerateDivision { field } => field,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CalculationError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            CalculationError::InvalidNumericInput { .. } => "INVALID_NUMERIC_INPUT",
            CalculationError::InvalidDate { .. } => "INVALID_DATE",
            CalculationError::DegenerateDivision { .. } => "DEGENERATE_DIVISION",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculationError>;

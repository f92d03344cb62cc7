//! Error types for the tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while coercing inputs, loading
//! configuration, and computing exemptions or slab tax.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the tax engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tax_engine::error::EngineError;
///
/// let error = EngineError::InvalidEnumValue {
///     field: "city".to_string(),
///     value: "suburban".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid value 'suburban' for field 'city'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required monetary field was missing, non-numeric, or negative.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An enumerated field held a value outside its defined set.
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidEnumValue {
        /// The field that was invalid.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// Exemptions were requested before any salary details were supplied.
    #[error("Salary details are required before exemptions can be calculated")]
    MissingSalaryDetails,

    /// Exemptions were requested before investment details were supplied.
    #[error(
        "Investment details are required; supply them or explicitly skip to use the defaults"
    )]
    MissingInvestmentDetails,

    /// The slab table has no rate for the requested bracket floor.
    #[error("No slab rate defined for bracket floor {floor}")]
    RateNotFound {
        /// The bracket floor that was looked up.
        floor: Decimal,
    },

    /// A slab table violated the bracket layout the tax loop relies on.
    #[error("Invalid slab table: {message}")]
    InvalidSlabTable {
        /// A description of the violation.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`] on `field`.
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// A [`EngineError::CalculationError`] for an amount too large to represent.
    pub fn overflow(operation: &str) -> Self {
        EngineError::CalculationError {
            message: format!("{} overflowed the supported decimal range", operation),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/assessment.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/assessment.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/slabs.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/slabs.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("basic_salary", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid input for field 'basic_salary': must not be negative"
        );
    }

    #[test]
    fn test_invalid_enum_value_displays_field_and_value() {
        let error = EngineError::InvalidEnumValue {
            field: "self_age".to_string(),
            value: "above70".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value 'above70' for field 'self_age'"
        );
    }

    #[test]
    fn test_rate_not_found_displays_floor() {
        let error = EngineError::RateNotFound {
            floor: Decimal::from(1_750_000),
        };
        assert_eq!(
            error.to_string(),
            "No slab rate defined for bracket floor 1750000"
        );
    }

    #[test]
    fn test_overflow_is_a_calculation_error() {
        let error = EngineError::overflow("80C declaration total");
        assert!(matches!(error, EngineError::CalculationError { .. }));
        assert_eq!(
            error.to_string(),
            "Calculation error: 80C declaration total overflowed the supported decimal range"
        );
    }

    #[test]
    fn test_missing_investment_details_mentions_skip() {
        let error = EngineError::MissingInvestmentDetails;
        assert!(error.to_string().contains("skip"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_salary() -> EngineResult<()> {
            Err(EngineError::MissingSalaryDetails)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_salary()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::MissingSalaryDetails)
        ));
    }
}

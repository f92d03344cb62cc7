//! Response types for the tax engine API.
//!
//! This module defines the success payloads, the error response structures,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AuditTrace, ExemptionMetrics, RegimeComparison, TaxTable};

/// Response body for the `/exemptions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExemptionResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// Time taken to compute the result in microseconds.
    pub duration_us: u64,
    /// The computed exemption metrics.
    pub metrics: ExemptionMetrics,
    /// How each exemption was reached.
    pub audit_trace: AuditTrace,
}

/// Response body for the `/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// Time taken to compute the result in microseconds.
    pub duration_us: u64,
    /// The computed exemption metrics.
    pub metrics: ExemptionMetrics,
    /// Slab-wise tax on the gross salary.
    pub tax_table: TaxTable,
    /// Tax under each regime after its deductions.
    pub comparison: RegimeComparison,
    /// How each exemption was reached.
    pub audit_trace: AuditTrace,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("Field '{}' must be a non-negative amount", field),
                ),
            },
            EngineError::InvalidEnumValue { field, .. } => {
                let allowed = match field.as_str() {
                    "city" => "metro, non-metro",
                    _ => "below60, above60",
                };
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "INVALID_ENUM_VALUE",
                        message,
                        format!("Allowed values for '{}': {}", field, allowed),
                    ),
                }
            }
            EngineError::MissingSalaryDetails => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_SALARY_DETAILS", message),
            },
            EngineError::MissingInvestmentDetails => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_INVESTMENT_DETAILS",
                    message,
                    "Send investment_details, or set skip_investment_details to true",
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::RateNotFound { .. } | EngineError::InvalidSlabTable { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "SLAB_TABLE_ERROR",
                        "The configured slab table cannot be applied",
                        message,
                    ),
                }
            }
            EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::invalid_input("rent", "is required").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_INPUT");
        assert!(response.error.message.contains("rent"));
    }

    #[test]
    fn test_invalid_enum_lists_allowed_values() {
        let response: ApiErrorResponse = EngineError::InvalidEnumValue {
            field: "city".to_string(),
            value: "rural".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_ENUM_VALUE");
        assert_eq!(
            response.error.details.as_deref(),
            Some("Allowed values for 'city': metro, non-metro")
        );
    }

    #[test]
    fn test_missing_details_codes() {
        let salary: ApiErrorResponse = EngineError::MissingSalaryDetails.into();
        let investment: ApiErrorResponse = EngineError::MissingInvestmentDetails.into();
        assert_eq!(salary.error.code, "MISSING_SALARY_DETAILS");
        assert_eq!(investment.error.code, "MISSING_INVESTMENT_DETAILS");
        assert_eq!(investment.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_slab_errors_are_server_errors() {
        let response: ApiErrorResponse = EngineError::RateNotFound {
            floor: Decimal::from(1_750_000),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "SLAB_TABLE_ERROR");
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_overflow_is_a_server_calculation_error() {
        let response: ApiErrorResponse = EngineError::overflow("slab tax").into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CALCULATION_ERROR");
        assert_eq!(
            response.error.details.as_deref(),
            Some("Calculation error: slab tax overflowed the supported decimal range")
        );
    }
}

//! HTTP request handlers for the tax engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{assess_exemptions, compare_regimes, compute_tax_table};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ExemptionAssessment, InvestmentDetails, RegimeComparison, SalaryDetails, TaxTable,
};

use super::request::{ExemptionRequest, TaxTableRequest};
use super::response::{ApiError, ApiErrorResponse, ComparisonResponse, ExemptionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/exemptions", post(exemptions_handler))
        .route("/compare", post(compare_handler))
        .route("/tax-table", post(tax_table_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the offending field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("INVALID_INPUT", body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /exemptions.
///
/// Returns the exemption metrics for one salary and investment declaration.
async fn exemptions_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExemptionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing exemption request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = request.into_inputs().and_then(|(salary, investment)| {
        let assessment = assess_exemptions(&salary, &investment, state.rounding())?;
        Ok((salary, assessment))
    });
    let (salary, assessment) = match result {
        Ok(outcome) => outcome,
        Err(err) => return engine_error_response(correlation_id, err),
    };

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        gross_salary = %salary.gross_salary,
        warnings = assessment.audit_trace.warnings.len(),
        duration_us = duration.as_micros(),
        "Exemption calculation completed"
    );

    json_response(
        StatusCode::OK,
        ExemptionResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            duration_us: duration.as_micros() as u64,
            metrics: assessment.metrics,
            audit_trace: assessment.audit_trace,
        },
    )
}

/// Runs the exemption assessment, the gross-salary tax table, and the regime
/// comparison for one declaration.
fn perform_comparison(
    salary: &SalaryDetails,
    investment: &InvestmentDetails,
    state: &AppState,
) -> EngineResult<(ExemptionAssessment, TaxTable, RegimeComparison)> {
    let assessment = assess_exemptions(salary, investment, state.rounding())?;
    let tax_table = compute_tax_table(salary.gross_salary, state.slabs())?;
    let comparison = compare_regimes(salary, &assessment.metrics, state.slabs())?;
    Ok((assessment, tax_table, comparison))
}

/// Handler for POST /compare.
///
/// Returns the exemption metrics, the slab table on gross salary, and the
/// tax under each regime after its deductions.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExemptionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing regime comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = request
        .into_inputs()
        .and_then(|(salary, investment)| perform_comparison(&salary, &investment, &state));

    match result {
        Ok((assessment, tax_table, comparison)) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                recommended = %comparison.recommended,
                old_regime_tax = %comparison.old_regime.tax,
                new_regime_tax = %comparison.new_regime.tax,
                duration_us = duration.as_micros(),
                "Regime comparison completed"
            );
            json_response(
                StatusCode::OK,
                ComparisonResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    duration_us: duration.as_micros() as u64,
                    metrics: assessment.metrics,
                    tax_table,
                    comparison,
                    audit_trace: assessment.audit_trace,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /tax-table.
///
/// Returns the slab-wise tax table for a gross income under both regimes.
async fn tax_table_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxTableRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax table request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = request
        .gross_salary()
        .and_then(|gross| compute_tax_table(gross, state.slabs()));

    match result {
        Ok(table) => {
            info!(
                correlation_id = %correlation_id,
                gross_income = %table.totals.total_income,
                brackets = table.rows.len(),
                "Tax table computed"
            );
            json_response(StatusCode::OK, table)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

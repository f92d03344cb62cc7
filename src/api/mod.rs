//! HTTP API module for the tax engine.
//!
//! This module provides the REST API endpoints for computing exemptions,
//! slab-wise tax tables, and old versus new regime comparisons.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExemptionRequest, TaxTableRequest};
pub use response::{ApiError, ApiErrorResponse, ComparisonResponse, ExemptionResponse};
pub use state::AppState;

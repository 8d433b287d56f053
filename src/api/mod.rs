//! HTTP API module for the Salary Engine.
//!
//! This module provides the `POST /calculate` endpoint, which validates the
//! eight raw input values and returns the full salary breakdown.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

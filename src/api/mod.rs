//! HTTP API module for HawkerHub.
//!
//! This module exposes the revenue estimator, the grant finder and the rental
//! insights as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EstimateRequest;
pub use response::{ApiError, EstimateResponse, GrantsResponse, HomeResponse, InsightsResponse};
pub use state::AppState;

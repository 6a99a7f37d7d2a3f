//! HTTP request handlers for the HawkerHub API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::estimator::{cost_breakdown, estimate, headline};
use crate::grants::{evaluate_rules, find_grants, DISCLAIMER};
use crate::insights::build_insights;
use crate::models::{FilterCriteria, SurveyResponse};

use super::request::EstimateRequest;
use super::response::{
    ApiError, ApiErrorResponse, EstimateDisplay, EstimateResponse, GrantsResponse, HomeResponse,
    InsightsResponse, ToolLink,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/estimate", post(estimate_handler))
        .route("/grants", post(grants_handler))
        .route("/insights", get(insights_handler))
        .route("/insights/filters", get(filters_handler))
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

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Turns a JSON body rejection into a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("invalid type") || body_text.contains("invalid value") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
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

/// Handler for GET /.
async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tool = |name: &str, path: &str, description: &str| ToolLink {
        name: name.to_string(),
        path: path.to_string(),
        description: description.to_string(),
    };

    Json(HomeResponse {
        name: "HawkerHub".to_string(),
        tagline: "A digital assistant for hawkers in Singapore".to_string(),
        tools: vec![
            tool(
                "Revenue Estimator",
                "/estimate",
                "Estimate your monthly revenue, costs and profit",
            ),
            tool(
                "Grant Finder",
                "/grants",
                "Discover which grants you are eligible for",
            ),
            tool(
                "Rental & Footfall Insights",
                "/insights",
                "Explore historical rental bids and foot traffic",
            ),
        ],
        logo: state.config().config().data.logo.display().to_string(),
    })
}

/// Handler for POST /estimate.
///
/// Validates the form, resolves the rent for the chosen location and returns
/// the monthly figures.
async fn estimate_handler(payload: Result<Json<EstimateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let location = request.location;
    let outcome = request.into_assumptions().and_then(|(cost, revenue)| {
        let result = estimate(&cost, &revenue)?;
        Ok((cost, result))
    });

    match outcome {
        Ok((cost, result)) => {
            info!(
                correlation_id = %correlation_id,
                ?location,
                net_profit = %result.net_profit,
                duration_us = start_time.elapsed().as_micros(),
                "Estimate completed successfully"
            );
            json_response(
                StatusCode::OK,
                EstimateResponse {
                    location,
                    rent: cost.rent,
                    display: EstimateDisplay::from_result(&result),
                    headline: headline(&result),
                    cost_breakdown: cost_breakdown(&cost),
                    result,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate rejected"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /grants.
async fn grants_handler(payload: Result<Json<SurveyResponse>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing grant finder request");

    let answers = match payload {
        Ok(Json(answers)) => answers,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let outcome = find_grants(&answers);
    let evaluations = evaluate_rules(&answers);
    info!(
        correlation_id = %correlation_id,
        matched = evaluations.iter().filter(|e| e.matched).count(),
        "Grant matching completed"
    );

    json_response(
        StatusCode::OK,
        GrantsResponse {
            answers,
            outcome,
            evaluations,
            disclaimer: DISCLAIMER.to_string(),
        },
    )
}

/// Handler for GET /insights/filters.
async fn filters_handler(State(state): State<AppState>) -> Response {
    match state.rental_dataset() {
        Ok(dataset) => json_response(StatusCode::OK, dataset.filter_options()),
        Err(err) => {
            warn!(error = %err, "Rental dataset unavailable");
            error_response(err.into())
        }
    }
}

/// Handler for GET /insights.
///
/// A dataset that fails to load fails the whole view; an empty selection
/// returns "no data" sections.
async fn insights_handler(
    State(state): State<AppState>,
    query: Result<Query<FilterCriteria>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let criteria = match query {
        Ok(Query(criteria)) => criteria,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Bad insights query");
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };
    info!(
        correlation_id = %correlation_id,
        region = criteria.region.as_str(),
        trade_type = criteria.trade_type.as_str(),
        "Processing insights request"
    );

    let start_time = Instant::now();
    let dataset = match state.rental_dataset() {
        Ok(dataset) => dataset,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rental dataset unavailable"
            );
            return error_response(err.into());
        }
    };

    let view = build_insights(&dataset, &criteria);
    info!(
        correlation_id = %correlation_id,
        matched_records = view.matched_records,
        duration_us = start_time.elapsed().as_micros(),
        "Insights completed successfully"
    );
    json_response(StatusCode::OK, InsightsResponse::from(view))
}

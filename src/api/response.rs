//! Response types for the HawkerHub API.
//!
//! This module defines the success payloads for each endpoint and the error
//! response structure every failure is mapped to.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::format::format_currency;
use crate::grants::{GrantOutcome, RuleEvaluation};
use crate::insights::{InsightsView, TOP_CENTRES};
use crate::models::{CostLine, FinancialResult, Location, SurveyResponse};

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl From<HubError> for ApiErrorResponse {
    fn from(error: HubError) -> Self {
        match error {
            HubError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "Check the value is a non-negative number within the documented bounds",
                ),
            },
            HubError::ConfigNotFound { .. } | HubError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            other => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Rental data could not be loaded",
                    other.to_string(),
                ),
            },
        }
    }
}

/// Links to one of the dashboard tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolLink {
    /// Tool name.
    pub name: String,
    /// Route serving the tool.
    pub path: String,
    /// What the tool helps with.
    pub description: String,
}

/// Response body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    /// Application name.
    pub name: String,
    /// One-line introduction.
    pub tagline: String,
    /// The available tools.
    pub tools: Vec<ToolLink>,
    /// Path of the logo image.
    pub logo: String,
}

/// Currency strings for the estimator results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateDisplay {
    /// Formatted monthly revenue.
    pub monthly_revenue: String,
    /// Formatted monthly costs.
    pub monthly_costs: String,
    /// Formatted net profit.
    pub net_profit: String,
}

/// Response body for `POST /estimate`.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    /// The location the rent was resolved for.
    pub location: Location,
    /// The resolved monthly rent.
    pub rent: Decimal,
    /// The calculated figures.
    pub result: FinancialResult,
    /// The six cost components.
    pub cost_breakdown: Vec<CostLine>,
    /// Formatted figures.
    pub display: EstimateDisplay,
    /// Profit, loss or break-even sentence.
    pub headline: String,
}

impl EstimateDisplay {
    pub(crate) fn from_result(result: &FinancialResult) -> Self {
        Self {
            monthly_revenue: format_currency(result.monthly_revenue),
            monthly_costs: format_currency(result.monthly_costs),
            net_profit: format_currency(result.net_profit),
        }
    }
}

/// Response body for `POST /grants`.
#[derive(Debug, Clone, Serialize)]
pub struct GrantsResponse {
    /// The answers the result was computed from.
    pub answers: SurveyResponse,
    /// Matched grants or the no-match fallback.
    pub outcome: GrantOutcome,
    /// How each rule was decided.
    pub evaluations: Vec<RuleEvaluation>,
    /// Reminder to check the official criteria.
    pub disclaimer: String,
}

/// Ready-to-show sentences for the insights page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InsightHeadlines {
    /// Average rent, e.g. `$2,350`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rent: Option<String>,
    /// Average footfall, e.g. `6,800 people/day`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_footfall: Option<String>,
    /// Trend chart caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    /// Busiest centre sentence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footfall_leader: Option<String>,
}

/// Response body for `GET /insights`.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    /// Current selection in words, as a full sentence.
    pub viewing: String,
    /// Every pipeline stage.
    #[serde(flatten)]
    pub view: InsightsView,
    /// Captions derived from the stages.
    pub headlines: InsightHeadlines,
}

impl From<InsightsView> for InsightsResponse {
    fn from(view: InsightsView) -> Self {
        let headlines = InsightHeadlines {
            average_rent: view.summary.data().map(|s| s.average_bid_label()),
            average_footfall: view.summary.data().map(|s| s.average_footfall_label()),
            trend: view.trend.data().map(|t| {
                format!(
                    "Showing data up to {} for the top {} hawker centres with the highest average bids.",
                    t.latest_month_label, TOP_CENTRES
                )
            }),
            footfall_leader: view.footfall.data().map(|f| f.headline()),
        };
        Self {
            viewing: format!("Currently viewing data for {}.", view.filter_description),
            view,
            headlines,
        }
    }
}

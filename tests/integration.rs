//! Integration tests for the HawkerHub API.
//!
//! This test suite drives the router end to end:
//! - Revenue estimator defaults, custom rent and input validation
//! - Grant finder matches and the no-match fallback
//! - Rental insights over the bundled dataset, including empty selections
//! - Dataset failures

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use hawker_hub::api::{create_router, AppState};
use hawker_hub::config::{AppConfig, ConfigLoader};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/hawker_hub.yaml").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal_at(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

fn names(list: &Value, field: &str) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item[field].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Revenue Estimator
// =============================================================================

#[tokio::test]
async fn test_estimate_with_form_defaults() {
    let (status, json) = post_json(create_router_for_test(), "/estimate", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["location"], "mature_estate");
    assert_eq!(decimal_at(&json["rent"]), decimal("2500"));
    assert_eq!(decimal_at(&json["result"]["monthly_revenue"]), decimal("10400"));
    assert_eq!(decimal_at(&json["result"]["monthly_costs"]), decimal("5775"));
    assert_eq!(decimal_at(&json["result"]["net_profit"]), decimal("4625"));
    assert_eq!(json["result"]["status"], "profit");
    assert_eq!(json["display"]["monthly_revenue"], "$10,400.00");
    assert_eq!(
        json["headline"],
        "You're making a profit of $4,625.00 per month!"
    );
    assert_eq!(json["cost_breakdown"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_estimate_canned_locations() {
    for (location, rent) in [("new_estate", "1800"), ("mature_estate", "2500"), ("cbd", "4000")] {
        let (status, json) = post_json(
            create_router_for_test(),
            "/estimate",
            json!({ "location": location }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal_at(&json["rent"]), decimal(rent), "location {}", location);
    }
}

#[tokio::test]
async fn test_estimate_custom_rent_and_loss() {
    let body = json!({
        "location": "custom",
        "custom_rent": "6000",
        "operating_days": 20,
        "price_per_item": "4.50",
        "items_sold_per_day": 50
    });
    let (status, json) = post_json(create_router_for_test(), "/estimate", body).await;

    assert_eq!(status, StatusCode::OK);
    // 4.50 x 50 x 20 = 4500 revenue; 6000 + 3275 costs
    assert_eq!(decimal_at(&json["result"]["monthly_revenue"]), decimal("4500"));
    assert_eq!(decimal_at(&json["result"]["monthly_costs"]), decimal("9275"));
    assert_eq!(decimal_at(&json["result"]["net_profit"]), decimal("-4775"));
    assert_eq!(json["result"]["status"], "loss");
    assert_eq!(json["display"]["net_profit"], "-$4,775.00");
    assert_eq!(json["headline"], "You're losing $4,775.00 per month.");
}

#[tokio::test]
async fn test_estimate_custom_without_rent_defaults_to_2500() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/estimate",
        json!({ "location": "custom" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_at(&json["rent"]), decimal("2500"));
}

#[tokio::test]
async fn test_estimate_rejects_too_many_days() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/estimate",
        json!({ "operating_days": 40 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("operating_days"));
}

#[tokio::test]
async fn test_estimate_rejects_negative_cost() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/estimate",
        json!({ "manpower": "-5" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"].as_str().unwrap().contains("manpower"));
}

#[tokio::test]
async fn test_estimate_rejects_non_numeric_price() {
    let (status, json) = post_json(
        create_router_for_test(),
        "/estimate",
        json!({ "price_per_item": "cheap" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["code"].is_string());
}

#[tokio::test]
async fn test_estimate_rejects_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/estimate")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"operating_days\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, json) = read_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_JSON");
}

// =============================================================================
// Grant Finder
// =============================================================================

#[tokio::test]
async fn test_grants_existing_hawker_with_productivity() {
    let body = json!({
        "is_existing_hawker": true,
        "is_aspiring_hawker": false,
        "interested_in_culture": false,
        "wants_productivity": true
    });
    let (status, json) = post_json(create_router_for_test(), "/grants", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["status"], "matched");
    assert_eq!(
        names(&json["outcome"]["grants"], "name"),
        vec!["Hawkers' Productivity Grant"]
    );
    assert_eq!(json["evaluations"].as_array().unwrap().len(), 3);
    assert!(json["disclaimer"].as_str().unwrap().contains("NEA"));
}

#[tokio::test]
async fn test_grants_no_match_offers_fallback() {
    let body = json!({
        "is_existing_hawker": true,
        "is_aspiring_hawker": false,
        "interested_in_culture": false,
        "wants_productivity": false
    });
    let (status, json) = post_json(create_router_for_test(), "/grants", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["status"], "no_match");
    assert_eq!(
        json["outcome"]["fallback_link"],
        "https://www.nea.gov.sg/our-services/hawker-management/programmes-and-grants"
    );
}

#[tokio::test]
async fn test_grants_aspiring_and_culture() {
    let body = json!({
        "is_existing_hawker": false,
        "is_aspiring_hawker": true,
        "interested_in_culture": true,
        "wants_productivity": true
    });
    let (_, json) = post_json(create_router_for_test(), "/grants", body).await;
    assert_eq!(
        names(&json["outcome"]["grants"], "name"),
        vec![
            "Incubation Stall Programme (ISP)",
            "Vibrant Hawker Culture Programme"
        ]
    );
}

#[tokio::test]
async fn test_grants_rejects_non_boolean_answer() {
    let (status, _) = post_json(
        create_router_for_test(),
        "/grants",
        json!({ "is_aspiring_hawker": "Yes" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Rental & Footfall Insights
// =============================================================================

#[tokio::test]
async fn test_filter_options() {
    let (status, json) = get(create_router_for_test(), "/insights/filters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["regions"],
        json!(["All", "Central", "East", "North", "West"])
    );
    assert_eq!(json["trade_types"], json!(["All", "Cooked Food", "Drinks"]));
}

#[tokio::test]
async fn test_insights_all_all() {
    let (status, json) = get(create_router_for_test(), "/insights").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched_records"], 14);
    assert_eq!(
        json["viewing"],
        "Currently viewing data for all trades across all regions."
    );

    let summary = &json["summary"]["data"];
    assert_eq!(decimal_at(&summary["average_bid"]), decimal("2350"));
    assert_eq!(decimal_at(&summary["average_footfall"]), decimal("6800"));
    assert_eq!(json["headlines"]["average_rent"], "$2,350");
    assert_eq!(json["headlines"]["average_footfall"], "6,800 people/day");

    let trend = &json["trend"]["data"];
    assert_eq!(
        names(&trend["top_centres"], "hawker_centre"),
        vec![
            "Old Airport Road Food Centre",
            "Maxwell Food Centre",
            "Chomp Chomp Food Centre",
            "Tiong Bahru Market",
            "Jurong West 505 Market"
        ]
    );
    // Bedok and Ang Mo Kio drop out with two rows each
    assert_eq!(trend["rows"].as_array().unwrap().len(), 10);
    assert_eq!(trend["latest_month_label"], "Mar 2024");

    let footfall = &json["footfall"]["data"];
    assert_eq!(
        names(&footfall["top"], "hawker_centre"),
        vec![
            "Maxwell Food Centre",
            "Old Airport Road Food Centre",
            "Tiong Bahru Market",
            "Chomp Chomp Food Centre",
            "Jurong West 505 Market"
        ]
    );
    assert_eq!(footfall["leader"]["region"], "Central");
    assert_eq!(decimal_at(&footfall["leader"]["average_footfall"]), decimal("9200"));

    let table = json["table"]["data"].as_array().unwrap();
    assert_eq!(table.len(), 14);
    assert_eq!(table[0]["month"], "2024-03");
    assert_eq!(table[13]["month"], "2024-01");
}

#[tokio::test]
async fn test_insights_region_filter() {
    let (status, json) = get(create_router_for_test(), "/insights?region=Central").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched_records"], 5);
    assert_eq!(
        json["filter_description"],
        "all trades in the Central region"
    );
    assert_eq!(decimal_at(&json["summary"]["data"]["average_bid"]), decimal("2700"));
    assert_eq!(
        decimal_at(&json["summary"]["data"]["average_footfall"]),
        decimal("8360")
    );
    for row in json["table"]["data"].as_array().unwrap() {
        assert_eq!(row["region"], "Central");
    }
}

#[tokio::test]
async fn test_insights_region_and_trade_filter() {
    let (status, json) = get(
        create_router_for_test(),
        "/insights?region=East&trade_type=Drinks",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched_records"], 1);
    assert_eq!(json["filter_description"], "Drinks trades in the East region");
    assert_eq!(
        json["footfall"]["data"]["leader"]["hawker_centre"],
        "Bedok Interchange Hawker Centre"
    );
}

#[tokio::test]
async fn test_insights_empty_selection_reports_no_data() {
    let (status, json) = get(
        create_router_for_test(),
        "/insights?region=West&trade_type=Drinks",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matched_records"], 0);
    for section in ["summary", "trend", "footfall", "table"] {
        assert_eq!(json[section]["status"], "no_data", "section {}", section);
        assert!(json[section]["message"].is_string());
    }
    assert_eq!(
        json["summary"]["message"],
        "No data available for the selected filters."
    );
}

#[tokio::test]
async fn test_insights_unknown_region_is_empty_not_an_error() {
    let (status, json) = get(create_router_for_test(), "/insights?region=Sentosa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["trend"]["status"], "no_data");
}

#[tokio::test]
async fn test_insights_missing_dataset_fails_whole_view() {
    let mut config = AppConfig::default();
    config.data.rental_dataset = "./data/not_here.csv".into();
    let router = create_router(AppState::new(ConfigLoader::from_config(config)));

    let (status, json) = get(router, "/insights").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATASET_ERROR");
    assert!(json.get("summary").is_none());
}

//! Router tests for the calculation API
//!
//! Each test drives the full router (extractors, validation, CORS and error
//! envelopes) in-process with `oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use carcalc_server::{ServerConfig, build_router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    build_router(&ServerConfig::default())
}

fn valid_input() -> Value {
    json!({
        "carValue": 50000,
        "monthlyRent": 2200,
        "interestRateMonth": 0.015,
        "financingTermMonths": 48,
        "analysisPeriodMonths": 48,
        "downPaymentPercent": 0.25,
        "maintenanceAnnual": 2000,
        "insuranceRateAnnual": 0.06,
        "ipvaRate": 0.04
    })
}

fn with_field(field: &str, value: Value) -> Value {
    let mut input = valid_input();
    input[field] = value;
    input
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_raw(path: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(app(), request).await
}

async fn post_json(path: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(path, body.to_string()).await
}

#[tokio::test]
async fn test_health() {
    let request = Request::get("/api/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// ============================================================================
// POST /api/calculate
// ============================================================================

#[tokio::test]
async fn test_calculate_valid_input() {
    let (status, body) = post_json("/api/calculate", &valid_input()).await;

    assert_eq!(status, StatusCode::OK);

    let cash = &body["cashPurchase"];
    assert!(cash["totalCost"].is_number());
    for key in ["depreciation", "ipva", "insurance", "maintenance", "opportunityCost"] {
        assert!(cash["breakdown"][key].is_number(), "missing cash {key}");
    }

    let financed = &body["financedPurchase"];
    assert!(financed["totalCost"].is_number());
    assert!(financed["installment"].is_number());
    assert!(financed["totalInterest"].is_number());
    assert!(financed["breakdown"]["totalInstallments"].is_number());

    assert_eq!(body["rental"]["totalCost"], json!(105600.0));
    assert_eq!(body["rental"]["monthlyCost"], json!(2200.0));

    assert_eq!(body["breakEven"]["breakEvenCashMonths"], json!(31));
    assert!(body["breakEven"]["breakEvenFinancedMonths"].is_null());
}

#[tokio::test]
async fn test_calculate_missing_required_fields() {
    let (status, body) = post_json("/api/calculate", &json!({ "carValue": 50000 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let details = body["details"].as_array().unwrap();
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec![
            "monthlyRent",
            "interestRateMonth",
            "financingTermMonths",
            "analysisPeriodMonths",
        ]
    );
    assert_eq!(details[0]["message"], "monthlyRent is required");
}

#[tokio::test]
async fn test_calculate_negative_car_value() {
    let (status, body) =
        post_json("/api/calculate", &with_field("carValue", json!(-1000))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"],
        json!([{ "field": "carValue", "message": "carValue must be positive" }])
    );
}

#[tokio::test]
async fn test_calculate_interest_rate_out_of_range() {
    let (status, body) =
        post_json("/api/calculate", &with_field("interestRateMonth", json!(2))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "interestRateMonth");
}

#[tokio::test]
async fn test_calculate_empty_body() {
    let (status, body) = post_json("/api/calculate", &json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_calculate_malformed_json() {
    let (status, body) = post_raw("/api/calculate", "{invalid json}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_calculate_wrong_field_type() {
    let (status, body) =
        post_json("/api/calculate", &with_field("carValue", json!("fifty"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_calculate_missing_content_type() {
    let request = Request::post("/api/calculate")
        .body(Body::from(valid_input().to_string()))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_calculate_large_numbers() {
    let mut input = valid_input();
    input["carValue"] = json!(1e12);
    input["monthlyRent"] = json!(1e6);

    let (status, body) = post_json("/api/calculate", &input).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["cashPurchase"]["totalCost"].is_number());
    assert!(body["financedPurchase"]["totalCost"].is_number());
    assert!(body["rental"]["totalCost"].is_number());
}

#[tokio::test]
async fn test_calculate_very_long_loan_term() {
    let (status, body) =
        post_json("/api/calculate", &with_field("financingTermMonths", json!(60000))).await;

    assert_eq!(status, StatusCode::OK);
    let financed = &body["financedPurchase"];
    assert!(financed["totalCost"].is_number());
    assert!(financed["installment"].is_number());
    assert!(financed["totalInterest"].is_number());
    assert!(financed["breakdown"]["totalInstallments"].is_number());
}

#[tokio::test]
async fn test_calculate_uses_configured_opportunity_rate() {
    let config = ServerConfig {
        opportunity_rate: 0.0,
        ..ServerConfig::default()
    };
    let request = Request::post("/api/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(valid_input().to_string()))
        .unwrap();

    let (status, body) = send(build_router(&config), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cashPurchase"]["breakdown"]["opportunityCost"], json!(0.0));
    assert_eq!(
        body["financedPurchase"]["breakdown"]["opportunityCost"],
        json!(0.0)
    );
}

// ============================================================================
// POST /api/calculate-timeline
// ============================================================================

#[tokio::test]
async fn test_timeline_valid_input() {
    let (status, body) = post_json("/api/calculate-timeline", &valid_input()).await;

    assert_eq!(status, StatusCode::OK);

    let timeline = body["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 48);

    for (index, point) in timeline.iter().enumerate() {
        assert_eq!(point["month"], json!(index + 1));
        assert!(point["cashCost"].is_number());
        assert!(point["financedCost"].is_number());
        assert!(point["rentalCost"].is_number());
    }
}

#[tokio::test]
async fn test_timeline_missing_required_fields() {
    let (status, body) =
        post_json("/api/calculate-timeline", &json!({ "carValue": 50000 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert!(body["details"].is_array());
}

#[tokio::test]
async fn test_timeline_negative_car_value() {
    let (status, body) =
        post_json("/api/calculate-timeline", &with_field("carValue", json!(-1000))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn test_timeline_empty_body() {
    let (status, body) = post_json("/api/calculate-timeline", &json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = ServerConfig {
        allowed_origins: vec![header::HeaderValue::from_static("https://app.example.com")],
        ..ServerConfig::default()
    };
    let request = Request::get("/api/health")
        .header(header::ORIGIN, "https://app.example.com")
        .body(Body::empty())
        .unwrap();

    let response = build_router(&config).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("https://app.example.com"))
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let config = ServerConfig {
        allowed_origins: vec![header::HeaderValue::from_static("https://app.example.com")],
        ..ServerConfig::default()
    };
    let request = Request::get("/api/health")
        .header(header::ORIGIN, "https://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = build_router(&config).oneshot(request).await.unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

//! HTTP surface tests: routing, status codes, and error envelopes

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use hours_server::core::server::build_app;
use hours_server::core::{Config, ServerState};
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

/// Router wired to an in-memory database with migrations applied
async fn test_app() -> Router {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid options")
        .pragma("foreign_keys", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");

    build_app().with_state(ServerState::new(Config::default(), pool))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json body")
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_detailed_health_reports_database() {
    let app = test_app().await;

    let response = app.oneshot(get("/health/detailed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_get_week_returns_seven_days() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/api/stores/store-1/hours/regular"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let week = body.as_array().expect("array body");
    assert_eq!(week.len(), 7);
    assert_eq!(week[0]["day_of_week"], 0);
    assert_eq!(week[0]["is_closed"], true);
}

#[tokio::test]
async fn test_update_day_weekday_mismatch_is_bad_request() {
    let app = test_app().await;

    let payload = json!({
        "id": null,
        "day_of_week": 4,
        "is_closed": false,
        "time_slots": [{"open": "09:00", "close": "17:00"}],
        "delivery_hours": null,
        "pickup_hours": null
    });
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/stores/store-1/hours/regular/3",
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_duplicate_special_date_is_conflict() {
    let app = test_app().await;

    let payload = json!({
        "date": "2024-12-24",
        "is_closed": true,
        "reason": "Staff event",
        "time_slots": []
    });
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/stores/store-1/hours/special",
            payload.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/stores/store-1/hours/special",
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["code"], 6002);
}

#[tokio::test]
async fn test_effective_hours_rejects_malformed_date() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/api/stores/store-1/hours/effective?date=christmas"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 6);
}

#[tokio::test]
async fn test_effective_hours_resolves_regular_day() {
    let app = test_app().await;

    // 2024-12-18 is a Wednesday: seeded default 09-21
    let response = app
        .oneshot(get("/api/stores/store-1/hours/effective?date=2024-12-18"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["source"], "regular");
    assert_eq!(body["store"]["is_closed"], false);
    assert_eq!(body["store"]["time_slots"][0]["open"], "09:00");
    assert_eq!(body["store"]["time_slots"][0]["close"], "21:00");
}

#[tokio::test]
async fn test_settings_round_trip_over_http() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(get("/api/stores/store-1/hours/settings"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let defaults = body_json(response).await;
    assert_eq!(defaults["default_holiday_action"], "closed");

    let payload = json!({
        "observe_federal_holidays": true,
        "observe_provincial_holidays": false,
        "observe_municipal_holidays": false,
        "default_holiday_action": "modified",
        "modified_holiday_hours": [{"open": "10:00", "close": "18:00"}],
        "delivery_holiday_behavior": "closed",
        "pickup_holiday_behavior": "same_as_store"
    });
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/stores/store-1/hours/settings",
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["default_holiday_action"], "modified");
    assert_eq!(body["delivery_holiday_behavior"], "closed");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/stores/store-1/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use report_server::{Config, Server, ServerState};
use serde_json::Value;
use tower::ServiceExt;

use common::{service, shop};

fn app() -> Router {
    let state = ServerState::new(Config::default(), Arc::new(service(shop())));
    Server::app(state)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_get_report() {
    let app = app();
    let (status, body) = send(
        &app,
        "GET",
        "/api/reports?from=2024-03-01&to=2024-03-31&sortBy=revenue",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    let data = &body["data"];
    assert_eq!(data["current"]["orders"], 3);
    assert_eq!(data["current"]["revenue"], 235000);
    assert_eq!(data["timeRange"]["granularity"], "month");
    assert_eq!(data["byDay"].as_array().unwrap().len(), 31);
    // P1 and P2 tie on revenue; name breaks the tie
    assert_eq!(data["byProduct"][0]["productId"], "P2");
    assert_eq!(data["comparison"]["revenue"]["isPositive"], true);
}

#[tokio::test]
async fn test_list_filters_in_query() {
    let app = app();
    let (status, body) = send(
        &app,
        "GET",
        "/api/reports?from=2024-03-01&to=2024-03-31&paymentMethods=Cash&categories=Drinks,Noodles",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["current"]["orders"], 1);
    assert_eq!(body["data"]["previous"]["orders"], 2);
}

#[tokio::test]
async fn test_validation_errors_are_400() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/reports?from=2024-03-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);

    let (status, body) = send(&app, "GET", "/api/reports?minAmount=10&maxAmount=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);

    let (status, body) = send(&app, "GET", "/api/reports?sortBy=likes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["sortBy"], "likes");
}

#[tokio::test]
async fn test_extreme_dates_are_400() {
    let app = app();

    let uri = "/api/reports?from=-200000-01-01&to=%2B200000-01-01";
    let (status, body) = send(&app, "GET", uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);

    let (status, body) = send(&app, "GET", "/api/reports?from=0001-01-01&to=9999-12-31").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_state_and_refresh() {
    let app = app();

    let (_, body) = send(&app, "GET", "/api/reports/state").await;
    assert_eq!(body["data"]["sequence"], 0);
    assert!(body["data"]["data"].is_null());

    send(&app, "GET", "/api/reports?from=2024-03-01&to=2024-03-31&paymentMethods=Card").await;

    let (status, body) = send(&app, "POST", "/api/reports/refresh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Refreshed");
    assert_eq!(body["data"]["current"]["orders"], 2);

    let (_, body) = send(&app, "GET", "/api/reports/state").await;
    let state = &body["data"];
    assert_eq!(state["sequence"], 2);
    assert_eq!(state["loading"], false);
    assert_eq!(state["filters"]["paymentMethods"][0], "Card");
    assert_eq!(state["data"]["current"]["orders"], 2);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dataSource"], "http");
    assert_eq!(body["lastSequence"], 0);
}

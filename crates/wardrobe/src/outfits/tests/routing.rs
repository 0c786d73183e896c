use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::outfits::router::outfit_router;
use crate::outfits::service::RecommendationService;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn recommend_route_returns_ranked_outfit() {
    let router = outfit_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/wearers/wearer-1/outfits",
            json!({ "temperature": 12, "humidity": 85, "weather": "Rain" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["wearer_id"], "wearer-1");
    assert_eq!(body["complete"], false);
    assert_eq!(body["total_score"], 139);
    assert_eq!(body["gaps"], json!(["hand"]));
    assert!(body.get("rankings").is_none());

    let entries = body["entries"].as_array().expect("entries array");
    assert_eq!(entries[0]["slot"], "head");
    assert_eq!(entries[0]["garment_id"], "hat-wool");
}

#[tokio::test]
async fn recommend_route_includes_breakdown_on_request() {
    let router = outfit_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/wearers/wearer-1/outfits",
            json!({
                "temperature": 12,
                "weather": "rain",
                "include_breakdown": true,
                "slots": [{ "slot": "foot", "categories": ["footwear"] }]
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let candidates = body["rankings"][0]["candidates"]
        .as_array()
        .expect("candidates");
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["garment_id"], "boots-leather");
    assert_eq!(candidates[0]["garment_type"], "boots");
}

#[tokio::test]
async fn recommend_route_rejects_out_of_range_humidity() {
    let router = outfit_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/wearers/wearer-1/outfits",
            json!({ "humidity": 150 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("humidity"));
}

#[tokio::test]
async fn recommend_route_rejects_undefined_categories() {
    let router = outfit_router(Arc::new(build_service()));

    let response = router
        .oneshot(post_json(
            "/api/v1/wearers/wearer-1/outfits",
            json!({ "slots": [{ "slot": "head", "categories": ["tiara"] }] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("tiara"));
}

#[tokio::test]
async fn recommend_route_reports_undecodable_bodies_as_json() {
    for payload in [json!({ "humidity": 300 }), json!({ "humidity": -5 })] {
        let router = outfit_router(Arc::new(build_service()));

        let response = router
            .oneshot(post_json("/api/v1/wearers/wearer-1/outfits", payload))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert!(body["error"].as_str().is_some_and(|error| !error.is_empty()));
    }
}

#[tokio::test]
async fn recommend_route_rejects_malformed_json_with_an_error_body() {
    let router = outfit_router(Arc::new(build_service()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/wearers/wearer-1/outfits")
        .header("content-type", "application/json")
        .body(Body::from("{\"temperature\": "))
        .expect("request builds");
    let response = router.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn recommend_route_reports_unavailable_repository() {
    let router = outfit_router(Arc::new(RecommendationService::new(Arc::new(
        UnavailableWardrobe,
    ))));

    let response = router
        .oneshot(post_json("/api/v1/wearers/wearer-1/outfits", json!({})))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::extractor::PlaceholderExtractor;
use crate::grading::TierConfig;
use crate::reports::repository::InMemoryReportRepository;
use crate::reports::router::{assess_handler, report_router, AssessRequest};
use crate::reports::service::ReportService;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn grade_route_returns_the_assessment() {
    let (service, _) = build_service(PlaceholderExtractor::default());
    let router = report_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/grade",
            json!({
                "url": "https://shop.example.com/dress",
                "brand": "Shein",
                "price": 20,
                "materials": "polyester",
                "garmentType": "dress",
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["quality"]["score"], 45);
    assert_eq!(body["quality"]["grade"], "F");
    assert_eq!(body["durability"]["score"], 53);
    assert_eq!(body["overall"]["score"], 48);
}

#[tokio::test]
async fn grade_route_accepts_missing_price() {
    let (service, _) = build_service(PlaceholderExtractor::default());
    let router = report_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/grade",
            json!({ "url": "https://shop.example.com/x", "brand": "Corner Tailor" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["overall"]["score"], 75);
}

#[tokio::test]
async fn assess_route_creates_a_report_that_can_be_viewed() {
    let (service, _) = build_service(patagonia_extractor());
    let router = report_router(Arc::new(service));

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/reports",
            json!({ "url": "https://shop.example.com/better-sweater" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json_body(response).await;
    assert_eq!(created["report"]["quality"], "Excellent");
    assert_eq!(created["report"]["durability"], "5+ Years");
    let id = created["report"]["id"]
        .as_str()
        .expect("report id string")
        .to_string();

    let response = router
        .oneshot(get_request(&format!("/api/v1/reports/{id}")))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let view = read_json_body(response).await;
    assert_eq!(view["id"], id.as_str());
    assert_eq!(view["overall_grade"], "A");
    assert_eq!(view["dimensions"][2]["category"], "5+ Years");
}

#[tokio::test]
async fn assess_handler_reports_extraction_failure_as_retryable() {
    let (service, _) = build_service(FailingExtractor);

    let response = assess_handler::<InMemoryReportRepository, FailingExtractor>(
        State(Arc::new(service)),
        axum::Json(AssessRequest {
            url: "https://shop.example.com/offline".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json_body(response).await;
    assert_eq!(body["retryable"], true);
}

#[tokio::test]
async fn assess_handler_rejects_blank_urls() {
    let (service, _) = build_service(PlaceholderExtractor::default());

    let response = assess_handler::<InMemoryReportRepository, PlaceholderExtractor>(
        State(Arc::new(service)),
        axum::Json(AssessRequest {
            url: String::new(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn assess_handler_maps_conflicts() {
    let service = Arc::new(ReportService::new(
        Arc::new(ConflictRepository),
        Arc::new(PlaceholderExtractor::default()),
        TierConfig::standard(),
    ));

    let response = assess_handler::<ConflictRepository, PlaceholderExtractor>(
        State(service),
        axum::Json(AssessRequest {
            url: "https://shop.example.com/tee".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn assess_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(ReportService::new(
        Arc::new(UnavailableRepository),
        Arc::new(PlaceholderExtractor::default()),
        TierConfig::standard(),
    ));

    let response = assess_handler::<UnavailableRepository, PlaceholderExtractor>(
        State(service),
        axum::Json(AssessRequest {
            url: "https://shop.example.com/tee".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn view_route_distinguishes_bad_and_unknown_ids() {
    let (service, _) = build_service(PlaceholderExtractor::default());
    let router = report_router(Arc::new(service));

    let response = router
        .clone()
        .oneshot(get_request("/api/v1/reports/not-a-uuid"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router
        .oneshot(get_request(
            "/api/v1/reports/6f1c2a7e-3b4d-4e5f-8a9b-0c1d2e3f4a5b",
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recent_route_honours_the_limit() {
    let (service, _) = build_service(PlaceholderExtractor::default());
    let service = Arc::new(service);
    for index in 0..3 {
        service
            .assess_url(&format!("https://shop.example.com/{index}"))
            .await
            .expect("assessment succeeds");
    }
    let router = report_router(service);

    let response = router
        .oneshot(get_request("/api/v1/reports?limit=2"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let views = body.as_array().expect("array of views");
    assert_eq!(views.len(), 2);
    assert_eq!(views[0]["url"], "https://shop.example.com/2");
}

#[tokio::test]
async fn corrupt_rows_are_served_with_defaults() {
    let row = corrupt_row();
    let id = row.id;
    let service = Arc::new(ReportService::new(
        Arc::new(CorruptRepository { row }),
        Arc::new(PlaceholderExtractor::default()),
        TierConfig::standard(),
    ));
    let router = report_router(service);

    let response = router
        .oneshot(get_request(&format!("/api/v1/reports/{id}")))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["overall_score"], 75);
    assert_eq!(body["dimensions"][0]["category"], "Average");
    assert_eq!(body["dimensions"][1]["category"], "Standard");
}

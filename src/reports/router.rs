use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::ReportId;
use super::repository::{ReportRepository, RepositoryError};
use super::service::{ReportService, ReportServiceError};
use crate::extractor::AttributeExtractor;
use crate::grading::ProductAttributes;

const DEFAULT_RECENT_LIMIT: usize = 10;
const MAX_RECENT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessRequest {
    pub(crate) url: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecentQuery {
    pub(crate) limit: Option<usize>,
}

/// Router builder exposing grading and report endpoints.
pub fn report_router<R, E>(service: Arc<ReportService<R, E>>) -> Router
where
    R: ReportRepository + 'static,
    E: AttributeExtractor + 'static,
{
    Router::new()
        .route("/api/v1/grade", post(grade_handler::<R, E>))
        .route(
            "/api/v1/reports",
            post(assess_handler::<R, E>).get(recent_handler::<R, E>),
        )
        .route("/api/v1/reports/:report_id", get(view_handler::<R, E>))
        .with_state(service)
}

pub(crate) async fn grade_handler<R, E>(
    State(service): State<Arc<ReportService<R, E>>>,
    axum::Json(attributes): axum::Json<ProductAttributes>,
) -> Response
where
    R: ReportRepository + 'static,
    E: AttributeExtractor + 'static,
{
    let assessment = service.grade(&attributes);
    (StatusCode::OK, axum::Json(assessment)).into_response()
}

pub(crate) async fn assess_handler<R, E>(
    State(service): State<Arc<ReportService<R, E>>>,
    axum::Json(request): axum::Json<AssessRequest>,
) -> Response
where
    R: ReportRepository + 'static,
    E: AttributeExtractor + 'static,
{
    match service.assess_url(&request.url).await {
        Ok(assessed) => (StatusCode::CREATED, axum::Json(assessed)).into_response(),
        Err(ReportServiceError::InvalidUrl) => {
            let payload = json!({
                "error": ReportServiceError::InvalidUrl.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ReportServiceError::Extraction(_)) => {
            let payload = json!({
                "error": "We couldn't read that product right now. Please try again.",
                "retryable": true,
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(ReportServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "report already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn view_handler<R, E>(
    State(service): State<Arc<ReportService<R, E>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    E: AttributeExtractor + 'static,
{
    let id = match report_id.parse::<ReportId>() {
        Ok(id) => id,
        Err(_) => {
            let payload = json!({
                "error": format!("'{report_id}' is not a valid report id"),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.view(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(ReportServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "report_id": id.to_string(),
                "error": "report not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn recent_handler<R, E>(
    State(service): State<Arc<ReportService<R, E>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: ReportRepository + 'static,
    E: AttributeExtractor + 'static,
{
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .min(MAX_RECENT_LIMIT);

    match service.recent(limit) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(err: ReportServiceError) -> Response {
    error!(error = %err, "report request failed");
    let payload = json!({
        "error": err.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

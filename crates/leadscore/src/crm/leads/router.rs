use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{LeadId, LeadSubmission, PipelineStage};
use super::repository::{LeadRepository, RepositoryError};
use super::service::{LeadScoringService, LeadServiceError};

/// Router builder exposing the scoring, lead, and dashboard endpoints.
///
/// Bearer-token gating is applied by the hosting binary; the routes here are
/// transport-only.
pub fn lead_router<R>(service: Arc<LeadScoringService<R>>) -> Router
where
    R: LeadRepository + 'static,
{
    Router::new()
        .route("/api/v1/leads/score", post(preview_handler::<R>))
        .route("/api/v1/leads", post(create_handler::<R>))
        .route("/api/v1/leads/:lead_id", get(get_handler::<R>))
        .route("/api/v1/leads/:lead_id/stage", patch(stage_handler::<R>))
        .route("/api/v1/dashboard/leads", get(leads_handler::<R>))
        .route("/api/v1/dashboard/summary", get(summary_handler::<R>))
        .route("/api/v1/dashboard/actions", get(actions_handler::<R>))
        .with_state(service)
}

/// Body for pipeline stage updates.
#[derive(Debug, Deserialize)]
pub struct StageChange {
    pub stage: PipelineStage,
}

pub(crate) async fn preview_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.preview(submission, Local::now().date_naive()) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.create(submission, Local::now().date_naive()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.get(&LeadId(lead_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stage_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
    Path(lead_id): Path<String>,
    axum::Json(change): axum::Json<StageChange>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.move_stage(&LeadId(lead_id), change.stage) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn leads_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.list() {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn actions_handler<R>(
    State(service): State<Arc<LeadScoringService<R>>>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.actions() {
        Ok(actions) => (StatusCode::OK, axum::Json(actions)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: LeadServiceError) -> Response {
    let status = match &error {
        LeadServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LeadServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        LeadServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        LeadServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use leadscore::auth::{auth_router, require_bearer, AuthService, UserDirectory};
use leadscore::crm::leads::{lead_router, LeadRepository, LeadScoringService};

use crate::infra::AppState;

/// Composes the full API surface: auth routes, bearer-gated lead and
/// dashboard routes, and the operational endpoints.
pub(crate) fn api_routes<R, U>(
    leads: Arc<LeadScoringService<R>>,
    auth: Arc<AuthService<U>>,
) -> axum::Router
where
    R: LeadRepository + 'static,
    U: UserDirectory + 'static,
{
    let guarded = lead_router(leads).layer(axum::middleware::from_fn_with_state(
        auth.token_issuer(),
        require_bearer,
    ));

    auth_router(auth)
        .merge(guarded)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

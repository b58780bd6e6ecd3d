use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadRepository, InMemoryUserDirectory};
use crate::routes::api_routes;
use axum::http::HeaderValue;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Duration;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use leadscore::auth::{AuthService, TokenIssuer};
use leadscore::config::AppConfig;
use leadscore::crm::leads::{engine_for, LeadScoringService, ScoringConfig};
use leadscore::error::AppError;
use leadscore::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryLeadRepository::default());
    let engine = engine_for(config.scoring_engine, ScoringConfig::default());
    let lead_service = Arc::new(LeadScoringService::new(repository, engine));

    let tokens = Arc::new(TokenIssuer::new(
        &config.auth.secret,
        Duration::minutes(config.auth.token_ttl_minutes),
    ));
    let directory = Arc::new(InMemoryUserDirectory::default());
    let auth_service = Arc::new(AuthService::new(directory, tokens));

    let app = api_routes(lead_service, auth_service)
        .layer(Extension(app_state))
        .layer(cors_layer(&config.server.cors_origins))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        engine = config.scoring_engine.label(),
        "lead scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

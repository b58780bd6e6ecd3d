use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::AuthService;
use super::token::TokenIssuer;
use super::user::{RegisterRequest, UserDirectory};
use super::AuthError;

/// Router builder exposing registration, token login, and introspection.
pub fn auth_router<U>(service: Arc<AuthService<U>>) -> Router
where
    U: UserDirectory + 'static,
{
    Router::new()
        .route("/api/v1/auth/register", post(register_handler::<U>))
        .route("/api/v1/auth/token", post(token_handler::<U>))
        .route("/api/v1/auth/me", get(me_handler::<U>))
        .with_state(service)
}

/// OAuth2-style password grant body: form-encoded `username` and `password`,
/// where the username is the account email.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

pub(crate) async fn register_handler<U>(
    State(service): State<Arc<AuthService<U>>>,
    axum::Json(request): axum::Json<RegisterRequest>,
) -> Response
where
    U: UserDirectory + 'static,
{
    match service.register(request) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn token_handler<U>(
    State(service): State<Arc<AuthService<U>>>,
    Form(form): Form<TokenRequest>,
) -> Response
where
    U: UserDirectory + 'static,
{
    match service.login(&form.username, &form.password) {
        Ok(tokens) => (StatusCode::OK, axum::Json(tokens)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn me_handler<U>(
    State(service): State<Arc<AuthService<U>>>,
    headers: HeaderMap,
) -> Response
where
    U: UserDirectory + 'static,
{
    let result = bearer_token(&headers)
        .ok_or(AuthError::InvalidToken)
        .and_then(|token| service.authenticate(token));

    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Middleware guarding a router behind bearer-token validation. Token checks
/// are stateless, so the guard only needs the issuer.
pub async fn require_bearer(
    State(tokens): State<Arc<TokenIssuer>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = bearer_token(request.headers())
        .map(|token| tokens.verify(token))
        .transpose();

    match authorized {
        Ok(Some(_claims)) => next.run(request).await,
        _ => error_response(AuthError::InvalidToken),
    }
}

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn error_response(error: AuthError) -> Response {
    let status = match &error {
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::WeakPassword(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
        AuthError::TokenExpired | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthError::Hashing | AuthError::TokenIssuance | AuthError::Directory(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = axum::Json(json!({ "error": error.to_string() }));
    if status == StatusCode::UNAUTHORIZED {
        (status, [(header::WWW_AUTHENTICATE, "Bearer")], payload).into_response()
    } else {
        (status, payload).into_response()
    }
}

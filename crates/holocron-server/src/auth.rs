use std::sync::Arc;

use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use holocron_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Username recovered from a validated bearer token.
///
/// Inserted into request extensions by [`require_token`]; handlers take it
/// with `Extension<AuthUser>`. Client-supplied identity is never consulted.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(header: Option<&str>) -> Result<&str, AppError> {
    let header = header.ok_or_else(|| {
        AppError::Unauthorized(
            "Missing Authorization header. Expected: Bearer <token>".to_string(),
        )
    })?;

    header
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::Unauthorized("Malformed Authorization header. Expected: Bearer <token>".into())
        })
}

/// Middleware that validates the bearer token and records the acting user.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    let username = match bearer_token(auth_header).and_then(|token| state.tokens.resolve(token)) {
        Ok(username) => username,
        Err(err) => return ApiError(err).into_response(),
    };

    request.extensions_mut().insert(AuthUser(username));
    next.run(request).await
}

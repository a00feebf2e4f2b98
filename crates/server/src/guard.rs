use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::errors::ApiError;
use crate::state::{AppState, CookieSettings};

/// Credential verifier for the protected router.
///
/// Reads the session token from the `token` cookie, verifies signature
/// and expiry, and attaches the decoded identity to the request so that
/// handlers can run ownership checks against it. An absent cookie and a
/// tampered or expired token produce the identical 401.
pub async fn require_token(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(CookieSettings::NAME)
        .map(|c| c.value().to_string())
        .ok_or(ApiError::Unauthorized)?;

    let identity = state.tokens.verify(&token).map_err(|e| {
        debug!(path = %req.uri().path(), error = %e, "credential rejected");
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

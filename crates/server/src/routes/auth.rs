use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};
use tracing::info;

use models::identity::Identity;

use crate::errors::ApiError;
use crate::state::AppState;

/// `POST /jwt`: sign the identity payload and set it as the session
/// cookie. The payload must at least carry a plausible email; extra
/// claims are embedded as-is.
#[utoipa::path(post, path = "/jwt", tag = "auth",
    responses((status = 200, description = "Cookie set"), (status = 400, description = "Invalid identity payload")))]
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Identity>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    identity
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let token = state.tokens.issue(&identity)?;
    info!(email = %identity.email, "session_issued");
    let jar = jar.add(state.cookies.session(token));
    Ok((jar, Json(json!({ "success": true }))))
}

/// `POST /logout` / `GET /logout`: clear the session cookie. The removal
/// header is sent even when the request carried no cookie.
#[utoipa::path(post, path = "/logout", tag = "auth",
    responses((status = 200, description = "Cookie cleared")))]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(state.cookies.removal());
    (jar, Json(json!({ "success": true })))
}

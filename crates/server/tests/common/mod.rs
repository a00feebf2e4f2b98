#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use server::routes;
use server::state::{AppState, CookieSettings};
use service::auth::{TokenConfig, TokenService};
use service::marketplace::{BookingLedger, ServiceCatalog};
use service::store::{Collection, JsonCollection};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build the app against a fresh temp-dir store; no external services.
pub async fn build_app() -> anyhow::Result<Router> {
    let dir = std::env::temp_dir().join(format!("fixify_it_{}", Uuid::new_v4()));
    let services: Arc<dyn Collection> = JsonCollection::open(dir.join("services.json")).await?;
    let bookings: Arc<dyn Collection> = JsonCollection::open(dir.join("bookings.json")).await?;
    let tokens = Arc::new(TokenService::new(TokenConfig {
        secret: TEST_SECRET.into(),
        ttl_hours: 5,
    }));
    let state = AppState {
        catalog: ServiceCatalog::new(services),
        bookings: BookingLedger::new(bookings),
        tokens,
        cookies: CookieSettings { production: false },
    };
    Ok(routes::build_router(state, tower_http::cors::CorsLayer::new()))
}

pub fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(c) = cookie {
        builder = builder.header("cookie", c);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn bare_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header("cookie", c);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `POST /jwt` for the given email and return the `token=...` cookie pair.
pub async fn login(app: &Router, email: &str) -> String {
    let resp = send(app, json_request("POST", "/jwt", None, &json!({ "email": email }))).await;
    assert_eq!(resp.status(), 200, "login should succeed");
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .expect("login must set a cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Mint a cookie pair out-of-band, bypassing `/jwt`.
pub fn forge_cookie(secret: &str, ttl_hours: i64, email: &str) -> String {
    let tokens = TokenService::new(TokenConfig { secret: secret.into(), ttl_hours });
    let token = tokens.issue(&models::identity::Identity::new(email)).unwrap();
    format!("token={token}")
}

use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::{TokenConfig, TokenService};
use service::marketplace::{BookingLedger, ServiceCatalog};
use service::store::{Collection, JsonCollection};

use crate::routes;
use crate::state::{AppState, CookieSettings};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

/// Credentialed CORS for the known frontends; the cookie-based session
/// rules out a wildcard origin.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("https://fixify-marketplace.web.app"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()?;
    common::env::ensure_data_dir(&cfg.storage.data_dir).await?;

    // One file-backed collection per document kind, injected as the
    // store seam the access layer works against.
    let data_dir = Path::new(&cfg.storage.data_dir);
    let services: Arc<dyn Collection> = JsonCollection::open(data_dir.join("services.json")).await?;
    let bookings: Arc<dyn Collection> = JsonCollection::open(data_dir.join("bookings.json")).await?;

    let tokens = Arc::new(TokenService::new(TokenConfig {
        secret: cfg.auth.jwt_secret.clone(),
        ttl_hours: cfg.auth.token_ttl_hours,
    }));

    let state = AppState {
        catalog: ServiceCatalog::new(services),
        bookings: BookingLedger::new(bookings),
        tokens,
        cookies: CookieSettings { production: cfg.auth.is_production() },
    };

    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, environment = %cfg.auth.environment, "starting marketplace server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

//! HTTP interface.
//!
//! ## Endpoints
//!
//! - `GET /api/wifi` - Scan and return nearby access points
//!
//! The endpoint answers `200 OK` with a [`ScanResult`](crate::ScanResult)
//! body even when the scan fails; the failure is reported in its `error`
//! field.

pub mod handlers;

use anyhow::{Context, Result};
use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::config::Config;
use crate::service::ScanService;

/// Create the API router.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use wifiscan::{api::create_router, Config, ScanService};
///
/// #[tokio::main]
/// async fn main() {
///     let config = Config::default();
///     let service = Arc::new(ScanService::new(config.clone()));
///     let app = create_router(service, &config);
///     // ... serve with axum
/// }
/// ```
pub fn create_router(service: Arc<ScanService>, config: &Config) -> Router {
    Router::new()
        .route("/api/wifi", get(handlers::get_wifi_networks))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&config.allowed_origins))
        .with_state(service)
}

/// CORS for the configured front-end origins: any method, any header,
/// credentials allowed. `"*"` admits every origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Binds to the configured address and serves until the process exits.
pub async fn serve(service: Arc<ScanService>, config: &Config) -> Result<()> {
    let app = create_router(service, config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("WiFi scanner listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

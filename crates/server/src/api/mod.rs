//! HTTP API routes.

pub mod admin;
pub mod error;
pub mod extract;
pub mod hackathons;
pub mod health;
pub mod messages;
pub mod state;
pub mod uploads;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use admin::{RequireAdmin, create_admin_router};
pub use error::ApiError;
pub use extract::{ApiJson, ApiQuery};
pub use hackathons::create_hackathons_router;
pub use messages::create_messages_router;
pub use state::AppState;
pub use uploads::create_uploads_router;

/// Builds the full application router.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_hackathons_router())
        .merge(create_messages_router())
        .merge(create_admin_router())
        .merge(create_uploads_router())
        .nest_service("/uploads", ServeDir::new(&config.uploads.dir))
        .layer(cors_layer(&config.cors.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// An empty `allowed_origins` list allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

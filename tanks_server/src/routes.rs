use std::{io, path::Path, sync::Arc};

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, get_service},
    Extension, Json, Router,
};
use tanks_events::settings::ClientSettings;
use tower_http::services::ServeDir;
use tracing::{debug, error, info};

/// API routes, with the packaged frontend served for every other path
pub fn router(settings: ClientSettings, dist_dir: &Path) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/settings", get(settings_handler))
        .fallback(get_service(ServeDir::new(dist_dir)).handle_error(static_error_handler))
        .layer(Extension(Arc::new(settings)))
}

/// Health Check Endpoint used to verify the service is live
async fn health_handler() -> impl IntoResponse {
    info!("HEALTH_CHECK ✓");
    "health check ✓".into_response()
}

/// Tuning and key bindings the frontend starts its game with
async fn settings_handler(
    Extension(settings): Extension<Arc<ClientSettings>>,
) -> Json<ClientSettings> {
    debug!("serving client settings");
    Json(settings.as_ref().clone())
}

async fn static_error_handler(err: io::Error) -> impl IntoResponse {
    error!("failed to serve static file: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, "failed to serve file")
}

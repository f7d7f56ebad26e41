use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::warn;

use appointment_request_cell::create_appointment_request_router;
use carousel_cell::create_carousel_router;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(create_carousel_router(state.clone()))
        .merge(create_appointment_request_router());

    mount_static(router, &state.static_dir)
}

fn mount_static(router: Router, static_dir: &str) -> Router {
    let root = Path::new(static_dir);
    if !root.is_dir() {
        warn!("Static directory {} not found, skipping asset routes", static_dir);
        return router;
    }

    router
        .nest_service("/images", ServeDir::new(root.join("images")))
        .nest_service("/static", ServeDir::new(root))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "MediCare Booking API" }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

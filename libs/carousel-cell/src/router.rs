use std::sync::Arc;
use axum::{routing::get, Router};
use shared_config::AppConfig;

use crate::handlers::get_carousel_images;

pub fn create_carousel_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/api/carousel-images", get(get_carousel_images))
        .with_state(config)
}

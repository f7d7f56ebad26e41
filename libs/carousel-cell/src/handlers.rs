use std::sync::Arc;
use axum::{extract::State, Json};

use shared_config::AppConfig;

use crate::models::{CarouselCatalogueResponse, SLIDES};

pub async fn get_carousel_images(
    State(config): State<Arc<AppConfig>>,
) -> Json<CarouselCatalogueResponse> {
    Json(CarouselCatalogueResponse {
        images: SLIDES.to_vec(),
        autoplay_interval_ms: config.carousel_autoplay_interval_ms,
        resume_delay_ms: config.carousel_resume_delay_ms,
    })
}

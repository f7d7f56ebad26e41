use axum::{routing::post, Router};

use crate::handlers::submit_appointment;

pub fn create_appointment_request_router() -> Router {
    Router::new()
        .route("/api/submit", post(submit_appointment))
}

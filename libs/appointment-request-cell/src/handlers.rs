use axum::extract::rejection::JsonRejection;
use axum::Json;
use chrono::Local;
use tracing::{info, warn};

use shared_models::error::AppError;

use crate::models::{AppointmentDraft, SubmitResponse};
use crate::services::{validate_draft, MedicalBotService};

/// Accepts an appointment request, re-validates it and triggers the
/// confirmation call.
#[axum::debug_handler]
pub async fn submit_appointment(
    payload: Result<Json<AppointmentDraft>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AppError> {
    let Json(draft) = payload.map_err(|rejection| {
        warn!("Rejected appointment body: {}", rejection);
        AppError::BadRequest(rejection.body_text())
    })?;

    let today = Local::now().date_naive();
    let request = validate_draft(&draft, today)
        .map_err(|errors| AppError::ValidationError(errors.to_string()))?;

    let service = MedicalBotService::new();
    let call = service.call_patient(&request)
        .await
        .map_err(|e| AppError::ExternalService(format!("Bot call failed: {}", e)))?;

    info!("Appointment request accepted, call {}", call.call_id);

    Ok(Json(SubmitResponse {
        status: "success".to_string(),
        message: "Form submitted successfully. The medical bot will call you shortly.".to_string(),
        call_id: Some(call.call_id),
        patient_name: request.patient_name,
        phone: request.phone_number,
    }))
}

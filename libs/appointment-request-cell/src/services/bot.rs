use anyhow::Result;
use tracing::{info, instrument};

use crate::models::{AppointmentRequest, BotCall};

/// Triggers the outbound call that confirms an appointment with the patient.
/// No telephony provider is wired yet, so calls are acknowledged locally.
#[derive(Debug, Default, Clone)]
pub struct MedicalBotService;

impl MedicalBotService {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, request))]
    pub async fn call_patient(&self, request: &AppointmentRequest) -> Result<BotCall> {
        let call_id = format!(
            "CALL_{}_{}",
            request.patient_name.replace(' ', "_"),
            request.phone_number
        );
        info!("Bot call initiated: {}", call_id);

        Ok(BotCall {
            status: "success".to_string(),
            call_id,
            message: "Bot call initiated".to_string(),
        })
    }
}

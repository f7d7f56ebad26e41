use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use shared_config::AppConfig;

use crate::models::{AppointmentRequest, SubmissionReceipt, SubmitResponse};
use crate::SubmissionError;

/// Capability that delivers a validated appointment to the clinic.
#[async_trait]
pub trait AppointmentSubmitter: Send + Sync {
    async fn submit(&self, request: &AppointmentRequest) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Stand-in used until a booking backend is configured: waits, then accepts.
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(shared_config::DEFAULT_SUBMISSION_DELAY_MS))
    }
}

#[async_trait]
impl AppointmentSubmitter for SimulatedSubmitter {
    async fn submit(&self, request: &AppointmentRequest) -> Result<SubmissionReceipt, SubmissionError> {
        debug!("Simulating submission for severity {}", request.severity);
        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt {
            call_id: None,
            message: "Appointment request recorded".to_string(),
        })
    }
}

/// Posts appointments to the booking backend's `/api/submit` endpoint.
pub struct HttpAppointmentSubmitter {
    client: Client,
    base_url: String,
}

impl HttpAppointmentSubmitter {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::Unexpected(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn submit_url(&self) -> String {
        format!("{}/api/submit", self.base_url)
    }
}

#[async_trait]
impl AppointmentSubmitter for HttpAppointmentSubmitter {
    #[instrument(skip(self, request), fields(url = %self.submit_url()))]
    async fn submit(&self, request: &AppointmentRequest) -> Result<SubmissionReceipt, SubmissionError> {
        let response = self.client
            .post(self.submit_url())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let reason = body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            warn!("Booking backend responded {}: {}", status, reason);
            return Err(SubmissionError::Rejected(reason));
        }

        let body: SubmitResponse = response.json().await?;
        info!("Booking backend accepted request, call id {:?}", body.call_id);

        Ok(SubmissionReceipt {
            call_id: body.call_id,
            message: body.message,
        })
    }
}

/// Picks the HTTP submitter when a backend URL is configured, the simulated
/// one otherwise.
pub fn submitter_from_config(config: &AppConfig) -> Result<Arc<dyn AppointmentSubmitter>, SubmissionError> {
    match &config.booking_api_url {
        Some(url) => {
            info!("Appointment submissions will be sent to {}", url);
            Ok(Arc::new(HttpAppointmentSubmitter::new(url, config.submission_timeout())?))
        }
        None => Ok(Arc::new(SimulatedSubmitter::new(config.submission_delay()))),
    }
}

use std::sync::Arc;

use shared_config::AppConfig;

/// Configuration used by cell test suites.
pub struct TestConfig {
    pub autoplay_interval_ms: u64,
    pub resume_delay_ms: u64,
    pub submission_delay_ms: u64,
    pub submission_timeout_ms: u64,
    pub booking_api_url: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            resume_delay_ms: 5000,
            submission_delay_ms: 1500,
            submission_timeout_ms: 2000,
            booking_api_url: None,
        }
    }
}

impl TestConfig {
    pub fn with_backend(url: &str) -> Self {
        Self {
            booking_api_url: Some(url.trim_end_matches('/').to_string()),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            port: 0,
            static_dir: "static".to_string(),
            carousel_autoplay_interval_ms: self.autoplay_interval_ms,
            carousel_resume_delay_ms: self.resume_delay_ms,
            submission_delay_ms: self.submission_delay_ms,
            submission_timeout_ms: self.submission_timeout_ms,
            booking_api_url: self.booking_api_url.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

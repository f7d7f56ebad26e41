use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_RESUME_DELAY_MS: u64 = 5000;
pub const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1500;
pub const DEFAULT_SUBMISSION_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: String,
    pub carousel_autoplay_interval_ms: u64,
    pub carousel_resume_delay_ms: u64,
    pub submission_delay_ms: u64,
    pub submission_timeout_ms: u64,
    pub booking_api_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: "static".to_string(),
            carousel_autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            carousel_resume_delay_ms: DEFAULT_RESUME_DELAY_MS,
            submission_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            submission_timeout_ms: DEFAULT_SUBMISSION_TIMEOUT_MS,
            booking_api_url: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            port: parse_var("PORT", defaults.port),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| {
                    warn!("STATIC_DIR not set, using default");
                    defaults.static_dir.clone()
                }),
            carousel_autoplay_interval_ms: parse_duration_ms(
                "CAROUSEL_AUTOPLAY_INTERVAL_MS",
                defaults.carousel_autoplay_interval_ms,
            ),
            carousel_resume_delay_ms: parse_duration_ms(
                "CAROUSEL_RESUME_DELAY_MS",
                defaults.carousel_resume_delay_ms,
            ),
            submission_delay_ms: parse_duration_ms("SUBMISSION_DELAY_MS", defaults.submission_delay_ms),
            submission_timeout_ms: parse_duration_ms("SUBMISSION_TIMEOUT_MS", defaults.submission_timeout_ms),
            booking_api_url: env::var("BOOKING_API_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        };

        if !config.is_backend_configured() {
            warn!("BOOKING_API_URL not set - appointment submissions will be simulated");
        }

        config
    }

    pub fn is_backend_configured(&self) -> bool {
        self.booking_api_url.is_some()
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_autoplay_interval_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.carousel_resume_delay_ms)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_millis(self.submission_timeout_ms)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default {}", name, default);
            default
        }
    }
}

/// Millisecond durations must be positive; zero falls back to the default.
fn parse_duration_ms(name: &str, default: u64) -> u64 {
    match parse_var(name, default) {
        0 => {
            warn!("{} must be greater than zero, using default {}", name, default);
            default
        }
        millis => millis,
    }
}

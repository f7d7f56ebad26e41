use std::time::Duration;

use serde::Serialize;
use shared_config::AppConfig;
use tracing::warn;

/// One promotional image in the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "url")]
    pub image: &'static str,
    pub alt: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        id: 1,
        title: "Specialized Medicine",
        description: "Expert patient and doctor care",
        image: "/images/slide1_specialized_medicine.jpg",
        alt: "Specialized Medicine - Prevention is better than cure",
    },
    Slide {
        id: 2,
        title: "Your Health Is Our Priority",
        description: "Comprehensive healthcare for you and your family",
        image: "/images/slide2_health_priority.jpg",
        alt: "Your Health Is Our Priority",
    },
    Slide {
        id: 3,
        title: "Exceptional Service",
        description: "Top quality medical consultation",
        image: "/images/slide3_exceptional_service.jpg",
        alt: "Exceptional Service in Our Medical Practice",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub current_index: usize,
    pub autoplay_enabled: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 0,
            autoplay_enabled: true,
        }
    }
}

/// Where a click on the carousel landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Body,
    PreviousControl,
    NextControl,
    Indicator(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The carousel body was clicked; the parent should open the booking dialog.
    BookingRequested,
    /// A navigation control was clicked. Never forwarded to the parent.
    Navigated(CarouselState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTimings {
    pub autoplay_interval: Duration,
    pub resume_delay: Duration,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(shared_config::DEFAULT_AUTOPLAY_INTERVAL_MS),
            resume_delay: Duration::from_millis(shared_config::DEFAULT_RESUME_DELAY_MS),
        }
    }
}

impl CarouselTimings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            autoplay_interval: config.autoplay_interval(),
            resume_delay: config.resume_delay(),
        }
        .non_zero()
    }

    /// Replaces zero durations with the defaults. A zero interval would make
    /// the driver tick without ever waiting.
    pub fn non_zero(self) -> Self {
        let defaults = Self::default();
        let mut timings = self;

        if timings.autoplay_interval.is_zero() {
            warn!("Zero autoplay interval, using {:?}", defaults.autoplay_interval);
            timings.autoplay_interval = defaults.autoplay_interval;
        }
        if timings.resume_delay.is_zero() {
            warn!("Zero autoplay resume delay, using {:?}", defaults.resume_delay);
            timings.resume_delay = defaults.resume_delay;
        }
        timings
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CarouselCatalogueResponse {
    pub images: Vec<Slide>,
    pub autoplay_interval_ms: u64,
    pub resume_delay_ms: u64,
}

use tracing::debug;

use crate::{CarouselError, CarouselState, ClickOutcome, ClickTarget, Slide, SLIDES};

/// Position and autoplay state of the carousel. Timing lives in the
/// autoplay driver; this type only applies transitions.
#[derive(Debug, Clone)]
pub struct CarouselController {
    slides: &'static [Slide],
    state: CarouselState,
}

impl Default for CarouselController {
    fn default() -> Self {
        Self {
            slides: &SLIDES,
            state: CarouselState::default(),
        }
    }
}

impl CarouselController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slides(slides: &'static [Slide]) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyCatalogue);
        }

        Ok(Self {
            slides,
            state: CarouselState::default(),
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> &'static Slide {
        &self.slides[self.state.current_index]
    }

    pub fn next(&mut self) -> CarouselState {
        self.state.current_index = (self.state.current_index + 1) % self.slide_count();
        debug!("Carousel advanced to slide {}", self.state.current_index);
        self.state
    }

    pub fn previous(&mut self) -> CarouselState {
        let len = self.slide_count();
        self.state.current_index = (self.state.current_index + len - 1) % len;
        debug!("Carousel moved back to slide {}", self.state.current_index);
        self.state
    }

    /// Selects a slide directly and suspends autoplay. The caller owns the
    /// cooldown that eventually calls [`Self::resume_autoplay`].
    pub fn jump_to(&mut self, index: usize) -> Result<CarouselState, CarouselError> {
        let len = self.slide_count();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }

        self.state.current_index = index;
        self.state.autoplay_enabled = false;
        debug!("Carousel jumped to slide {}, autoplay suspended", index);
        Ok(self.state)
    }

    pub fn resume_autoplay(&mut self) -> CarouselState {
        self.state.autoplay_enabled = true;
        self.state
    }

    /// Applies one autoplay tick. Returns `None` when autoplay is suspended.
    pub fn on_autoplay_tick(&mut self) -> Option<CarouselState> {
        if !self.state.autoplay_enabled {
            return None;
        }
        Some(self.next())
    }

    pub fn click(&mut self, target: ClickTarget) -> Result<ClickOutcome, CarouselError> {
        match target {
            ClickTarget::Body => Ok(ClickOutcome::BookingRequested),
            ClickTarget::PreviousControl => Ok(ClickOutcome::Navigated(self.previous())),
            ClickTarget::NextControl => Ok(ClickOutcome::Navigated(self.next())),
            ClickTarget::Indicator(index) => self.jump_to(index).map(ClickOutcome::Navigated),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Carousel has no slides")]
    EmptyCatalogue,

    #[error("Carousel driver has stopped")]
    DriverStopped,
}

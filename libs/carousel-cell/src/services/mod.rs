pub mod controller;
pub mod autoplay;

pub use controller::*;
pub use autoplay::*;

pub mod validation;
pub mod submitter;
pub mod notifications;
pub mod form;
pub mod bot;

pub use validation::*;
pub use submitter::*;
pub use notifications::*;
pub use form::*;
pub use bot::*;

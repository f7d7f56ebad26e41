pub mod dialog;
pub mod page;

pub use dialog::DialogFlag;
pub use page::LandingPage;

use thiserror::Error;

pub const FAILURE_TITLE: &str = "Something went wrong";
pub const FAILURE_DESCRIPTION: &str = "Please try again or call us directly.";

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Booking backend rejected the request: {0}")]
    Rejected(String),

    #[error("Booking backend unreachable: {0}")]
    NetworkUnavailable(String),

    #[error("Booking backend timed out")]
    Timeout,

    #[error("Unexpected submission failure: {0}")]
    Unexpected(String),
}

impl SubmissionError {
    /// Title and description shown to the visitor. Every cause collapses to
    /// the same retry prompt.
    pub fn user_message(&self) -> (&'static str, &'static str) {
        (FAILURE_TITLE, FAILURE_DESCRIPTION)
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SubmissionError::Timeout
        } else if e.is_connect() {
            SubmissionError::NetworkUnavailable(e.to_string())
        } else {
            SubmissionError::Unexpected(e.to_string())
        }
    }
}

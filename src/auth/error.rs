//! Submission failure type.
//!
//! Every cause (network, rejection, bad success body) is the same failure as
//! far as the user is concerned: its display text is what the alert shows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionFailure {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("invalid token response: {0}")]
    MalformedResponse(String),
    #[error("could not encode credentials: {0}")]
    Encode(String),
}

impl SubmissionFailure {
    /// Build a rejection from a non-2xx response. The body is shown verbatim;
    /// a blank body falls back to the status code.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            rejected_fallback_message(status)
        } else {
            body.to_owned()
        };
        Self::Rejected { status, message }
    }
}

fn rejected_fallback_message(status: u16) -> String {
    format!("request failed: {status}")
}

//! Events flowing from the submission worker back to the UI thread, plus
//! the error modeling for what gets shown in the toast.

use client_core::SubmissionError;

pub const CONTACT_FAILURE_FALLBACK: &str = "Failed to send your message. Please try again.";
pub const NEWSLETTER_FAILURE_FALLBACK: &str = "Failed to subscribe. Please try again.";

pub enum UiEvent {
    ContactAccepted,
    ContactFailed(UiError),
    NewsletterAccepted,
    NewsletterFailed(UiError),
    WorkerUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    /// Maps a typed submission error to toast content. Server-provided
    /// messages win; transport failures and empty bodies use the fallback.
    pub fn from_submission(err: &SubmissionError, fallback: &str) -> Self {
        let category = match err {
            SubmissionError::Transport { .. } => UiErrorCategory::Transport,
            SubmissionError::Rejected { .. } => UiErrorCategory::Server,
        };
        Self {
            category,
            message: err.user_message(fallback),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::submission::StatusCode;

    #[test]
    fn server_message_wins_over_the_generic_fallback() {
        let err = SubmissionError::Rejected {
            endpoint: "contact",
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "please slow down".to_string(),
        };
        let ui = UiError::from_submission(&err, CONTACT_FAILURE_FALLBACK);
        assert_eq!(ui.category(), UiErrorCategory::Server);
        assert_eq!(ui.message(), "please slow down");
    }

    #[test]
    fn empty_server_message_falls_back_to_the_generic_text() {
        let err = SubmissionError::Rejected {
            endpoint: "newsletter",
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::new(),
        };
        let ui = UiError::from_submission(&err, NEWSLETTER_FAILURE_FALLBACK);
        assert_eq!(ui.message(), NEWSLETTER_FAILURE_FALLBACK);
    }
}

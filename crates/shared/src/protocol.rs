use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Built only from a fully validated wizard;
/// `phone` is omitted from the wire when the user left it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
    pub privacy: bool,
}

/// Body of `POST /api/newsletter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
}

/// Success body from either endpoint. Both endpoints are free to answer
/// with an empty body; the client only uses the status code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

//! HTTP client for the two external form endpoints. The endpoints are
//! collaborators we do not own: success is any 2xx, and on rejection we use
//! the server's error message when its body parses as the shared API error
//! shape, otherwise the caller's generic fallback.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
pub use reqwest::StatusCode;
use serde::Serialize;
use shared::{
    error::ApiError,
    protocol::{ContactSubmission, NewsletterSubscription, SubmissionAck},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to reach the {endpoint} endpoint: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} submission rejected ({status}): {message}")]
    Rejected {
        endpoint: &'static str,
        status: StatusCode,
        message: String,
    },
}

impl SubmissionError {
    /// Text for the user-facing toast: the server-provided message when one
    /// was sent, else the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SubmissionError::Rejected { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: Client,
    contact_url: Url,
    newsletter_url: Url,
}

impl SubmissionClient {
    /// `base_url` should end with a trailing slash when it carries a path
    /// prefix; the endpoint paths are joined onto it.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &Url, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build submission http client")?;
        Ok(Self {
            http,
            contact_url: base_url
                .join("api/contact")
                .context("invalid contact endpoint url")?,
            newsletter_url: base_url
                .join("api/newsletter")
                .context("invalid newsletter endpoint url")?,
        })
    }

    pub async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), SubmissionError> {
        self.post_json("contact", self.contact_url.clone(), submission)
            .await
    }

    pub async fn submit_newsletter(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<(), SubmissionError> {
        self.post_json("newsletter", self.newsletter_url.clone(), subscription)
            .await
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &'static str,
        url: Url,
        body: &T,
    ) -> Result<(), SubmissionError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| {
                warn!(endpoint, error = %source, "submission transport failure");
                SubmissionError::Transport { endpoint, source }
            })?;

        let status = response.status();
        if status.is_success() {
            let ack = response
                .json::<SubmissionAck>()
                .await
                .unwrap_or_default();
            info!(
                endpoint,
                %status,
                ack = ack.message.as_deref().unwrap_or(""),
                "submission accepted"
            );
            return Ok(());
        }

        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<ApiError>(&bytes).ok())
            .map(|err| err.message)
            .unwrap_or_default();
        warn!(endpoint, %status, server_message = %message, "submission rejected");
        Err(SubmissionError::Rejected {
            endpoint,
            status,
            message,
        })
    }
}

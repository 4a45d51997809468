//! Single-field newsletter signup: one email, one rule.

use shared::protocol::NewsletterSubscription;

use crate::validate::{self, FieldError};

#[derive(Debug, Default)]
pub struct NewsletterForm {
    pub email: String,
    in_flight: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<NewsletterSubscription, FieldError> {
        validate::validate_email(&self.email)?;
        Ok(NewsletterSubscription {
            email: self.email.trim().to_string(),
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Same in-flight discipline as the contact wizard: invalid input or a
    /// pending submission means no request leaves this form.
    pub fn begin_submission(&mut self) -> Option<NewsletterSubscription> {
        if self.in_flight {
            return None;
        }
        let subscription = self.validate().ok()?;
        self.in_flight = true;
        Some(subscription)
    }

    pub fn submission_succeeded(&mut self) {
        self.in_flight = false;
        self.email.clear();
    }

    pub fn submission_failed(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_never_produces_a_subscription() {
        let mut form = NewsletterForm::new();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(FieldError::EmailInvalid));
        assert!(form.begin_submission().is_none());
        assert!(!form.is_submitting());
    }

    #[test]
    fn valid_email_subscribes_once_and_clears_on_success() {
        let mut form = NewsletterForm::new();
        form.email = "user@example.com".to_string();

        let subscription = form.begin_submission().expect("subscription");
        assert_eq!(subscription.email, "user@example.com");
        assert!(form.begin_submission().is_none());

        form.submission_succeeded();
        assert!(form.email.is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_keeps_the_address_for_retry() {
        let mut form = NewsletterForm::new();
        form.email = "user@example.com".to_string();
        form.begin_submission().expect("subscription");
        form.submission_failed();
        assert_eq!(form.email, "user@example.com");
    }
}

//! Two-step contact wizard. Step one collects personal details, step two the
//! service request; advancing is gated on name and email, submission on the
//! whole form including the privacy consent.

use shared::protocol::ContactSubmission;

use crate::validate::{self, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStep {
    PersonalDetails,
    ServiceDetails,
}

impl ContactStep {
    pub fn label(self) -> &'static str {
        match self {
            ContactStep::PersonalDetails => "Personal Details",
            ContactStep::ServiceDetails => "Your Request",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    /// Optional; recommended for appointment confirmations but never blocks.
    pub phone: String,
    /// Slug of the selected service; empty until the user picks one.
    pub service: String,
    pub message: String,
    pub privacy: bool,
}

#[derive(Debug)]
pub struct ContactWizard {
    step: ContactStep,
    pub fields: ContactFields,
    in_flight: bool,
}

impl Default for ContactWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactWizard {
    pub fn new() -> Self {
        Self {
            step: ContactStep::PersonalDetails,
            fields: ContactFields::default(),
            in_flight: false,
        }
    }

    pub fn step(&self) -> ContactStep {
        self.step
    }

    /// Errors that keep the wizard on the personal-details step. Phone is
    /// deliberately absent: it never gates anything.
    pub fn personal_details_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(err) = validate::validate_name(&self.fields.name) {
            errors.push(err);
        }
        if let Err(err) = validate::validate_email(&self.fields.email) {
            errors.push(err);
        }
        errors
    }

    /// `PersonalDetails -> ServiceDetails`, gated on name and email.
    pub fn advance(&mut self) -> Result<(), Vec<FieldError>> {
        let errors = self.personal_details_errors();
        if errors.is_empty() {
            self.step = ContactStep::ServiceDetails;
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Back is unconditional.
    pub fn back(&mut self) {
        self.step = ContactStep::PersonalDetails;
    }

    /// Validates every field across both steps and builds the wire payload.
    pub fn validate_all(&self) -> Result<ContactSubmission, Vec<FieldError>> {
        let mut errors = self.personal_details_errors();
        if let Err(err) = validate::validate_service(&self.fields.service) {
            errors.push(err);
        }
        if let Err(err) = validate::validate_message(&self.fields.message) {
            errors.push(err);
        }
        if let Err(err) = validate::validate_privacy(self.fields.privacy) {
            errors.push(err);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let phone = self.fields.phone.trim();
        Ok(ContactSubmission {
            name: self.fields.name.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            service: self.fields.service.clone(),
            message: self.fields.message.trim().to_string(),
            privacy: self.fields.privacy,
        })
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.validate_all().is_ok()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Claims the form for one submission. Answers `None` while a previous
    /// submission is still in flight or when any field fails validation, so
    /// a double click can never produce a duplicate request.
    pub fn begin_submission(&mut self) -> Option<ContactSubmission> {
        if self.in_flight {
            return None;
        }
        let submission = self.validate_all().ok()?;
        self.in_flight = true;
        Some(submission)
    }

    /// The endpoint accepted: clear every field and return to step one.
    pub fn submission_succeeded(&mut self) {
        self.in_flight = false;
        self.fields = ContactFields::default();
        self.step = ContactStep::PersonalDetails;
    }

    /// The endpoint rejected or was unreachable: keep what the user typed
    /// so they can retry by hand. No automatic retry.
    pub fn submission_failed(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> ContactWizard {
        let mut wizard = ContactWizard::new();
        wizard.fields.name = "Sarah Johnson".to_string();
        wizard.fields.email = "sarah@example.com".to_string();
        wizard.fields.service = "individual-therapy".to_string();
        wizard.fields.message = "I would like to book a consultation.".to_string();
        wizard.fields.privacy = true;
        wizard
    }

    #[test]
    fn short_name_or_invalid_email_keeps_step_zero() {
        let mut wizard = ContactWizard::new();
        wizard.fields.name = "J".to_string();
        wizard.fields.email = "sarah@example.com".to_string();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), ContactStep::PersonalDetails);

        wizard.fields.name = "Jo".to_string();
        wizard.fields.email = "missing-an-at-sign".to_string();
        let errors = wizard.advance().expect_err("email gate");
        assert_eq!(errors, vec![FieldError::EmailInvalid]);
        assert_eq!(wizard.step(), ContactStep::PersonalDetails);
    }

    #[test]
    fn valid_personal_details_advance_and_back_is_unconditional() {
        let mut wizard = filled_wizard();
        wizard.advance().expect("advance");
        assert_eq!(wizard.step(), ContactStep::ServiceDetails);
        wizard.back();
        assert_eq!(wizard.step(), ContactStep::PersonalDetails);
    }

    #[test]
    fn empty_phone_never_blocks_and_is_dropped_from_the_wire() {
        let mut wizard = filled_wizard();
        wizard.fields.phone = "   ".to_string();
        let submission = wizard.validate_all().expect("valid");
        assert_eq!(submission.phone, None);

        wizard.fields.phone = "(555) 123-4567".to_string();
        let submission = wizard.validate_all().expect("valid");
        assert_eq!(submission.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn consent_is_required_to_submit() {
        let mut wizard = filled_wizard();
        wizard.fields.privacy = false;
        let errors = wizard.validate_all().expect_err("consent gate");
        assert_eq!(errors, vec![FieldError::PrivacyRequired]);
        assert!(!wizard.can_submit());
        assert!(wizard.begin_submission().is_none());
    }

    #[test]
    fn a_second_submission_is_ignored_while_one_is_in_flight() {
        let mut wizard = filled_wizard();
        let first = wizard.begin_submission();
        assert!(first.is_some());
        assert!(wizard.is_submitting());
        assert!(wizard.begin_submission().is_none());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn success_resets_fields_and_returns_to_step_zero() {
        let mut wizard = filled_wizard();
        wizard.advance().expect("advance");
        wizard.begin_submission().expect("submission");
        wizard.submission_succeeded();
        assert_eq!(wizard.fields, ContactFields::default());
        assert_eq!(wizard.step(), ContactStep::PersonalDetails);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn failure_retains_entered_values_for_a_manual_retry() {
        let mut wizard = filled_wizard();
        let before = wizard.fields.clone();
        wizard.begin_submission().expect("submission");
        wizard.submission_failed();
        assert_eq!(wizard.fields, before);
        assert!(wizard.can_submit());
    }
}

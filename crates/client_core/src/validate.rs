//! Field validation shared by the contact wizard and the newsletter form.
//! The rules mirror what the site promises inline: short names and messages
//! are rejected, emails need a plausible shape, consent is a hard gate.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Service,
    Message,
    Privacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please select a service")]
    ServiceRequired,
    #[error("Message must be at least 5 characters")]
    MessageTooShort,
    #[error("You must agree to our privacy policy")]
    PrivacyRequired,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameTooShort => Field::Name,
            FieldError::EmailInvalid => Field::Email,
            FieldError::ServiceRequired => Field::Service,
            FieldError::MessageTooShort => Field::Message,
            FieldError::PrivacyRequired => Field::Privacy,
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().chars().count() >= 2 {
        Ok(())
    } else {
        Err(FieldError::NameTooShort)
    }
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if is_plausible_email(email.trim()) {
        Ok(())
    } else {
        Err(FieldError::EmailInvalid)
    }
}

pub fn validate_service(slug: &str) -> Result<(), FieldError> {
    if slug.trim().is_empty() {
        Err(FieldError::ServiceRequired)
    } else {
        Ok(())
    }
}

pub fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.trim().chars().count() >= 5 {
        Ok(())
    } else {
        Err(FieldError::MessageTooShort)
    }
}

pub fn validate_privacy(agreed: bool) -> Result<(), FieldError> {
    if agreed {
        Ok(())
    } else {
        Err(FieldError::PrivacyRequired)
    }
}

// Deliberately permissive: the endpoint is the authority, this only catches
// obvious typos before a request is made.
fn is_plausible_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_names_shorter_than_two_characters() {
        assert_eq!(validate_name(""), Err(FieldError::NameTooShort));
        assert_eq!(validate_name(" a "), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("Jo"), Ok(()));
        assert_eq!(validate_name("  Jo  "), Ok(()));
    }

    #[test]
    fn rejects_emails_without_at_or_domain_dot() {
        for bad in ["not-an-email", "a@b", "@example.com", "a@", "a b@c.com", "a@b..com"] {
            assert_eq!(validate_email(bad), Err(FieldError::EmailInvalid), "{bad}");
        }
        for good in ["user@example.com", " user@example.com ", "a.b@c.co.uk"] {
            assert_eq!(validate_email(good), Ok(()), "{good}");
        }
    }

    #[test]
    fn message_needs_five_characters_after_trimming() {
        assert_eq!(validate_message("hi   "), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("hello"), Ok(()));
    }

    #[test]
    fn privacy_consent_is_a_hard_gate() {
        assert_eq!(validate_privacy(false), Err(FieldError::PrivacyRequired));
        assert_eq!(validate_privacy(true), Ok(()));
    }
}

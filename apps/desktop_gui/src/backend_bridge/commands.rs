//! Commands queued from the UI to the submission worker.

use shared::protocol::{ContactSubmission, NewsletterSubscription};

pub enum BackendCommand {
    SubmitContact(ContactSubmission),
    SubmitNewsletter(NewsletterSubscription),
}

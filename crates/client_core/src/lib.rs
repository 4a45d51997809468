//! Client-side interaction state for the Soulivo desktop site: the theme
//! store, the contact wizard, the newsletter form, the testimonial carousel,
//! the FAQ disclosure list, the service filter, the stat counters, and the
//! HTTP client that talks to the external submission endpoints.
//!
//! Everything here is framework-free and synchronous except the submission
//! client; the GUI owns the frame clock and feeds it in as plain seconds.

pub mod carousel;
pub mod contact;
pub mod counter;
pub mod disclosure;
pub mod filter;
pub mod newsletter;
pub mod submission;
pub mod theme;
pub mod validate;

pub use carousel::{AutoAdvance, Carousel};
pub use contact::{ContactFields, ContactStep, ContactWizard};
pub use counter::CountUp;
pub use disclosure::Disclosure;
pub use filter::ServiceFilter;
pub use newsletter::NewsletterForm;
pub use submission::{SubmissionClient, SubmissionError, DEFAULT_REQUEST_TIMEOUT};
pub use theme::{MemoryPreferenceStore, PreferenceStore, ThemeStore, THEME_STORAGE_KEY};
pub use validate::{Field, FieldError};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

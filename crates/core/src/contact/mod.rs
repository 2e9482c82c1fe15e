//! Contact form rules.
//!
//! Field validation for the public contact form and the reasons it accepts.

mod error;
mod form;

pub use error::ContactError;
pub use form::{ContactForm, ContactReason};

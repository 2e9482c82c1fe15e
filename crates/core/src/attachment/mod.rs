//! Contact-form attachment validation.
//!
//! This module provides:
//! - MIME sniffing from magic bytes
//! - The allow-list, extension, size and signature checks
//! - SHA-256 fingerprinting for audit logs

mod error;
mod sniff;
mod types;
mod validator;

pub use error::AttachmentError;
pub use sniff::sniff;
pub use types::{FileKind, ValidatedAttachment};
pub use validator::{AttachmentValidator, MALICIOUS_SIGNATURES, MAX_FILE_SIZE, SNIFF_PREFIX_LEN};

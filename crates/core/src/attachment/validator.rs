//! Attachment validator implementation.

use sha2::{Digest, Sha256};

use super::error::AttachmentError;
use super::sniff::sniff;
use super::types::{FileKind, ValidatedAttachment};

/// Maximum attachment size: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of leading bytes inspected when sniffing the type.
pub const SNIFF_PREFIX_LEN: usize = 8192;

/// Byte sequences rejected anywhere in a (lower-cased) payload.
pub const MALICIOUS_SIGNATURES: &[&[u8]] = &[
    b"<%eval",
    b"<%execute",
    b"<script>",
    b"javascript:",
    b"vbscript:",
    b".exe\x00",
    b".dll\x00",
];

/// Validates contact-form attachments.
#[derive(Debug, Clone)]
pub struct AttachmentValidator {
    allowed: Vec<FileKind>,
    max_size: u64,
}

impl Default for AttachmentValidator {
    fn default() -> Self {
        Self {
            allowed: vec![FileKind::Pdf, FileKind::Jpeg],
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl AttachmentValidator {
    /// Create a validator with a custom size ceiling.
    #[must_use]
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Returns the size ceiling in bytes.
    #[must_use]
    pub const fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Runs every check on an uploaded file.
    ///
    /// Checks run in order: sniffed type, allow-list, extension, size,
    /// malicious signatures. The SHA-256 is computed only for accepted
    /// files.
    ///
    /// # Errors
    ///
    /// Returns `AttachmentError::Invalid` with the reason of the first
    /// failed check.
    pub fn validate(
        &self,
        filename: &str,
        content: &[u8],
    ) -> Result<ValidatedAttachment, AttachmentError> {
        let kind = self.check_type(filename, content)?;
        self.check_content(content)?;

        Ok(ValidatedAttachment {
            filename: filename.to_string(),
            kind,
            mime_type: kind.mime_type(),
            sha256: sha256_hex(content),
            size: content.len() as u64,
        })
    }

    fn check_type(&self, filename: &str, content: &[u8]) -> Result<FileKind, AttachmentError> {
        let prefix = &content[..content.len().min(SNIFF_PREFIX_LEN)];

        let kind = sniff(prefix)
            .ok_or_else(|| AttachmentError::invalid("No se pudo determinar el tipo de archivo"))?;

        if !self.allowed.contains(&kind) {
            return Err(AttachmentError::invalid(format!(
                "Tipo de archivo no permitido ({kind}). Se permiten: {}",
                self.allowed_list()
            )));
        }

        let extension = extension_of(filename);
        if !kind.extensions().contains(&extension.as_str()) {
            return Err(AttachmentError::invalid(format!(
                "Extensión de archivo no válida para el tipo {kind}"
            )));
        }

        Ok(kind)
    }

    fn check_content(&self, content: &[u8]) -> Result<(), AttachmentError> {
        if content.len() as u64 > self.max_size {
            return Err(AttachmentError::invalid(format!(
                "El archivo excede el tamaño máximo permitido de {}MB",
                self.max_size / (1024 * 1024)
            )));
        }

        let lowered = content.to_ascii_lowercase();
        if MALICIOUS_SIGNATURES
            .iter()
            .any(|signature| contains(&lowered, signature))
        {
            return Err(AttachmentError::invalid(
                "Se detectó contenido potencialmente malicioso en el archivo",
            ));
        }

        Ok(())
    }

    fn allowed_list(&self) -> String {
        self.allowed
            .iter()
            .map(|kind| kind.mime_type())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Returns the lowercase extension of `filename`, including the dot, or an
/// empty string.
fn extension_of(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(idx) if idx > 0 => base[idx..].to_ascii_lowercase(),
        _ => String::new(),
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

//! Attachment types and data structures.

use serde::Serialize;

/// File type recognised from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// PDF document.
    Pdf,
    /// JPEG image.
    Jpeg,
    /// PNG image.
    Png,
    /// GIF image.
    Gif,
    /// ZIP container (also docx/xlsx/odt).
    Zip,
    /// Windows PE executable or DLL.
    WindowsExecutable,
    /// ELF executable.
    Elf,
}

impl FileKind {
    /// Returns the MIME type.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Zip => "application/zip",
            Self::WindowsExecutable => "application/vnd.microsoft.portable-executable",
            Self::Elf => "application/x-executable",
        }
    }

    /// Returns the filename extensions (lowercase, with dot) that are
    /// consistent with this kind.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &[".pdf"],
            Self::Jpeg => &[".jpg", ".jpeg"],
            Self::Png => &[".png"],
            Self::Gif => &[".gif"],
            Self::Zip => &[".zip"],
            Self::WindowsExecutable => &[".exe", ".dll"],
            Self::Elf => &[],
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// An attachment that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedAttachment {
    /// Original filename.
    pub filename: String,
    /// Sniffed file type.
    pub kind: FileKind,
    /// Sniffed MIME type.
    pub mime_type: &'static str,
    /// Lowercase hex SHA-256 of the whole payload.
    pub sha256: String,
    /// Payload size in bytes.
    pub size: u64,
}

//! MIME sniffing from magic bytes.

use super::types::FileKind;

/// Magic prefixes, checked in order.
const SIGNATURES: &[(&[u8], FileKind)] = &[
    (b"%PDF", FileKind::Pdf),
    (&[0xFF, 0xD8, 0xFF], FileKind::Jpeg),
    (&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A], FileKind::Png),
    (b"GIF87a", FileKind::Gif),
    (b"GIF89a", FileKind::Gif),
    (&[b'P', b'K', 0x03, 0x04], FileKind::Zip),
    (&[b'P', b'K', 0x05, 0x06], FileKind::Zip),
    (b"MZ", FileKind::WindowsExecutable),
    (&[0x7F, b'E', b'L', b'F'], FileKind::Elf),
];

/// Identifies a file from the first bytes of its content.
///
/// Returns `None` when no known signature matches.
#[must_use]
pub fn sniff(prefix: &[u8]) -> Option<FileKind> {
    SIGNATURES
        .iter()
        .find(|(magic, _)| prefix.starts_with(magic))
        .map(|&(_, kind)| kind)
}

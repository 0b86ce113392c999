/// Classification of a byte buffer by its leading signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniffResult {
    pub ext: &'static str,
    pub mime: &'static str,
    pub label: &'static str,
    /// True when a known signature matched.
    pub valid: bool,
}

/// Signature table in match priority order. First match wins.
///
/// The WEBP entry checks only the 4-byte RIFF container prefix, not the
/// "WEBP" tag at offset 8, so any RIFF file (WAV, AVI) classifies as WEBP.
/// Intentionally simplified; downstream consumers only need "some image
/// came out of the decrypt".
const SIGNATURES: &[(&[u8], &str, &str, &str)] = &[
    (&[0xFF, 0xD8], "jpg", "image/jpeg", "JPEG"),
    (&[0x89, 0x50, 0x4E, 0x47], "png", "image/png", "PNG"),
    (&[0x42, 0x4D], "bmp", "image/bmp", "BMP"),
    (&[0x52, 0x49, 0x46, 0x46], "webp", "image/webp", "WEBP"),
    (&[0x47, 0x49, 0x46, 0x38], "gif", "image/gif", "GIF"),
];

/// Classify a buffer by its leading bytes.
pub fn sniff(bytes: &[u8]) -> SniffResult {
    for (magic, ext, mime, label) in SIGNATURES {
        if bytes.starts_with(magic) {
            return SniffResult {
                ext,
                mime,
                label,
                valid: true,
            };
        }
    }
    SniffResult {
        ext: "bin",
        mime: "application/octet-stream",
        label: "Unknown",
        valid: false,
    }
}

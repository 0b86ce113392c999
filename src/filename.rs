use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::key::effective_password;

/// Which encoding generation a filename matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenameScheme {
    None,
    Primary,
    Legacy,
}

/// Hidden metadata recovered from a filename stem.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FilenameMetadata {
    pub date_time: Option<String>,
    pub link: Option<String>,
    pub scheme: FilenameScheme,
}

impl FilenameMetadata {
    fn none() -> Self {
        Self {
            date_time: None,
            link: None,
            scheme: FilenameScheme::None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        self.scheme != FilenameScheme::None
    }
}

/// Filename stem: everything before the final `.`, or the whole name when
/// there is no extension.
pub fn stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

/// XOR a buffer with the password bytes repeated cyclically.
fn xor_keystream(bytes: &mut [u8], password: &str) {
    let key = effective_password(password).as_bytes();
    for (i, b) in bytes.iter_mut().enumerate() {
        *b ^= key[i % key.len()];
    }
}

/// Decode hidden metadata from a filename.
///
/// Two generations are attempted in fixed order: the primary scheme
/// (base64 of the password-XORed `date|link` text), then the legacy scheme
/// (`YYYYMMDD_HHMMSS_` prefix with the link flattened into the stem).
/// Failure is never an error here; an undecodable name just returns an
/// empty metadata record.
pub fn decode(filename: &str, password: &str) -> FilenameMetadata {
    let stem = stem(filename);
    if let Some(meta) = decode_primary(stem, password) {
        return meta;
    }
    if let Some(meta) = decode_legacy(stem) {
        return meta;
    }
    FilenameMetadata::none()
}

fn decode_primary(stem: &str, password: &str) -> Option<FilenameMetadata> {
    let mut bytes = B64.decode(stem).ok()?;
    xor_keystream(&mut bytes, password);
    // A wrong password almost always XORs into invalid UTF-8; treat that
    // the same as a base64 miss and let the legacy scheme have a look.
    let text = String::from_utf8(bytes).ok()?;

    let (date_time, link) = match text.split_once('|') {
        Some((date, "null")) => (date.to_string(), None),
        Some((date, link)) => (date.to_string(), Some(link.to_string())),
        None => (text, None),
    };
    Some(FilenameMetadata {
        date_time: Some(date_time),
        link,
        scheme: FilenameScheme::Primary,
    })
}

fn decode_legacy(stem: &str) -> Option<FilenameMetadata> {
    // Shape: 8 digits, '_', 6 digits, '_', optional flattened link.
    if stem.len() < 16 {
        return None;
    }
    let b = stem.as_bytes();
    if b[8] != b'_' || b[15] != b'_' {
        return None;
    }
    if !b[..8].iter().all(u8::is_ascii_digit) || !b[9..15].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let date_time = format!("{}_{}", &stem[..8], &stem[9..15]);
    let rest = &stem[16..];
    let link = if rest.is_empty() {
        None
    } else {
        let unflattened = rest.replace('_', "/");
        if unflattened.starts_with("http://") || unflattened.starts_with("https://") {
            Some(unflattened)
        } else {
            Some(format!("https://{}", unflattened))
        }
    };
    Some(FilenameMetadata {
        date_time: Some(date_time),
        link,
        scheme: FilenameScheme::Legacy,
    })
}

/// Encode metadata into a primary-scheme filename stem (the inverse of
/// [`decode`] for that scheme).
pub fn encode(date_time: &str, link: Option<&str>, password: &str) -> String {
    let text = format!("{}|{}", date_time, link.unwrap_or("null"));
    let mut bytes = text.into_bytes();
    xor_keystream(&mut bytes, password);
    B64.encode(bytes)
}

/// Replace characters illegal in filenames with underscores.
pub fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ':' | '/' | '\\' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stem_strips_final_extension() {
        assert_eq!(stem("photo.enc.png"), "photo.enc");
        assert_eq!(stem("noext"), "noext");
    }

    #[test]
    fn test_primary_roundtrip() {
        let name = format!(
            "{}.png",
            encode("20240102_030405", Some("https://example.com/x"), "p")
        );
        let meta = decode(&name, "p");
        assert_eq!(meta.scheme, FilenameScheme::Primary);
        assert_eq!(meta.date_time.as_deref(), Some("20240102_030405"));
        assert_eq!(meta.link.as_deref(), Some("https://example.com/x"));
    }

    #[test]
    fn test_primary_null_link() {
        let name = format!("{}.jpg", encode("20231231_235959", None, "secret"));
        let meta = decode(&name, "secret");
        assert_eq!(meta.scheme, FilenameScheme::Primary);
        assert_eq!(meta.date_time.as_deref(), Some("20231231_235959"));
        assert_eq!(meta.link, None);
    }

    #[test]
    fn test_primary_splits_on_first_delimiter() {
        let name = format!("{}.jpg", encode("date", Some("a|b"), "pw"));
        let meta = decode(&name, "pw");
        assert_eq!(meta.date_time.as_deref(), Some("date"));
        assert_eq!(meta.link.as_deref(), Some("a|b"));
    }

    #[test]
    fn test_legacy_basic() {
        let meta = decode("20240102_030405_example.com_x.png", "ignored");
        assert_eq!(meta.scheme, FilenameScheme::Legacy);
        assert_eq!(meta.date_time.as_deref(), Some("20240102_030405"));
        assert_eq!(meta.link.as_deref(), Some("https://example.com/x"));
    }

    #[test]
    fn test_legacy_without_link() {
        let meta = decode("20240102_030405_.jpg", "x");
        assert_eq!(meta.scheme, FilenameScheme::Legacy);
        assert_eq!(meta.date_time.as_deref(), Some("20240102_030405"));
        assert_eq!(meta.link, None);
    }

    #[test]
    fn test_legacy_keeps_explicit_scheme() {
        // '_' → '/' happens before the prefix check, so a flattened
        // "http://" survives without a second prefix.
        let meta = decode("20240102_030405_http:__host_p.gif", "x");
        assert_eq!(meta.link.as_deref(), Some("http://host/p"));
    }

    #[test]
    fn test_legacy_shape_rejected() {
        // Wrong separator positions or non-digits.
        assert_eq!(decode("2024010_2030405_x.png", "p").scheme, FilenameScheme::None);
        assert_eq!(decode("2024010a_030405_x.png", "p").scheme, FilenameScheme::None);
        assert_eq!(decode("short.png", "p").scheme, FilenameScheme::None);
    }

    #[test]
    fn test_undecodable_name() {
        let meta = decode("holiday photo (1).jpg", "p");
        assert!(!meta.is_decoded());
        assert_eq!(meta.date_time, None);
        assert_eq!(meta.link, None);
    }

    #[test]
    fn test_wrong_password_never_recovers_metadata() {
        // Valid base64 stem, but the wrong keystream yields invalid UTF-8
        // (or at best garbage that is not a legacy shape).
        let name = format!("{}.png", encode("20240102_030405", Some("https://e.com"), "right"));
        let meta = decode(&name, "completely-different-password");
        // Either invalid UTF-8 (scheme None) or garbage primary text;
        // it must never panic and never produce the true metadata.
        assert_ne!(meta.date_time.as_deref(), Some("20240102_030405"));
    }

    #[test]
    fn test_empty_password_uses_default_keystream() {
        let name = format!("{}.png", encode("20240101_000000", None, ""));
        let meta = decode(&name, "default_password");
        assert_eq!(meta.date_time.as_deref(), Some("20240101_000000"));
    }

    #[test]
    fn test_sanitize_component() {
        assert_eq!(sanitize_component("2024:01/02 03\\04"), "2024_01_02 03_04");
        assert_eq!(sanitize_component("a*b?c\"d<e>f|g"), "a_b_c_d_e_f_g");
        assert_eq!(sanitize_component("plain"), "plain");
    }

    proptest! {
        #[test]
        fn prop_primary_roundtrip(
            date in "[0-9]{8}_[0-9]{6}",
            link in proptest::option::of("[a-zA-Z0-9:/._-]{1,40}"),
            password in "[a-zA-Z0-9]{1,16}",
        ) {
            // "null" is the encoded spelling of an absent link.
            prop_assume!(link.as_deref() != Some("null"));
            let name = format!("{}.png", encode(&date, link.as_deref(), &password));
            let meta = decode(&name, &password);
            prop_assert_eq!(meta.scheme, FilenameScheme::Primary);
            prop_assert_eq!(meta.date_time.as_deref(), Some(date.as_str()));
            prop_assert_eq!(meta.link.as_deref(), link.as_deref());
        }
    }
}

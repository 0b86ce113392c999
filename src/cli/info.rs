use crate::container::{self, Container};
use crate::error::{PhotoveilError, Result};
use crate::sniff::sniff;
use std::path::Path;

/// Describe a file: container generation and header fields for sealed
/// inputs, sniffed format for bare images.
///
/// Fails with `UnrecognizedFormat` when the bytes are neither a sealed
/// container nor a known image signature.
pub fn show_info(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let mut output = String::new();

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Size: {} bytes\n", bytes.len()));

    if container::is_sealed(&bytes) {
        match container::parse(&bytes, false)? {
            Container::Sealed {
                nonce,
                counter,
                ciphertext,
            } => {
                output.push_str("Container: sealed (ENC_ marker)\n");
                output.push_str(&format!("  Nonce: {}\n", hex::encode(nonce)));
                output.push_str(&format!(
                    "  Counter: {} (0x{})\n",
                    counter,
                    hex::encode(counter.to_be_bytes())
                ));
                output.push_str(&format!("  Payload: {} bytes\n", ciphertext.len()));
            }
            _ => unreachable!("marked buffer parses as sealed"),
        }
        return Ok(output);
    }

    let result = sniff(&bytes);
    if !result.valid {
        return Err(PhotoveilError::UnrecognizedFormat(format!(
            "{}: no container marker and no known image signature",
            path.display()
        )));
    }
    output.push_str("Container: none (plaintext image)\n");
    output.push_str(&format!("  Format: {} ({})\n", result.label, result.mime));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher;
    use crate::key::derive_key;
    use tempfile::tempdir;

    #[test]
    fn test_info_sealed_container() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.enc");
        let sealed = cipher::seal_with(b"payload", &derive_key("pw"), &[0xAB; 8], 513);
        std::fs::write(&path, sealed).unwrap();

        let info = show_info(&path).unwrap();
        assert!(info.contains("sealed (ENC_ marker)"));
        assert!(info.contains("Nonce: abababababababab"));
        assert!(info.contains("Counter: 513"));
        assert!(info.contains("Payload: 7 bytes"));
    }

    #[test]
    fn test_info_plain_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pic.gif");
        std::fs::write(&path, b"GIF89a trailing").unwrap();

        let info = show_info(&path).unwrap();
        assert!(info.contains("plaintext image"));
        assert!(info.contains("GIF"));
    }

    #[test]
    fn test_info_unrecognized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mystery.bin");
        std::fs::write(&path, [0u8, 1, 2, 3]).unwrap();

        let err = show_info(&path).unwrap_err();
        assert!(matches!(err, PhotoveilError::UnrecognizedFormat(_)));
    }

    #[test]
    fn test_info_truncated_container_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.enc");
        std::fs::write(&path, b"ENC_12").unwrap();

        let err = show_info(&path).unwrap_err();
        assert!(matches!(err, PhotoveilError::ContainerTooSmall { .. }));
    }
}

use crate::error::{PhotoveilError, Result};
use crate::filename::{self, FilenameScheme};

/// Decode and describe the hidden metadata in a filename.
pub fn show_name(filename: &str, password: &str) -> Result<String> {
    let meta = filename::decode(filename, password);

    let scheme = match meta.scheme {
        FilenameScheme::Primary => "primary (base64 + password XOR)",
        FilenameScheme::Legacy => "legacy (timestamp prefix)",
        FilenameScheme::None => {
            return Err(PhotoveilError::FilenameDecodeFailure(filename.to_string()))
        }
    };

    let mut output = String::new();
    output.push_str(&format!("Filename: {}\n", filename));
    output.push_str(&format!("Scheme: {}\n", scheme));
    if let Some(date_time) = &meta.date_time {
        output.push_str(&format!("Timestamp: {}\n", date_time));
    }
    match &meta.link {
        Some(link) => output.push_str(&format!("Link: {}\n", link)),
        None => output.push_str("Link: (none)\n"),
    }
    Ok(output)
}

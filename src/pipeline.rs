use serde::Serialize;

use crate::cipher;
use crate::container::{self, Container};
use crate::error::{PhotoveilError, Result};
use crate::filename::{self, FilenameMetadata};
use crate::key::{derive_key, KEY_SIZE};
use crate::session::SessionFile;
use crate::sniff::{sniff, SniffResult};

/// Batch-level settings.
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub password: String,
    /// Treat unmarked inputs as legacy containers instead of plaintext
    /// passthrough. The sniff check on the decrypted bytes is the only
    /// integrity signal in this mode.
    pub legacy_mode: bool,
}

/// Outcome for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct DecryptedFile {
    pub source_name: String,
    pub output_name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub mime: String,
    pub label: String,
    /// Whether a cryptographic header was recognized and decrypted.
    pub encrypted: bool,
    pub success: bool,
    pub diagnostic: String,
    pub metadata: FilenameMetadata,
}

/// A link recovered from a filename, kept even when the file's content
/// failed to decrypt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub source_name: String,
    pub date_time: Option<String>,
    pub link: String,
}

/// Aggregate output of one batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub success_count: usize,
    pub error_count: usize,
    pub encrypted_count: usize,
    pub plaintext_count: usize,
    pub links: Vec<LinkRecord>,
    pub files: Vec<DecryptedFile>,
}

/// Run the decode pipeline over a batch of inputs.
///
/// The key is derived once and shared read-only; files are processed
/// strictly in input order and a per-file failure never aborts the rest.
pub fn run_batch(files: &[SessionFile], options: &DecryptOptions) -> BatchResult {
    let key = derive_key(&options.password);
    let mut batch = BatchResult::default();

    for file in files {
        let outcome = process_file(file, &key, options);

        if let Some(link) = outcome.metadata.link.clone() {
            batch.links.push(LinkRecord {
                source_name: outcome.source_name.clone(),
                date_time: outcome.metadata.date_time.clone(),
                link,
            });
        }

        if outcome.success {
            batch.success_count += 1;
            if outcome.encrypted {
                batch.encrypted_count += 1;
            } else {
                batch.plaintext_count += 1;
            }
        } else {
            batch.error_count += 1;
        }
        batch.files.push(outcome);
    }

    batch
}

/// Steps 1-8 of the per-file pipeline.
fn process_file(file: &SessionFile, key: &[u8; KEY_SIZE], options: &DecryptOptions) -> DecryptedFile {
    // Filename metadata is best effort and independent of the content.
    let metadata = filename::decode(&file.name, &options.password);

    match decrypt_bytes(&file.bytes, key, options.legacy_mode) {
        Ok((bytes, encrypted)) => {
            let result = sniff(&bytes);
            let output_name = output_name(&file.name, &metadata, &result);
            let diagnostic = if encrypted {
                format!("decrypted, {}", result.label)
            } else {
                format!("plaintext passthrough, {}", result.label)
            };
            DecryptedFile {
                source_name: file.name.clone(),
                output_name,
                bytes,
                mime: result.mime.to_string(),
                label: result.label.to_string(),
                encrypted,
                success: true,
                diagnostic,
                metadata,
            }
        }
        Err(err) => DecryptedFile {
            source_name: file.name.clone(),
            output_name: String::new(),
            bytes: Vec::new(),
            mime: String::new(),
            label: String::new(),
            encrypted: true,
            success: false,
            diagnostic: err.to_string(),
            metadata,
        },
    }
}

/// Decrypt one buffer. Returns the output bytes and whether decryption
/// actually ran (false for plaintext passthrough).
fn decrypt_bytes(bytes: &[u8], key: &[u8; KEY_SIZE], legacy_mode: bool) -> Result<(Vec<u8>, bool)> {
    match container::parse(bytes, legacy_mode)? {
        Container::Sealed {
            nonce,
            counter,
            ciphertext,
        } => {
            let block = container::counter_block(&nonce, counter);
            Ok((cipher::decrypt(ciphertext, key, &block), true))
        }
        Container::Legacy {
            counter_block,
            ciphertext,
        } => {
            let plaintext = cipher::decrypt(ciphertext, key, &counter_block);
            // No marker and no tag: the signature check stands in for
            // authentication. Key error and corruption are indistinguishable.
            if !sniff(&plaintext).valid {
                return Err(PhotoveilError::WrongPasswordOrCorrupted);
            }
            Ok((plaintext, true))
        }
        Container::Plaintext(bytes) => Ok((bytes.to_vec(), false)),
    }
}

/// Output filename: the sanitized recovered timestamp when the filename
/// decoded, otherwise the original stem with a `_decrypted` suffix. The
/// extension always comes from the sniffed content.
fn output_name(source_name: &str, metadata: &FilenameMetadata, result: &SniffResult) -> String {
    match &metadata.date_time {
        Some(date_time) => format!("{}.{}", filename::sanitize_component(date_time), result.ext),
        None => format!("{}_decrypted.{}", filename::stem(source_name), result.ext),
    }
}

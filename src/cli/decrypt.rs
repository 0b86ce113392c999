use crate::error::Result;
use crate::pipeline::{run_batch, BatchResult, DecryptOptions};
use crate::session::Session;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options for the decrypt command
#[derive(Debug, Clone)]
pub struct DecryptCommandOptions {
    pub password: String,
    pub legacy_mode: bool,
    pub out_dir: PathBuf,
    /// Delay between successive output writes. Consumers with single-item
    /// delivery limits (the original browser frontend) need pacing; the
    /// filesystem does not, so the default is zero.
    pub pace: Duration,
}

impl Default for DecryptCommandOptions {
    fn default() -> Self {
        Self {
            password: String::new(),
            legacy_mode: false,
            out_dir: PathBuf::from("."),
            pace: Duration::ZERO,
        }
    }
}

/// Decrypt a batch of files and write the recovered outputs.
/// Returns the batch result for reporting.
pub fn decrypt_files(inputs: &[PathBuf], options: &DecryptCommandOptions) -> Result<BatchResult> {
    let mut session = Session::new();
    let mut loaded = Vec::with_capacity(inputs.len());
    for path in inputs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        loaded.push((name, std::fs::read(path)?));
    }
    session.add_files(loaded);

    let batch = run_batch(
        session.files(),
        &DecryptOptions {
            password: options.password.clone(),
            legacy_mode: options.legacy_mode,
        },
    );

    write_outputs(&batch, &options.out_dir, options.pace)?;
    Ok(batch)
}

/// Write every successful output, pacing deliveries in input order.
fn write_outputs(batch: &BatchResult, out_dir: &Path, pace: Duration) -> Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let mut first = true;
    for file in batch.files.iter().filter(|f| f.success) {
        if !first && !pace.is_zero() {
            std::thread::sleep(pace);
        }
        first = false;
        std::fs::write(out_dir.join(&file.output_name), &file.bytes)?;
    }
    Ok(())
}

/// Human-readable batch report: one status line per file in input order,
/// the aggregate counts, and every recovered link.
pub fn format_report(batch: &BatchResult) -> String {
    let mut output = String::new();

    for file in &batch.files {
        let marker = if file.success { "ok " } else { "ERR" };
        output.push_str(&format!(
            "{} {} -> {}: {}\n",
            marker,
            file.source_name,
            if file.output_name.is_empty() {
                "-"
            } else {
                &file.output_name
            },
            file.diagnostic
        ));
    }

    output.push_str(&format!(
        "\n{} succeeded ({} decrypted, {} plaintext), {} failed\n",
        batch.success_count, batch.encrypted_count, batch.plaintext_count, batch.error_count
    ));

    if !batch.links.is_empty() {
        output.push_str("\nRecovered links:\n");
        for record in &batch.links {
            match &record.date_time {
                Some(date) => output.push_str(&format!(
                    "  {} [{}] {}\n",
                    record.source_name, date, record.link
                )),
                None => output.push_str(&format!("  {} {}\n", record.source_name, record.link)),
            }
        }
    }

    output
}

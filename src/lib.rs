//! Photoveil - encrypted image container recovery
//!
//! Recovers original image files from `ENC_` encrypted containers and,
//! separately, hidden metadata (a timestamp and an optional URL) that was
//! steganographically encoded into the *filename* itself.
//!
//! ## Decode Pipeline
//!
//! Each input file goes through the following stages:
//!
//! ```text
//! filename → FilenameCodec → {timestamp, link}
//! bytes → ContainerParser → CounterBlock → StreamCipher → FormatSniffer → DecryptedFile
//! ```
//!
//! - **FilenameCodec**: two filename generations, attempted in order:
//!   base64 of the password-XORed `date|link` text, then the legacy
//!   `YYYYMMDD_HHMMSS_link` shape
//! - **ContainerParser**: two container generations, `ENC_` marked
//!   (nonce + big-endian u64 counter) and legacy (raw 16-byte counter
//!   block), with plaintext passthrough for unmarked inputs
//! - **StreamCipher**: AES-256-CTR; the key is one unsalted SHA-256 of the
//!   password (a preserved wire-format limitation, not a choice)
//! - **FormatSniffer**: byte-signature classification; in legacy mode the
//!   only integrity signal this tag-less format has
//!
//! ## Example
//!
//! ```no_run
//! use photoveil::pipeline::{run_batch, DecryptOptions};
//! use photoveil::session::Session;
//!
//! let mut session = Session::new();
//! session.add_files(vec![("photo.enc".to_string(), std::fs::read("photo.enc").unwrap())]);
//!
//! let options = DecryptOptions {
//!     password: "my_password".into(),
//!     ..Default::default()
//! };
//! let batch = run_batch(session.files(), &options);
//! for file in &batch.files {
//!     println!("{}: {}", file.source_name, file.diagnostic);
//! }
//! ```

pub mod cipher;
pub mod cli;
pub mod container;
pub mod error;
pub mod filename;
pub mod key;
pub mod pipeline;
pub mod session;
pub mod sniff;

pub use error::{PhotoveilError, Result};
pub use pipeline::{run_batch, BatchResult, DecryptOptions, DecryptedFile};
pub use session::Session;

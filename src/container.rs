use crate::error::{PhotoveilError, Result};

/// Magic bytes opening a current-generation container.
pub const MAGIC: &[u8; 4] = b"ENC_";

/// Byte length of the nonce field.
pub const NONCE_SIZE: usize = 8;

/// Byte length of the initial counter block fed to the cipher.
pub const COUNTER_BLOCK_SIZE: usize = 16;

/// Header length of a current-generation container (magic + nonce + counter).
pub const SEALED_HEADER_SIZE: usize = 20;

/// One parsed input buffer.
///
/// Borrowed views into the caller's buffer; nothing is copied until the
/// cipher runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container<'a> {
    /// Current generation: `ENC_` magic, 8-byte nonce, big-endian u64
    /// counter, ciphertext.
    Sealed {
        nonce: [u8; NONCE_SIZE],
        counter: u64,
        ciphertext: &'a [u8],
    },
    /// Legacy generation: a raw 16-byte counter block followed by
    /// ciphertext, no marker.
    Legacy {
        counter_block: [u8; COUNTER_BLOCK_SIZE],
        ciphertext: &'a [u8],
    },
    /// No cryptographic header recognized; bytes pass through unchanged.
    Plaintext(&'a [u8]),
}

/// Whether a buffer opens with the current-generation magic.
pub fn is_sealed(bytes: &[u8]) -> bool {
    bytes.len() >= MAGIC.len() && &bytes[..MAGIC.len()] == MAGIC
}

/// Split a raw buffer into header fields and payload.
///
/// `legacy_mode` controls what an unmarked buffer means: with it set,
/// the buffer must be a legacy container (raw counter block + ciphertext);
/// without it, unmarked bytes are plaintext passthrough. The two
/// generations are attempted in this fixed order and never merged.
pub fn parse(bytes: &[u8], legacy_mode: bool) -> Result<Container<'_>> {
    if is_sealed(bytes) {
        if bytes.len() < SEALED_HEADER_SIZE {
            return Err(PhotoveilError::ContainerTooSmall {
                len: bytes.len(),
                need: SEALED_HEADER_SIZE,
            });
        }
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[4..12]);
        let counter = u64::from_be_bytes(bytes[12..20].try_into().expect("8-byte slice"));
        let ciphertext = &bytes[SEALED_HEADER_SIZE..];
        if ciphertext.is_empty() {
            return Err(PhotoveilError::EmptyPayload);
        }
        return Ok(Container::Sealed {
            nonce,
            counter,
            ciphertext,
        });
    }

    if legacy_mode {
        if bytes.len() < COUNTER_BLOCK_SIZE {
            return Err(PhotoveilError::ContainerTooSmall {
                len: bytes.len(),
                need: COUNTER_BLOCK_SIZE,
            });
        }
        let mut counter_block = [0u8; COUNTER_BLOCK_SIZE];
        counter_block.copy_from_slice(&bytes[..COUNTER_BLOCK_SIZE]);
        let ciphertext = &bytes[COUNTER_BLOCK_SIZE..];
        if ciphertext.is_empty() {
            return Err(PhotoveilError::EmptyPayload);
        }
        return Ok(Container::Legacy {
            counter_block,
            ciphertext,
        });
    }

    Ok(Container::Plaintext(bytes))
}

/// Assemble the canonical 16-byte initial counter block: nonce followed by
/// the counter as an unsigned 64-bit big-endian integer.
///
/// The counter must round-trip through genuine u64 arithmetic. The format
/// allows the full 64-bit range, and anything narrower (notably float
/// arithmetic, which truncates above 2^53) mis-decrypts valid containers.
pub fn counter_block(nonce: &[u8; NONCE_SIZE], counter: u64) -> [u8; COUNTER_BLOCK_SIZE] {
    let mut block = [0u8; COUNTER_BLOCK_SIZE];
    block[..NONCE_SIZE].copy_from_slice(nonce);
    block[NONCE_SIZE..].copy_from_slice(&counter.to_be_bytes());
    block
}

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::Aes256;
use ctr::Ctr128BE;
use rand::RngCore;

use crate::container::{counter_block, COUNTER_BLOCK_SIZE, MAGIC, NONCE_SIZE};
use crate::key::KEY_SIZE;

type Aes256Ctr = Ctr128BE<Aes256>;

/// Decrypt a counter-mode payload.
///
/// CTR carries no authentication: any key produces some output. Whether
/// the output is the original file is judged downstream by signature
/// sniffing, never here.
pub fn decrypt(
    ciphertext: &[u8],
    key: &[u8; KEY_SIZE],
    counter_block: &[u8; COUNTER_BLOCK_SIZE],
) -> Vec<u8> {
    let mut cipher = Aes256Ctr::new(key.into(), counter_block.into());
    let mut buffer = ciphertext.to_vec();
    cipher.apply_keystream(&mut buffer);
    buffer
}

/// Seal plaintext into a current-generation container with an explicit
/// nonce and counter. CTR encryption and decryption are the same keystream
/// application.
pub fn seal_with(
    plaintext: &[u8],
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    counter: u64,
) -> Vec<u8> {
    let block = counter_block(nonce, counter);
    let mut out = Vec::with_capacity(MAGIC.len() + NONCE_SIZE + 8 + plaintext.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(nonce);
    out.extend_from_slice(&counter.to_be_bytes());
    out.extend_from_slice(&decrypt(plaintext, key, &block));
    out
}

/// Seal plaintext with a random nonce and a zero initial counter.
pub fn seal(plaintext: &[u8], key: &[u8; KEY_SIZE]) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce);
    seal_with(plaintext, key, &nonce, 0)
}

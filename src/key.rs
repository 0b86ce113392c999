use sha2::{Digest, Sha256};

/// Password substituted when the user supplies none. Part of the wire
/// contract: containers sealed without a password must stay decryptable.
pub const DEFAULT_PASSWORD: &str = "default_password";

/// Key length in bytes (SHA-256 output, AES-256 key).
pub const KEY_SIZE: usize = 32;

/// Replace an empty password with the default one.
pub fn effective_password(password: &str) -> &str {
    if password.is_empty() {
        DEFAULT_PASSWORD
    } else {
        password
    }
}

/// Derive the symmetric key from a password.
///
/// A single unsalted, uniterated SHA-256 pass over the UTF-8 bytes. This
/// is deliberately weak key derivation: the container format predates any
/// KDF and existing files can only be opened this way.
pub fn derive_key(password: &str) -> [u8; KEY_SIZE] {
    let digest = Sha256::digest(effective_password(password).as_bytes());
    digest.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_deterministic() {
        let a = derive_key("hunter2");
        let b = derive_key("hunter2");
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_key_distinguishes_passwords() {
        assert_ne!(derive_key("alpha"), derive_key("beta"));
    }

    #[test]
    fn test_empty_password_uses_default() {
        assert_eq!(derive_key(""), derive_key(DEFAULT_PASSWORD));
        assert_eq!(effective_password(""), DEFAULT_PASSWORD);
        assert_eq!(effective_password("x"), "x");
    }

    #[test]
    fn test_key_is_sha256_of_password() {
        // Known SHA-256 vector for "abc"
        let key = derive_key("abc");
        assert_eq!(
            hex::encode(key),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

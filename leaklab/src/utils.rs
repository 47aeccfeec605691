use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use ring::rand::SecureRandom;

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Invalid format: {0}")]
    Format(String),
}

/// Fill a buffer of `len` bytes from the system CSPRNG.
pub(crate) fn random_bytes(len: usize) -> Result<Vec<u8>, UtilError> {
    let rng = ring::rand::SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes)
        .map_err(|_| UtilError::Crypto("Failed to generate random bytes".to_string()))?;
    Ok(bytes)
}

/// Generate a URL-safe random string from `len` random bytes.
///
/// Used for session identifiers; the output is base64url without padding,
/// so it is longer than `len` characters.
pub fn gen_random_string(len: usize) -> Result<String, UtilError> {
    let bytes = random_bytes(len)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        let bytes = random_bytes(16).expect("Failed to generate random bytes");
        assert_eq!(bytes.len(), 16);
    }

    #[test]
    fn test_gen_random_string_is_unique() {
        let a = gen_random_string(32).expect("Failed to generate random string");
        let b = gen_random_string(32).expect("Failed to generate random string");

        // 32 random bytes encode to 43 base64url characters
        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
    }

    #[test]
    fn test_gen_random_string_is_url_safe() {
        let s = gen_random_string(64).expect("Failed to generate random string");
        assert!(
            s.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}

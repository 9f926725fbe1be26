//! Error types for the CipherState.

use thiserror::Error;

/// Errors in the crypto layer.
///
/// Every variant is surfaced to the caller unchanged; none are retried
/// internally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// Nonce counter reached the reserved maximum - the key must be replaced.
    #[error("nonce counter exhausted - key must be replaced")]
    NonceExhausted,

    /// Output buffer cannot hold the result.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes the operation needs to write.
        needed: usize,
        /// Bytes the caller provided.
        available: usize,
    },

    /// AEAD decryption failed (invalid tag or corrupted).
    #[error("AEAD authentication failed (invalid tag or corrupted)")]
    AuthenticationFailed,

    /// AEAD encryption failed.
    #[error("AEAD encryption failed")]
    EncryptionFailed,
}

/// Result alias for CipherState operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_too_small_message() {
        let err = CryptoError::BufferTooSmall {
            needed: 20,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too small: need 20 bytes, have 4"
        );
    }

    #[test]
    fn test_errors_are_distinct() {
        assert_ne!(CryptoError::NonceExhausted, CryptoError::AuthenticationFailed);
        assert_ne!(CryptoError::AuthenticationFailed, CryptoError::EncryptionFailed);
    }
}

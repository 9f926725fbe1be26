//! Protocol constants for the Noise CipherState.
//!
//! These values are fixed by the Noise Protocol Framework and MUST NOT be
//! changed; peers rely on them for interoperable rekeying.

// =============================================================================
// KEYS (Noise §5.1)
// =============================================================================

/// Symmetric key size for every supported cipher.
pub const KEY_SIZE: usize = 32;

// =============================================================================
// NONCES (Noise §5.1, §11.3)
// =============================================================================

/// Reserved nonce value.
///
/// Ordinary encryption and decryption refuse to run once the counter reaches
/// it, and `rekey` uses it as its fixed derivation nonce.
pub const MAX_NONCE: u64 = u64::MAX;

// =============================================================================
// CHACHAPOLY (Noise §12.3)
// =============================================================================

/// Poly1305 authentication tag size.
pub const CHACHAPOLY_TAG_SIZE: usize = 16;

/// ChaCha20 nonce size (32 zero bits followed by the little-endian counter).
pub const CHACHAPOLY_NONCE_SIZE: usize = 12;

/// Noise name of the ChaCha20-Poly1305 cipher.
pub const CHACHAPOLY_NAME: &str = "ChaChaPoly";

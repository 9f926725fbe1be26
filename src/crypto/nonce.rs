//! Nonce encoding for ChaCha20-Poly1305
//!
//! Per Noise §12.3, the 64-bit counter is carried in a 12-byte nonce:
//! - Zeros (4 bytes)
//! - Counter (8 bytes, little-endian)

use crate::core::CHACHAPOLY_NONCE_SIZE;

/// Encode a counter as a 12-byte ChaCha20-Poly1305 nonce.
///
/// Layout:
/// ```text
/// [ zeros (4) | counter (8, LE) ]
/// ```
pub fn encode_nonce(counter: u64) -> [u8; CHACHAPOLY_NONCE_SIZE] {
    let mut nonce = [0u8; CHACHAPOLY_NONCE_SIZE];

    // Zeros (bytes 0-3) - already zeroed

    // Counter (bytes 4-11, little-endian)
    nonce[4..12].copy_from_slice(&counter.to_le_bytes());

    nonce
}

/// Parse a nonce back into its counter.
///
/// Returns `None` if the leading padding is not zero.
pub fn decode_nonce(nonce: &[u8; CHACHAPOLY_NONCE_SIZE]) -> Option<u64> {
    if nonce[..4] != [0u8; 4] {
        return None;
    }

    let mut counter = [0u8; 8];
    counter.copy_from_slice(&nonce[4..12]);
    Some(u64::from_le_bytes(counter))
}

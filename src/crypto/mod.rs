//! Symmetric crypto layer
//!
//! - `keys.rs`: [`CipherKey`], zeroized on drop
//! - `cipher_state.rs`: [`CipherState`], the key + nonce state machine
//! - `aead.rs`: [`ChaChaPoly`] primitive (feature `chachapoly`)
//! - `nonce.rs`: 12-byte ChaCha20-Poly1305 nonce encoding

mod cipher_state;
mod keys;

#[cfg(feature = "chachapoly")]
mod aead;
#[cfg(feature = "chachapoly")]
pub mod nonce;

pub use cipher_state::CipherState;
pub use keys::CipherKey;

#[cfg(feature = "chachapoly")]
pub use aead::ChaChaPoly;

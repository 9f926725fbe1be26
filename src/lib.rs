//! # Noise CipherState
//!
//! The symmetric half of a Noise Protocol Framework session: one AEAD key
//! and a 64-bit nonce counter. It provides:
//!
//! - **Nonce discipline**: the counter advances exactly once per successful
//!   keyed operation and never on failure
//! - **Fail-closed decryption**: forged or corrupted messages never change
//!   state
//! - **Overflow protection**: `MAX_NONCE` is reserved and never used for a
//!   message
//! - **Rekeying**: `REKEY(k)` without a fresh key exchange
//! - **Key hygiene**: key bytes are zeroized on replacement, disposal and drop
//!
//! ## Feature Flags
//!
//! - `chachapoly` (default): the Noise `ChaChaPoly` primitive
//!
//! ## Modules
//!
//! - [`core`]: `Cipher` trait, constants, and error types
//! - [`crypto`]: `CipherState`, keys, and primitives
//!
//! ## Example Usage
//!
//! ```rust
//! # #[cfg(feature = "chachapoly")]
//! # fn main() -> Result<(), noise_cipherstate::CryptoError> {
//! use noise_cipherstate::prelude::*;
//!
//! let mut alice = CipherState::with_key(ChaChaPoly, CipherKey::from_bytes([0x42; KEY_SIZE]));
//! let mut bob = CipherState::with_key(ChaChaPoly, CipherKey::from_bytes([0x42; KEY_SIZE]));
//!
//! let ciphertext = alice.encrypt_with_ad_to_vec(b"header", b"ping")?;
//! assert_eq!(ciphertext.len(), 4 + CHACHAPOLY_TAG_SIZE);
//!
//! let plaintext = bob.decrypt_with_ad_to_vec(b"header", &ciphertext)?;
//! assert_eq!(plaintext, b"ping");
//! assert_eq!(bob.nonce(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "chachapoly"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core module (always included)
pub mod core;

// Crypto layer
pub mod crypto;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::crypto::*;
}

// Re-export commonly used items at crate root
pub use crate::core::{Cipher, CryptoError, Result};
pub use crate::crypto::{CipherKey, CipherState};

#[cfg(feature = "chachapoly")]
pub use crate::crypto::ChaChaPoly;

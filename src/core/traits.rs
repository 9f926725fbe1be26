//! Core traits for the CipherState.
//!
//! [`Cipher`] is the AEAD primitive boundary: the CipherState owns the key
//! and the counter, the primitive only transforms bytes.

use zeroize::Zeroizing;

use super::constants::{KEY_SIZE, MAX_NONCE};
use super::error::{CryptoError, Result};
use crate::crypto::CipherKey;

/// An AEAD primitive usable by a Noise CipherState.
///
/// Implementations are deterministic functions of their inputs. `encrypt`
/// writes `plaintext.len() + TAG_SIZE` bytes (ciphertext followed by the
/// tag); `decrypt` writes `ciphertext.len() - TAG_SIZE` bytes and MUST NOT
/// leave unauthenticated plaintext in `out` when it fails.
///
/// # Example
///
/// ```ignore
/// struct Xor;
///
/// impl Cipher for Xor {
///     const NAME: &'static str = "Xor";
///     const TAG_SIZE: usize = 0;
///
///     fn encrypt(&self, key: &[u8; 32], _n: u64, _ad: &[u8], pt: &[u8], out: &mut [u8]) -> Result<usize> {
///         for (i, b) in pt.iter().enumerate() {
///             out[i] = b ^ key[i % 32];
///         }
///         Ok(pt.len())
///     }
///
///     fn decrypt(&self, key: &[u8; 32], n: u64, ad: &[u8], ct: &[u8], out: &mut [u8]) -> Result<usize> {
///         self.encrypt(key, n, ad, ct, out)
///     }
/// }
/// ```
pub trait Cipher {
    /// Noise cipher name (e.g. "ChaChaPoly").
    const NAME: &'static str;

    /// Authentication tag size appended to every ciphertext.
    const TAG_SIZE: usize;

    /// Encrypt `plaintext` under `key` and `nonce`, authenticating `ad`.
    ///
    /// The caller guarantees `out.len() >= plaintext.len() + TAG_SIZE`.
    ///
    /// # Returns
    /// Number of bytes written to `out`.
    fn encrypt(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: u64,
        ad: &[u8],
        plaintext: &[u8],
        out: &mut [u8],
    ) -> Result<usize>;

    /// Verify and decrypt `ciphertext` under `key` and `nonce`.
    ///
    /// The caller guarantees `ciphertext.len() >= TAG_SIZE` and
    /// `out.len() >= ciphertext.len() - TAG_SIZE`.
    ///
    /// # Errors
    /// Returns `AuthenticationFailed` if the tag does not verify.
    fn decrypt(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: u64,
        ad: &[u8],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<usize>;

    /// Derive a replacement key from `key` (Noise `REKEY(k)`).
    ///
    /// The default returns the first `KEY_SIZE` bytes of
    /// `ENCRYPT(k, MAX_NONCE, [], zeros[KEY_SIZE])`. Ciphers with a dedicated
    /// rekey function may override it; peers must agree on the choice.
    fn rekey(&self, key: &[u8; KEY_SIZE]) -> Result<CipherKey> {
        let zeros = [0u8; KEY_SIZE];
        let mut block = Zeroizing::new(vec![0u8; KEY_SIZE + Self::TAG_SIZE]);
        self.encrypt(key, MAX_NONCE, &[], &zeros, &mut block[..])?;

        CipherKey::from_slice(&block[..KEY_SIZE]).ok_or(CryptoError::EncryptionFailed)
    }
}

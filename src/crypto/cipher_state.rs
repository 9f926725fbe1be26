//! Noise CipherState
//!
//! A [`CipherState`] owns one symmetric key and a 64-bit nonce counter for a
//! single session direction. Per Noise §5.1:
//! - With no key installed, encryption and decryption are the identity
//! - The counter advances by one after every successful keyed operation
//! - `MAX_NONCE` is reserved; reaching it exhausts the key
//! - Failed operations leave the key and counter untouched
//!
//! All validation runs before the key, the counter, or the primitive is
//! touched, so a failed call is a no-op on state.

use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use crate::core::{Cipher, CryptoError, Result, MAX_NONCE};

use super::keys::CipherKey;

/// Key slot of a [`CipherState`].
enum KeySlot {
    /// No key installed; operations pass through.
    Empty,
    /// Key installed; operations are encrypted and authenticated.
    Keyed(CipherKey),
    /// Key erased by `dispose`; terminal.
    Disposed,
}

/// Symmetric state for one direction of a Noise session.
///
/// Not `Clone` and not internally synchronized: every mutating operation
/// takes `&mut self`, so one owner drives it at a time.
pub struct CipherState<C: Cipher> {
    /// AEAD primitive
    cipher: C,
    /// Installed key, if any
    key: KeySlot,
    /// Next nonce to use
    nonce: u64,
}

impl<C: Cipher> CipherState<C> {
    /// Create an empty CipherState (no key installed).
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            key: KeySlot::Empty,
            nonce: 0,
        }
    }

    /// Create a CipherState with `key` installed and the counter at zero.
    pub fn with_key(cipher: C, key: CipherKey) -> Self {
        let mut state = Self::new(cipher);
        state.initialize_key(Some(key));
        state
    }

    /// Install `key` (or clear keying with `None`) and reset the counter.
    ///
    /// Any previously held key is zeroized first. A disposed state stays
    /// disposed.
    pub fn initialize_key(&mut self, key: Option<CipherKey>) {
        if matches!(self.key, KeySlot::Disposed) {
            warn!(cipher = C::NAME, "initialize_key on disposed cipher state ignored");
            return;
        }

        self.erase_key();
        self.key = match key {
            Some(key) => KeySlot::Keyed(key),
            None => KeySlot::Empty,
        };
        self.nonce = 0;
        trace!(cipher = C::NAME, keyed = self.has_key(), "cipher state key initialized");
    }

    /// Whether a key is installed.
    pub fn has_key(&self) -> bool {
        matches!(self.key, KeySlot::Keyed(_))
    }

    /// Whether `dispose` has been called.
    pub fn is_disposed(&self) -> bool {
        matches!(self.key, KeySlot::Disposed)
    }

    /// The next nonce to be used.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Overwrite the nonce counter.
    ///
    /// Used to resynchronize with an out-of-order peer. The value is not
    /// checked against `MAX_NONCE`.
    pub fn set_nonce(&mut self, nonce: u64) {
        trace!(cipher = C::NAME, nonce, "cipher state nonce set");
        self.nonce = nonce;
    }

    /// Encrypt `plaintext` into `out`, authenticating `ad`.
    ///
    /// With a key installed, writes `plaintext.len() + C::TAG_SIZE` bytes and
    /// advances the counter. Without one, copies `plaintext` verbatim.
    ///
    /// # Errors
    /// - `NonceExhausted` if the counter equals `MAX_NONCE`
    /// - `BufferTooSmall` if `out` cannot hold the result
    pub fn encrypt_with_ad(
        &mut self,
        ad: &[u8],
        plaintext: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        self.check_nonce()?;

        let key = match &self.key {
            KeySlot::Keyed(key) => key,
            KeySlot::Empty | KeySlot::Disposed => {
                check_capacity(plaintext.len(), out)?;
                return Ok(pass_through(plaintext, out));
            }
        };

        check_capacity(plaintext.len() + C::TAG_SIZE, out)?;
        let written = self
            .cipher
            .encrypt(key.as_bytes(), self.nonce, ad, plaintext, out)?;
        self.nonce += 1;
        Ok(written)
    }

    /// Verify and decrypt `ciphertext` into `out`, authenticating `ad`.
    ///
    /// With a key installed, writes `ciphertext.len() - C::TAG_SIZE` bytes and
    /// advances the counter. Without one, copies `ciphertext` verbatim.
    ///
    /// # Errors
    /// - `NonceExhausted` if the counter equals `MAX_NONCE`
    /// - `AuthenticationFailed` if the tag does not verify (or the input is
    ///   shorter than a tag); the counter is unchanged
    /// - `BufferTooSmall` if `out` cannot hold the result
    pub fn decrypt_with_ad(
        &mut self,
        ad: &[u8],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        self.check_nonce()?;

        let key = match &self.key {
            KeySlot::Keyed(key) => key,
            KeySlot::Empty | KeySlot::Disposed => {
                check_capacity(ciphertext.len(), out)?;
                return Ok(pass_through(ciphertext, out));
            }
        };

        let Some(len) = ciphertext.len().checked_sub(C::TAG_SIZE) else {
            debug!(cipher = C::NAME, len = ciphertext.len(), "ciphertext shorter than tag");
            return Err(CryptoError::AuthenticationFailed);
        };
        check_capacity(len, out)?;

        match self.cipher.decrypt(key.as_bytes(), self.nonce, ad, ciphertext, out) {
            Ok(written) => {
                self.nonce += 1;
                Ok(written)
            }
            Err(err) => {
                debug!(cipher = C::NAME, nonce = self.nonce, %err, "decryption rejected");
                Err(err)
            }
        }
    }

    /// Encrypt into a freshly allocated buffer.
    ///
    /// Same semantics as [`encrypt_with_ad`](Self::encrypt_with_ad).
    pub fn encrypt_with_ad_to_vec(&mut self, ad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let tag = if self.has_key() { C::TAG_SIZE } else { 0 };
        let mut out = vec![0u8; plaintext.len() + tag];
        let written = self.encrypt_with_ad(ad, plaintext, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    /// Decrypt into a freshly allocated buffer.
    ///
    /// Same semantics as [`decrypt_with_ad`](Self::decrypt_with_ad).
    pub fn decrypt_with_ad_to_vec(&mut self, ad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let tag = if self.has_key() { C::TAG_SIZE } else { 0 };
        let mut out = vec![0u8; ciphertext.len().saturating_sub(tag)];
        let written = self.decrypt_with_ad(ad, ciphertext, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    /// Replace the key with `REKEY(k)`, leaving the counter unchanged.
    ///
    /// With no key installed, derives from the all-zero key and installs the
    /// result. The old key is zeroized. Still allowed once the counter has
    /// reached `MAX_NONCE`.
    ///
    /// # Errors
    /// Propagates a primitive failure; the old key is kept in that case.
    /// A disposed state is left untouched and reports `Ok(())`; check
    /// [`is_disposed`](Self::is_disposed) to tell the two apart.
    pub fn rekey(&mut self) -> Result<()> {
        let derived = match &self.key {
            KeySlot::Keyed(key) => self.cipher.rekey(key.as_bytes())?,
            KeySlot::Empty => self.cipher.rekey(CipherKey::zeroed().as_bytes())?,
            KeySlot::Disposed => {
                warn!(cipher = C::NAME, "rekey on disposed cipher state ignored");
                return Ok(());
            }
        };

        self.erase_key();
        self.key = KeySlot::Keyed(derived);
        trace!(cipher = C::NAME, nonce = self.nonce, "cipher state rekeyed");
        Ok(())
    }

    /// Zeroize the key and enter the terminal disposed state.
    ///
    /// Idempotent. Afterwards the state behaves as keyless and must not be
    /// used for further protocol messages.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            return;
        }
        self.erase_key();
        self.key = KeySlot::Disposed;
        trace!(cipher = C::NAME, "cipher state disposed");
    }

    /// Guard shared by encrypt and decrypt.
    fn check_nonce(&self) -> Result<()> {
        if self.nonce == MAX_NONCE {
            warn!(cipher = C::NAME, "nonce counter exhausted");
            return Err(CryptoError::NonceExhausted);
        }
        Ok(())
    }

    /// Zeroize the installed key in place, leaving the slot empty.
    fn erase_key(&mut self) {
        if let KeySlot::Keyed(key) = &mut self.key {
            key.zeroize();
        }
        self.key = KeySlot::Empty;
    }
}

impl<C: Cipher + Default> Default for CipherState<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Cipher> Drop for CipherState<C> {
    fn drop(&mut self) {
        self.erase_key();
    }
}

impl<C: Cipher> std::fmt::Debug for CipherState<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherState")
            .field("cipher", &C::NAME)
            .field("has_key", &self.has_key())
            .field("disposed", &self.is_disposed())
            .field("nonce", &self.nonce)
            .finish()
    }
}

fn check_capacity(needed: usize, out: &[u8]) -> Result<()> {
    if out.len() < needed {
        return Err(CryptoError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }
    Ok(())
}

fn pass_through(input: &[u8], out: &mut [u8]) -> usize {
    out[..input.len()].copy_from_slice(input);
    input.len()
}

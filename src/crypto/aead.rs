//! ChaCha20-Poly1305 AEAD primitive
//!
//! Per Noise §12.3, `ChaChaPoly` is the RFC 8439 construction with a 96-bit
//! nonce built from the 64-bit counter (see [`super::nonce`]). Ciphertexts
//! carry a 16-byte Poly1305 tag appended to the encrypted payload.

use chacha20poly1305::{
    aead::{AeadInPlace, KeyInit},
    ChaCha20Poly1305, Nonce, Tag,
};
use zeroize::Zeroize;

use crate::core::{Cipher, CryptoError, Result, CHACHAPOLY_NAME, CHACHAPOLY_TAG_SIZE, KEY_SIZE};

use super::nonce::encode_nonce;

/// The Noise `ChaChaPoly` cipher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChaChaPoly;

impl Cipher for ChaChaPoly {
    const NAME: &'static str = CHACHAPOLY_NAME;
    const TAG_SIZE: usize = CHACHAPOLY_TAG_SIZE;

    fn encrypt(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: u64,
        ad: &[u8],
        plaintext: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        let needed = plaintext.len() + CHACHAPOLY_TAG_SIZE;
        if out.len() < needed {
            return Err(CryptoError::BufferTooSmall {
                needed,
                available: out.len(),
            });
        }

        let cipher = ChaCha20Poly1305::new(key.into());
        let nonce = encode_nonce(nonce);

        let (body, tag_out) = out[..needed].split_at_mut(plaintext.len());
        body.copy_from_slice(plaintext);
        let tag = cipher
            .encrypt_in_place_detached(Nonce::from_slice(&nonce), ad, body)
            .map_err(|_| CryptoError::EncryptionFailed)?;
        tag_out.copy_from_slice(&tag);

        Ok(needed)
    }

    fn decrypt(
        &self,
        key: &[u8; KEY_SIZE],
        nonce: u64,
        ad: &[u8],
        ciphertext: &[u8],
        out: &mut [u8],
    ) -> Result<usize> {
        if ciphertext.len() < CHACHAPOLY_TAG_SIZE {
            return Err(CryptoError::AuthenticationFailed);
        }
        let len = ciphertext.len() - CHACHAPOLY_TAG_SIZE;
        if out.len() < len {
            return Err(CryptoError::BufferTooSmall {
                needed: len,
                available: out.len(),
            });
        }

        let cipher = ChaCha20Poly1305::new(key.into());
        let nonce = encode_nonce(nonce);

        let (body, tag) = ciphertext.split_at(len);
        let plaintext = &mut out[..len];
        plaintext.copy_from_slice(body);

        if cipher
            .decrypt_in_place_detached(
                Nonce::from_slice(&nonce),
                ad,
                plaintext,
                Tag::from_slice(tag),
            )
            .is_err()
        {
            plaintext.zeroize();
            return Err(CryptoError::AuthenticationFailed);
        }

        Ok(len)
    }
}

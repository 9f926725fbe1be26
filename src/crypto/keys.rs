//! Symmetric key handling
//!
//! A [`CipherKey`] is owned by exactly one CipherState and is zeroized on
//! drop, on replacement, and on disposal.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::KEY_SIZE;

/// A 32-byte symmetric key.
///
/// Not `Clone`: key material moves into a CipherState and never leaves it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CipherKey {
    key: [u8; KEY_SIZE],
}

impl CipherKey {
    /// Create a key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Copy a key out of a slice.
    ///
    /// Returns `None` unless `bytes` is exactly `KEY_SIZE` long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != KEY_SIZE {
            return None;
        }
        // Copy straight into the zeroizing struct, no loose stack copy
        let mut key = Self::zeroed();
        key.key.copy_from_slice(bytes);
        Some(key)
    }

    /// The all-zero key used when rekeying with no key installed.
    pub fn zeroed() -> Self {
        Self {
            key: [0u8; KEY_SIZE],
        }
    }

    /// Get the raw key bytes.
    ///
    /// # Security
    /// Only the CipherState and its primitive may see key material.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CipherKey(<redacted>)")
    }
}

impl From<[u8; KEY_SIZE]> for CipherKey {
    fn from(key: [u8; KEY_SIZE]) -> Self {
        Self::from_bytes(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroize_clears_bytes() {
        let mut key = CipherKey::from_bytes([0xAB; KEY_SIZE]);
        key.zeroize();
        assert_eq!(key.as_bytes(), &[0u8; KEY_SIZE]);
    }

    #[test]
    fn test_from_slice_copies_bytes() {
        let key = CipherKey::from_slice(&[0x5C; KEY_SIZE]).unwrap();
        assert_eq!(key.as_bytes(), &[0x5C; KEY_SIZE]);
    }

    #[test]
    fn test_from_slice_length() {
        assert!(CipherKey::from_slice(&[0x01; KEY_SIZE]).is_some());
        assert!(CipherKey::from_slice(&[0x01; KEY_SIZE - 1]).is_none());
        assert!(CipherKey::from_slice(&[0x01; KEY_SIZE + 1]).is_none());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = CipherKey::from_bytes([0x42; KEY_SIZE]);
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("42"));
        assert!(rendered.contains("redacted"));
    }
}

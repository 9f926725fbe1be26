//! Core traits, constants, and error types.

mod constants;
mod error;
mod traits;

pub use constants::*;
pub use error::{CryptoError, Result};
pub use traits::Cipher;

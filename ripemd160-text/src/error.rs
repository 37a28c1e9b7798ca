use ripemd160::LengthError;
use thiserror::Error;

/// Errors produced while hashing or rendering text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input does not fit in the RIPEMD-160 length field.
    #[error(transparent)]
    Length(#[from] LengthError),

    /// An output alphabet needs at least two characters.
    #[error("alphabet must have at least two characters, got {0}")]
    AlphabetTooShort(usize),
}

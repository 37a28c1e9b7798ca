use core::fmt;

/// Error returned when the bit length of a message does not fit in the
/// 64-bit length field of the final block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LengthError;

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("message bit length exceeds the 64-bit length field")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthError {}

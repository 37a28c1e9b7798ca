use base64::{engine::general_purpose, Engine as _};
use hex::DisplayHex;

use crate::Error;

/// Letter case of hexadecimal digits.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HexCase {
    /// `0-9a-f`
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}

/// Whether base64 output carries trailing `=` characters.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Base64Padding {
    /// No padding characters.
    #[default]
    Omit,
    /// RFC 4648 `=` padding.
    Pad,
}

/// Renders `bytes` as hexadecimal, two digits per byte.
pub fn to_hex(bytes: &[u8], case: HexCase) -> String {
    match case {
        HexCase::Lower => bytes.to_lower_hex_string(),
        HexCase::Upper => bytes.to_upper_hex_string(),
    }
}

/// Renders `bytes` with the standard base64 alphabet.
pub fn to_base64(bytes: &[u8], padding: Base64Padding) -> String {
    match padding {
        Base64Padding::Omit => general_purpose::STANDARD_NO_PAD.encode(bytes),
        Base64Padding::Pad => general_purpose::STANDARD.encode(bytes),
    }
}

/// Renders `bytes`, read as a big-endian number, in the positional
/// system whose digits are the characters of `alphabet`.
///
/// The result is left padded with the first character of `alphabet` to
/// the number of digits needed for any input of the same length, so
/// `to_alphabet(b, "0123456789abcdef")` equals `to_hex(b, HexCase::Lower)`.
pub fn to_alphabet(bytes: &[u8], alphabet: &str) -> Result<String, Error> {
    let digits: Vec<char> = alphabet.chars().collect();
    if digits.len() < 2 {
        return Err(Error::AlphabetTooShort(digits.len()));
    }
    let base = digits.len() as u64;

    // repeated long division, least significant digit first
    let mut remainders = Vec::new();
    let mut dividend = bytes.to_vec();
    while !dividend.is_empty() {
        let mut quotient = Vec::with_capacity(dividend.len());
        let mut rem = 0u64;
        for &byte in &dividend {
            let x = (rem << 8) | u64::from(byte);
            let q = x / base;
            rem = x % base;
            if !quotient.is_empty() || q > 0 {
                // x < 256 * base, so the quotient digit fits in a byte
                quotient.push(q as u8);
            }
        }
        remainders.push(rem as usize);
        dividend = quotient;
    }

    let full_len = ((bytes.len() * 8) as f64 / (base as f64).log2()).ceil() as usize;
    let mut out = String::with_capacity(full_len);
    for _ in remainders.len()..full_len {
        out.push(digits[0]);
    }
    out.extend(remainders.iter().rev().map(|&r| digits[r]));
    Ok(out)
}

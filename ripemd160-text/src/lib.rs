//! Textual renderings of [RIPEMD-160][1] digests and HMAC-RIPEMD-160 tags.
//!
//! Output format options are explicit arguments; nothing here keeps
//! global state.
//!
//! # Usage
//!
//! ```rust
//! use ripemd160_text::{hex_ripemd160, base64_ripemd160, Base64Padding, HexCase};
//!
//! let hex = hex_ripemd160("abc", HexCase::Lower).unwrap();
//! assert_eq!(hex, "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc");
//!
//! let b64 = base64_ripemd160("abc", Base64Padding::Pad).unwrap();
//! assert_eq!(b64, "jrII9+BdmHqbBEqOmMawh/FaC/w=");
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/RIPEMD

#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use ripemd160;

mod encode;
mod error;

pub use encode::{to_alphabet, to_base64, to_hex, Base64Padding, HexCase};
pub use error::Error;

use ripemd160::{hash, hmac};

/// Hex encoded RIPEMD-160 digest of the UTF-8 bytes of `s`.
pub fn hex_ripemd160(s: &str, case: HexCase) -> Result<String, Error> {
    Ok(to_hex(&hash(s.as_bytes())?, case))
}

/// Base64 encoded RIPEMD-160 digest of the UTF-8 bytes of `s`.
pub fn base64_ripemd160(s: &str, padding: Base64Padding) -> Result<String, Error> {
    Ok(to_base64(&hash(s.as_bytes())?, padding))
}

/// RIPEMD-160 digest of the UTF-8 bytes of `s`, rendered with [`to_alphabet`].
pub fn alphabet_ripemd160(s: &str, alphabet: &str) -> Result<String, Error> {
    to_alphabet(&hash(s.as_bytes())?, alphabet)
}

/// Hex encoded HMAC-RIPEMD-160 of `data` under `key`.
pub fn hex_hmac_ripemd160(key: &str, data: &str, case: HexCase) -> Result<String, Error> {
    Ok(to_hex(&hmac(key.as_bytes(), data.as_bytes())?, case))
}

/// Base64 encoded HMAC-RIPEMD-160 of `data` under `key`.
pub fn base64_hmac_ripemd160(
    key: &str,
    data: &str,
    padding: Base64Padding,
) -> Result<String, Error> {
    Ok(to_base64(&hmac(key.as_bytes(), data.as_bytes())?, padding))
}

/// HMAC-RIPEMD-160 of `data` under `key`, rendered with [`to_alphabet`].
pub fn alphabet_hmac_ripemd160(key: &str, data: &str, alphabet: &str) -> Result<String, Error> {
    to_alphabet(&hmac(key.as_bytes(), data.as_bytes())?, alphabet)
}

/// Checks the `"abc"` test vector.
pub fn self_test() -> bool {
    hex_ripemd160("abc", HexCase::Lower)
        .map(|hex| hex == "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")
        .unwrap_or(false)
}

//! An implementation of the [RIPEMD-160][1] cryptographic hash and of
//! HMAC-RIPEMD-160 ([RFC 2286][2]).
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use ripemd160::{Ripemd160, Digest};
//!
//! // create a RIPEMD-160 hasher instance
//! let mut hasher = Ripemd160::new();
//!
//! // process input message
//! hasher.update(b"Hello world!");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
//! ```
//!
//! One-shot functions report messages too long for the length field
//! instead of wrapping it:
//!
//! ```rust
//! use hex_literal::hex;
//!
//! let digest = ripemd160::hash(b"abc").unwrap();
//! assert_eq!(digest[..], hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"));
//!
//! let tag = ripemd160::hmac(b"Jefe", b"what do ya want for nothing?").unwrap();
//! assert_eq!(tag[..], hex!("dda6c0213a485a9e24f4742064a7f033b43c4069"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/RIPEMD
//! [2]: https://tools.ietf.org/html/rfc2286

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;
use digest::{
    block_buffer::Eager,
    consts::{U20, U64},
    core_api::{
        AlgorithmName, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    HashMarker, Output, Reset,
};

mod block;
mod consts;
mod error;
mod hmac;
mod pad;

pub use block::{compress, Block};
pub use error::LengthError;
pub use hmac::{hmac, HmacRipemd160};
pub use pad::{bit_len, pad, Padded};

use consts::{DIGEST_BUF_LEN, H0};
use pad::{Tail, BLOCK_LEN};

/// Core RIPEMD-160 hasher state.
#[derive(Clone)]
pub struct Ripemd160Core {
    h: [u32; DIGEST_BUF_LEN],
    block_len: u64,
}

impl Ripemd160Core {
    /// Bit length of everything absorbed so far plus `pos` buffered bytes.
    fn bit_len(&self, pos: usize) -> Result<u64, LengthError> {
        self.block_len
            .checked_mul(BLOCK_LEN as u64)
            .and_then(|n| n.checked_add(pos as u64))
            .and_then(|n| n.checked_mul(8))
            .ok_or(LengthError)
    }

    /// Pads the buffered bytes and writes the digest to `out`.
    ///
    /// Fails if the total message length does not fit in the length field.
    /// A [`Ripemd160`] hasher reaches this through [`try_finalize`], which
    /// splits it with `CoreWrapper::decompose`.
    pub fn try_finalize_fixed_core(
        &mut self,
        buffer: &mut Buffer<Self>,
        out: &mut Output<Self>,
    ) -> Result<(), LengthError> {
        let bit_len = self.bit_len(buffer.get_pos())?;
        let mut h = self.h;
        for block in Tail::new(buffer.get_data(), bit_len).blocks() {
            compress(&mut h, block);
        }
        write_digest(&h, out);
        Ok(())
    }
}

impl HashMarker for Ripemd160Core {}

impl BlockSizeUser for Ripemd160Core {
    type BlockSize = U64;
}

impl BufferKindUser for Ripemd160Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Ripemd160Core {
    type OutputSize = U20;
}

impl UpdateCore for Ripemd160Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block]) {
        // saturates so that an overflowing length is caught at finalization
        self.block_len = self.block_len.saturating_add(blocks.len() as u64);
        for block in blocks {
            compress(&mut self.h, block);
        }
    }
}

impl FixedOutputCore for Ripemd160Core {
    /// # Panics
    ///
    /// If the hashed message is 2^64 bits or longer. Use
    /// [`Ripemd160Core::try_finalize_fixed_core`] to handle that case.
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        if let Err(err) = self.try_finalize_fixed_core(buffer, out) {
            panic!("{}", err);
        }
    }
}

impl Default for Ripemd160Core {
    #[inline]
    fn default() -> Self {
        Self {
            h: H0,
            block_len: 0,
        }
    }
}

impl Reset for Ripemd160Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Ripemd160Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160")
    }
}

impl fmt::Debug for Ripemd160Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160Core { ... }")
    }
}

/// RIPEMD-160 hasher state.
pub type Ripemd160 = CoreWrapper<Ripemd160Core>;

fn write_digest(h: &[u32; DIGEST_BUF_LEN], out: &mut Output<Ripemd160Core>) {
    for (chunk, v) in out.chunks_exact_mut(4).zip(h.iter()) {
        chunk.copy_from_slice(&v.to_le_bytes());
    }
}

/// Finalizes a streaming hasher, reporting an overlong message instead of
/// panicking like [`Digest::finalize`].
pub fn try_finalize(hasher: Ripemd160) -> Result<Output<Ripemd160>, LengthError> {
    let (mut core, mut buffer) = hasher.decompose();
    let mut out = Output::<Ripemd160>::default();
    core.try_finalize_fixed_core(&mut buffer, &mut out)?;
    Ok(out)
}

/// Computes the RIPEMD-160 digest of `data`.
pub fn hash(data: &[u8]) -> Result<Output<Ripemd160>, LengthError> {
    let h = pad(data)?.fold(H0, |mut h, block| {
        compress(&mut h, &block);
        h
    });
    let mut out = Output::<Ripemd160>::default();
    write_digest(&h, &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturated_block_counter() {
        let mut core = Ripemd160Core::default();
        core.block_len = u64::MAX - 1;
        core.update_blocks(&[Block::default(), Block::default()]);
        assert_eq!(core.block_len, u64::MAX);

        let mut buffer = Buffer::<Ripemd160Core>::default();
        let mut out = Output::<Ripemd160Core>::default();
        assert_eq!(
            core.try_finalize_fixed_core(&mut buffer, &mut out),
            Err(LengthError)
        );
    }

    #[test]
    fn length_field_limit() {
        let mut core = Ripemd160Core::default();
        // 2^55 blocks of 512 bits is exactly 2^64 bits
        core.block_len = 1 << 55;
        assert_eq!(core.bit_len(0), Err(LengthError));

        core.block_len = (1 << 55) - 1;
        assert_eq!(core.bit_len(63), Ok(u64::MAX - 7));
        assert_eq!(core.bit_len(0), Ok(u64::MAX - 511));
    }

    #[test]
    fn try_finalize_streaming() {
        let mut core = Ripemd160Core::default();
        core.block_len = u64::MAX;
        let hasher = Ripemd160::from_core(core);
        assert_eq!(try_finalize(hasher), Err(LengthError));

        let mut hasher = Ripemd160::default();
        Digest::update(&mut hasher, b"abc");
        assert_eq!(try_finalize(hasher), hash(b"abc"));
    }

    #[test]
    #[should_panic(expected = "64-bit length field")]
    fn infallible_finalize_panics() {
        let mut core = Ripemd160Core::default();
        core.block_len = u64::MAX;
        let mut buffer = Buffer::<Ripemd160Core>::default();
        let mut out = Output::<Ripemd160Core>::default();
        core.finalize_fixed_core(&mut buffer, &mut out);
    }
}

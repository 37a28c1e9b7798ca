use core::{fmt, mem, slice};
use digest::{
    consts::{U20, U64},
    core_api::UpdateCore,
    crypto_common::KeySizeUser,
    FixedOutput, FixedOutputReset, InvalidLength, Key, KeyInit, MacMarker, Output,
    OutputSizeUser, Reset, Update,
};

use crate::{
    block::Block,
    hash,
    pad::{bit_len, BLOCK_LEN},
    LengthError, Ripemd160, Ripemd160Core,
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Zero pads `key` to one block, hashing it first if it is longer than
/// a block.
fn block_key(key: &[u8]) -> Result<Block, LengthError> {
    let mut buf = Block::default();
    if key.len() <= buf.len() {
        buf[..key.len()].copy_from_slice(key);
    } else {
        let h = hash(key)?;
        buf[..h.len()].copy_from_slice(&h);
    }
    Ok(buf)
}

/// HMAC-RIPEMD-160 state.
///
/// Implements [`digest::Mac`] through [`KeyInit`], [`Update`],
/// [`FixedOutput`] and [`MacMarker`]. Keys of any length are accepted by
/// `new_from_slice`.
#[derive(Clone)]
pub struct HmacRipemd160 {
    ipad_core: Ripemd160Core,
    opad_core: Ripemd160Core,
    inner: Ripemd160,
}

impl HmacRipemd160 {
    fn from_block_key(key: &Block) -> Self {
        let mut ipad = key.clone();
        let mut opad = key.clone();
        for (i, o) in ipad.iter_mut().zip(opad.iter_mut()) {
            *i ^= IPAD;
            *o ^= OPAD;
        }

        let mut ipad_core = Ripemd160Core::default();
        let mut opad_core = Ripemd160Core::default();
        ipad_core.update_blocks(slice::from_ref(&ipad));
        opad_core.update_blocks(slice::from_ref(&opad));

        Self {
            inner: Ripemd160::from_core(ipad_core.clone()),
            ipad_core,
            opad_core,
        }
    }

    fn finalize_outer(opad_core: Ripemd160Core, inner: Ripemd160, out: &mut Output<Self>) {
        let mut outer = Ripemd160::from_core(opad_core);
        outer.update(&inner.finalize_fixed());
        outer.finalize_into(out);
    }
}

impl KeySizeUser for HmacRipemd160 {
    type KeySize = U64;
}

impl OutputSizeUser for HmacRipemd160 {
    type OutputSize = U20;
}

impl MacMarker for HmacRipemd160 {}

impl KeyInit for HmacRipemd160 {
    #[inline]
    fn new(key: &Key<Self>) -> Self {
        Self::from_block_key(key)
    }

    #[inline]
    fn new_from_slice(key: &[u8]) -> Result<Self, InvalidLength> {
        block_key(key)
            .map(|key| Self::from_block_key(&key))
            .map_err(|_| InvalidLength)
    }
}

impl Update for HmacRipemd160 {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }
}

impl FixedOutput for HmacRipemd160 {
    #[inline]
    fn finalize_into(self, out: &mut Output<Self>) {
        Self::finalize_outer(self.opad_core, self.inner, out);
    }
}

impl Reset for HmacRipemd160 {
    #[inline]
    fn reset(&mut self) {
        self.inner = Ripemd160::from_core(self.ipad_core.clone());
    }
}

impl FixedOutputReset for HmacRipemd160 {
    #[inline]
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let keyed = Ripemd160::from_core(self.ipad_core.clone());
        let inner = mem::replace(&mut self.inner, keyed);
        Self::finalize_outer(self.opad_core.clone(), inner, out);
    }
}

impl fmt::Debug for HmacRipemd160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HmacRipemd160 { ... }")
    }
}

/// Bit length of the inner hash input: one key block followed by `len`
/// message bytes.
fn inner_bit_len(len: usize) -> Result<u64, LengthError> {
    bit_len(len)?
        .checked_add(8 * BLOCK_LEN as u64)
        .ok_or(LengthError)
}

/// Computes HMAC-RIPEMD-160 of `data` under `key`.
///
/// Keys longer than 64 bytes are replaced by their RIPEMD-160 digest.
pub fn hmac(key: &[u8], data: &[u8]) -> Result<Output<Ripemd160>, LengthError> {
    inner_bit_len(data.len())?;

    let mut mac = HmacRipemd160::from_block_key(&block_key(key)?);
    mac.update(data);
    Ok(mac.finalize_fixed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_key_is_zero_padded() {
        let key = block_key(b"key").unwrap();
        assert_eq!(&key[..3], b"key");
        assert!(key[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn block_sized_key_is_kept() {
        let key = block_key(&[0x5a; 64]).unwrap();
        assert!(key.iter().all(|&b| b == 0x5a));
    }

    #[test]
    fn inner_length_field() {
        assert_eq!(inner_bit_len(0), Ok(512));
        assert_eq!(inner_bit_len(3), Ok(536));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn inner_length_field_overflow() {
        // the key block pushes an otherwise valid length past 2^64 bits
        assert_eq!(inner_bit_len((1 << 61) - 64), Err(LengthError));
        assert_eq!(inner_bit_len((1 << 61) - 65), Ok(u64::MAX - 7));
        assert_eq!(bit_len((1 << 61) - 64), Ok(u64::MAX - 511));
    }

    #[test]
    fn long_key_is_hashed() {
        let long = [0xaa; 65];
        let key = block_key(&long).unwrap();
        assert_eq!(key[..20], hash(&long).unwrap()[..]);
        assert!(key[20..].iter().all(|&b| b == 0));
    }
}

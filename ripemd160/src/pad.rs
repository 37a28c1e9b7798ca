use core::{convert::TryFrom, slice::ChunksExact};

use crate::{block::Block, LengthError};

pub(crate) const BLOCK_LEN: usize = 64;
const LEN_FIELD: usize = 8;

/// Bit length of a `len`-byte message as stored in the length field.
///
/// Fails if the value does not fit in 64 bits.
pub fn bit_len(len: usize) -> Result<u64, LengthError> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(LengthError)
}

/// The one or two blocks closing a padded message.
#[derive(Clone)]
pub(crate) struct Tail {
    buf: [u8; 2 * BLOCK_LEN],
    len: usize,
}

impl Tail {
    /// Pads the trailing partial block `rest` of a message of `bit_len` bits.
    pub(crate) fn new(rest: &[u8], bit_len: u64) -> Self {
        debug_assert!(rest.len() < BLOCK_LEN);
        let pos = rest.len();
        let len = if pos + 1 + LEN_FIELD <= BLOCK_LEN { 1 } else { 2 };

        let mut buf = [0u8; 2 * BLOCK_LEN];
        buf[..pos].copy_from_slice(rest);
        buf[pos] = 0x80;
        let end = len * BLOCK_LEN;
        buf[end - LEN_FIELD..end].copy_from_slice(&bit_len.to_le_bytes());
        Self { buf, len }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn block(&self, i: usize) -> Option<&Block> {
        if i < self.len {
            Some(Block::from_slice(&self.buf[i * BLOCK_LEN..(i + 1) * BLOCK_LEN]))
        } else {
            None
        }
    }

    pub(crate) fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.buf[..self.len * BLOCK_LEN]
            .chunks_exact(BLOCK_LEN)
            .map(Block::from_slice)
    }
}

/// Iterator over the padded blocks of a message, see [`pad`].
#[derive(Clone)]
pub struct Padded<'a> {
    body: ChunksExact<'a, u8>,
    tail: Tail,
    next_tail: usize,
}

impl Iterator for Padded<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(chunk) = self.body.next() {
            return Some(Block::clone_from_slice(chunk));
        }
        let block = self.tail.block(self.next_tail)?.clone();
        self.next_tail += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.body.len() + self.tail.len() - self.next_tail;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Padded<'_> {}

/// Splits `msg` into 512-bit blocks, appending the `0x80` marker, zero
/// bytes and the little-endian 64-bit bit length.
pub fn pad(msg: &[u8]) -> Result<Padded<'_>, LengthError> {
    let bit_len = bit_len(msg.len())?;
    let body = msg.chunks_exact(BLOCK_LEN);
    let tail = Tail::new(body.remainder(), bit_len);
    Ok(Padded {
        body,
        tail,
        next_tail: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_block_count() {
        assert_eq!(Tail::new(&[], 0).len(), 1);
        assert_eq!(Tail::new(&[0; 55], 440).len(), 1);
        assert_eq!(Tail::new(&[0; 56], 448).len(), 2);
        assert_eq!(Tail::new(&[0; 63], 504).len(), 2);
    }

    #[test]
    fn tail_layout() {
        let tail = Tail::new(b"abc", 24);
        let block = tail.block(0).unwrap();
        assert_eq!(&block[..4], b"abc\x80");
        assert!(block[4..56].iter().all(|&b| b == 0));
        assert_eq!(&block[56..], &[24, 0, 0, 0, 0, 0, 0, 0]);
        assert!(tail.block(1).is_none());
        assert_eq!(tail.blocks().count(), 1);
    }

    #[test]
    fn length_field_high_word() {
        let tail = Tail::new(&[], 0x0102_0304_0506_0708);
        let block = tail.block(0).unwrap();
        assert_eq!(&block[56..], &[8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn bit_len_overflow() {
        assert_eq!(bit_len(usize::MAX), Err(LengthError));
        assert_eq!(bit_len(1 << 61), Err(LengthError));
        assert_eq!(bit_len((1 << 61) - 1), Ok(u64::MAX - 7));
    }
}

use digest::{consts::U64, generic_array::GenericArray};

use crate::consts::{
    DIGEST_BUF_LEN, K_LEFT, K_RIGHT, ROUNDS, R_LEFT, R_RIGHT, S_LEFT, S_RIGHT, WORK_BUF_LEN,
};

/// 512-bit message block.
pub type Block = GenericArray<u8, U64>;

/// One of the five 16-step segments of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Stage {
    #[inline(always)]
    fn of_step(j: usize) -> Self {
        match j / 16 {
            0 => Stage::First,
            1 => Stage::Second,
            2 => Stage::Third,
            3 => Stage::Fourth,
            4 => Stage::Fifth,
            _ => unreachable!("step {} is outside of 0..{}", j, ROUNDS),
        }
    }

    #[inline(always)]
    fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn f(self, x: u32, y: u32, z: u32) -> u32 {
        match self {
            Stage::First => x ^ y ^ z,
            Stage::Second => (x & y) | (!x & z),
            Stage::Third => (x | !y) ^ z,
            Stage::Fourth => (x & z) | (y & !z),
            Stage::Fifth => x ^ (y | !z),
        }
    }
}

/// Running `(A, B, C, D, E)` quintuple of one line.
#[derive(Copy, Clone)]
struct Line {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    e: u32,
}

impl Line {
    #[inline(always)]
    fn new(h: &[u32; DIGEST_BUF_LEN]) -> Self {
        Self {
            a: h[0],
            b: h[1],
            c: h[2],
            d: h[3],
            e: h[4],
        }
    }

    #[inline(always)]
    fn step(&mut self, f: Stage, word: u32, k: u32, s: u32) {
        let t = self
            .a
            .wrapping_add(f.f(self.b, self.c, self.d))
            .wrapping_add(word)
            .wrapping_add(k)
            .rotate_left(s)
            .wrapping_add(self.e);
        self.a = self.e;
        self.e = self.d;
        self.d = self.c.rotate_left(10);
        self.c = self.b;
        self.b = t;
    }
}

/// RIPEMD-160 compression function.
///
/// Runs the left and right lines over `block` and mixes their results
/// into `h`.
pub fn compress(h: &mut [u32; DIGEST_BUF_LEN], block: &Block) {
    let mut x = [0u32; WORK_BUF_LEN];
    for (o, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut left = Line::new(h);
    let mut right = Line::new(h);
    for j in 0..ROUNDS {
        let stage = Stage::of_step(j);
        left.step(stage, x[R_LEFT[j]], K_LEFT[stage.index()], S_LEFT[j]);
        // the right line walks the nonlinear functions backwards
        right.step(
            Stage::of_step(ROUNDS - 1 - j),
            x[R_RIGHT[j]],
            K_RIGHT[stage.index()],
            S_RIGHT[j],
        );
    }

    let t = h[1].wrapping_add(left.c).wrapping_add(right.d);
    h[1] = h[2].wrapping_add(left.d).wrapping_add(right.e);
    h[2] = h[3].wrapping_add(left.e).wrapping_add(right.a);
    h[3] = h[4].wrapping_add(left.a).wrapping_add(right.b);
    h[4] = h[0].wrapping_add(left.b).wrapping_add(right.c);
    h[0] = t;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::H0;

    #[test]
    fn stage_boundaries() {
        assert_eq!(Stage::of_step(0), Stage::First);
        assert_eq!(Stage::of_step(15), Stage::First);
        assert_eq!(Stage::of_step(16), Stage::Second);
        assert_eq!(Stage::of_step(47), Stage::Third);
        assert_eq!(Stage::of_step(48), Stage::Fourth);
        assert_eq!(Stage::of_step(79), Stage::Fifth);
        assert_eq!(Stage::Fifth.index(), 4);
    }

    #[test]
    #[should_panic]
    fn step_out_of_range() {
        Stage::of_step(ROUNDS);
    }

    #[test]
    fn nonlinear_functions() {
        let (x, y, z) = (0xf0f0_f0f0, 0xcccc_cccc, 0xaaaa_aaaa);
        assert_eq!(Stage::First.f(x, y, z), 0x9696_9696);
        assert_eq!(Stage::Second.f(x, y, z), 0xcaca_caca);
        assert_eq!(Stage::Third.f(x, y, z), 0x5959_5959);
        assert_eq!(Stage::Fourth.f(x, y, z), 0xe4e4_e4e4);
        assert_eq!(Stage::Fifth.f(x, y, z), 0x2d2d_2d2d);
    }

    #[test]
    fn padded_empty_message() {
        // a lone 0x80 byte followed by a zero length field
        let mut block = Block::default();
        block[0] = 0x80;
        let mut h = H0;
        compress(&mut h, &block);
        assert_eq!(h, [0xa585_119c, 0x54fc_e9c5, 0x9708_2861, 0x48f5_e87e, 0x318d_25b2]);
    }
}

//! The NORX permutation F.

use crate::state::STATE_WORDS;
use crate::word::Word;


/// The non-linear mixing of NORX, an "addition" built from xor, and and shift.
#[inline(always)]
#[allow(non_snake_case)]
pub fn H<W: Word>(x: W, y: W) -> W {
    (x ^ y) ^ ((x & y) << 1)
}

#[inline(always)]
#[allow(non_snake_case)]
fn G<W: Word>(x: &mut [W; STATE_WORDS], a: usize, b: usize, c: usize, d: usize) {
    let [r0, r1, r2, r3] = W::ROTATIONS;

    x[a] = H(x[a], x[b]); x[d] = (x[a] ^ x[d]).rotr(r0);
    x[c] = H(x[c], x[d]); x[b] = (x[b] ^ x[c]).rotr(r1);
    x[a] = H(x[a], x[b]); x[d] = (x[a] ^ x[d]).rotr(r2);
    x[c] = H(x[c], x[d]); x[b] = (x[b] ^ x[c]).rotr(r3);
}

/// One round: a column step followed by a diagonal step.
#[inline]
pub fn round<W: Word>(x: &mut [W; STATE_WORDS]) {
    // column step
    G(x,  0,  4,  8, 12);
    G(x,  1,  5,  9, 13);
    G(x,  2,  6, 10, 14);
    G(x,  3,  7, 11, 15);
    // diagonal step
    G(x,  0,  5, 10, 15);
    G(x,  1,  6, 11, 12);
    G(x,  2,  7,  8, 13);
    G(x,  3,  4,  9, 14);
}

/// F: `rounds` applications of [`round`].
#[inline]
pub fn permute<W: Word>(x: &mut [W; STATE_WORDS], rounds: usize) {
    for _ in 0..rounds {
        round(x);
    }
}

//! Block codec: padding and the byte <-> rate word plumbing.
//!
//! A message is cut into rate-sized blocks. A final block shorter than the
//! rate gets a single marker bit right after the last data bit, then zeros.
//! With little-endian words that marker is the byte `0x01`. A message whose
//! length is a multiple of the rate is not extended by an extra block.

use core::mem;
use zeroize::Zeroizing;
use crate::state::RATE_WORDS;
use crate::word::{ self, Word };


/// The padding marker byte.
pub const MARKER: u8 = 0x01;

/// Rate of the widest profile, in bytes.
pub(crate) const MAX_RATE_BYTES: usize = RATE_WORDS * 8;

/// Stack buffer for one padded block, wiped on drop.
pub(crate) type Block = Zeroizing<[u8; MAX_RATE_BYTES]>;

#[inline]
pub(crate) fn block() -> Block {
    Zeroizing::new([0; MAX_RATE_BYTES])
}

/// Number of blocks a `len` byte message is cut into.
pub fn block_count(len: usize, rate: usize) -> usize {
    len / rate + if len % rate != 0 { 1 } else { 0 }
}

/// Pads `block`, whose first `len` bytes are data.
///
/// # Panics
///
/// If `len` does not leave room for the marker.
pub fn pad(block: &mut [u8], len: usize) {
    assert!(len < block.len(), "no room for the padding marker");

    block[len] = MARKER;
    for b in &mut block[len + 1..] {
        *b = 0;
    }
}

/// Strips the padding from `block`.
///
/// Returns `None` if `block` is not a padded block.
pub fn unpad(block: &[u8]) -> Option<&[u8]> {
    let end = block.iter().rposition(|&b| b != 0)?;

    if block[end] == MARKER {
        Some(&block[..end])
    } else {
        None
    }
}

/// `rate ^= block`
#[inline]
pub(crate) fn absorb<W: Word>(rate: &mut [W; RATE_WORDS], block: &[u8]) {
    assert_eq!(block.len(), W::RATE_BYTES, "block does not cover the rate");

    for (w, chunk) in rate.iter_mut().zip(block.chunks_exact(W::BYTES)) {
        *w ^= W::read_le(chunk);
    }
}

/// `block = rate`
#[inline]
pub(crate) fn squeeze<W: Word>(rate: &[W; RATE_WORDS], block: &mut [u8]) {
    assert_eq!(block.len(), W::RATE_BYTES, "block does not cover the rate");

    word::store(rate, block);
}

/// `rate = block`
#[inline]
pub(crate) fn overwrite<W: Word>(rate: &mut [W; RATE_WORDS], block: &[u8]) {
    assert_eq!(block.len(), W::RATE_BYTES, "block does not cover the rate");

    word::load(rate, block);
}

/// Decrypts a full block in place: `block ^= rate` while `rate` takes the
/// ciphertext, leaving the same rate encryption would have.
#[inline]
pub(crate) fn exchange<W: Word>(rate: &mut [W; RATE_WORDS], block: &mut [u8]) {
    assert_eq!(block.len(), W::RATE_BYTES, "block does not cover the rate");

    for (w, chunk) in rate.iter_mut().zip(block.chunks_exact_mut(W::BYTES)) {
        let s = mem::replace(w, W::read_le(chunk));
        (s ^ *w).write_le(chunk);
    }
}

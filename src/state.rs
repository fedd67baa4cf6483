//! The 4x4 word state and its rate / capacity split.

use arrayref::{ array_ref, array_mut_ref };
use zeroize::{ Zeroize, ZeroizeOnDrop };
use crate::permutation;
use crate::word::Word;


/// Words in the sponge state.
pub const STATE_WORDS: usize = 16;
/// Words of the state that take data.
pub const RATE_WORDS: usize = 12;
/// Words of the state never touched by data.
pub const CAPACITY_WORDS: usize = STATE_WORDS - RATE_WORDS;
/// Words in a key.
pub const KEY_WORDS: usize = 4;
/// Words in a nonce.
pub const NONCE_WORDS: usize = 4;
/// Words in a tag.
pub const TAG_WORDS: usize = 4;

/// Sponge state, row-major.
///
/// Words `0..12` are the rate and words `12..16` the capacity. Callers only
/// ever get fixed-size views of one side, so data can not be xored across the
/// boundary by accident. The words are wiped on drop.
pub(crate) struct State<W: Word>([W; STATE_WORDS]);

impl<W: Word> State<W> {
    #[inline]
    pub(crate) fn new(words: [W; STATE_WORDS]) -> State<W> {
        State(words)
    }

    #[inline]
    pub(crate) fn rate(&self) -> &[W; RATE_WORDS] {
        array_ref!(self.0, 0, RATE_WORDS)
    }

    #[inline]
    pub(crate) fn rate_mut(&mut self) -> &mut [W; RATE_WORDS] {
        array_mut_ref!(self.0, 0, RATE_WORDS)
    }

    #[inline]
    pub(crate) fn capacity_mut(&mut self) -> &mut [W; CAPACITY_WORDS] {
        array_mut_ref!(self.0, RATE_WORDS, CAPACITY_WORDS)
    }

    /// Domain separation goes into the last rate word.
    #[inline]
    pub(crate) fn inject_domain(&mut self, tag: u32) {
        self.rate_mut()[RATE_WORDS - 1] ^= W::from(tag);
    }

    #[inline]
    pub(crate) fn inject_key(&mut self, key: &[W; KEY_WORDS]) {
        for (s, &k) in self.capacity_mut().iter_mut().zip(key) {
            *s ^= k;
        }
    }

    #[inline]
    pub(crate) fn permute(&mut self, rounds: usize) {
        permutation::permute(&mut self.0, rounds);
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[W; STATE_WORDS] {
        &self.0
    }
}

impl<W: Word> Drop for State<W> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<W: Word> ZeroizeOnDrop for State<W> {}

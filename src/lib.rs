//! NORX authenticated encryption.
//!
//! [NORX] is a permutation based AEAD built on a monkey-duplex sponge over a
//! 4x4 matrix of words. The header is absorbed, the payload is encrypted with
//! the sponge holding the ciphertext stream, the trailer is absorbed and the
//! tag is squeezed out after the key has been mixed into the capacity again.
//!
//! Two word widths are provided, [`Norx32`] and [`Norx64`], plus the six
//! round [`Norx64_6`]. Only the sequential mode (parallelism degree 1) is
//! implemented.
//!
//! ```
//! use norx_aead::Norx32;
//!
//! let cipher = Norx32::new(&[0x42; 16])?;
//! let nonce = [0x24; 16];
//!
//! let mut buffer = *b"attack at dawn";
//! let mut tag = [0; 16];
//! cipher.encrypt_in_place_detached(&nonce, b"header", &mut buffer, b"trailer", &mut tag)?;
//! assert_ne!(&buffer, b"attack at dawn");
//!
//! cipher.decrypt_in_place_detached(&nonce, b"header", &mut buffer, b"trailer", &tag)?;
//! assert_eq!(&buffer, b"attack at dawn");
//! # Ok::<(), norx_aead::Error>(())
//! ```
//!
//! [NORX]: https://norx.io

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod word;
mod state;
mod lanes;
mod duplex;
pub mod codec;
pub mod permutation;

use core::fmt;
use subtle::ConstantTimeEq;
use zeroize::{ Zeroize, Zeroizing, ZeroizeOnDrop };
use duplex::{ Duplex, tags };
use lanes::Sequential;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

pub use word::Word;
pub use state::{
    STATE_WORDS, RATE_WORDS, CAPACITY_WORDS,
    KEY_WORDS, NONCE_WORDS, TAG_WORDS
};


/// An error returned by this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key is not `KEY_SIZE` bytes.
    InvalidKeyLength,
    /// The nonce is not `NONCE_SIZE` bytes.
    InvalidNonceLength,
    /// The tag is not `TAG_SIZE` bytes.
    InvalidTagLength,
    /// The output buffer is too small.
    BufferTooSmall,
    /// The message could not be authenticated.
    Authentication,
}

impl Error {
    /// Whether the caller passed a malformed argument, as opposed to a
    /// forged message.
    pub fn is_invalid_parameter(&self) -> bool {
        *self != Error::Authentication
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "invalid key length"),
            Error::InvalidNonceLength => write!(f, "invalid nonce length"),
            Error::InvalidTagLength => write!(f, "invalid tag length"),
            Error::BufferTooSmall => write!(f, "output buffer too small"),
            Error::Authentication => write!(f, "message authentication failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// NORX32-4-1.
pub type Norx32 = Norx<u32, 4>;

/// NORX64-4-1.
pub type Norx64 = Norx<u64, 4>;

/// NORX64-6-1.
pub type Norx64_6 = Norx<u64, 6>;

/// Largest tag of any profile, in bytes.
const MAX_TAG_BYTES: usize = TAG_WORDS * 8;

/// NORX with word type `W` and `L` rounds.
///
/// Holds the key only; every call builds, and wipes, its own state.
#[derive(Clone)]
pub struct Norx<W: Word, const L: usize> {
    key: [W; KEY_WORDS]
}

impl<W: Word, const L: usize> Norx<W, L> {
    /// The size in octets of a key.
    pub const KEY_SIZE: usize = W::KEY_BYTES;

    /// The size in octets of a nonce.
    pub const NONCE_SIZE: usize = W::NONCE_BYTES;

    /// The size in octets of an authentication tag.
    pub const TAG_SIZE: usize = W::TAG_BYTES;

    /// The size in octets of a sponge block (the rate).
    pub const BLOCK_SIZE: usize = W::RATE_BYTES;

    /// Rounds per permutation call.
    pub const ROUNDS: usize = L;

    /// Creates an instance of the AEAD.
    ///
    /// `key` must be exactly [`KEY_SIZE`][Self::KEY_SIZE] octets.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        if key.len() != W::KEY_BYTES {
            return Err(Error::InvalidKeyLength);
        }

        let mut cipher = Norx { key: [W::default(); KEY_WORDS] };
        word::load(&mut cipher.key, key);

        Ok(cipher)
    }

    fn check(nonce: &[u8], tag: &[u8]) -> Result<(), Error> {
        if nonce.len() != W::NONCE_BYTES {
            return Err(Error::InvalidNonceLength);
        }
        if tag.len() != W::TAG_BYTES {
            return Err(Error::InvalidTagLength);
        }
        Ok(())
    }

    /// Initialises the sponge and runs it up to the payload.
    fn start(&self, nonce: &[u8], header: &[u8]) -> Duplex<W, L> {
        let mut n = [W::default(); NONCE_WORDS];
        word::load(&mut n, nonce);

        let mut duplex = Duplex::init::<Sequential>(&self.key, &n);
        duplex.absorb::<tags::Header>(header);
        duplex.branch::<Sequential>();
        duplex
    }

    /// Runs the sponge from the end of the payload to the tag.
    fn finish(&self, mut duplex: Duplex<W, L>, trailer: &[u8], tag: &mut [u8]) {
        duplex.merge::<Sequential>();
        duplex.absorb::<tags::Trailer>(trailer);
        duplex.finalise(&self.key, tag);
    }

    /// Encrypts and authenticates `buffer` in place.
    ///
    /// The authentication tag is written to `tag`, which must be
    /// [`TAG_SIZE`][Self::TAG_SIZE] octets.
    pub fn encrypt_in_place_detached(
        &self,
        nonce: &[u8],
        header: &[u8],
        buffer: &mut [u8],
        trailer: &[u8],
        tag: &mut [u8]
    ) -> Result<(), Error> {
        Self::check(nonce, tag)?;

        let mut duplex = self.start(nonce, header);
        duplex.encrypt_data(buffer);
        self.finish(duplex, trailer, tag);

        Ok(())
    }

    /// Decrypts and authenticates `buffer` in place.
    ///
    /// On [`Error::Authentication`] the buffer is zeroed, so no
    /// unauthenticated plaintext is released.
    pub fn decrypt_in_place_detached(
        &self,
        nonce: &[u8],
        header: &[u8],
        buffer: &mut [u8],
        trailer: &[u8],
        tag: &[u8]
    ) -> Result<(), Error> {
        Self::check(nonce, tag)?;

        let mut expected = Zeroizing::new([0; MAX_TAG_BYTES]);
        let expected = &mut expected[..W::TAG_BYTES];

        let mut duplex = self.start(nonce, header);
        duplex.decrypt_data(buffer);
        self.finish(duplex, trailer, expected);

        if expected.ct_eq(tag).unwrap_u8() == 1 {
            Ok(())
        } else {
            buffer.zeroize();
            Err(Error::Authentication)
        }
    }

    /// Encrypts and authenticates `plaintext`.
    ///
    /// The ciphertext is written to the front of `dst`, which must be at
    /// least as long as `plaintext`, and the tag to `tag`.
    pub fn seal_scatter(
        &self,
        dst: &mut [u8],
        tag: &mut [u8],
        nonce: &[u8],
        header: &[u8],
        plaintext: &[u8],
        trailer: &[u8]
    ) -> Result<(), Error> {
        Self::check(nonce, tag)?;
        if dst.len() < plaintext.len() {
            return Err(Error::BufferTooSmall);
        }

        let dst = &mut dst[..plaintext.len()];
        dst.copy_from_slice(plaintext);
        self.encrypt_in_place_detached(nonce, header, dst, trailer, tag)
    }

    /// Decrypts and authenticates `ciphertext` against `tag`.
    ///
    /// The plaintext is written to the front of `dst`, which must be at
    /// least as long as `ciphertext`.
    pub fn open_gather(
        &self,
        dst: &mut [u8],
        tag: &[u8],
        nonce: &[u8],
        header: &[u8],
        ciphertext: &[u8],
        trailer: &[u8]
    ) -> Result<(), Error> {
        Self::check(nonce, tag)?;
        if dst.len() < ciphertext.len() {
            return Err(Error::BufferTooSmall);
        }

        let dst = &mut dst[..ciphertext.len()];
        dst.copy_from_slice(ciphertext);
        self.decrypt_in_place_detached(nonce, header, dst, trailer, tag)
    }

    /// Encrypts and authenticates `plaintext`, writing
    /// `ciphertext || tag` to `dst`.
    ///
    /// `dst` must be at least [`TAG_SIZE`][Self::TAG_SIZE] octets longer
    /// than `plaintext`.
    pub fn seal(
        &self,
        dst: &mut [u8],
        nonce: &[u8],
        header: &[u8],
        plaintext: &[u8],
        trailer: &[u8]
    ) -> Result<(), Error> {
        if dst.len() < plaintext.len() + W::TAG_BYTES {
            return Err(Error::BufferTooSmall);
        }

        let (dst, tag) = dst.split_at_mut(plaintext.len());
        self.seal_scatter(dst, &mut tag[..W::TAG_BYTES], nonce, header, plaintext, trailer)
    }

    /// Decrypts and authenticates `ciphertext || tag` as produced by
    /// [`seal`][Self::seal].
    ///
    /// `dst` must be at least `sealed.len()` - [`TAG_SIZE`][Self::TAG_SIZE]
    /// octets.
    pub fn open(
        &self,
        dst: &mut [u8],
        nonce: &[u8],
        header: &[u8],
        sealed: &[u8],
        trailer: &[u8]
    ) -> Result<(), Error> {
        if sealed.len() < W::TAG_BYTES {
            // no room for a tag, nothing to authenticate
            return Err(Error::Authentication);
        }

        let (ciphertext, tag) = sealed.split_at(sealed.len() - W::TAG_BYTES);
        self.open_gather(dst, tag, nonce, header, ciphertext, trailer)
    }

    /// Encrypts and authenticates `plaintext`, returning the ciphertext and
    /// the tag.
    #[cfg(feature = "alloc")]
    pub fn encrypt(
        &self,
        nonce: &[u8],
        header: &[u8],
        plaintext: &[u8],
        trailer: &[u8]
    ) -> Result<(Vec<u8>, Vec<u8>), Error> {
        let mut ciphertext = plaintext.to_vec();
        let mut tag = alloc::vec![0; W::TAG_BYTES];
        self.encrypt_in_place_detached(nonce, header, &mut ciphertext, trailer, &mut tag)?;
        Ok((ciphertext, tag))
    }

    /// Decrypts and authenticates `ciphertext`, returning the plaintext.
    #[cfg(feature = "alloc")]
    pub fn decrypt(
        &self,
        nonce: &[u8],
        header: &[u8],
        ciphertext: &[u8],
        trailer: &[u8],
        tag: &[u8]
    ) -> Result<Vec<u8>, Error> {
        let mut plaintext = ciphertext.to_vec();
        self.decrypt_in_place_detached(nonce, header, &mut plaintext, trailer, tag)?;
        Ok(plaintext)
    }
}

impl<W: Word, const L: usize> Drop for Norx<W, L> {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl<W: Word, const L: usize> ZeroizeOnDrop for Norx<W, L> {}

impl<W: Word, const L: usize> fmt::Debug for Norx<W, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Norx")
            .field("bits", &W::BITS)
            .field("rounds", &L)
            .finish_non_exhaustive()
    }
}

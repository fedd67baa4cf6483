//! Word width profiles.

use core::mem;
use core::fmt::Debug;
use core::ops::{ BitAnd, BitXor, BitXorAssign, Shl };
use byteorder::{ ByteOrder, LittleEndian };
use zeroize::Zeroize;
use crate::state::{ STATE_WORDS, RATE_WORDS, KEY_WORDS, NONCE_WORDS, TAG_WORDS };


mod sealed {
    pub trait Sealed {}
}

/// A NORX word, `u32` for NORX32 and `u64` for NORX64.
///
/// Every per-profile constant hangs off this trait, so the whole cipher is
/// written once and instantiated per word type.
pub trait Word:
    sealed::Sealed
    + Copy + Default + Eq + Debug
    + Zeroize
    + From<u32>
    + BitXor<Output = Self> + BitXorAssign
    + BitAnd<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;

    /// `R0..R3` of the G function.
    const ROTATIONS: [u32; 4];

    /// `u0..u15`, two rounds of F applied to `(0, 1, .., 15)`.
    const INIT: [Self; STATE_WORDS];

    /// Rate in bytes.
    const RATE_BYTES: usize = RATE_WORDS * Self::BYTES;
    /// Key size in bytes.
    const KEY_BYTES: usize = KEY_WORDS * Self::BYTES;
    /// Nonce size in bytes.
    const NONCE_BYTES: usize = NONCE_WORDS * Self::BYTES;
    /// Tag size in bytes.
    const TAG_BYTES: usize = TAG_WORDS * Self::BYTES;

    /// Rotate right.
    fn rotr(self, n: u32) -> Self;

    /// Reads one little-endian word from the front of `buf`.
    fn read_le(buf: &[u8]) -> Self;

    /// Writes one little-endian word to the front of `buf`.
    fn write_le(self, buf: &mut [u8]);
}

macro_rules! words {
    ( $( $( #[$attr:meta] )* $ty:ty => {
        read: $read:ident,
        write: $write:ident,
        rotations: $rot:expr,
        init: $init:expr
    } ),+ ) => {
        $(
            impl sealed::Sealed for $ty {}

            $( #[$attr] )*
            impl Word for $ty {
                const BITS: u32 = (mem::size_of::<$ty>() * 8) as u32;
                const BYTES: usize = mem::size_of::<$ty>();
                const ROTATIONS: [u32; 4] = $rot;
                const INIT: [$ty; STATE_WORDS] = $init;

                #[inline(always)]
                fn rotr(self, n: u32) -> Self {
                    self.rotate_right(n)
                }

                #[inline(always)]
                fn read_le(buf: &[u8]) -> Self {
                    LittleEndian::$read(buf)
                }

                #[inline(always)]
                fn write_le(self, buf: &mut [u8]) {
                    LittleEndian::$write(buf, self)
                }
            }
        )+
    }
}

words!{
    /// NORX32.
    u32 => {
        read: read_u32,
        write: write_u32,
        rotations: [8, 11, 16, 31],
        init: [
            0x0454_edab, 0xac68_51cc, 0xb707_322f, 0xa0c7_c90d,
            0x99ab_09ac, 0xa643_466d, 0x21c2_2362, 0x1230_c950,
            0xa3d8_d930, 0x3fa8_b72c, 0xed84_eb49, 0xedca_4787,
            0x3354_63eb, 0xf994_220b, 0xbe0b_f5c9, 0xd7c4_9104
        ]
    },

    /// NORX64.
    u64 => {
        read: read_u64,
        write: write_u64,
        rotations: [8, 19, 40, 63],
        init: [
            0xe4d3_2477_2b91_df79, 0x3aec_9aba_aeb0_2ccb, 0x9dfb_a13d_b428_9311, 0xef9e_b4bf_5a97_f2c8,
            0x3f46_6e92_c153_2034, 0xe6e9_8662_6cc4_05c1, 0xace4_0f3b_5491_84e1, 0xd9cf_d357_6261_4477,
            0xb15e_6417_48de_5e6b, 0xaa95_e955_e10f_8410, 0x28d1_0344_41a9_dd40, 0x7f31_bbf9_64e9_3bf5,
            0xb5e9_e224_93df_fb96, 0xb980_c852_479f_afbd, 0xda24_516b_f55e_afd4, 0x8602_6ae8_536f_1501
        ]
    }
}

/// Loads `out.len()` little-endian words from `buf`.
#[inline]
pub(crate) fn load<W: Word>(out: &mut [W], buf: &[u8]) {
    debug_assert_eq!(out.len() * W::BYTES, buf.len());

    for (w, chunk) in out.iter_mut().zip(buf.chunks_exact(W::BYTES)) {
        *w = W::read_le(chunk);
    }
}

/// Stores `words` to `buf` as little-endian bytes.
#[inline]
pub(crate) fn store<W: Word>(words: &[W], buf: &mut [u8]) {
    debug_assert_eq!(words.len() * W::BYTES, buf.len());

    for (w, chunk) in words.iter().zip(buf.chunks_exact_mut(W::BYTES)) {
        w.write_le(chunk);
    }
}

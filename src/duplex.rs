use core::mem;
use zeroize::Zeroize;
use crate::codec;
use crate::lanes::Lanes;
use crate::state::{ State, KEY_WORDS, NONCE_WORDS, TAG_WORDS };
use crate::word::{ self, Word };


pub trait Domain {
    const TAG: u32;
}

pub mod tags {
    use super::Domain;

    macro_rules! tags {
        ( $( $( #[$attr:meta] )* $name:ident => $val:expr ),+ ) => {
            $(
                $( #[$attr] )*
                pub enum $name {}

                impl Domain for $name {
                    const TAG: u32 = $val;
                }
            )+
        }
    }

    tags!{
        Header => 0x01,
        Payload => 0x02,
        Trailer => 0x04,
        Final => 0x08,
        #[allow(dead_code)]
        Branch => 0x10,
        #[allow(dead_code)]
        Merge => 0x20
    }
}

/// Folded into the domain tag before a padded final block, so an input one
/// byte short of a block boundary never absorbs like the full block ending
/// in the marker.
pub(crate) const PADDED: u32 = 0x80;

/// One encryption or decryption, `L` rounds per permutation call.
pub(crate) struct Duplex<W: Word, const L: usize> {
    state: State<W>
}

impl<W: Word, const L: usize> Duplex<W, L> {
    pub(crate) fn init<P: Lanes>(key: &[W; KEY_WORDS], nonce: &[W; NONCE_WORDS]) -> Duplex<W, L> {
        let mut words = W::INIT;
        words[..NONCE_WORDS].copy_from_slice(nonce);
        words[NONCE_WORDS..][..KEY_WORDS].copy_from_slice(key);
        let mut state = State::new(words);
        words.zeroize();

        let params = [
            W::BITS,
            L as u32,
            P::DEGREE,
            W::BITS * TAG_WORDS as u32
        ];
        for (s, &p) in state.capacity_mut().iter_mut().zip(&params) {
            *s ^= W::from(p);
        }

        state.permute(L);
        state.inject_key(key);

        Duplex { state }
    }

    pub(crate) fn absorb<T: Domain>(&mut self, data: &[u8]) {
        let rate = W::RATE_BYTES;

        let mut iter = data.chunks_exact(rate);
        for chunk in &mut iter {
            self.absorb_block(T::TAG, chunk);
        }

        let chunk = iter.remainder();
        if !chunk.is_empty() {
            let mut block = codec::block();
            let block = &mut block[..rate];
            block[..chunk.len()].copy_from_slice(chunk);
            codec::pad(block, chunk.len());

            self.absorb_block(T::TAG ^ PADDED, block);
        }
    }

    #[inline]
    fn absorb_block(&mut self, domain: u32, block: &[u8]) {
        self.state.inject_domain(domain);
        self.state.permute(L);
        codec::absorb(self.state.rate_mut(), block);
    }

    #[inline]
    pub(crate) fn branch<P: Lanes>(&mut self) {
        P::branch(&mut self.state);
    }

    #[inline]
    pub(crate) fn merge<P: Lanes>(&mut self) {
        P::merge(&mut self.state);
    }

    pub(crate) fn encrypt_data(&mut self, m: &mut [u8]) {
        let rate = W::RATE_BYTES;

        let mut iter = m.chunks_exact_mut(rate);
        for chunk in &mut iter {
            self.permute_payload(tags::Payload::TAG);
            codec::absorb(self.state.rate_mut(), chunk);
            codec::squeeze(self.state.rate(), chunk);
        }

        let chunk = iter.into_remainder();
        if !chunk.is_empty() {
            let mut block = codec::block();
            let block = &mut block[..rate];
            block[..chunk.len()].copy_from_slice(chunk);
            codec::pad(block, chunk.len());

            self.permute_payload(tags::Payload::TAG ^ PADDED);
            codec::absorb(self.state.rate_mut(), block);
            codec::squeeze(self.state.rate(), block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    pub(crate) fn decrypt_data(&mut self, c: &mut [u8]) {
        let rate = W::RATE_BYTES;

        let mut iter = c.chunks_exact_mut(rate);
        for chunk in &mut iter {
            self.permute_payload(tags::Payload::TAG);
            codec::exchange(self.state.rate_mut(), chunk);
        }

        // The rate must end up as encryption left it: ciphertext bytes, then
        // the keystream tail with the padding marker folded in.
        let chunk = iter.into_remainder();
        if !chunk.is_empty() {
            let mut block = codec::block();
            let block = &mut block[..rate];

            self.permute_payload(tags::Payload::TAG ^ PADDED);
            codec::squeeze(self.state.rate(), block);

            for (x, k) in chunk.iter_mut().zip(block.iter_mut()) {
                let s = mem::replace(k, *x);
                *x ^= s;
            }
            block[chunk.len()] ^= codec::MARKER;

            // new rate ^ keystream is the padded plaintext
            #[cfg(debug_assertions)]
            {
                let mut padded = codec::block();
                let padded = &mut padded[..rate];
                codec::squeeze(self.state.rate(), padded);
                for (p, &b) in padded.iter_mut().zip(block.iter()) {
                    *p ^= b;
                }
                debug_assert_eq!(codec::unpad(padded), Some(&chunk[..]));
            }

            codec::overwrite(self.state.rate_mut(), block);
        }
    }

    #[inline]
    fn permute_payload(&mut self, domain: u32) {
        self.state.inject_domain(domain);
        self.state.permute(L);
    }

    pub(crate) fn finalise(mut self, key: &[W; KEY_WORDS], tag: &mut [u8]) {
        self.state.inject_domain(tags::Final::TAG);
        self.state.permute(L);
        self.state.inject_key(key);
        self.state.permute(L);
        self.state.inject_key(key);

        word::store(&self.state.rate()[..TAG_WORDS], tag);
    }
}

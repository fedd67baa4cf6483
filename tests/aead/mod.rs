use norx_aead::{ Norx, Word };

/// `(i * mul + 123) mod 256`, the byte pattern the vectors are built from.
pub fn pattern(len: usize, mul: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (255 & (i * mul + 123)) as u8)
        .collect()
}

pub fn aead_encrypt<W: Word, const L: usize>(
    key: &[u8],
    nonce: &[u8],
    header: &[u8],
    m: &[u8],
    trailer: &[u8]
) -> Vec<u8> {
    let mut c = vec![0; m.len() + Norx::<W, L>::TAG_SIZE];

    Norx::<W, L>::new(key).unwrap()
        .seal(&mut c, nonce, header, m, trailer)
        .unwrap();

    c
}

pub fn aead_decrypt<W: Word, const L: usize>(
    key: &[u8],
    nonce: &[u8],
    header: &[u8],
    c: &[u8],
    trailer: &[u8]
) -> Option<Vec<u8>> {
    assert!(c.len() >= Norx::<W, L>::TAG_SIZE);
    let mut m = vec![0; c.len() - Norx::<W, L>::TAG_SIZE];

    Norx::<W, L>::new(key).unwrap()
        .open(&mut m, nonce, header, c, trailer)
        .ok()
        .map(|()| m)
}

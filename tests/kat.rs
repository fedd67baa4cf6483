#[allow(dead_code)]
mod aead;

use norx_aead::{ Word, Norx32, Norx64, STATE_WORDS };
use norx_aead::permutation::permute;
use aead::{ pattern, aead_encrypt, aead_decrypt };


fn sequential<W: Word>() -> [W; STATE_WORDS] {
    let mut x = [W::default(); STATE_WORDS];
    for (i, w) in x.iter_mut().enumerate() {
        *w = W::from(i as u32);
    }
    x
}

#[test]
fn test_permutation_kat() {
    let mut x = sequential::<u32>();
    permute(&mut x, 4);
    assert_eq!(x, [
        0x99a0_283a, 0x16c4_b42e, 0x6e7f_a00b, 0x7d07_5c66,
        0x65c1_af81, 0xee25_4c00, 0x1266_31b6, 0xf891_5260,
        0x0831_81d5, 0x85dc_0152, 0x1a44_a1f3, 0x7ba6_1b1a,
        0x37dd_e5df, 0x0782_03d3, 0x9b3c_0701, 0x9ce6_be37
    ]);

    let mut x = sequential::<u64>();
    permute(&mut x, 4);
    assert_eq!(x, [
        0xf435_0dfa_f9a8_e660, 0x5f90_69c1_dd31_3fb4, 0xfc95_49cb_4754_a32b, 0x1b9e_70c5_e0a3_834d,
        0x86af_d2c9_d99c_3c84, 0x91f7_91bd_6053_687b, 0x34c2_5a26_e240_206a, 0xee1c_f3f1_97bf_65e1,
        0x42dd_1837_57af_d115, 0xf4df_785f_7fdf_d2b8, 0xa504_1619_08c6_6ca3, 0xf9ff_4266_b14b_6d27,
        0x51c2_0495_7008_7c45, 0xe7a9_030f_1879_fb71, 0xb0c7_8148_5a47_a757, 0x0dfe_7dbf_8cc8_78d3
    ]);
}

#[test]
fn test_empty_message_tag() {
    let key = (0..16).collect::<Vec<u8>>();
    let mut tag = [0; 16];
    Norx32::new(&key).unwrap()
        .encrypt_in_place_detached(&key, &[], &mut [], &[], &mut tag)
        .unwrap();
    assert_eq!(hex::encode(tag), "9fed37e6c9ca06b26102e3ab571eb764");

    let key = (0..32).collect::<Vec<u8>>();
    let mut tag = [0; 32];
    Norx64::new(&key).unwrap()
        .encrypt_in_place_detached(&key, &[], &mut [], &[], &mut tag)
        .unwrap();
    assert_eq!(
        hex::encode(tag),
        "6a02c85e2872bd4919b12833da5379df0807fdecf4577c34cfaf33989a364422"
    );
}

/// Each vector is `(len, ciphertext || tag)`, with a header, message and
/// trailer of `len` bytes each.
fn test_aead_kat<W: Word, const L: usize>(kat: &[(usize, &str)]) {
    let k = pattern(W::KEY_BYTES, 191);
    let n = pattern(W::NONCE_BYTES, 181);

    for &(i, expected) in kat {
        let h = pattern(i, 193);
        let w = pattern(i, 197);
        let t = pattern(i, 199);

        let c = aead_encrypt::<W, L>(&k, &n, &h, &w, &t);
        assert_eq!(hex::encode(&c), expected, "{} bytes", i);

        let m = aead_decrypt::<W, L>(&k, &n, &h, &c, &t);
        assert_eq!(m.as_ref(), Some(&w), "{} bytes", i);
    }
}

#[test]
fn test_norx32_4_kat() {
    test_aead_kat::<u32, 4>(&[
        (0, "b223b637357d9c8e5c81a78b6dc64e76"),
        (1, "566ae2766696d0a7ef383d74bd9e97448b"),
        (47, "508a63cc69382d376160f7463d4282c05673b4893efaf77edc4db24ae28a3ac0affe7e95a9d32901b3d17e6ecc5ad5e1f7a138b31384fd28b96ae0278d7ddc"),
        (48, "f047a5eee42f786fbfb5a62b0452acfd37f5ed54e80ef5769398d0b37fd1df32309b8ac246e9750fa837c02acc354f4f8284225c50a82c0bba201a86408ea2b0"),
        (49, "7b0800f7d5e53cc877f05999a47dfd31cccd1d229d3626375043f9058f60c9b350e85f28851a2c28387ba1b3e0497e7fedd805ab15f31b4fc3fff8a70e0407b2a1"),
        (96, "18e0030ef53ff4481ea9f14cc1ecfdd4254189a65cc5bbc4b3cca5a76b92a1fe94349092f9ea7d386c95bbaa964614440718e51a317d34e950fceb965162402720f2b47e5385c344a5576b675a202c50f50e1d988919ade2e058a65d4c945490a9902c4db3f4e9ca5965a07822aab981"),
        (100, "b71c8918ecf17f16f1b5223eac685f0969189617909e4bbad67033c2acc48b1b75052ed45668e5ad436f64b40ae62a76325c5ab0fb43ed6581e41640c01b35ecac68d1b3ec5eef15e35452c7e0a002e4c48621731b359ab0746901cba78462dd0dc20f4d8fbdb34d1f7c435cafa99dcbf874d10a")
    ]);
}

#[test]
fn test_norx64_4_kat() {
    test_aead_kat::<u64, 4>(&[
        (0, "2c429519b983af3b47e3a2fca97b8f8558b8b0966aa56dc39682fef38342e562"),
        (1, "6ce37ee4984c62a5e1453d2328afb7d62394a9555b8da0b08f0015033d4e34b22f"),
        (95, "92dcf7583ae9693824b4b7c0b52d23fdfe2c312d073db8d79350446d3bdba7590c63fdc657a22f2b0ff1aad78fb0b640cc005810784d222d523bda13e83026a5dc316407eb0ad4061e55186c5548e92d8ca2d511a10e241693ed466d1f83708d33482502bd0275516f4eb7a20f12ba9bf47b35748595b3794fa60db6ebf949"),
        (96, "139918d164c4c76cb7514d33357bb853aebd35b6fdfa1422f20ffa3e2d3f564ac1a8b7da694e212963739d8a805af05923d3df2ddc9fb9bf815f95c0585b532687de8cb7c4cfac79ce7f7d261df89f0c29ebc19bc2f9f31559b0d8e894101786d8e6a36d0d3ca43c0c4491121a4c9f04962e3112416587c933bcc2f36bf71759"),
        (97, "0cd53e1df051da7d3dee36a684732ad28fc9e22881e1ba0f37b669cc04e487c53c3fab86cc953b05d97426f95d59265fab45990ddc39ffc7ef2708f05f86e99c9f67bcae00a0cfad9f903ed2d1e0ef664264a00abf5af2d25ce4df60b5d1d3455b6708f6194b9424dd07bc101088aaaff27d9dbca92257c8b51e6806331d9e587a")
    ]);
}

#[test]
fn test_norx64_6_kat() {
    test_aead_kat::<u64, 6>(&[
        (0, "d257ab8b94999e81037a425f00822a9e2b51dab8b6760f1e7908e2f6bce63e16"),
        (33, "e6b8372b803efe1d21546e70b49c91b3b3b2478187c5d326a52524ca6001efb2cdc1050640cf291102681488032024ff2c0e2ffae74d342ca44709e19505bc2f97")
    ]);
}

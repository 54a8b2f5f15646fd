#![no_main]
use kyber512::{
    default::{CipherText, DecapsKey, EncapsKey, KG},
    traits::{Decaps, Encaps, KeyGen, SerDes},
    SharedSecretKey, EK_LEN, DK_LEN, CT_LEN, SSK_LEN,
};
use libfuzzer_sys::fuzz_target;

#[derive(arbitrary::Arbitrary, Debug)]
struct FuzzInput {
    seed: [u8; 32],
    e: [u8; 32],
    ek_xor: [u8; EK_LEN],
    dk_xor: [u8; DK_LEN],
    ct_xor: [u8; CT_LEN],
    sk_xor: [u8; SSK_LEN],
}

fuzz_target!(|input: FuzzInput| {
    let Ok((ek_a, dk_a)) = KG::keygen_from_seed(input.seed) else { return };

    let mut ek_bytes = ek_a.into_bytes();
    ek_bytes.iter_mut().zip(input.ek_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let ek_b: EncapsKey = match EncapsKey::try_from_bytes(ek_bytes) {
        Ok(k) => k,
        Err(_) => return,
    };

    let mut dk_bytes = dk_a.into_bytes();
    dk_bytes.iter_mut().zip(input.dk_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let dk_b: DecapsKey = match DecapsKey::try_from_bytes(dk_bytes) {
        Ok(k) => k,
        Err(_) => return,
    };

    let (ss, ct): (SharedSecretKey<32>, CipherText) = ek_b.encaps_from_seed(&input.e);

    let mut ct_bytes = ct.into_bytes();
    ct_bytes.iter_mut().zip(input.ct_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let ct_b: CipherText = match CipherText::try_from_bytes(ct_bytes) {
        Ok(c) => c,
        Err(_) => return,
    };

    let mut sk_bytes = ss.into_bytes();
    sk_bytes.iter_mut().zip(input.sk_xor.iter()).for_each(|(x1, x2)| *x1 ^= x2);
    let _sk_b: SharedSecretKey<32> = match SharedSecretKey::try_from_bytes(sk_bytes) {
        Ok(s) => s,
        Err(_) => return,
    };

    let _ss: Result<SharedSecretKey<32>, _> = dk_b.try_decaps(&ct_b);
});

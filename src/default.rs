//! The default profile: SHAKE-128/256 and SHA3-256/512, as specified for the primary parameter
//! set. See [`crate::kyber90s`] for the AES/SHA-2 alternative.

use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::Error;
use crate::kem;
use crate::profile::{DefaultProfile, Profile};
use crate::traits::{Decaps, Encaps, KeyGen, SerDes};
use crate::{CT_LEN, DK_LEN, EK_LEN};

/// The public encapsulation key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncapsKey([u8; EK_LEN]);

/// The private decapsulation key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DecapsKey([u8; DK_LEN]);

/// The ciphertext sent from the encapsulating party to the decapsulating party.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherText([u8; CT_LEN]);

/// Zero-sized key-generation handle; see [`KeyGen`].
pub struct KG();

impl KeyGen for KG {
    type DecapsByteArray = [u8; DK_LEN];
    type DecapsKey = DecapsKey;
    type EncapsByteArray = [u8; EK_LEN];
    type EncapsKey = EncapsKey;

    fn try_keygen_with_rng(rng: &mut impl CryptoRngCore) -> Result<(EncapsKey, DecapsKey), Error> {
        let (ek, dk) = kem::key_gen::<DefaultProfile>(rng)?;
        Ok((EncapsKey(ek), DecapsKey(dk)))
    }

    fn keygen_from_seed(seed: [u8; 32]) -> Result<(EncapsKey, DecapsKey), Error> {
        let (ek, dk) = kem::seed_to_keys::<DefaultProfile>(seed)?;
        Ok((EncapsKey(ek), DecapsKey(dk)))
    }

    fn validate_keypair_vt(ek: &[u8; EK_LEN], dk: &[u8; DK_LEN]) -> bool {
        let h_ek = DefaultProfile::h(ek);
        let same_ek = dk[crate::SK_PKE_LEN..crate::SK_PKE_LEN + EK_LEN] == ek[..];
        let same_h = dk[crate::SK_PKE_LEN + EK_LEN..crate::SK_PKE_LEN + EK_LEN + 32] == h_ek[..];
        same_ek & same_h
    }
}

impl<const N: usize> Encaps<N> for EncapsKey {
    type CipherText = CipherText;

    fn try_encaps_with_rng(
        &self, rng: &mut impl CryptoRngCore,
    ) -> Result<(crate::SharedSecretKey<N>, CipherText), Error> {
        let (ss, ct) = kem::encaps::<DefaultProfile, N>(rng, &self.0)?;
        Ok((crate::SharedSecretKey(ss), CipherText(ct)))
    }
}

impl<const N: usize> Decaps<N> for DecapsKey {
    type CipherText = CipherText;

    fn try_decaps(&self, ct: &CipherText) -> Result<crate::SharedSecretKey<N>, Error> {
        let ss = kem::decaps_internal::<DefaultProfile, N>(&self.0, &ct.0)?;
        Ok(crate::SharedSecretKey(ss))
    }
}

impl SerDes for EncapsKey {
    type ByteArray = [u8; EK_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(ek: Self::ByteArray) -> Result<Self, Error> {
        // Per the data model: the bytes must decode to integers mod q without any modular
        // reduction actually being needed. Accepting a fixed-size array (rather than a slice)
        // already rules out the wrong-length case.
        for chunk in ek.chunks(384).take(crate::K) {
            crate::byte_fns::byte_decode(12, chunk)?;
        }
        Ok(EncapsKey(ek))
    }
}

impl SerDes for DecapsKey {
    type ByteArray = [u8; DK_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(dk: Self::ByteArray) -> Result<Self, Error> { Ok(DecapsKey(dk)) }
}

impl SerDes for CipherText {
    type ByteArray = [u8; CT_LEN];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(ct: Self::ByteArray) -> Result<Self, Error> { Ok(CipherText(ct)) }
}

//! Hash/XOF profile abstraction: the default SHAKE/SHA3 profile and the AES/SHA-2 "90s" profile.
//!
//! [`crate::cpapke`] and [`crate::kem`] are written once, generic over `P: Profile`; the two
//! concrete profiles below are the only monomorphizations, selected by [`crate::default`] and
//! (behind the `kyber90s` feature) [`crate::kyber90s`].

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128, Shake256};

#[cfg(feature = "kyber90s")]
use aes::cipher::{KeyIvInit, StreamCipher};
#[cfg(feature = "kyber90s")]
use ctr::Ctr128BE;
#[cfg(feature = "kyber90s")]
use sha2::{Digest as Sha2Digest, Sha256, Sha512};

/// A squeezable byte stream, abstracting over a SHAKE `XofReader` and an AES-CTR keystream.
pub(crate) trait ByteStream {
    fn squeeze(&mut self, buf: &mut [u8]);
}

pub(crate) struct ShakeStream<R>(pub(crate) R);

impl<R: XofReader> ByteStream for ShakeStream<R> {
    fn squeeze(&mut self, buf: &mut [u8]) { self.0.read(buf) }
}

/// The hash/XOF/PRF/KDF suite a CPAPKE or KEM instantiation is built over.
pub(crate) trait Profile {
    type Xof: ByteStream;

    /// Matrix-element generator, seeded by `rho` and two index bytes.
    fn xof(rho: &[u8; 32], a: u8, b: u8) -> Self::Xof;

    /// Pseudorandom function used for CBD noise sampling; writes `out.len()` bytes.
    fn prf(seed: &[u8; 32], nonce: u8, out: &mut [u8]);

    /// `G`: hashes variable-length input down to two 32-byte outputs.
    fn g(parts: &[&[u8]]) -> ([u8; 32], [u8; 32]);

    /// `H`: hashes variable-length input down to one 32-byte output.
    fn h(bytes: &[u8]) -> [u8; 32];

    /// `KDF`: derives the final shared secret from `k_bar` and `H(ciphertext)`.
    ///
    /// The byte order of the two inputs, and the allowed output length, are
    /// profile-specific; see the two implementations below.
    fn kdf(k_bar: &[u8; 32], h_c: &[u8; 32], out: &mut [u8]);
}


/// SHAKE-128 (XOF), SHAKE-256 (PRF/KDF), SHA3-256 (H), SHA3-512 (G).
pub(crate) struct DefaultProfile;

impl Profile for DefaultProfile {
    type Xof = ShakeStream<<Shake128 as ExtendableOutput>::Reader>;

    fn xof(rho: &[u8; 32], a: u8, b: u8) -> Self::Xof {
        let mut hasher = Shake128::default();
        hasher.update(rho);
        hasher.update(&[a]);
        hasher.update(&[b]);
        ShakeStream(hasher.finalize_xof())
    }

    fn prf(seed: &[u8; 32], nonce: u8, out: &mut [u8]) {
        let mut hasher = Shake256::default();
        hasher.update(seed);
        hasher.update(&[nonce]);
        let mut reader = hasher.finalize_xof();
        reader.read(out);
    }

    fn g(parts: &[&[u8]]) -> ([u8; 32], [u8; 32]) {
        let mut hasher = Sha3_512::new();
        parts.iter().for_each(|b| Digest::update(&mut hasher, b));
        let digest = hasher.finalize();
        (digest[0..32].try_into().unwrap(), digest[32..64].try_into().unwrap())
    }

    fn h(bytes: &[u8]) -> [u8; 32] {
        let mut hasher = Sha3_256::new();
        Digest::update(&mut hasher, bytes);
        hasher.finalize().into()
    }

    fn kdf(k_bar: &[u8; 32], h_c: &[u8; 32], out: &mut [u8]) {
        // K = KDF(K_bar || H(c)), squeezed to the caller-chosen length.
        let mut hasher = Shake256::default();
        hasher.update(k_bar);
        hasher.update(h_c);
        let mut reader = hasher.finalize_xof();
        reader.read(out);
    }
}


/// AES-256-CTR (XOF/PRF), SHA-256 (H/KDF), SHA-512 (G).
#[cfg(feature = "kyber90s")]
pub(crate) struct Kyber90sProfile;

#[cfg(feature = "kyber90s")]
pub(crate) struct AesCtrStream(Ctr128BE<aes::Aes256>);

#[cfg(feature = "kyber90s")]
impl ByteStream for AesCtrStream {
    fn squeeze(&mut self, buf: &mut [u8]) {
        buf.iter_mut().for_each(|b| *b = 0);
        self.0.apply_keystream(buf);
    }
}

#[cfg(feature = "kyber90s")]
fn aes_ctr_stream(key: &[u8; 32], iv: [u8; 16]) -> AesCtrStream {
    AesCtrStream(Ctr128BE::<aes::Aes256>::new(key.into(), &iv.into()))
}

#[cfg(feature = "kyber90s")]
impl Profile for Kyber90sProfile {
    type Xof = AesCtrStream;

    fn xof(rho: &[u8; 32], a: u8, b: u8) -> Self::Xof {
        let mut iv = [0u8; 16];
        iv[0] = a;
        iv[1] = b;
        aes_ctr_stream(rho, iv)
    }

    fn prf(seed: &[u8; 32], nonce: u8, out: &mut [u8]) {
        let mut iv = [0u8; 16];
        iv[0] = nonce;
        let mut stream = aes_ctr_stream(seed, iv);
        stream.squeeze(out);
    }

    fn g(parts: &[&[u8]]) -> ([u8; 32], [u8; 32]) {
        let mut hasher = Sha512::new();
        parts.iter().for_each(|b| Sha2Digest::update(&mut hasher, b));
        let digest = hasher.finalize();
        (digest[0..32].try_into().unwrap(), digest[32..64].try_into().unwrap())
    }

    fn h(bytes: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        Sha2Digest::update(&mut hasher, bytes);
        hasher.finalize().into()
    }

    fn kdf(k_bar: &[u8; 32], h_c: &[u8; 32], out: &mut [u8]) {
        // K = H(H(c) || K_bar), exactly 32 bytes — note the mirrored argument order
        // relative to the default profile's KDF(K_bar || H(c)).
        let mut hasher = Sha256::new();
        Sha2Digest::update(&mut hasher, h_c);
        Sha2Digest::update(&mut hasher, k_bar);
        let digest = hasher.finalize();
        out.copy_from_slice(&digest);
    }
}

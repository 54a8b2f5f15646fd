#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//!
//! A lattice-based key-encapsulation mechanism over the ring `Z_q[X]/(X^256+1)`, `q = 3329`,
//! at the `k = 2` parameter set. Wraps an IND-CPA public-key encryption scheme in a
//! Fujisaki-Okamoto transform to achieve IND-CCA2 security, and supports two interchangeable
//! hash/XOF profiles (see [`profile`]): the default SHAKE/SHA-3 suite, and (behind the
//! `kyber90s` feature) an AES-256-CTR/SHA-2 suite for platforms without a fast Keccak.
//
// Supports automatically clearing sensitive data on drop
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::traits::SerDes;

// Module map
//
// ByteEncode_d / ByteDecode_d                     --> byte_fns.rs
// Parse (SampleNTT) / CBD_eta (SamplePolyCBD)      --> sampling.rs
// NTT / NTT^-1 / MultiplyNTTs / BaseCaseMultiply   --> ntt.rs
// Vector/matrix ops, Compress/Decompress           --> arith.rs
// XOF, PRF, G, H, KDF (both profiles)              --> profile.rs
// K-PKE.KeyGen / Encrypt / Decrypt                 --> cpapke.rs
// ML-KEM.KeyGen / Encaps / Decaps                  --> kem.rs
// Public-facing key/ciphertext/error types         --> default.rs, kyber90s.rs, errors.rs

mod arith;
mod byte_fns;
mod cpapke;
/// The default hash/XOF profile's key, ciphertext, and key-generation types.
pub mod default;
mod errors;
mod kem;
#[cfg(feature = "kyber90s")]
/// The `kyber90s` profile's key, ciphertext, and key-generation types.
pub mod kyber90s;
mod ntt;
mod profile;
mod sampling;
mod types;

/// All functionality is covered by traits, such that consumers can utilize trait objects as desired.
pub mod traits;

pub use default::{DecapsKey, EncapsKey, CipherText, KG};
#[cfg(feature = "kyber90s")]
pub use kyber90s::{
    DecapsKey as Kyber90sDecapsKey, EncapsKey as Kyber90sEncapsKey,
    CipherText as Kyber90sCipherText, KG as Kyber90sKG,
};
pub use errors::Error;

// Ring and NTT parameters.
const _N: u32 = 256;
const Q: u32 = 3329;
const ZETA: u32 = 17;

// The single parameter set this crate implements (equivalent to Kyber-512 / ML-KEM-512's k=2
// row). Unlike the reference crate, which carries three parameter sets behind a macro, this
// crate has exactly one, so its dimensions are plain crate consts rather than generics.
const K: usize = 2;
const ETA1: u32 = 3;
const ETA2: u32 = 2;
const DU: u32 = 10;
const DV: u32 = 4;
const ETA1_64: usize = ETA1 as usize * 64;
const ETA2_64: usize = ETA2 as usize * 64;

const PK_PKE_LEN: usize = 384 * K + 32;
const SK_PKE_LEN: usize = 384 * K;

/// Serialized Encapsulation Key Length (in bytes)
pub const EK_LEN: usize = PK_PKE_LEN;
/// Serialized Decapsulation Key Length (in bytes)
pub const DK_LEN: usize = SK_PKE_LEN + PK_PKE_LEN + 32 + 32;
/// Serialized Ciphertext Length (in bytes)
pub const CT_LEN: usize = 32 * (DU as usize * K + DV as usize);

/// Shared Secret Key Length used by the `kyber90s` profile and as the default for the
/// default profile (in bytes). The default profile's operations are generic over this length;
/// see [`traits::Encaps`]/[`traits::Decaps`].
pub const SSK_LEN: usize = 32;

/// The (opaque) shared secret established by encapsulation/decapsulation, generic over its
/// byte length `N` (the default profile lets the caller choose; the `kyber90s` profile fixes
/// `N = 32`).
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecretKey<const N: usize>([u8; N]);

impl<const N: usize> SerDes for SharedSecretKey<N> {
    type ByteArray = [u8; N];

    fn into_bytes(self) -> Self::ByteArray { self.0 }

    fn try_from_bytes(ssk: Self::ByteArray) -> Result<Self, Error> {
        // Not really needed but provided for symmetry.
        // No opportunity for validation, but using a Result for a future possibility
        Ok(SharedSecretKey(ssk))
    }
}

// Conservative (constant-time) paranoia...
impl<const N: usize> PartialEq for SharedSecretKey<N> {
    fn eq(&self, other: &Self) -> bool {
        let mut result = true;
        for i in 0..self.0.len() {
            result &= self.0[i] == other.0[i];
        }
        result
    }
}

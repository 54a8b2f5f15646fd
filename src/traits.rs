use rand_core::{CryptoRng, CryptoRngCore, RngCore};

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

use crate::errors::Error;

/// The `KeyGen` trait is defined to allow trait objects.
pub trait KeyGen {
    /// The (public) encapsulation key sent from the originator to the remote party.
    type EncapsKey;
    /// The (private) decapsulation key used by the originator to generate the shared secret.
    type DecapsKey;
    /// A serialized (public) encapsulation key byte array of the correct length.
    type EncapsByteArray;
    /// A serialized (private) decapsulation key byte array of the correct length.
    type DecapsByteArray;

    /// Generates an encapsulation and decapsulation key pair using the OS default random
    /// number generator. Operates in constant time, except for the `rho` derivation, which
    /// crosses the trust boundary in the clear.
    ///
    /// # Errors
    /// Returns an error if the random number generator fails.
    ///
    /// # Examples
    /// ```rust
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use kyber512::default::KG;
    /// use kyber512::traits::{KeyGen, SerDes, Decaps, Encaps};
    ///
    /// let (ek1, dk1) = KG::try_keygen()?;  // Party 1 generates both encaps and decaps keys
    /// let ek1_bytes = ek1.into_bytes();  // Party 1 serializes the encaps key
    ///
    /// let ek2_bytes = ek1_bytes;  // Party 1 sends encaps bytes to party 2
    /// let ek2 = kyber512::default::EncapsKey::try_from_bytes(ek2_bytes)?;  // Party 2 deserializes it
    /// // Party 2 generates a 32-byte shared secret and ciphertext (N is inferred from the binding):
    /// let (ssk2, ct2): (kyber512::SharedSecretKey<32>, _) = ek2.try_encaps()?;
    /// let ct2_bytes = ct2.into_bytes();
    ///
    /// let ct1 = kyber512::default::CipherText::try_from_bytes(ct2_bytes)?;
    /// let ssk1: kyber512::SharedSecretKey<32> = dk1.try_decaps(&ct1)?;  // Party 1 recovers the same secret
    ///
    /// assert_eq!(ssk1, ssk2);
    /// # Ok(())}
    /// ```
    #[cfg(feature = "default-rng")]
    fn try_keygen() -> Result<(Self::EncapsKey, Self::DecapsKey), Error> {
        Self::try_keygen_with_rng(&mut OsRng)
    }

    /// Generates an encapsulation and decapsulation key pair using a provided random number
    /// generator.
    ///
    /// # Errors
    /// Returns an error if the random number generator fails.
    fn try_keygen_with_rng(
        rng: &mut impl CryptoRngCore,
    ) -> Result<(Self::EncapsKey, Self::DecapsKey), Error>;

    /// Derives an encapsulation and decapsulation key pair from a 32-byte seed, bypassing
    /// randomness entirely. Rejects the all-zero seed.
    ///
    /// # Errors
    /// Returns [`Error::SeedValidation`] if `seed` is 32 zero bytes.
    fn keygen_from_seed(seed: [u8; 32]) -> Result<(Self::EncapsKey, Self::DecapsKey), Error>;

    /// Checks that a serialized encapsulation key and decapsulation key were produced together.
    /// Not constant-time.
    fn validate_keypair_vt(ek: &Self::EncapsByteArray, dk: &Self::DecapsByteArray) -> bool;
}

/// The `Encaps` trait defines methods for generating shared secrets and ciphertexts from an
/// encapsulation key. Generic over `N`, the shared-secret length in bytes — the default
/// profile lets the caller pick `N` via turbofish; the `kyber90s` profile fixes it at 32.
pub trait Encaps<const N: usize> {
    /// The ciphertext type transmitted from the encapsulating party to the decapsulating party.
    type CipherText;

    /// Generates a shared secret and ciphertext using the OS default random number generator.
    ///
    /// # Errors
    /// Returns an error when the random number generator fails.
    #[cfg(feature = "default-rng")]
    fn try_encaps(&self) -> Result<(crate::SharedSecretKey<N>, Self::CipherText), Error> {
        self.try_encaps_with_rng(&mut OsRng)
    }

    /// Generates a shared secret and ciphertext using a provided random number generator.
    ///
    /// # Errors
    /// Returns an error when the random number generator fails.
    fn try_encaps_with_rng(
        &self, rng: &mut impl CryptoRngCore,
    ) -> Result<(crate::SharedSecretKey<N>, Self::CipherText), Error>;

    /// Deterministic encapsulation from a supplied 32-byte seed, useful for test vectors.
    fn encaps_from_seed(&self, seed: &[u8; 32]) -> (crate::SharedSecretKey<N>, Self::CipherText) {
        self.try_encaps_with_rng(&mut DummyRng { data: *seed }).expect("rng will not fail")
    }
}

/// A fixed-output RNG used to make `encaps_from_seed` deterministic — every draw returns the
/// same 32 bytes, which is safe here only because the caller-supplied seed *is* the intended
/// randomness for a single encapsulation.
struct DummyRng {
    data: [u8; 32],
}

impl RngCore for DummyRng {
    fn next_u32(&mut self) -> u32 { unimplemented!() }

    fn next_u64(&mut self) -> u64 { unimplemented!() }

    fn fill_bytes(&mut self, _out: &mut [u8]) { unimplemented!() }

    fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), rand_core::Error> {
        out.copy_from_slice(&self.data);
        Ok(())
    }
}

impl CryptoRng for DummyRng {}

/// The `Decaps` trait recovers the shared secret from a decapsulation key and ciphertext.
pub trait Decaps<const N: usize> {
    /// The ciphertext type received from the encapsulating party.
    type CipherText;

    /// Recovers the shared secret. Never fails on a malformed ciphertext — that case is
    /// handled by implicit rejection, which returns an unrelated (but still well-formed)
    /// secret rather than an error; see [`crate::kem`].
    ///
    /// # Errors
    /// Returns an error only if `self` itself is malformed (a binding mismatch between the
    /// embedded public key and its hash).
    fn try_decaps(&self, ct: &Self::CipherText) -> Result<crate::SharedSecretKey<N>, Error>;
}

/// Serialization to and from fixed-size byte arrays.
pub trait SerDes {
    /// The fixed-size byte array type used for serialization.
    type ByteArray;

    /// Produces a byte array of fixed size specific to the struct being serialized.
    fn into_bytes(self) -> Self::ByteArray;

    /// Consumes a byte array of fixed size specific to the struct being deserialized,
    /// performing any available validation.
    ///
    /// # Errors
    /// Returns an error on malformed input.
    fn try_from_bytes(bytes: Self::ByteArray) -> Result<Self, Error>
    where Self: Sized;
}

//! Error type returned by key/ciphertext parsing and by the random byte source.

use core::fmt;

/// The set of ways a public operation in this crate can fail.
///
/// Decapsulation itself never appears here: a malformed-but-correct-length ciphertext
/// is handled by implicit rejection (see [`crate::kem`]) rather than by returning an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A serialized public key, secret key, or ciphertext had the wrong number of bytes.
    InputLengthMismatch,
    /// `Seed_to_Keys` was given an all-zero 32-byte seed.
    SeedValidation,
    /// The `h` field embedded in a parsed secret key does not match `H(pk_bytes)`.
    PublicKeyBindingMismatch,
    /// The underlying random number generator returned an error.
    RandomSourceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::InputLengthMismatch => "input byte array has the wrong length",
            Error::SeedValidation => "seed failed validation (all-zero seed is not accepted)",
            Error::PublicKeyBindingMismatch => "secret key's embedded hash does not match H(public key)",
            Error::RandomSourceFailure => "random number generator failed",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// If the condition is not met, return an [`Error`]. Borrowed in spirit from the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

pub(crate) use ensure;

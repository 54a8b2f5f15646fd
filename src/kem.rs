//! The IND-CCA2 key-encapsulation mechanism: the Fujisaki-Okamoto transform wrapped around
//! [`crate::cpapke`].

use rand_core::CryptoRngCore;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::cpapke;
use crate::errors::{ensure, Error};
use crate::profile::Profile;
use crate::{CT_LEN, DK_LEN, EK_LEN, PK_PKE_LEN, SK_PKE_LEN};

/// Serialized encapsulation key: `Encode_12(t_hat) || rho`.
pub(crate) type Ek = [u8; EK_LEN];
/// Serialized decapsulation key: `dk_pke || ek || H(ek) || z`.
pub(crate) type Dk = [u8; DK_LEN];

/// `ML-KEM.KeyGen_internal`: derives `(ek, dk)` from the 32-byte seeds `d` and `z`.
pub(crate) fn key_gen_internal<P: Profile>(d: [u8; 32], z: [u8; 32]) -> (Ek, Dk) {
    let mut ek = [0u8; EK_LEN];
    let mut dk = [0u8; DK_LEN];
    let mut dk_pke = [0u8; SK_PKE_LEN];

    cpapke::keygen::<P>(d, &mut ek, &mut dk_pke);

    dk[0..SK_PKE_LEN].copy_from_slice(&dk_pke);
    dk[SK_PKE_LEN..SK_PKE_LEN + PK_PKE_LEN].copy_from_slice(&ek);
    let h_ek = P::h(&ek);
    dk[SK_PKE_LEN + PK_PKE_LEN..SK_PKE_LEN + PK_PKE_LEN + 32].copy_from_slice(&h_ek);
    dk[SK_PKE_LEN + PK_PKE_LEN + 32..].copy_from_slice(&z);

    (ek, dk)
}

/// `ML-KEM.KeyGen`: samples fresh randomness from `rng` and derives a keypair.
pub(crate) fn key_gen<P: Profile>(rng: &mut impl CryptoRngCore) -> Result<(Ek, Dk), Error> {
    let mut d = [0u8; 32];
    let mut z = [0u8; 32];
    rng.try_fill_bytes(&mut d).map_err(|_| Error::RandomSourceFailure)?;
    rng.try_fill_bytes(&mut z).map_err(|_| Error::RandomSourceFailure)?;
    Ok(key_gen_internal::<P>(d, z))
}

/// `Seed_to_Keys`: a pure, deterministic keypair derivation from one 32-byte seed.
///
/// Rejects the all-zero seed — a guard against uninitialized memory being mistaken for
/// entropy, not a claim that other low-entropy seeds are safe to use.
pub(crate) fn seed_to_keys<P: Profile>(seed: [u8; 32]) -> Result<(Ek, Dk), Error> {
    ensure!(seed != [0u8; 32], Error::SeedValidation);
    let (d, z) = P::g(&[&seed]);
    Ok(key_gen_internal::<P>(d, z))
}

/// `ML-KEM.Encaps_internal`: deterministic encapsulation given the 32-byte message `m`.
///
/// Returns the shared secret of the caller-chosen length `N`, plus the ciphertext.
pub(crate) fn encaps_internal<P: Profile, const N: usize>(
    m: [u8; 32], ek: &Ek,
) -> ([u8; N], [u8; CT_LEN]) {
    let h_ek = P::h(ek);
    let (k_bar, r) = P::g(&[&m, &h_ek]);

    let mut ct = [0u8; CT_LEN];
    cpapke::encrypt::<P>(ek, &m, &r, &mut ct).expect("ek produced by this crate is always well-formed");

    let h_c = P::h(&ct);
    let mut ss = [0u8; N];
    P::kdf(&k_bar, &h_c, &mut ss);
    (ss, ct)
}

/// `ML-KEM.Encaps`: samples fresh randomness from `rng` and encapsulates against `ek`.
///
/// The drawn randomness is hashed with `H` before use, domain-separating the random source
/// from the message fed into `encaps_internal`.
pub(crate) fn encaps<P: Profile, const N: usize>(
    rng: &mut impl CryptoRngCore, ek: &Ek,
) -> Result<([u8; N], [u8; CT_LEN]), Error> {
    let mut m = [0u8; 32];
    rng.try_fill_bytes(&mut m).map_err(|_| Error::RandomSourceFailure)?;
    let m = P::h(&m);
    Ok(encaps_internal::<P, N>(m, ek))
}

/// `ML-KEM.Decaps_internal`: recovers the shared secret, falling back to implicit rejection
/// (a pseudorandom value derived from the embedded `z`) on a failed re-encryption check.
///
/// `H(c)` is computed once, from the real input ciphertext, and reused on both the accept and
/// reject paths — only `k_bar` differs between them, selected in constant time.
pub(crate) fn decaps_internal<P: Profile, const N: usize>(
    dk: &Dk, ct: &[u8; CT_LEN],
) -> Result<[u8; N], Error> {
    let dk_pke = &dk[0..SK_PKE_LEN];
    let ek_pke: &[u8; PK_PKE_LEN] = dk[SK_PKE_LEN..SK_PKE_LEN + PK_PKE_LEN].try_into().unwrap();
    let h_stored: [u8; 32] =
        dk[SK_PKE_LEN + PK_PKE_LEN..SK_PKE_LEN + PK_PKE_LEN + 32].try_into().unwrap();
    let z: [u8; 32] = dk[SK_PKE_LEN + PK_PKE_LEN + 32..].try_into().unwrap();

    ensure!(bool::from(P::h(ek_pke).ct_eq(&h_stored)), Error::PublicKeyBindingMismatch);

    let m_prime = cpapke::decrypt(dk_pke, ct)?;
    let (k_bar_prime, r_prime) = P::g(&[&m_prime, &h_stored]);

    let mut c_prime = [0u8; CT_LEN];
    cpapke::encrypt::<P>(ek_pke, &m_prime, &r_prime, &mut c_prime)
        .expect("ek_pke embedded in a valid dk is always well-formed");

    let h_c = P::h(ct);
    let accept = ct.ct_eq(&c_prime);

    let mut k_bar = [0u8; 32];
    for i in 0..32 {
        k_bar[i] = u8::conditional_select(&z[i], &k_bar_prime[i], accept);
    }

    let mut ss = [0u8; N];
    P::kdf(&k_bar, &h_c, &mut ss);
    Ok(ss)
}

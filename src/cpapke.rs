//! The IND-CPA public-key encryption scheme (CPAPKE) that the KEM wraps via the
//! Fujisaki-Okamoto transform in [`crate::kem`].

use crate::arith::{add_vecs, compress_vector, decompress_vector, dot_t_prod, mul_mat_t_vec, mul_mat_vec, MatrixHat};
use crate::byte_fns::{byte_decode, byte_encode};
use crate::errors::Error;
use crate::profile::Profile;
use crate::sampling::{sample_ntt, sample_poly_cbd};
use crate::types::{Normal, Ntt, Poly, PolyVec, Z};
use crate::{DU, DV, ETA1_64, ETA2_64, K, PK_PKE_LEN, SK_PKE_LEN};

fn zero_poly<R: crate::types::Repr>() -> Poly<R> {
    Poly::from_array([Z::default(); 256])
}

/// Generates the CPAPKE keypair `(ek_pke, dk_pke)` from the 32-byte seed `d`.
///
/// `ek_pke` is `Encode_12(t_hat) || rho` (800 bytes); `dk_pke` is `Encode_12(s_hat)` (768 bytes).
pub(crate) fn keygen<P: Profile>(d: [u8; 32], ek_pke: &mut [u8], dk_pke: &mut [u8]) {
    debug_assert_eq!(ek_pke.len(), PK_PKE_LEN);
    debug_assert_eq!(dk_pke.len(), SK_PKE_LEN);

    let (rho, sigma) = P::g(&[&d]);
    let mut n = 0u8;

    let a_hat = gen_a_hat::<P>(&rho);

    let s = PolyVec::<Normal>::from_fn(|_| {
        let mut buf = [0u8; ETA1_64];
        P::prf(&sigma, n, &mut buf);
        n += 1;
        Poly::from_array(sample_poly_cbd(&buf))
    });
    let e = PolyVec::<Normal>::from_fn(|_| {
        let mut buf = [0u8; ETA1_64];
        P::prf(&sigma, n, &mut buf);
        n += 1;
        Poly::from_array(sample_poly_cbd(&buf))
    });

    let s_hat = s.ntt();
    let e_hat = e.ntt();

    let t_hat = add_vecs(&mul_mat_vec(&a_hat, &s_hat), &e_hat);

    for (i, chunk) in ek_pke.chunks_mut(384).enumerate().take(K) {
        byte_encode(12, t_hat.polys[i].as_array(), chunk).expect("t_hat coefficients are always < q");
    }
    ek_pke[K * 384..].copy_from_slice(&rho);

    for (i, chunk) in dk_pke.chunks_mut(384).enumerate() {
        byte_encode(12, s_hat.polys[i].as_array(), chunk).expect("s_hat coefficients are always < q");
    }
}


/// Rebuilds the `K x K` public matrix `A_hat` from the 32-byte seed `rho`.
///
/// Used both by [`keygen`] (as `A_hat`) and by [`encrypt`] (as `A_hat^T`, via index-order swap
/// in [`crate::arith::mul_mat_t_vec`] — the matrix itself is only ever derived once per call).
pub(crate) fn gen_a_hat<P: Profile>(rho: &[u8; 32]) -> MatrixHat {
    core::array::from_fn(|i| {
        core::array::from_fn(|j| {
            Poly::from_array(sample_ntt(P::xof(rho, j.to_le_bytes()[0], i.to_le_bytes()[0])))
        })
    })
}


/// Encrypts the 32-byte message `m` under `ek_pke`, using the 32 bytes of randomness `r`,
/// writing the ciphertext into `ct`.
#[allow(clippy::many_single_char_names)]
pub(crate) fn encrypt<P: Profile>(
    ek_pke: &[u8], m: &[u8; 32], r: &[u8; 32], ct: &mut [u8],
) -> Result<(), Error> {
    debug_assert_eq!(ek_pke.len(), PK_PKE_LEN);

    let mut n = 0u8;

    let mut t_hat_polys: [Poly<Ntt>; K] = [zero_poly(); K];
    for (i, chunk) in ek_pke.chunks(384).enumerate().take(K) {
        t_hat_polys[i] = Poly::from_array(byte_decode(12, chunk)?);
    }
    let t_hat = PolyVec { polys: t_hat_polys };
    let rho: [u8; 32] = ek_pke[384 * K..(384 * K + 32)].try_into().unwrap();

    let a_hat = gen_a_hat::<P>(&rho);

    let y = PolyVec::<Normal>::from_fn(|_| {
        let mut buf = [0u8; ETA1_64];
        P::prf(r, n, &mut buf);
        n += 1;
        Poly::from_array(sample_poly_cbd(&buf))
    });
    let e1 = PolyVec::<Normal>::from_fn(|_| {
        let mut buf = [0u8; ETA2_64];
        P::prf(r, n, &mut buf);
        n += 1;
        Poly::from_array(sample_poly_cbd(&buf))
    });
    let mut e2_buf = [0u8; ETA2_64];
    P::prf(r, n, &mut e2_buf);
    let e2 = sample_poly_cbd(&e2_buf);

    let y_hat = y.ntt();

    let u_hat = mul_mat_t_vec(&a_hat, &y_hat);
    let mut u = add_vecs(&u_hat.ntt_inv(), &e1);

    let mut mu = byte_decode(1, m)?;
    decompress_vector(1, &mut mu);

    let v_ntt = dot_t_prod(&t_hat, &y_hat);
    let mut v = v_ntt.ntt_inv().into_array();
    for i in 0..256 {
        v[i] = v[i].add(e2[i]).add(mu[i]);
    }

    let step = 32 * DU as usize;
    for (i, chunk) in ct.chunks_mut(step).enumerate().take(K) {
        let mut coeffs = *u.polys[i].as_array();
        compress_vector(DU, &mut coeffs);
        byte_encode(DU, &coeffs, chunk)?;
        u.polys[i] = Poly::from_array(coeffs);
    }
    compress_vector(DV, &mut v);
    byte_encode(DV, &v, &mut ct[K * step..])?;

    Ok(())
}


/// Decrypts a ciphertext under `dk_pke`, recovering the original 32-byte message.
///
/// This never fails: a malformed ciphertext simply decrypts to some well-defined (garbage)
/// message, and the KEM's re-encryption check in [`crate::kem`] is what catches that.
pub(crate) fn decrypt(dk_pke: &[u8], ct: &[u8]) -> Result<[u8; 32], Error> {
    debug_assert_eq!(dk_pke.len(), SK_PKE_LEN);

    let c1 = &ct[0..32 * DU as usize * K];
    let c2 = &ct[32 * DU as usize * K..32 * (DU as usize * K + DV as usize)];

    let mut u_polys: [Poly<Normal>; K] = [zero_poly(); K];
    for (i, chunk) in c1.chunks(32 * DU as usize).enumerate().take(K) {
        let mut coeffs = byte_decode(DU, chunk)?;
        decompress_vector(DU, &mut coeffs);
        u_polys[i] = Poly::from_array(coeffs);
    }
    let u = PolyVec { polys: u_polys };

    let mut v = byte_decode(DV, c2)?;
    decompress_vector(DV, &mut v);

    let mut s_hat_polys: [Poly<Ntt>; K] = [zero_poly(); K];
    for (i, chunk) in dk_pke.chunks(384).enumerate() {
        s_hat_polys[i] = Poly::from_array(byte_decode(12, chunk)?);
    }
    let s_hat = PolyVec { polys: s_hat_polys };

    let ntt_u = u.ntt();
    let st_ntt_u = dot_t_prod(&s_hat, &ntt_u);
    let recovered = st_ntt_u.ntt_inv().into_array();

    let mut w = [Z::default(); 256];
    for i in 0..256 {
        w[i] = v[i].sub(recovered[i]);
    }

    compress_vector(1, &mut w);
    let mut m = [0u8; 32];
    byte_encode(1, &w, &mut m)?;
    Ok(m)
}

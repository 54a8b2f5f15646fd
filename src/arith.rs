//! Vector/matrix arithmetic over `R_q` and the lossy Compress/Decompress codecs.

use crate::ntt::multiply_ntts;
use crate::types::{Ntt, Poly, PolyVec, Repr, Z};
use crate::{K, Q};


/// Vector addition: `z_hat[k] = u_hat[k] + v_hat[k]`, element-wise. Works in either
/// representation, since addition doesn't care whether the domain is normal or NTT.
#[must_use]
pub(crate) fn add_vecs<R: Repr>(vec_a: &PolyVec<R>, vec_b: &PolyVec<R>) -> PolyVec<R> {
    PolyVec::from_fn(|k| {
        let sum = add_poly(vec_a.polys[k].as_array(), vec_b.polys[k].as_array());
        Poly::from_array(sum)
    })
}


#[inline]
fn add_poly(a: &[Z; 256], b: &[Z; 256]) -> [Z; 256] {
    core::array::from_fn(|n| a[n].add(b[n]))
}


/// The `K x K` matrix `A_hat`, every entry in NTT representation.
pub(crate) type MatrixHat = [[Poly<Ntt>; K]; K];


/// Matrix-by-vector multiplication in the NTT domain: `w_hat = A_hat . u_hat`.
#[must_use]
pub(crate) fn mul_mat_vec(a_hat: &MatrixHat, u_hat: &PolyVec<Ntt>) -> PolyVec<Ntt> {
    let mut w_hat = [[Z::default(); 256]; K];
    for i in 0..K {
        #[allow(clippy::needless_range_loop)]
        for j in 0..K {
            let tmp = multiply_ntts(a_hat[i][j].as_array(), u_hat.polys[j].as_array());
            w_hat[i] = add_poly(&w_hat[i], &tmp);
        }
    }
    PolyVec::from_fn(|i| Poly::from_array(w_hat[i]))
}


/// Matrix-transpose-by-vector multiplication: `y_hat = A_hat^T . u_hat`.
///
/// The transpose is implemented by swapping the `i`/`j` index order when reading `a_hat`,
/// rather than by re-deriving a second matrix — `a_hat[i][j]` and `a_hat[j][i]` refer to the
/// same underlying matrix produced by [`crate::cpapke::gen_a_hat`].
#[must_use]
pub(crate) fn mul_mat_t_vec(a_hat: &MatrixHat, u_hat: &PolyVec<Ntt>) -> PolyVec<Ntt> {
    let mut y_hat = [[Z::default(); 256]; K];
    #[allow(clippy::needless_range_loop)]
    for i in 0..K {
        #[allow(clippy::needless_range_loop)]
        for j in 0..K {
            let tmp = multiply_ntts(a_hat[j][i].as_array(), u_hat.polys[j].as_array()); // i,j swapped vs mul_mat_vec
            y_hat[i] = add_poly(&y_hat[i], &tmp);
        }
    }
    PolyVec::from_fn(|i| Poly::from_array(y_hat[i]))
}


/// Vector dot product: `z_hat = u_hat^T . v_hat`, a single ring element in NTT form.
#[must_use]
pub(crate) fn dot_t_prod(u_hat: &PolyVec<Ntt>, v_hat: &PolyVec<Ntt>) -> Poly<Ntt> {
    let mut result = [Z::default(); 256];
    for j in 0..K {
        let tmp = multiply_ntts(u_hat.polys[j].as_array(), v_hat.polys[j].as_array());
        for n in 0..256 {
            result[n] = result[n].add(tmp[n]);
        }
    }
    Poly::from_array(result)
}


/// `Compress_d(x) = ⌈(2^d/q) · x⌋`, applied coefficient-wise, in place.
///
/// Works for all odd `q` from 17 to 6307; the input is assumed to already be in `[0, q)`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn compress_vector(d: u32, inout: &mut [Z]) {
    const M: u32 = (((1u64 << 36) + Q as u64 - 1) / Q as u64) as u32;
    for x_ref in &mut *inout {
        let y = (x_ref.get_u32() << d) + (u32::from(Q) >> 1);
        let result = (u64::from(y) * u64::from(M)) >> 36;
        x_ref.set_u16(result as u16);
    }
}


/// `Decompress_d(y) = ⌈(q/2^d) · y⌋`, applied coefficient-wise, in place. Inverse (lossy) of
/// [`compress_vector`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn decompress_vector(d: u32, inout: &mut [Z]) {
    for y_ref in &mut *inout {
        let qy = u32::from(Q) * y_ref.get_u32() + (1 << d) - 1;
        y_ref.set_u16((qy >> d) as u16);
    }
}

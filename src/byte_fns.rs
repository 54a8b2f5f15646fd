use crate::errors::{ensure, Error};
use crate::types::Z;
use crate::Q;

/// `Encode_d(F)`: packs an array of d-bit integers into a byte array, for 1 <= d <= 12.
///
/// `F in Z^256_m` where `m = 2^d` if `d < 12`, else `m = q`. Output is `32*d` bytes.
pub(crate) fn byte_encode(d: u32, integers_f: &[Z; 256], bytes_b: &mut [u8]) -> Result<(), Error> {
    let mut temp = 0u64;
    let mut bit_index = 0;
    let mut byte_index = 0;
    let m = if d < 12 { 2u64.pow(d) } else { Q as u64 };
    for coeff in integers_f {
        let coeff = u64::from(coeff.get_u16());
        ensure!(coeff <= m, Error::InputLengthMismatch);
        let coeff = coeff & (2u64.pow(d) - 1);
        temp |= coeff << bit_index;
        bit_index += d as usize;
        while bit_index > 7 {
            bytes_b[byte_index] = temp as u8;
            temp >>= 8;
            byte_index += 1;
            bit_index -= 8;
        }
    }
    Ok(())
}


/// `Decode_d(B)`: unpacks a byte array into an array of d-bit integers, for 1 <= d <= 12.
///
/// Input is `32*d` bytes; output `F in Z^256_m` where `m = 2^d` if `d < 12`, else `m = q`.
pub(crate) fn byte_decode(d: u32, bytes_b: &[u8]) -> Result<[Z; 256], Error> {
    let mut integers_f = [Z::default(); 256];
    let bitlen = d;
    let mut temp = 0u64;
    let mut int_index = 0;
    let mut bit_index = 0;
    for byte in bytes_b {
        temp |= (*byte as u64) << bit_index;
        bit_index += 8;
        while bit_index >= bitlen {
            let tmask = temp & (2u64.pow(bitlen) - 1);
            integers_f[int_index].set_u16(tmask as u16);
            bit_index -= bitlen;
            temp >>= bitlen;
            int_index += 1;
        }
    }
    let max = if d < 12 { 2u16.pow(d) } else { Q as u16 };
    ensure!(integers_f.iter().all(|e| e.get_u16() < max), Error::InputLengthMismatch);
    Ok(integers_f)
}

use crate::Q;
use core::marker::PhantomData;

// While Z is nice, simple and correct, the performance is suboptimal.
// This will be addressed (particularly in matrix operations etc) 'soon',
// potentially as a 256-entry row.

/// Stored as u16, but arithmetic as u32 (so we can multiply/reduce/etc)
#[derive(Clone, Copy, Default)]
pub(crate) struct Z(pub(crate) u16);


#[allow(clippy::inline_always)]
impl Z {
    const M: u64 = 2u64.pow(32) / (Self::Q64);
    #[allow(clippy::cast_possible_truncation)]
    const Q16: u16 = Q as u16;
    const Q64: u64 = Q as u64;

    pub(crate) fn get_u16(self) -> u16 { self.0 }

    pub(crate) fn get_u32(self) -> u32 { u32::from(self.0) }

    pub(crate) fn set_u16(&mut self, a: u16) { self.0 = a }

    #[inline(always)]
    pub(crate) fn add(self, other: Self) -> Self {
        let sum = self.0.wrapping_add(other.0);
        let (trial, borrow) = sum.overflowing_sub(Self::Q16);
        let result = if borrow { sum } else { trial }; // TODO Not quite CT
        Self(result)
    }

    #[inline(always)]
    pub(crate) fn sub(self, other: Self) -> Self {
        let (diff, borrow) = self.0.overflowing_sub(other.0);
        let trial = diff.wrapping_add(Self::Q16);
        let result = if borrow { trial } else { diff }; // TODO Not quite CT
        Self(result)
    }

    #[inline(always)]
    pub(crate) fn mul(self, other: Self) -> Self {
        let prod = u64::from(self.0) * u64::from(other.0);
        let quot = prod * Self::M;
        let quot = quot >> (32);
        let rem = prod - quot * Self::Q64;
        let (diff, borrow) = rem.overflowing_sub(Self::Q64);
        let result = if borrow { rem } else { diff }; // TODO Not quite CT
        Self(u16::try_from(result).unwrap())
    }
}


mod sealed {
    pub trait Sealed {}
}

/// Tags a polynomial's representation at the type level so the two domains can't be
/// mixed up by accident; see the NTT/NTT-inverse conversions below for the only way across.
pub(crate) trait Repr: sealed::Sealed + Copy {}

/// Coefficients in the standard (time-domain) basis.
#[derive(Clone, Copy)]
pub(crate) struct Normal;
/// Coefficients in the NTT (frequency-domain) basis.
#[derive(Clone, Copy)]
pub(crate) struct Ntt;

impl sealed::Sealed for Normal {}
impl sealed::Sealed for Ntt {}
impl Repr for Normal {}
impl Repr for Ntt {}

/// A single ring element, tagged with its representation `R`.
#[derive(Clone, Copy)]
pub(crate) struct Poly<R: Repr> {
    coeffs: [Z; 256],
    _repr: PhantomData<R>,
}

impl<R: Repr> Poly<R> {
    pub(crate) fn from_array(coeffs: [Z; 256]) -> Self { Poly { coeffs, _repr: PhantomData } }

    pub(crate) fn as_array(&self) -> &[Z; 256] { &self.coeffs }

    pub(crate) fn into_array(self) -> [Z; 256] { self.coeffs }
}

impl Poly<Normal> {
    /// Forward transform into the NTT domain.
    pub(crate) fn ntt(&self) -> Poly<Ntt> { Poly::from_array(crate::ntt::ntt(&self.coeffs)) }
}

impl Poly<Ntt> {
    /// Inverse transform back into the standard domain.
    pub(crate) fn ntt_inv(&self) -> Poly<Normal> { Poly::from_array(crate::ntt::ntt_inv(&self.coeffs)) }
}

/// A length-`K` vector of ring elements, all sharing one representation `R`.
#[derive(Clone, Copy)]
pub(crate) struct PolyVec<R: Repr> {
    pub(crate) polys: [Poly<R>; crate::K],
}

impl<R: Repr> PolyVec<R> {
    pub(crate) fn from_fn(f: impl FnMut(usize) -> Poly<R>) -> Self {
        PolyVec { polys: core::array::from_fn(f) }
    }
}

impl PolyVec<Normal> {
    pub(crate) fn ntt(&self) -> PolyVec<Ntt> {
        PolyVec::from_fn(|i| self.polys[i].ntt())
    }
}

impl PolyVec<Ntt> {
    pub(crate) fn ntt_inv(&self) -> PolyVec<Normal> {
        PolyVec::from_fn(|i| self.polys[i].ntt_inv())
    }
}

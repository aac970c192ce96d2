//! Fixed-capacity field elements and the modular operations on them

use bincurve_internal::ct_is_zero;
use bincurve_params::{GF2_MAX_BYTES, GF2_WIDE_BYTES};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::{inverse, multiply, reduce};
use crate::error::{validate, Result};

/// An element of GF(2^m) stored in a zero-padded little-endian buffer
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u8; GF2_MAX_BYTES]);

impl FieldElement {
    /// The additive identity
    pub const fn zero() -> Self {
        FieldElement([0u8; GF2_MAX_BYTES])
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        let mut bytes = [0u8; GF2_MAX_BYTES];
        bytes[0] = 1;
        FieldElement(bytes)
    }

    /// Wrap a full-capacity buffer
    pub const fn from_array(bytes: [u8; GF2_MAX_BYTES]) -> Self {
        FieldElement(bytes)
    }

    /// Copy `bytes` into the low end of a zero element
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::max_length("FieldElement::from_bytes", bytes.len(), GF2_MAX_BYTES)?;
        let mut out = Self::zero();
        out.0[..bytes.len()].copy_from_slice(bytes);
        Ok(out)
    }

    /// The whole backing buffer
    pub fn as_bytes(&self) -> &[u8; GF2_MAX_BYTES] {
        &self.0
    }

    /// Mutable access to the backing buffer
    pub fn as_bytes_mut(&mut self) -> &mut [u8; GF2_MAX_BYTES] {
        &mut self.0
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        ct_is_zero(&self.0)
    }

    /// Field addition (XOR)
    pub fn add(&self, other: &Self) -> Self {
        let mut out = *self;
        super::add(&mut out.0, &other.0);
        out
    }
}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u8; GF2_MAX_BYTES];
        for (i, o) in out.iter_mut().enumerate() {
            *o = u8::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

/// Modular arithmetic in GF(2^m) for one reduction polynomial
///
/// Borrows the modulus; `width` is the active element length in bytes and
/// equals the modulus buffer length.
#[derive(Clone, Copy, Debug)]
pub struct BinaryField<'a> {
    modulus: &'a [u8],
    width: usize,
}

impl<'a> BinaryField<'a> {
    /// Create a field view over `modulus`, which must fit the element capacity
    pub fn new(modulus: &'a [u8]) -> Result<Self> {
        validate::max_length("BinaryField modulus", modulus.len(), GF2_MAX_BYTES)?;
        Ok(BinaryField {
            modulus,
            width: modulus.len(),
        })
    }

    /// Active element width in bytes
    pub fn width(&self) -> usize {
        self.width
    }

    /// The reduction polynomial
    pub fn modulus(&self) -> &'a [u8] {
        self.modulus
    }

    /// `a * b mod modulus`
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let n = self.width;
        let mut wide = [0u8; GF2_WIDE_BYTES];
        multiply(&a.0[..n], &b.0[..n], &mut wide[..2 * n]);
        reduce(&mut wide[..2 * n], self.modulus);
        let mut out = FieldElement::zero();
        out.0[..n].copy_from_slice(&wide[..n]);
        out
    }

    /// `a^2 mod modulus`
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        self.mul(a, a)
    }

    /// `a^-1 mod modulus`; fails for zero
    pub fn invert(&self, a: &FieldElement) -> Result<FieldElement> {
        let n = self.width;
        let mut out = FieldElement::zero();
        inverse(&a.0[..n], self.modulus, &mut out.0[..n])?;
        Ok(out)
    }

    /// `a / b mod modulus`; fails when `b` is zero
    pub fn div(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement> {
        Ok(self.mul(a, &self.invert(b)?))
    }
}

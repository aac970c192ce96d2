//! Secret scalars in `[1, order - 1]`

use bincurve_common::security::SecretBuffer;
use bincurve_internal::ct_is_zero;
use bincurve_params::GF2_MAX_BYTES;
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BinaryCurve;
use crate::error::{validate, Error, Result};
use crate::gf2::degree;

/// A private scalar for one curve, stored little-endian in a zeroizing buffer
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar {
    bytes: SecretBuffer<GF2_MAX_BYTES>,
    len: usize,
}

impl Scalar {
    /// Create a scalar from `coord_len` little-endian bytes
    ///
    /// Rejects zero and any value not below the group order; no reduction
    /// is performed.
    pub fn new(curve: &BinaryCurve<'_>, bytes: &[u8]) -> Result<Self> {
        let params = curve.params();
        validate::length("Scalar", bytes.len(), params.coord_len())?;

        if bool::from(ct_is_zero(bytes)) {
            return Err(Error::param("Scalar", "Scalar cannot be zero"));
        }
        if !bool::from(ct_less_than(bytes, params.order_bytes())) {
            return Err(Error::param("Scalar", "Scalar must be below the group order"));
        }

        let mut buf = SecretBuffer::zeroed();
        buf.as_mut_slice()[..bytes.len()].copy_from_slice(bytes);
        Ok(Scalar {
            bytes: buf,
            len: bytes.len(),
        })
    }

    /// Sample a uniform scalar by rejection
    ///
    /// Candidates are masked to the bit length of the order, so each draw
    /// is accepted with probability above one half.
    pub fn random<R: CryptoRng + RngCore>(curve: &BinaryCurve<'_>, rng: &mut R) -> Result<Self> {
        let params = curve.params();
        let len = params.coord_len();
        let top = degree(params.order_bytes()).ok_or(Error::param("order", "zero order"))?;

        let mut candidate = SecretBuffer::<GF2_MAX_BYTES>::zeroed();
        loop {
            let bytes = &mut candidate.as_mut_slice()[..len];
            rng.fill_bytes(bytes);
            bytes[top >> 3] &= 0xFF >> (7 - (top & 7));
            for b in bytes[(top >> 3) + 1..].iter_mut() {
                *b = 0;
            }
            match Scalar::new(curve, bytes) {
                Ok(scalar) => return Ok(scalar),
                Err(_) => continue,
            }
        }
    }

    /// The scalar as `coord_len` little-endian bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes.as_slice()[..self.len]
    }

    /// Get a reference to the underlying `SecretBuffer`
    pub fn as_secret_buffer(&self) -> &SecretBuffer<GF2_MAX_BYTES> {
        &self.bytes
    }

    /// Length of the encoding in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a scalar is never empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Constant-time `a < b` for equal-length little-endian integers
pub(crate) fn ct_less_than(a: &[u8], b: &[u8]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0u16;
    for (&x, &y) in a.iter().zip(b) {
        let diff = (x as u16).wrapping_sub(y as u16).wrapping_sub(borrow);
        borrow = diff >> 15;
    }
    Choice::from(borrow as u8)
}

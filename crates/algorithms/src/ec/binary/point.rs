//! Affine points and the packed point layout

use bincurve_internal::{ct_assign, ct_is_zero};
use bincurve_params::{CurveParams, GF2_MAX_BYTES, GF2_PACKED_POINT_BYTES};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{validate, Result};
use crate::gf2::FieldElement;

/// An affine point on a binary curve, or the point at infinity
///
/// The identity is carried as an explicit tag. Its coordinates are kept at
/// zero so that the packed encoding of infinity is the all-zero buffer.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity & other.is_identity;
        let neither_identity = !self.is_identity & !other.is_identity;
        both_identity | (neither_identity & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            is_identity: Choice::from(u8::conditional_select(
                &a.is_identity.unwrap_u8(),
                &b.is_identity.unwrap_u8(),
                choice,
            )),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Point {
    /// The point at infinity
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// A finite point with the given coordinates, not checked against any curve
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Self {
        Point {
            is_identity: Choice::from(0),
            x,
            y,
        }
    }

    /// Check if this point is the identity element
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// The x-coordinate (zero for the identity)
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// The y-coordinate (zero for the identity)
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Write the packed encoding `x || pad || y` into `out`
    ///
    /// Exactly `params.packed_len()` bytes are written. The identity encodes
    /// as all zeros.
    pub fn to_packed(&self, params: &CurveParams, out: &mut [u8]) -> Result<()> {
        let len = params.coord_len();
        let total = params.packed_len();
        validate::max_length("field_size_bytes", len, GF2_MAX_BYTES)?;
        validate::min_length("packed point output", out.len(), total)?;

        let out = &mut out[..total];
        out.fill(0);
        x_coord_mut(params, out).copy_from_slice(&self.x.as_bytes()[..len]);
        y_coord_mut(params, out).copy_from_slice(&self.y.as_bytes()[..len]);
        let zeros = [0u8; GF2_PACKED_POINT_BYTES];
        ct_assign(out, &zeros[..total], self.is_identity);
        Ok(())
    }

    /// Read a point from its packed encoding
    ///
    /// The all-zero encoding yields the identity. Padding bytes between the
    /// coordinates are ignored and the result is not checked against the
    /// curve equation.
    pub fn from_packed(params: &CurveParams, bytes: &[u8]) -> Result<Self> {
        validate::min_length("packed point", bytes.len(), params.packed_len())?;
        let xb = x_coord(params, bytes);
        let yb = y_coord(params, bytes);
        let is_identity = ct_is_zero(xb) & ct_is_zero(yb);
        Ok(Point {
            is_identity,
            x: FieldElement::from_bytes(xb)?,
            y: FieldElement::from_bytes(yb)?,
        })
    }
}

/// The x-coordinate slice of a packed point
pub fn x_coord<'b>(params: &CurveParams, packed: &'b [u8]) -> &'b [u8] {
    &packed[..params.coord_len()]
}

/// The y-coordinate slice of a packed point
pub fn y_coord<'b>(params: &CurveParams, packed: &'b [u8]) -> &'b [u8] {
    let off = params.y_offset();
    &packed[off..off + params.coord_len()]
}

/// Mutable x-coordinate slice of a packed point
pub fn x_coord_mut<'b>(params: &CurveParams, packed: &'b mut [u8]) -> &'b mut [u8] {
    &mut packed[..params.coord_len()]
}

/// Mutable y-coordinate slice of a packed point
pub fn y_coord_mut<'b>(params: &CurveParams, packed: &'b mut [u8]) -> &'b mut [u8] {
    let off = params.y_offset();
    &mut packed[off..off + params.coord_len()]
}

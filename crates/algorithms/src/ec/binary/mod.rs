//! Binary Weierstrass curves over GF(2^m)
//!
//! Curves have the form `y^2 + xy = x^3 + a*x^2 + b` with `b != 0`. Points
//! are affine; the point at infinity is an explicit tag on [`Point`]. The
//! negative of `(x, y)` is `(x, x + y)`.
//!
//! The addition and doubling formulas follow NIST SP 800-186. Scalar
//! multiplication is a left-to-right double-and-add that computes the
//! addition on every bit and keeps it through a constant-time select, so
//! its cost depends on the bit length of the scalar and not on its weight.

mod curves;
mod point;
mod scalar;

pub use curves::{NamedCurve, Sect163k1, Sect163r2, Sect233k1, Sect283k1};
pub use point::{x_coord, x_coord_mut, y_coord, y_coord_mut, Point};
pub use scalar::Scalar;

use bincurve_internal::ct_is_zero;
use bincurve_params::{CurveParams, GF2_MAX_BYTES};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{validate, Result};
use crate::gf2::{degree, BinaryField, FieldElement};

/// A validated binary curve
#[derive(Clone, Copy, Debug)]
pub struct BinaryCurve<'a> {
    params: &'a CurveParams,
    field: BinaryField<'a>,
    a: FieldElement,
    b: FieldElement,
}

impl<'a> BinaryCurve<'a> {
    /// Validate `params` and wrap them
    ///
    /// Fails if the field width exceeds the element capacity, the modulus
    /// degree differs from `binary_degree` or does not fit the field width,
    /// the modulus has no constant term, `b` is zero, or a coefficient or
    /// base-point coordinate is wider than the field.
    pub fn new(params: &'a CurveParams) -> Result<Self> {
        let len = params.field_size_bytes;
        validate::max_length("field_size_bytes", len, GF2_MAX_BYTES)?;
        validate::parameter(len > 0, "field_size_bytes", "must be non-zero")?;
        validate::parameter(
            degree(&params.modulus) == Some(params.binary_degree),
            "modulus",
            "degree does not match binary_degree",
        )?;
        validate::parameter(
            params.binary_degree < len * 8,
            "modulus",
            "does not fit field_size_bytes",
        )?;
        validate::parameter(
            params.modulus[0] & 1 == 1,
            "modulus",
            "constant term missing",
        )?;
        validate::parameter(
            !bool::from(ct_is_zero(&params.b[..len])),
            "b",
            "must be non-zero",
        )?;
        for (name, buf) in [
            ("a", &params.a),
            ("b", &params.b),
            ("x_g", &params.x_g),
            ("y_g", &params.y_g),
            ("order", &params.order),
        ] {
            validate::parameter(
                bool::from(ct_is_zero(&buf[len..])),
                name,
                "wider than field_size_bytes",
            )?;
        }

        Ok(BinaryCurve {
            params,
            field: BinaryField::new(params.modulus_bytes())?,
            a: FieldElement::from_array(params.a),
            b: FieldElement::from_array(params.b),
        })
    }

    /// The parameter record behind this curve
    pub fn params(&self) -> &'a CurveParams {
        self.params
    }

    /// The underlying field
    pub fn field(&self) -> &BinaryField<'a> {
        &self.field
    }

    /// The base point G
    pub fn base_point(&self) -> Point {
        Point::from_affine(
            FieldElement::from_array(self.params.x_g),
            FieldElement::from_array(self.params.y_g),
        )
    }

    /// A finite point from coordinates, checked against the curve equation
    pub fn point(&self, x: &[u8], y: &[u8]) -> Result<Point> {
        let len = self.params.coord_len();
        validate::length("x coordinate", x.len(), len)?;
        validate::length("y coordinate", y.len(), len)?;
        let p = Point::from_affine(FieldElement::from_bytes(x)?, FieldElement::from_bytes(y)?);
        validate::parameter(
            self.is_canonical(&p),
            "point",
            "coordinate has bits at or above the field degree",
        )?;
        validate::parameter(
            self.is_on_curve(&p),
            "point",
            "coordinates do not satisfy the curve equation",
        )?;
        Ok(p)
    }

    /// `-P = (x, x + y)`
    pub fn negate(&self, p: &Point) -> Point {
        Point {
            is_identity: p.is_identity,
            x: p.x,
            y: p.x.add(&p.y),
        }
    }

    /// `P + Q`
    ///
    /// Equal inputs are doubled. Two distinct finite points sharing an
    /// x-coordinate sum to infinity; for points on the curve that means
    /// `Q = -P`, and off-curve input takes the same path rather than
    /// dividing by zero.
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        if p == q {
            return self.double(p);
        }
        if p.is_identity() {
            return Ok(*q);
        }
        if q.is_identity() {
            return Ok(*p);
        }
        if bool::from(p.x.ct_eq(&q.x)) {
            return Ok(Point::identity());
        }

        let f = &self.field;
        let lambda = f.div(&p.y.add(&q.y), &p.x.add(&q.x))?;
        let x3 = f
            .square(&lambda)
            .add(&lambda)
            .add(&p.x)
            .add(&q.x)
            .add(&self.a);
        let y3 = f.mul(&lambda, &p.x.add(&x3)).add(&x3).add(&p.y);
        Ok(Point::from_affine(x3, y3))
    }

    /// `2P`
    ///
    /// Infinity and the 2-torsion point `(0, y)` double to infinity.
    pub fn double(&self, p: &Point) -> Result<Point> {
        if p.is_identity() || bool::from(p.x.is_zero()) {
            return Ok(Point::identity());
        }

        let f = &self.field;
        let lambda = p.x.add(&f.div(&p.y, &p.x)?);
        let x3 = f.square(&lambda).add(&lambda).add(&self.a);
        let y3 = f.mul(&lambda, &x3.add(&p.x)).add(&x3).add(&p.y);
        Ok(Point::from_affine(x3, y3))
    }

    /// `k * P` for a little-endian scalar `k` of any length
    ///
    /// Walks from the highest set bit of `k` down to bit 0. A zero scalar
    /// gives infinity.
    pub fn mul(&self, p: &Point, k: &[u8]) -> Result<Point> {
        let mut acc = Point::identity();
        let top = match degree(k) {
            Some(d) => d,
            None => return Ok(acc),
        };

        for i in (0..=top).rev() {
            acc = self.double(&acc)?;
            let sum = self.add(&acc, p)?;
            let bit = Choice::from((k[i >> 3] >> (i & 7)) & 1);
            acc = Point::conditional_select(&acc, &sum, bit);
        }
        Ok(acc)
    }

    /// `k * P` for a checked secret scalar
    pub fn mul_scalar(&self, p: &Point, k: &Scalar) -> Result<Point> {
        self.mul(p, k.as_bytes())
    }

    /// `k * G`
    pub fn mul_base(&self, k: &[u8]) -> Result<Point> {
        self.mul(&self.base_point(), k)
    }

    /// Whether `P` satisfies `y^2 + xy = x^3 + a*x^2 + b`
    ///
    /// Infinity is on every curve. The two sides are compared in constant
    /// time.
    pub fn is_on_curve(&self, p: &Point) -> bool {
        if p.is_identity() {
            return true;
        }
        let f = &self.field;
        let lhs = f.square(&p.y).add(&f.mul(&p.x, &p.y));
        let x2 = f.square(&p.x);
        let rhs = f.mul(&x2, &p.x).add(&f.mul(&self.a, &x2)).add(&self.b);
        lhs.ct_eq(&rhs).into()
    }

    /// Whether both coordinates are reduced field elements (degree below `m`)
    ///
    /// The field operations accept unreduced input, so `x` and
    /// `x + modulus` behave as the same element; only the reduced form is a
    /// valid encoding.
    pub fn is_canonical(&self, p: &Point) -> bool {
        let m = self.params.binary_degree;
        let reduced = |fe: &FieldElement| degree(fe.as_bytes()).map_or(true, |d| d < m);
        reduced(&p.x) && reduced(&p.y)
    }

    /// Whether `order * P` is infinity
    pub fn has_order_dividing_n(&self, p: &Point) -> Result<bool> {
        Ok(self.mul(p, self.params.order_bytes())?.is_identity())
    }

    /// Sample a key pair `(d, d*G)`
    pub fn generate_keypair<R: rand::CryptoRng + rand::RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Scalar, Point)> {
        let sk = Scalar::random(self, rng)?;
        let pk = self.mul_scalar(&self.base_point(), &sk)?;
        Ok((sk, pk))
    }
}

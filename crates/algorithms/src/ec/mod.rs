//! Elliptic Curve Primitives
//!
//! Affine arithmetic on Weierstrass curves `y^2 + xy = x^3 + a*x^2 + b` over
//! binary fields GF(2^m). The curve parameters are static data from
//! `bincurve-params`; [`binary::BinaryCurve`] validates them once and then
//! provides the group operations.

pub mod binary;

pub use binary::{
    BinaryCurve, NamedCurve, Point as BinaryPoint, Scalar as BinaryScalar, Sect163k1,
    Sect163r2, Sect233k1, Sect283k1,
};

//! Binary-field and binary elliptic curve primitives
//!
//! This crate provides arithmetic over GF(2^m) in little-endian bit-string
//! form ([`gf2`]) and affine point arithmetic on the curves
//! `y^2 + xy = x^3 + a*x^2 + b` defined over those fields ([`ec::binary`]).
//! It is usable in both `std` and `no_std` environments.
//!
//! Secret scalars live in zeroizing buffers and scalar multiplication keeps
//! a uniform double-then-add sequence per scalar bit.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Field arithmetic
pub mod gf2;
pub use gf2::{BinaryField, FieldElement};

// Elliptic Curve primitives
pub mod ec;
pub use ec::binary::{
    BinaryCurve, NamedCurve, Point, Scalar, Sect163k1, Sect163r2, Sect233k1, Sect283k1,
};

//! Constants for binary-field elliptic curve cryptography

pub mod binary_curve;
pub mod ecdh;

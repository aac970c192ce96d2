//! Elliptic Curve Diffie-Hellman over binary curves
//!
//! Two layers are provided. The free functions in this module work on raw
//! fixed-width buffers for any [`CurveParams`]:
//!
//! * private keys and shared secrets are one field element
//!   (`field_size_bytes`, little-endian);
//! * public keys are packed points (`x || pad || y`, see
//!   [`CurveParams::packed_len`]), all zeros meaning infinity.
//!
//! They perform no implicit checks beyond buffer sizes: callers must run
//! [`validate_public_key`] on every received key before
//! [`generate_shared_secret`].
//!
//! [`Ecdh`] wraps the same operations behind the
//! [`KeyAgreement`](bincurve_api::KeyAgreement) trait for the named curves,
//! generating keys from a CSPRNG and validating peer keys itself.

use bincurve_algorithms::ec::binary::{BinaryCurve, Point};
use bincurve_algorithms::validate;
use bincurve_params::CurveParams;

use crate::error::Result;

mod binary;

pub use binary::{
    Ecdh, EcdhB163, EcdhK163, EcdhK233, EcdhK283, EcdhPublicKey, EcdhSecretKey,
    EcdhSharedSecret,
};

/// Compute the public key `d * G` and write it in packed form
///
/// `private_key` must be exactly `field_size_bytes` long. Its range is not
/// checked: zero produces the all-zero (infinity) public key.
pub fn generate_public_key(
    curve: &CurveParams,
    private_key: &[u8],
    public_key: &mut [u8],
) -> Result<()> {
    let ec = BinaryCurve::new(curve)?;
    validate::length("ECDH private key", private_key.len(), curve.coord_len())?;
    let q = ec.mul_base(private_key)?;
    q.to_packed(curve, public_key)?;
    Ok(())
}

/// Check a received public key
///
/// Returns `Ok(false)` for the point at infinity, for a coordinate with bits
/// at or above the field degree, for a point that does not satisfy the
/// curve equation, and for a point whose order does not divide the group
/// order; `Ok(true)` otherwise. Errors are reserved for malformed
/// curve parameters and short buffers.
pub fn validate_public_key(curve: &CurveParams, public_key: &[u8]) -> Result<bool> {
    let ec = BinaryCurve::new(curve)?;
    let p = Point::from_packed(curve, public_key)?;
    if p.is_identity() || !ec.is_canonical(&p) || !ec.is_on_curve(&p) {
        return Ok(false);
    }
    Ok(ec.has_order_dividing_n(&p)?)
}

/// Compute the x-coordinate of `d * Q` into `shared_secret`
///
/// The peer key is used as given; run [`validate_public_key`] first. An
/// infinity result yields an all-zero secret.
pub fn generate_shared_secret(
    curve: &CurveParams,
    private_key: &[u8],
    peer_public_key: &[u8],
    shared_secret: &mut [u8],
) -> Result<()> {
    let ec = BinaryCurve::new(curve)?;
    let len = curve.coord_len();
    validate::length("ECDH private key", private_key.len(), len)?;
    validate::min_length("ECDH shared secret", shared_secret.len(), len)?;

    let q = Point::from_packed(curve, peer_public_key)?;
    let s = ec.mul(&q, private_key)?;
    shared_secret[..len].copy_from_slice(&s.x().as_bytes()[..len]);
    Ok(())
}

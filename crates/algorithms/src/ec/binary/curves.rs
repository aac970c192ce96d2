//! Marker types for the named curves

use core::fmt::Debug;

use bincurve_params::traditional::ecdh::{
    ECDH_B163_PUBLIC_KEY_SIZE, ECDH_B163_SECRET_KEY_SIZE, ECDH_B163_SHARED_SECRET_SIZE,
    ECDH_K163_PUBLIC_KEY_SIZE, ECDH_K163_SECRET_KEY_SIZE, ECDH_K163_SHARED_SECRET_SIZE,
    ECDH_K233_PUBLIC_KEY_SIZE, ECDH_K233_SECRET_KEY_SIZE, ECDH_K233_SHARED_SECRET_SIZE,
    ECDH_K283_PUBLIC_KEY_SIZE, ECDH_K283_SECRET_KEY_SIZE, ECDH_K283_SHARED_SECRET_SIZE,
};
use bincurve_params::{CurveParams, SECT163K1, SECT163R2, SECT233K1, SECT283K1};

use super::BinaryCurve;
use crate::error::Result;

/// A curve whose parameters are known at compile time
pub trait NamedCurve: Copy + Clone + Debug + Default + Send + Sync + 'static {
    /// The static parameter record
    const PARAMS: &'static CurveParams;

    /// Display name used by the key-agreement layer
    const NAME: &'static str;

    /// Packed public key length in bytes
    const PUBLIC_KEY_SIZE: usize;

    /// Secret scalar length in bytes
    const SECRET_KEY_SIZE: usize;

    /// Shared secret (x-coordinate) length in bytes
    const SHARED_SECRET_SIZE: usize;

    /// A validated handle on the curve
    fn curve() -> Result<BinaryCurve<'static>> {
        BinaryCurve::new(Self::PARAMS)
    }
}

/// NIST K-163 (`sect163k1`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sect163k1;

impl NamedCurve for Sect163k1 {
    const PARAMS: &'static CurveParams = &SECT163K1;
    const NAME: &'static str = "K-163";
    const PUBLIC_KEY_SIZE: usize = ECDH_K163_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ECDH_K163_SECRET_KEY_SIZE;
    const SHARED_SECRET_SIZE: usize = ECDH_K163_SHARED_SECRET_SIZE;
}

/// NIST B-163 (`sect163r2`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sect163r2;

impl NamedCurve for Sect163r2 {
    const PARAMS: &'static CurveParams = &SECT163R2;
    const NAME: &'static str = "B-163";
    const PUBLIC_KEY_SIZE: usize = ECDH_B163_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ECDH_B163_SECRET_KEY_SIZE;
    const SHARED_SECRET_SIZE: usize = ECDH_B163_SHARED_SECRET_SIZE;
}

/// NIST K-233 (`sect233k1`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sect233k1;

impl NamedCurve for Sect233k1 {
    const PARAMS: &'static CurveParams = &SECT233K1;
    const NAME: &'static str = "K-233";
    const PUBLIC_KEY_SIZE: usize = ECDH_K233_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ECDH_K233_SECRET_KEY_SIZE;
    const SHARED_SECRET_SIZE: usize = ECDH_K233_SHARED_SECRET_SIZE;
}

/// NIST K-283 (`sect283k1`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sect283k1;

impl NamedCurve for Sect283k1 {
    const PARAMS: &'static CurveParams = &SECT283K1;
    const NAME: &'static str = "K-283";
    const PUBLIC_KEY_SIZE: usize = ECDH_K283_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ECDH_K283_SECRET_KEY_SIZE;
    const SHARED_SECRET_SIZE: usize = ECDH_K283_SHARED_SECRET_SIZE;
}

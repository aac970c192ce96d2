//! # bincurve
//!
//! Arithmetic over binary fields GF(2^m), elliptic curves over those
//! fields, and Elliptic Curve Diffie-Hellman on the named curves K-163,
//! B-163, K-233 and K-283.
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and detailed error messages
//! - `algorithms`: field and curve arithmetic
//! - `ecdh` (default): key agreement, implies `algorithms`
//! - `full`: everything
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bincurve-params`]: named curve tables and size constants
//! - [`bincurve-algorithms`]: GF(2^m) and binary curve arithmetic
//! - [`bincurve-kem`]: ECDH key agreement
//! - [`bincurve-api`], [`bincurve-common`], [`bincurve-internal`]: shared
//!   traits, secret containers and constant-time helpers
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "ecdh")] {
//! use bincurve::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let alice = EcdhK233::keypair(&mut OsRng).unwrap();
//! let bob = EcdhK233::keypair(&mut OsRng).unwrap();
//!
//! let s1 = EcdhK233::shared_secret(&EcdhK233::secret_key(&alice), &EcdhK233::public_key(&bob)).unwrap();
//! let s2 = EcdhK233::shared_secret(&EcdhK233::secret_key(&bob), &EcdhK233::public_key(&alice)).unwrap();
//! assert_eq!(s1.as_ref(), s2.as_ref());
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bincurve_api as api;
pub use bincurve_common as common;
pub use bincurve_internal as internal;
pub use bincurve_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use bincurve_algorithms as algorithms;

#[cfg(feature = "ecdh")]
pub use bincurve_kem as kem;

// Workspace dependencies that appear in the public API
pub use subtle;
pub use zeroize;

#[cfg(feature = "ecdh")]
pub use rand;

/// Common imports for bincurve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::KeyAgreement;

    // Re-export security types
    pub use crate::common::SecretBuffer;

    // Curve tables
    pub use crate::params::{
        curve_by_name, CurveParams, NAMED_CURVES, SECT163K1, SECT163R2, SECT233K1, SECT283K1,
    };

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        BinaryCurve, BinaryField, FieldElement, NamedCurve, Point, Scalar, Sect163k1, Sect163r2,
        Sect233k1, Sect283k1,
    };

    #[cfg(feature = "ecdh")]
    pub use crate::kem::{Ecdh, EcdhB163, EcdhK163, EcdhK233, EcdhK283};
}

//! Key agreement over binary elliptic curves
//!
//! This crate implements Elliptic Curve Diffie-Hellman on the named
//! binary curves K-163, B-163, K-233 and K-283, both as raw buffer
//! operations and behind the [`KeyAgreement`](bincurve_api::KeyAgreement)
//! trait.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::{
    generate_public_key, generate_shared_secret, validate_public_key, Ecdh, EcdhB163, EcdhK163,
    EcdhK233, EcdhK283, EcdhPublicKey, EcdhSecretKey, EcdhSharedSecret,
};
pub use error::{Error, Result};

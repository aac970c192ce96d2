//! Public API traits and types for bincurve
//!
//! This crate provides the public API surface shared by the bincurve crates:
//! the unified error type and the key-agreement trait.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::KeyAgreement;

pub use traits::key_agreement;

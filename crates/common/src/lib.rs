//! Common implementations and shared functionality for bincurve
//!
//! This crate provides the zeroizing containers used for secret scalars and
//! shared points across the bincurve components.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::SecretBuffer;

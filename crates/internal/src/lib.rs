//! Internal helpers for the bincurve crates
//!
//! Nothing here is part of the public API surface; the items are shared
//! between the field, curve and key-agreement layers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_assign, ct_eq, ct_eq_choice, ct_is_zero, ct_mask};

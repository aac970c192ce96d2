//! Constant values and curve tables for bincurve
//!
//! This crate holds the compile-time capacity constants shared by every layer
//! and the static parameter records of the supported binary curves. It has no
//! dependencies and is always `no_std`.

#![no_std]

pub mod traditional;

pub use traditional::binary_curve::{
    curve_by_name, max_vector_bytes, round_up8, CurveParams, GF2_MAX_BYTES,
    GF2_PACKED_POINT_BYTES, GF2_WIDE_BYTES, NAMED_CURVES, SECT163K1, SECT163R2, SECT233K1,
    SECT283K1,
};

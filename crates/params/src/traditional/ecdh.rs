//! Constants for Elliptic Curve Diffie-Hellman over binary curves

use super::binary_curve::{SECT163K1, SECT163R2, SECT233K1, SECT283K1};

/// Size of a packed public key for ECDH using K-163 in bytes
pub const ECDH_K163_PUBLIC_KEY_SIZE: usize = SECT163K1.packed_len();

/// Size of a private key for ECDH using K-163 in bytes
pub const ECDH_K163_SECRET_KEY_SIZE: usize = SECT163K1.field_size_bytes;

/// Size of the shared secret (x-coordinate of the shared point) for ECDH using K-163 in bytes
pub const ECDH_K163_SHARED_SECRET_SIZE: usize = SECT163K1.field_size_bytes;

/// Size of a packed public key for ECDH using B-163 in bytes
pub const ECDH_B163_PUBLIC_KEY_SIZE: usize = SECT163R2.packed_len();

/// Size of a private key for ECDH using B-163 in bytes
pub const ECDH_B163_SECRET_KEY_SIZE: usize = SECT163R2.field_size_bytes;

/// Size of the shared secret (x-coordinate of the shared point) for ECDH using B-163 in bytes
pub const ECDH_B163_SHARED_SECRET_SIZE: usize = SECT163R2.field_size_bytes;

/// Size of a packed public key for ECDH using K-233 in bytes
pub const ECDH_K233_PUBLIC_KEY_SIZE: usize = SECT233K1.packed_len();

/// Size of a private key for ECDH using K-233 in bytes
pub const ECDH_K233_SECRET_KEY_SIZE: usize = SECT233K1.field_size_bytes;

/// Size of the shared secret (x-coordinate of the shared point) for ECDH using K-233 in bytes
pub const ECDH_K233_SHARED_SECRET_SIZE: usize = SECT233K1.field_size_bytes;

/// Size of a packed public key for ECDH using K-283 in bytes
pub const ECDH_K283_PUBLIC_KEY_SIZE: usize = SECT283K1.packed_len();

/// Size of a private key for ECDH using K-283 in bytes
pub const ECDH_K283_SECRET_KEY_SIZE: usize = SECT283K1.field_size_bytes;

/// Size of the shared secret (x-coordinate of the shared point) for ECDH using K-283 in bytes
pub const ECDH_K283_SHARED_SECRET_SIZE: usize = SECT283K1.field_size_bytes;

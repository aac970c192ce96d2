//! Shared helpers and reference vectors for the bincurve integration tests

pub mod vectors;

/// Decode a big-endian hex string into a little-endian buffer of `len` bytes
pub fn le_hex(hex_be: &str, len: usize) -> Vec<u8> {
    let padded = format!("{:0>width$}", hex_be, width = 2 * len);
    let mut bytes = hex::decode(padded).expect("valid hex vector");
    bytes.reverse();
    bytes
}

/// A little-endian scalar buffer of `len` bytes holding `v`
pub fn small_scalar(v: u64, len: usize) -> Vec<u8> {
    let mut k = vec![0u8; len];
    k[..8].copy_from_slice(&v.to_le_bytes());
    k
}

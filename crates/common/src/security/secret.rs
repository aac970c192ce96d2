//! Secret data types with guaranteed zeroization

use core::convert::{AsMut, AsRef};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// The buffer is wiped on drop and never prints its contents. Equality is
/// only offered through [`ConstantTimeEq`].
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Copy `bytes` into the low end of a zeroed buffer
    ///
    /// Returns `None` if `bytes` is longer than `N`.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N {
            return None;
        }
        let mut buf = Self::zeroed();
        buf.data[..bytes.len()].copy_from_slice(bytes);
        Some(buf)
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> ConstantTimeEq for SecretBuffer<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data[..].ct_eq(&other.data[..])
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_from_slice_pads_high_bytes() {
        let buf = SecretBuffer::<8>::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 0, 0, 0, 0, 0]);
        assert!(SecretBuffer::<2>::from_slice(&[1, 2, 3]).is_none());
    }

    #[test]
    fn test_zeroize_clears_data() {
        let mut data = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut data);
        data[0] |= 1;
        let mut buf = SecretBuffer::new(data);
        buf.zeroize();
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_constant_time_eq() {
        let a = SecretBuffer::new([7u8; 16]);
        let b = a.clone();
        let mut c = a.clone();
        c.as_mut()[15] ^= 1;
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
    }

    #[test]
    fn test_debug_is_redacted() {
        let buf = SecretBuffer::new([0xAAu8; 4]);
        let s = format!("{:?}", buf);
        assert_eq!(s, "SecretBuffer<4>([REDACTED])");
        assert!(!s.contains("170"));
    }
}

//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different lengths compare unequal; the length itself is public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns `Choice(1)` when every byte of `a` is zero
pub fn ct_is_zero(a: &[u8]) -> Choice {
    let acc = a.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0)
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `choice` is set, otherwise leaves `dst` unchanged.
pub fn ct_assign(dst: &mut [u8], src: &[u8], choice: Choice) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        d.conditional_assign(s, choice);
    }
}

/// Constant-time mask generation from the low bit of `bit`
///
/// Returns 0xFF if the bit is set and 0x00 otherwise.
#[inline(always)]
pub fn ct_mask(bit: u8) -> u8 {
    0u8.wrapping_sub(bit & 1)
}

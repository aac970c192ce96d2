//! Polynomial arithmetic over GF(2)
//!
//! Polynomials are little-endian bit strings: bit `i` (the coefficient of
//! `x^i`) lives in byte `i >> 3` at bit position `i & 7`. Elements of
//! GF(2^m) are such polynomials of degree below `m`, reduced by an
//! irreducible modulus of degree `m`.
//!
//! The free functions in this module work on plain byte slices of any width
//! up to the workspace capacity. [`FieldElement`] and [`BinaryField`] wrap
//! them into a fixed-capacity element type with modular operations.

use bincurve_internal::ct_mask;
use bincurve_params::GF2_MAX_BYTES;

use crate::error::{validate, Error, Result};

mod element;

pub use element::{BinaryField, FieldElement};

/// Index of the highest set bit, or `None` for the zero polynomial
pub fn degree(poly: &[u8]) -> Option<usize> {
    poly.iter()
        .rposition(|&b| b != 0)
        .map(|i| i * 8 + 7 - poly[i].leading_zeros() as usize)
}

/// XOR `src * x^bits` into `dst`, dropping bits that fall past `dst.len()`
fn xor_shifted(dst: &mut [u8], src: &[u8], bits: usize) {
    let byte_shift = bits >> 3;
    let bit_shift = bits & 7;
    for (j, &s) in src.iter().enumerate() {
        let k = j + byte_shift;
        if k >= dst.len() {
            break;
        }
        let wide = (s as u16) << bit_shift;
        dst[k] ^= wide as u8;
        if let Some(d) = dst.get_mut(k + 1) {
            *d ^= (wide >> 8) as u8;
        }
    }
}

/// Carry-less product of `a` and `b` into `out`, without reduction
///
/// `out` is cleared first. It must hold `a.len() + b.len()` bytes for the
/// full product; a shorter `out` receives the truncated low part. Every
/// bit of `a` contributes one masked row, so the sequence of memory
/// operations does not depend on the operand values.
pub fn multiply(a: &[u8], b: &[u8], out: &mut [u8]) {
    out.fill(0);
    for i in 0..a.len() * 8 {
        let mask = ct_mask(a[i >> 3] >> (i & 7));
        let byte_shift = i >> 3;
        let bit_shift = i & 7;
        for (j, &bj) in b.iter().enumerate() {
            let k = j + byte_shift;
            if k >= out.len() {
                break;
            }
            let wide = ((bj as u16) << bit_shift) & (mask as u16 * 0x0101);
            out[k] ^= wide as u8;
            if let Some(o) = out.get_mut(k + 1) {
                *o ^= (wide >> 8) as u8;
            }
        }
    }
}

/// Reduce `poly` modulo `modulus` in place
///
/// Repeatedly cancels the leading term of `poly` with a shifted copy of
/// `modulus` until its degree drops below the modulus degree. A zero `poly`
/// or zero `modulus` leaves `poly` untouched.
pub fn reduce(poly: &mut [u8], modulus: &[u8]) {
    let deg_m = match degree(modulus) {
        Some(d) => d,
        None => return,
    };
    while let Some(deg_p) = degree(poly) {
        if deg_p < deg_m {
            break;
        }
        xor_shifted(poly, modulus, deg_p - deg_m);
    }
}

/// `dst = src * x^bits`, truncated to `dst.len()` bytes
///
/// A `src` shorter than `dst` is treated as zero-extended.
pub fn shift_left(dst: &mut [u8], src: &[u8], bits: usize) {
    dst.fill(0);
    xor_shifted(dst, src, bits);
}

/// `dst ^= src` over the common prefix (field addition and subtraction)
#[inline]
pub fn add(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Multiplicative inverse of `a` modulo `modulus`, written to `out`
///
/// Extended Euclid over GF(2). The working width is `modulus.len()`; `a`
/// may be shorter and is zero-extended. `out` must hold at least that many
/// bytes and everything past the working width is cleared.
///
/// Fails with [`Error::NotInvertible`] when `a` is zero or shares a factor
/// with `modulus`.
pub fn inverse(a: &[u8], modulus: &[u8], out: &mut [u8]) -> Result<()> {
    let n = modulus.len();
    validate::max_length("gf2 modulus", n, GF2_MAX_BYTES)?;
    validate::max_length("gf2 inverse operand", a.len(), n)?;
    validate::min_length("gf2 inverse output", out.len(), n)?;
    let deg_m = degree(modulus).ok_or(Error::param("modulus", "zero polynomial"))?;

    // u == g1 * a and v == g2 * a (mod modulus) hold throughout
    let mut u = [0u8; GF2_MAX_BYTES];
    let mut v = [0u8; GF2_MAX_BYTES];
    let mut g1 = [0u8; GF2_MAX_BYTES];
    let mut g2 = [0u8; GF2_MAX_BYTES];
    u[..a.len()].copy_from_slice(a);
    v[..n].copy_from_slice(modulus);
    g1[0] = 1;

    loop {
        let deg_u = match degree(&u[..n]) {
            Some(0) => break,
            Some(d) => d,
            None => return Err(Error::NotInvertible { context: "gf2::inverse" }),
        };
        let deg_v = degree(&v[..n]).ok_or(Error::NotInvertible {
            context: "gf2::inverse",
        })?;
        let shift = if deg_u < deg_v {
            core::mem::swap(&mut u, &mut v);
            core::mem::swap(&mut g1, &mut g2);
            deg_v - deg_u
        } else {
            deg_u - deg_v
        };
        xor_shifted(&mut u[..n], &v[..n], shift);
        xor_shifted(&mut g1[..n], &g2[..n], shift);
    }

    if degree(&g1[..n]).map_or(false, |d| d >= deg_m) {
        reduce(&mut g1[..n], modulus);
    }
    out[..n].copy_from_slice(&g1[..n]);
    out[n..].fill(0);
    Ok(())
}

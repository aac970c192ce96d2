//! Binary-field curve parameters
//!
//! Every multi-byte quantity in this module is a little-endian bit string:
//! bit `i` of a value lives in byte `i >> 3` at bit position `i & 7`. Buffers
//! are sized to [`GF2_MAX_BYTES`] and the bytes above a curve's
//! `field_size_bytes` are zero.

/// Maximum number of bytes a field element may occupy
pub const GF2_MAX_BYTES: usize = 40;

/// Scratch width for an unreduced product of two field elements
pub const GF2_WIDE_BYTES: usize = 2 * GF2_MAX_BYTES;

/// Largest packed point encoding
pub const GF2_PACKED_POINT_BYTES: usize = 2 * GF2_MAX_BYTES;

/// Round `n` up to the next multiple of 8
#[inline(always)]
pub const fn round_up8(n: usize) -> usize {
    (n + 7) & !7
}

/// Parameters of a Weierstrass curve `y^2 + xy = x^3 + a*x^2 + b` over GF(2^m)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Standard curve name
    pub name: &'static str,
    /// Bytes occupied by one field element (`ceil(m / 8)`)
    pub field_size_bytes: usize,
    /// Field degree `m`
    pub binary_degree: usize,
    /// Curve coefficient `a`
    pub a: [u8; GF2_MAX_BYTES],
    /// Curve coefficient `b`
    pub b: [u8; GF2_MAX_BYTES],
    /// Base point x-coordinate
    pub x_g: [u8; GF2_MAX_BYTES],
    /// Base point y-coordinate
    pub y_g: [u8; GF2_MAX_BYTES],
    /// Irreducible reduction polynomial of degree `m`
    pub modulus: [u8; GF2_MAX_BYTES],
    /// Order of the base point
    pub order: [u8; GF2_MAX_BYTES],
    /// Group cofactor
    pub cofactor: [u8; GF2_MAX_BYTES],
}

impl CurveParams {
    /// Length of one coordinate in bytes
    #[inline(always)]
    pub const fn coord_len(&self) -> usize {
        self.field_size_bytes
    }

    /// Offset of the y-coordinate inside a packed point
    #[inline(always)]
    pub const fn y_offset(&self) -> usize {
        round_up8(self.field_size_bytes)
    }

    /// Total length of a packed point
    #[inline(always)]
    pub const fn packed_len(&self) -> usize {
        round_up8(self.field_size_bytes) + self.field_size_bytes
    }

    /// The reduction polynomial trimmed to the field width
    pub fn modulus_bytes(&self) -> &[u8] {
        &self.modulus[..self.field_size_bytes]
    }

    /// The group order trimmed to the field width
    pub fn order_bytes(&self) -> &[u8] {
        &self.order[..self.field_size_bytes]
    }
}

const fn pad<const L: usize>(src: [u8; L]) -> [u8; GF2_MAX_BYTES] {
    let mut out = [0u8; GF2_MAX_BYTES];
    let mut i = 0;
    while i < L {
        out[i] = src[i];
        i += 1;
    }
    out
}

const fn small(v: u8) -> [u8; GF2_MAX_BYTES] {
    let mut out = [0u8; GF2_MAX_BYTES];
    out[0] = v;
    out
}

const fn poly<const L: usize>(bits: [usize; L]) -> [u8; GF2_MAX_BYTES] {
    let mut out = [0u8; GF2_MAX_BYTES];
    let mut i = 0;
    while i < L {
        out[bits[i] >> 3] |= 1 << (bits[i] & 7);
        i += 1;
    }
    out
}

/// NIST K-163 (Koblitz, a = 1, b = 1)
pub const SECT163K1: CurveParams = CurveParams {
    name: "sect163k1",
    field_size_bytes: 21,
    binary_degree: 163,
    a: small(1),
    b: small(1),
    x_g: pad([
        0xE8, 0xEE, 0x94, 0x5C, 0x5E, 0x6D, 0x4E, 0xDE, 0x93, 0xD7, 0x07, 0xAA, 0xAC, 0x11, 0xBC,
        0x7B, 0x53, 0xC0, 0x13, 0xFE, 0x02,
    ]),
    y_g: pad([
        0xD9, 0xA3, 0xDA, 0xCC, 0x38, 0xD5, 0x36, 0x05, 0x80, 0x2E, 0x1F, 0x32, 0x58, 0xFF, 0x38,
        0x5D, 0xB0, 0x0F, 0x07, 0x89, 0x02,
    ]),
    modulus: poly([0, 3, 6, 7, 163]),
    order: pad([
        0xEF, 0xA5, 0xF8, 0x99, 0x0D, 0xCC, 0xE0, 0xA2, 0x08, 0x01, 0x02, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x04,
    ]),
    cofactor: small(2),
};

/// NIST B-163 (pseudo-random, a = 1)
pub const SECT163R2: CurveParams = CurveParams {
    name: "sect163r2",
    field_size_bytes: 21,
    binary_degree: 163,
    a: small(1),
    b: pad([
        0xFD, 0x05, 0x32, 0x4A, 0x74, 0x78, 0x2F, 0x51, 0x10, 0xEB, 0x81, 0x14, 0xCA, 0x53, 0xC9,
        0xB8, 0x07, 0x19, 0x60, 0x0A, 0x02,
    ]),
    x_g: pad([
        0x36, 0x3E, 0x34, 0xE8, 0x37, 0x46, 0x99, 0xD4, 0x68, 0x11, 0x99, 0xA0, 0x7E, 0xD5, 0xA2,
        0x86, 0x62, 0xA1, 0xEB, 0xF0, 0x03,
    ]),
    y_g: pad([
        0xF1, 0x24, 0x73, 0x79, 0x0C, 0x5C, 0x1C, 0xB1, 0x45, 0xD5, 0xCD, 0xA2, 0x4F, 0x09, 0xA0,
        0x71, 0x6C, 0xBC, 0x1F, 0xD5, 0x00,
    ]),
    modulus: poly([0, 3, 6, 7, 163]),
    order: pad([
        0x33, 0x4C, 0x23, 0xA4, 0x12, 0x0C, 0xE7, 0x77, 0xFE, 0x92, 0x02, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x04,
    ]),
    cofactor: small(2),
};

/// NIST K-233 (Koblitz, a = 0, b = 1)
pub const SECT233K1: CurveParams = CurveParams {
    name: "sect233k1",
    field_size_bytes: 30,
    binary_degree: 233,
    a: small(0),
    b: small(1),
    x_g: pad([
        0x26, 0x61, 0xAD, 0xEF, 0x6E, 0x9D, 0x4C, 0x0A, 0xF5, 0x6B, 0xC2, 0x19, 0xA4, 0x63, 0x95,
        0x14, 0xF4, 0x2F, 0xF2, 0x29, 0xF1, 0x1A, 0x73, 0x7E, 0x3A, 0x85, 0xBA, 0x32, 0x72, 0x01,
    ]),
    y_g: pad([
        0xA3, 0xE6, 0xFA, 0x56, 0x10, 0xC1, 0xE0, 0x56, 0x9B, 0xEB, 0x8A, 0xF1, 0x9B, 0xCD, 0xA8,
        0x27, 0xC4, 0x67, 0x5A, 0x55, 0x0F, 0xF7, 0xB7, 0x19, 0xE8, 0xEC, 0x7D, 0x53, 0xDB, 0x01,
    ]),
    modulus: poly([0, 74, 233]),
    order: pad([
        0xDF, 0xAB, 0x73, 0xF1, 0xD5, 0x1A, 0xFB, 0x6E, 0xD4, 0xBC, 0x15, 0xB9, 0x5B, 0x9D, 0x06,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00,
    ]),
    cofactor: small(4),
};

/// NIST K-283 (Koblitz, a = 0, b = 1)
pub const SECT283K1: CurveParams = CurveParams {
    name: "sect283k1",
    field_size_bytes: 36,
    binary_degree: 283,
    a: small(0),
    b: small(1),
    x_g: pad([
        0x36, 0x28, 0x49, 0x58, 0x24, 0xAC, 0xC2, 0xB0, 0x13, 0x69, 0x87, 0x16, 0x7A, 0x56, 0xC1,
        0x23, 0x5F, 0x26, 0xCD, 0x53, 0xE5, 0x88, 0xF1, 0x62, 0x81, 0x3B, 0x1A, 0x3F, 0x88, 0x44,
        0xCA, 0x78, 0x3F, 0x21, 0x03, 0x05,
    ]),
    y_g: pad([
        0x59, 0x22, 0xDD, 0x77, 0x61, 0x11, 0x34, 0x4E, 0x36, 0x62, 0x59, 0xE4, 0x98, 0x46, 0x18,
        0xE8, 0xC0, 0x45, 0x7E, 0xE8, 0x6F, 0x42, 0xE5, 0x07, 0x5D, 0xF9, 0x90, 0x8D, 0x31, 0x9E,
        0x1C, 0x0F, 0x38, 0xDA, 0xCC, 0x01,
    ]),
    modulus: poly([0, 5, 7, 12, 283]),
    order: pad([
        0x61, 0x3C, 0x16, 0x1E, 0x06, 0x1E, 0x45, 0x94, 0x7F, 0xFF, 0x5D, 0x26, 0x77, 0x75, 0xD0,
        0x2E, 0xAE, 0xE9, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01,
    ]),
    cofactor: small(4),
};

/// All curves shipped with the crate
pub const NAMED_CURVES: [&CurveParams; 4] = [&SECT163K1, &SECT163R2, &SECT233K1, &SECT283K1];

/// Look up a named curve by its SEC 2 name (`"sect233k1"`) or NIST alias (`"K-233"`)
pub fn curve_by_name(name: &str) -> Option<&'static CurveParams> {
    let canonical = match name {
        "K-163" => "sect163k1",
        "B-163" => "sect163r2",
        "K-233" => "sect233k1",
        "K-283" => "sect283k1",
        other => other,
    };
    NAMED_CURVES.iter().copied().find(|c| c.name == canonical)
}

/// Widest coordinate among the named curves
pub const fn max_vector_bytes() -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < NAMED_CURVES.len() {
        if NAMED_CURVES[i].field_size_bytes > max {
            max = NAMED_CURVES[i].field_size_bytes;
        }
        i += 1;
    }
    max
}

const _: () = assert!(max_vector_bytes() <= GF2_MAX_BYTES);
const _: () = assert!(SECT283K1.packed_len() <= GF2_PACKED_POINT_BYTES);

use bincurve_params::traditional::ecdh::*;
use bincurve_params::*;

/// Decode a big-endian hex string into the little-endian bit-string layout
fn le(hex_be: &str) -> Vec<u8> {
    let mut bytes = hex::decode(hex_be).unwrap();
    bytes.reverse();
    bytes
}

fn check(curve: &CurveParams, x: &str, y: &str, n: &str) {
    let len = curve.field_size_bytes;
    assert_eq!(&curve.x_g[..len], le(x).as_slice(), "{} base x", curve.name);
    assert_eq!(&curve.y_g[..len], le(y).as_slice(), "{} base y", curve.name);
    assert_eq!(curve.order_bytes(), le(n).as_slice(), "{} order", curve.name);
    for buf in [&curve.a, &curve.b, &curve.x_g, &curve.y_g, &curve.modulus, &curve.order] {
        assert!(buf[len..].iter().all(|&b| b == 0), "{} padding", curve.name);
    }
}

#[test]
fn test_k233_table() {
    check(
        &SECT233K1,
        "017232BA853A7E731AF129F22FF4149563A419C26BF50A4C9D6EEFAD6126",
        "01DB537DECE819B7F70F555A67C427A8CD9BF18AEB9B56E0C11056FAE6A3",
        "008000000000000000000000000000069D5BB915BCD46EFB1AD5F173ABDF",
    );
    assert_eq!(SECT233K1.modulus[0], 0x01);
    assert_eq!(SECT233K1.modulus[9], 0x04);
    assert_eq!(SECT233K1.modulus[29], 0x02);
    assert_eq!(SECT233K1.cofactor[0], 4);
}

#[test]
fn test_k163_table() {
    check(
        &SECT163K1,
        "02FE13C0537BBC11ACAA07D793DE4E6D5E5C94EEE8",
        "0289070FB05D38FF58321F2E800536D538CCDAA3D9",
        "04000000000000000000020108A2E0CC0D99F8A5EF",
    );
    assert_eq!(SECT163K1.modulus[0], 0xC9);
    assert_eq!(SECT163K1.modulus[20], 0x08);
}

#[test]
fn test_b163_table() {
    check(
        &SECT163R2,
        "03F0EBA16286A2D57EA0991168D4994637E8343E36",
        "00D51FBC6C71A0094FA2CDD545B11C5C0C797324F1",
        "040000000000000000000292FE77E70C12A4234C33",
    );
    assert_eq!(
        &SECT163R2.b[..21],
        le("020A601907B8C953CA1481EB10512F78744A3205FD").as_slice()
    );
}

#[test]
fn test_k283_table() {
    check(
        &SECT283K1,
        "0503213F78CA44883F1A3B8162F188E553CD265F23C1567A16876913B0C2AC2458492836",
        "01CCDA380F1C9E318D90F95D07E5426FE87E45C0E8184698E45962364E34116177DD2259",
        "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE9AE2ED07577265DFF7F94451E061E163C61",
    );
    assert_eq!(SECT283K1.modulus[0], 0xA1);
    assert_eq!(SECT283K1.modulus[1], 0x10);
    assert_eq!(SECT283K1.modulus[35], 0x08);
}

#[test]
fn test_packed_layout() {
    assert_eq!(SECT233K1.y_offset(), 32);
    assert_eq!(SECT233K1.packed_len(), 62);
    assert_eq!(SECT163K1.y_offset(), 24);
    assert_eq!(SECT163K1.packed_len(), 45);
    assert_eq!(SECT283K1.y_offset(), 40);
    assert_eq!(SECT283K1.packed_len(), 76);
    assert_eq!(ECDH_K233_PUBLIC_KEY_SIZE, 62);
    assert_eq!(ECDH_K283_SECRET_KEY_SIZE, 36);
    assert_eq!(round_up8(0), 0);
    assert_eq!(round_up8(8), 8);
    assert_eq!(round_up8(9), 16);
}

#[test]
fn test_lookup() {
    assert_eq!(curve_by_name("sect233k1"), Some(&SECT233K1));
    assert_eq!(curve_by_name("K-283"), Some(&SECT283K1));
    assert_eq!(curve_by_name("B-163").map(|c| c.name), Some("sect163r2"));
    assert!(curve_by_name("P-256").is_none());
    assert_eq!(max_vector_bytes(), 36);
    assert_eq!(NAMED_CURVES.len(), 4);
}

//! Cross-crate tests through the facade

use bincurve::prelude::*;
use bincurve_tests::vectors::*;
use bincurve_tests::{le_hex, small_scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use bincurve::subtle::ConstantTimeEq;

#[test]
fn test_order_times_base_is_identity() {
    for params in NAMED_CURVES {
        let curve = BinaryCurve::new(params).unwrap();
        let n = curve.mul_base(params.order_bytes()).unwrap();
        assert!(n.is_identity(), "{}", params.name);
    }
}

#[test]
fn test_curve_lookup_matches_tables() {
    assert_eq!(curve_by_name("sect233k1").unwrap().name, SECT233K1.name);
    assert_eq!(curve_by_name("K-283").unwrap().name, SECT283K1.name);
    assert_eq!(curve_by_name("B-163").unwrap().name, SECT163R2.name);
    assert!(curve_by_name("P-256").is_none());
    assert_eq!(<Sect163k1 as NamedCurve>::PARAMS.name, SECT163K1.name);
}

#[test]
fn test_k233_known_multiples() {
    let curve = BinaryCurve::new(&SECT233K1).unwrap();
    let five = curve.mul_base(&small_scalar(5, 30)).unwrap();
    assert_eq!(&five.x().as_bytes()[..30], le_hex(K233_5G_X, 30).as_slice());

    let six = curve.mul_base(&small_scalar(6, 30)).unwrap();
    assert_eq!(&six.x().as_bytes()[..30], le_hex(K233_6G_X, 30).as_slice());
    assert_eq!(&six.y().as_bytes()[..30], le_hex(K233_6G_Y, 30).as_slice());
}

#[test]
fn test_k233_agreement_scenario() {
    let params = &SECT233K1;
    let d_a = small_scalar(2, 30);
    let d_b = small_scalar(3, 30);

    let mut q_a = vec![0u8; params.packed_len()];
    let mut q_b = vec![0u8; params.packed_len()];
    bincurve::kem::generate_public_key(params, &d_a, &mut q_a).unwrap();
    bincurve::kem::generate_public_key(params, &d_b, &mut q_b).unwrap();

    assert_eq!(&q_a[..30], le_hex(K233_2G_X, 30).as_slice());
    assert_eq!(&q_a[32..], le_hex(K233_2G_Y, 30).as_slice());
    assert_eq!(&q_b[..30], le_hex(K233_3G_X, 30).as_slice());
    assert_eq!(&q_b[32..], le_hex(K233_3G_Y, 30).as_slice());

    assert!(bincurve::kem::validate_public_key(params, &q_a).unwrap());
    assert!(bincurve::kem::validate_public_key(params, &q_b).unwrap());

    let mut s_a = vec![0u8; 30];
    let mut s_b = vec![0u8; 30];
    bincurve::kem::generate_shared_secret(params, &d_a, &q_b, &mut s_a).unwrap();
    bincurve::kem::generate_shared_secret(params, &d_b, &q_a, &mut s_b).unwrap();
    assert_eq!(s_a, s_b);
    assert_eq!(s_a, le_hex(K233_6G_X, 30));
}

#[test]
fn test_typed_agreement_all_curves() -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    fn run<E: KeyAgreement>(rng: &mut ChaCha20Rng) -> Result<()>
    where
        E::SharedSecret: ConstantTimeEq,
    {
        let alice = E::keypair(rng)?;
        let bob = E::keypair(rng)?;
        E::validate_public_key(&E::public_key(&alice))?;
        E::validate_public_key(&E::public_key(&bob))?;

        let s1 = E::shared_secret(&E::secret_key(&alice), &E::public_key(&bob))?;
        let s2 = E::shared_secret(&E::secret_key(&bob), &E::public_key(&alice))?;
        assert!(bool::from(s1.ct_eq(&s2)), "{}", E::name());
        Ok(())
    }

    run::<EcdhK163>(&mut rng)?;
    run::<EcdhB163>(&mut rng)?;
    run::<EcdhK233>(&mut rng)?;
    run::<EcdhK283>(&mut rng)?;
    Ok(())
}

#[test]
fn test_multiple_recipients_unique_secrets() -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let sender = EcdhK163::keypair(&mut rng)?;

    let mut secrets = Vec::new();
    for _ in 0..8 {
        let recipient = EcdhK163::keypair(&mut rng)?;
        let s = EcdhK163::shared_secret(&EcdhK163::secret_key(&sender), &EcdhK163::public_key(&recipient))?;
        secrets.push(s.as_ref().to_vec());
    }
    for i in 0..secrets.len() {
        for j in i + 1..secrets.len() {
            assert_ne!(secrets[i], secrets[j], "secrets {} and {} are identical", i, j);
        }
    }
    Ok(())
}

#[test]
fn test_invalid_public_keys_rejected() {
    let params = &SECT283K1;
    let len = params.packed_len();

    let zero = vec![0u8; len];
    assert!(!bincurve::kem::validate_public_key(params, &zero).unwrap());

    let mut g = vec![0u8; len];
    bincurve::kem::generate_public_key(params, &small_scalar(1, 36), &mut g).unwrap();
    assert!(bincurve::kem::validate_public_key(params, &g).unwrap());

    let mut off_curve = g.clone();
    off_curve[params.y_offset()] ^= 0x01;
    assert!(!bincurve::kem::validate_public_key(params, &off_curve).unwrap());

    // order-2 point (0, sqrt(b)) = (0, 1) on a Koblitz curve
    let mut torsion = vec![0u8; len];
    torsion[params.y_offset()] = 1;
    assert!(!bincurve::kem::validate_public_key(params, &torsion).unwrap());

    let pk = bincurve::kem::EcdhPublicKey::<Sect283k1>::from_bytes(&torsion).unwrap();
    assert!(matches!(
        EcdhK283::validate_public_key(&pk),
        Err(Error::InvalidKey { .. })
    ));
}

#[test]
fn test_field_inverse_through_facade() {
    let field = BinaryField::new(SECT233K1.modulus_bytes()).unwrap();
    let x = FieldElement::from_bytes(&SECT233K1.x_g[..30]).unwrap();
    let inv = field.invert(&x).unwrap();
    assert_eq!(field.mul(&x, &inv), FieldElement::one());
    assert!(field.invert(&FieldElement::zero()).is_err());
}

#[test]
fn test_reexported_dependencies() -> Result<()> {
    use bincurve::zeroize::Zeroize;

    let mut rng = bincurve::rand::rngs::OsRng;
    let alice = EcdhB163::keypair(&mut rng)?;
    let bob = EcdhB163::keypair(&mut rng)?;

    let mut s1 = EcdhB163::shared_secret(&EcdhB163::secret_key(&alice), &EcdhB163::public_key(&bob))?;
    let s2 = EcdhB163::shared_secret(&EcdhB163::secret_key(&bob), &EcdhB163::public_key(&alice))?;
    assert!(bool::from(s1.ct_eq(&s2)));

    s1.zeroize();
    assert!(s1.as_ref().iter().all(|&b| b == 0));
    assert_eq!(s1.as_ref().len(), 21);
    Ok(())
}

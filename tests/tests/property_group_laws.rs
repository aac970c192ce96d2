//! Property-based tests for the binary curve group law

use bincurve::prelude::*;
use bincurve_tests::small_scalar;
use proptest::prelude::*;

fn k163() -> BinaryCurve<'static> {
    BinaryCurve::new(&SECT163K1).unwrap()
}

/// A multiple of the base point for a small non-zero scalar
fn point(curve: &BinaryCurve<'static>, k: u64) -> Point {
    curve.mul_base(&small_scalar(k, 21)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn addition_commutes(a in 1u64..1000, b in 1u64..1000) {
        let curve = k163();
        let (p, q) = (point(&curve, a), point(&curve, b));
        let r = curve.add(&p, &q).unwrap();
        prop_assert_eq!(r, curve.add(&q, &p).unwrap());
        prop_assert!(curve.is_on_curve(&r));
        prop_assert!(curve.is_canonical(&r));
    }

    #[test]
    fn addition_associates(a in 1u64..500, b in 1u64..500, c in 1u64..500) {
        let curve = k163();
        let (p, q, r) = (point(&curve, a), point(&curve, b), point(&curve, c));
        let left = curve.add(&curve.add(&p, &q).unwrap(), &r).unwrap();
        let right = curve.add(&p, &curve.add(&q, &r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_and_inverse(a in 1u64..10_000) {
        let curve = k163();
        let p = point(&curve, a);
        prop_assert_eq!(curve.add(&p, &Point::identity()).unwrap(), p);
        prop_assert!(curve.add(&p, &curve.negate(&p)).unwrap().is_identity());
    }

    #[test]
    fn doubling_matches_self_addition(a in 1u64..10_000) {
        let curve = k163();
        let p = point(&curve, a);
        let d = curve.double(&p).unwrap();
        prop_assert_eq!(d, curve.add(&p, &p).unwrap());
        prop_assert!(curve.is_on_curve(&d));
    }

    #[test]
    fn scalar_multiplication_is_homomorphic(a in 1u64..1000, b in 1u64..1000) {
        let curve = k163();
        let sum = curve.mul_base(&small_scalar(a + b, 21)).unwrap();
        let split = curve.add(&point(&curve, a), &point(&curve, b)).unwrap();
        prop_assert_eq!(sum, split);
    }

    #[test]
    fn field_inverse_round_trips(bytes in any::<[u8; 21]>()) {
        let field = BinaryField::new(SECT163K1.modulus_bytes()).unwrap();
        let mut bytes = bytes;
        bytes[20] &= 0x07;
        let a = FieldElement::from_bytes(&bytes).unwrap();
        prop_assume!(!bool::from(a.is_zero()));
        let inv = field.invert(&a).unwrap();
        prop_assert_eq!(field.mul(&a, &inv), FieldElement::one());
    }
}

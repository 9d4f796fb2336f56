//! Property-based tests for exact dyadic arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{BigInt, Dyadic};

    // Values m * 2^e with small exponents, so sums stay cheap
    fn dyadic() -> impl Strategy<Value = Dyadic> {
        (any::<i64>(), -64i64..64i64).prop_map(|(m, e)| Dyadic::from_parts(BigInt::from(m), e))
    }

    // Values exactly representable as f64: 32-bit mantissas, moderate exponents
    fn f64_exact() -> impl Strategy<Value = Dyadic> {
        (any::<i32>(), -200i64..200i64).prop_map(|(m, e)| Dyadic::from_parts(BigInt::from(m), e))
    }

    fn non_zero() -> impl Strategy<Value = Dyadic> {
        dyadic().prop_filter("non-zero", |d| !d.is_zero())
    }

    fn finite_f64() -> impl Strategy<Value = f64> {
        any::<f64>().prop_filter("finite", |v| v.is_finite())
    }

    proptest! {
        // Canonical form survives every operation

        #[test]
        fn ops_stay_canonical(a in dyadic(), b in dyadic()) {
            prop_assert!((&a + &b).is_canonical());
            prop_assert!((&a - &b).is_canonical());
            prop_assert!((&a * &b).is_canonical());
            prop_assert!((-&a).is_canonical());
            prop_assert!(a.gcd(&b).is_canonical());
            prop_assert!(a.abs().sqrt().is_canonical());
            if !b.is_zero() {
                prop_assert!((&a / &b).is_canonical());
                prop_assert!((&a % &b).is_canonical());
            }
        }

        #[test]
        fn f64_roundtrip_is_exact(v in finite_f64()) {
            let exact = Dyadic::from_f64(v).unwrap();
            prop_assert!(exact.is_canonical());
            prop_assert_eq!(exact.to_f64(), v);
        }

        #[test]
        fn parse_matches_f64(v in finite_f64()) {
            let parsed: Dyadic = v.to_string().parse().unwrap();
            prop_assert_eq!(parsed, Dyadic::from_f64(v).unwrap());
        }

        // Ring axioms

        #[test]
        fn add_identity_and_inverse(a in dyadic()) {
            prop_assert_eq!(&a + &Dyadic::zero(), a.clone());
            prop_assert_eq!(&a + &(-&a), Dyadic::zero());
        }

        #[test]
        fn add_commutative(a in dyadic(), b in dyadic()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in dyadic(), b in dyadic(), c in dyadic()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn sub_undoes_add(a in dyadic(), b in dyadic()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn distributive(a in dyadic(), b in dyadic(), c in dyadic()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        // Division

        #[test]
        fn exact_division_inverts_mul(a in dyadic(), b in non_zero()) {
            let product = &a * &b;
            let quotient = product.exact_division(&b);
            prop_assert_eq!(&b * &quotient, product);
            prop_assert_eq!(quotient, a);
        }

        #[test]
        fn exact_division_by_gcd(a in non_zero(), b in dyadic()) {
            let g = a.gcd(&b);
            prop_assert_eq!(&g * &a.exact_division(&g), a);
        }

        #[test]
        fn div_rem_identity(a in dyadic(), b in non_zero()) {
            let q = &a / &b;
            let r = &a % &b;
            prop_assert_eq!(&b * &q + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.signum() == a.signum());
        }

        #[test]
        fn sqrt_brackets_root(a in dyadic()) {
            let a = a.abs();
            let root = a.sqrt();
            prop_assert!(&root * &root <= a);
            // one unit in the last place of the root overshoots
            let ulp = Dyadic::from_parts(BigInt::from(1), a.exponent().div_euclid(2));
            let next = &root + &ulp;
            prop_assert!(&next * &next > a);
        }

        // Comparison

        #[test]
        fn add_agrees_with_f64(a in f64_exact(), b in f64_exact()) {
            let exact = (&a + &b).to_f64();
            let approx = a.to_f64() + b.to_f64();
            let scale = a.to_f64().abs().max(b.to_f64().abs());
            prop_assert!((exact - approx).abs() <= scale * 1e-15);
        }

        #[test]
        fn order_agrees_with_f64(a in f64_exact(), b in f64_exact()) {
            let expected = a.to_f64().partial_cmp(&b.to_f64()).unwrap();
            prop_assert_eq!(a.cmp(&b), expected);
        }

        #[test]
        fn order_is_antisymmetric(a in dyadic(), b in dyadic()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        }

        #[test]
        fn order_is_translation_invariant(a in dyadic(), b in dyadic(), c in dyadic()) {
            prop_assert_eq!(a.cmp(&b), (&a + &c).cmp(&(&b + &c)));
        }
    }
}

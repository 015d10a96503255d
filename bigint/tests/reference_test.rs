//! Property-based cross-checks against `num-bigint`.
//!
//! Every operation is run on random decimal operands and compared with the
//! reference library through the canonical decimal string. The division
//! properties pin down truncating semantics: the quotient rounds toward
//! zero and the remainder carries the dividend's sign.

use std::cmp::Ordering;

use bigint::BigInteger;
use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Strategy: canonical decimal strings up to 31 digits, zero included.
fn decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just("0".to_string()),
        9 => "-?[1-9][0-9]{0,30}",
    ]
}

/// Strategy: canonical non-zero decimal strings up to 12 digits.
fn nonzero_decimal() -> impl Strategy<Value = String> {
    "-?[1-9][0-9]{0,11}"
}

fn ours(s: &str) -> BigInteger {
    s.parse().unwrap()
}

fn reference(s: &str) -> BigInt {
    s.parse().unwrap()
}

// ============================================================================
// Conversions
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_string_roundtrip(s in decimal()) {
        prop_assert_eq!(ours(&s).to_string(), s);
    }

    #[test]
    fn prop_from_i128_matches_display(v in any::<i128>()) {
        prop_assert_eq!(BigInteger::from(v).to_string(), v.to_string());
        prop_assert_eq!(BigInteger::from(v).to_i128(), Some(v));
    }

    #[test]
    fn prop_from_i64_to_i64(v in any::<i64>()) {
        prop_assert_eq!(BigInteger::from(v).to_i64(), Some(v));
    }
}

// ============================================================================
// Arithmetic against the reference
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_add_matches_reference(a in decimal(), b in decimal()) {
        let got = ours(&a) + ours(&b);
        prop_assert_eq!(got.to_string(), (reference(&a) + reference(&b)).to_string());
    }

    #[test]
    fn prop_sub_matches_reference(a in decimal(), b in decimal()) {
        let got = ours(&a) - ours(&b);
        prop_assert_eq!(got.to_string(), (reference(&a) - reference(&b)).to_string());
    }

    #[test]
    fn prop_mul_matches_reference(a in decimal(), b in decimal()) {
        let got = ours(&a) * ours(&b);
        prop_assert_eq!(got.to_string(), (reference(&a) * reference(&b)).to_string());
    }

    #[test]
    fn prop_cmp_matches_reference(a in decimal(), b in decimal()) {
        prop_assert_eq!(ours(&a).cmp(&ours(&b)), reference(&a).cmp(&reference(&b)));
    }

    #[test]
    fn prop_compare_absolute_matches_reference(a in decimal(), b in decimal()) {
        let expected = reference(&a).abs().cmp(&reference(&b).abs());
        prop_assert_eq!(BigInteger::compare_absolute(&ours(&a), &ours(&b)), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_div_rem_matches_reference(a in decimal(), b in nonzero_decimal()) {
        let (q, r) = ours(&a).div_rem(&ours(&b)).unwrap();
        let (rq, rr) = reference(&a).div_rem(&reference(&b));
        prop_assert_eq!(q.to_string(), rq.to_string());
        prop_assert_eq!(r.to_string(), rr.to_string());
    }

    #[test]
    fn prop_division_identity(a in decimal(), b in nonzero_decimal()) {
        let (a, b) = (ours(&a), ours(&b));
        let q = &a / &b;
        let r = &a % &b;
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(BigInteger::compare_absolute(&r, &b) == Ordering::Less);
        if !r.is_zero() {
            prop_assert_eq!(r.is_negative(), a.is_negative());
        }
    }

    #[test]
    fn prop_shift_matches_reference(a in decimal(), count in 0u32..48) {
        let left = ours(&a) << i64::from(count);
        prop_assert_eq!(left.to_string(), (reference(&a) << count as usize).to_string());

        // num-bigint shifts right with floor semantics; ours truncates toward zero.
        let right = ours(&a) >> i64::from(count);
        let divisor = BigInt::from(1u8) << count as usize;
        prop_assert_eq!(right.to_string(), (reference(&a) / divisor).to_string());
    }
}

#[test]
fn test_reference_agrees_on_zero_divisor_detection() {
    let zero = reference("0");
    assert!(zero.is_zero());
    assert!(ours("5").div_rem(&ours("0")).is_err());
}

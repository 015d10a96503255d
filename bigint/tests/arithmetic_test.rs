use bigint::{BigIntError, BigInteger};
use proptest::prelude::*;

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_carry_into_new_digit() {
    assert_eq!(
        (big("999999999999999999999") + big("1")).to_string(),
        "1000000000000000000000"
    );
}

#[test]
fn test_negative_times_negative() {
    assert_eq!((big("-5") * big("-5")).to_string(), "25");
}

#[test]
fn test_seven_by_minus_two() {
    assert_eq!((big("7") / big("-2")).to_string(), "-3");
    assert_eq!((big("7") % big("-2")).to_string(), "1");
}

#[test]
fn test_zero_formats_as_zero() {
    assert_eq!(BigInteger::from(0).to_string(), "0");
}

#[test]
fn test_minus_zero_is_zero() {
    let z = big("-0");
    assert_eq!(z, BigInteger::from(0));
    assert!(!z.is_negative());
}

#[test]
fn test_division_by_zero_never_returns() {
    for a in ["0", "1", "-1", "123456789012345678901234567890"] {
        assert_eq!(big(a).div_rem(&big("0")), Err(BigIntError::DivisionByZero));
    }
}

#[test]
fn test_factorial_thirty() {
    let mut acc = BigInteger::one();
    let mut i = BigInteger::one();
    while i <= big("30") {
        acc *= &i;
        i.increment();
    }
    assert_eq!(acc.to_string(), "265252859812191058636308480000000");
}

// ============================================================================
// Algebraic properties
// ============================================================================

fn value() -> impl Strategy<Value = BigInteger> {
    "-?[0-9]{1,25}".prop_map(|s| s.parse::<BigInteger>().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_commutative(a in value(), b in value()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn prop_mul_commutative(a in value(), b in value()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn prop_add_associative(a in value(), b in value(), c in value()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn prop_mul_associative(a in value(), b in value(), c in value()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn prop_sub_inverts_add(a in value(), b in value()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn prop_trichotomy(a in value(), b in value()) {
        let held = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
        prop_assert_eq!(held, 1);
    }

    #[test]
    fn prop_compare_absolute_antisymmetric(a in value(), b in value()) {
        prop_assert_eq!(
            BigInteger::compare_absolute(&a, &b),
            BigInteger::compare_absolute(&b, &a).reverse()
        );
        prop_assert_eq!(BigInteger::compare_absolute(&a, &a), std::cmp::Ordering::Equal);
    }

    #[test]
    fn prop_results_are_normalised(a in value(), b in value()) {
        for r in [&a + &b, &a - &b, &a * &b] {
            prop_assert!(r.num_digits() == 1 || r.digit(0) != Some(0));
            prop_assert!(!(r.is_zero() && r.is_negative()));
        }
    }
}

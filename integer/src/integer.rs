//! The adaptive integer type: representation, mode switching, comparison,
//! and formatting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bigint::BigInteger;
use log::debug;

use crate::constants::fits_fixed;
use crate::error::IntegerError;

/// Which representation an [`Integer`] currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repr {
    /// Machine `i64`.
    Fixed,
    /// Arbitrary-precision [`BigInteger`].
    Big,
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::Fixed => write!(f, "fixed-width"),
            Repr::Big => write!(f, "big-integer"),
        }
    }
}

/// Signed integer that starts as an `i64` and promotes itself to a
/// [`BigInteger`] when a fixed-width operation would overflow.
///
/// Results computed in big-integer mode stay there until [`Integer::demote`]
/// is called. Equality and ordering are numeric and ignore the mode, so
/// `Integer::Fixed(5) == Integer::Big(5.into())`.
#[derive(Clone, Debug)]
pub enum Integer {
    Fixed(i64),
    Big(BigInteger),
}

// ============================================================================
// Construction
// ============================================================================

impl Default for Integer {
    fn default() -> Self {
        Integer::Fixed(0)
    }
}

macro_rules! from_fixed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Integer::Fixed(i64::from(value))
                }
            }
        )*
    };
}

from_fixed!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                /// Fixed-width mode when the value fits an `i64`.
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(fixed) => Integer::Fixed(fixed),
                        Err(_) => Integer::Big(BigInteger::from(value)),
                    }
                }
            }
        )*
    };
}

from_wide!(i128, isize, u64, u128, usize);

impl From<BigInteger> for Integer {
    /// Always big-integer mode, even when the value would fit an `i64`.
    fn from(value: BigInteger) -> Self {
        Integer::Big(value)
    }
}

impl FromStr for Integer {
    type Err = IntegerError;

    /// Parses a decimal string; fixed-width mode when the value fits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: BigInteger = s.parse()?;
        Ok(match value.to_i64() {
            Some(fixed) => Integer::Fixed(fixed),
            None => Integer::Big(value),
        })
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Integer {
    /// The representation currently held.
    #[inline]
    pub fn repr(&self) -> Repr {
        match self {
            Integer::Fixed(_) => Repr::Fixed,
            Integer::Big(_) => Repr::Big,
        }
    }

    /// Whether the value is held as a [`BigInteger`].
    #[inline]
    pub fn is_big(&self) -> bool {
        matches!(self, Integer::Big(_))
    }

    /// The fixed-width value. Fails in big-integer mode.
    pub fn as_fixed(&self) -> Result<i64, IntegerError> {
        match self {
            Integer::Fixed(value) => Ok(*value),
            Integer::Big(_) => Err(IntegerError::WrongRepresentation {
                expected: Repr::Fixed,
                actual: Repr::Big,
            }),
        }
    }

    /// The big-integer value. Fails in fixed-width mode.
    pub fn as_big(&self) -> Result<&BigInteger, IntegerError> {
        match self {
            Integer::Big(value) => Ok(value),
            Integer::Fixed(_) => Err(IntegerError::WrongRepresentation {
                expected: Repr::Big,
                actual: Repr::Fixed,
            }),
        }
    }

    /// The value as a BigInteger, whatever the mode.
    pub fn to_big(&self) -> BigInteger {
        match self {
            Integer::Fixed(value) => BigInteger::from(*value),
            Integer::Big(value) => value.clone(),
        }
    }
}

// ============================================================================
// Promotion / demotion
// ============================================================================

impl Integer {
    /// Switch to big-integer mode, keeping the value. No-op when already big.
    pub fn promote(&mut self) {
        if let Integer::Fixed(value) = *self {
            debug!("promoting {value} to big-integer mode");
            *self = Integer::Big(BigInteger::from(value));
        }
    }

    /// Try to switch back to fixed-width mode.
    ///
    /// Returns the `i64` value when it fits (switching mode if needed), or
    /// `None` with the mode unchanged when it does not.
    ///
    /// ```
    /// use integer::{BigInteger, Integer};
    ///
    /// let mut small = Integer::from(BigInteger::from(-42));
    /// assert_eq!(small.demote(), Some(-42));
    /// assert!(!small.is_big());
    ///
    /// let mut huge: Integer = "100000000000000000000".parse().unwrap();
    /// assert_eq!(huge.demote(), None);
    /// assert!(huge.is_big());
    /// ```
    pub fn demote(&mut self) -> Option<i64> {
        match self {
            Integer::Fixed(value) => Some(*value),
            Integer::Big(big) => {
                if !fits_fixed(big) {
                    debug!("demotion refused: {big} does not fit in i64");
                    return None;
                }
                let value = big.to_i64()?;
                debug!("demoting {value} to fixed-width mode");
                *self = Integer::Fixed(value);
                Some(value)
            }
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Fixed(a), Integer::Fixed(b)) => a.cmp(b),
            (Integer::Big(a), Integer::Big(b)) => a.cmp(b),
            (Integer::Fixed(a), Integer::Big(b)) => BigInteger::from(*a).cmp(b),
            (Integer::Big(a), Integer::Fixed(b)) => a.cmp(&BigInteger::from(*b)),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialEq<i64> for Integer {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Integer::Fixed(value) => value == other,
            Integer::Big(value) => *value == BigInteger::from(*other),
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer::Fixed(value) => fmt::Display::fmt(value, f),
            Integer::Big(value) => fmt::Display::fmt(value, f),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction ---

    #[test]
    fn test_starts_fixed() {
        assert_eq!(Integer::default().repr(), Repr::Fixed);
        assert_eq!(Integer::from(7u8).repr(), Repr::Fixed);
        assert_eq!(Integer::from(-7i32), Integer::Fixed(-7));
    }

    #[test]
    fn test_from_wide_types_pick_mode() {
        assert_eq!(Integer::from(i64::MAX as u64).repr(), Repr::Fixed);
        let n = Integer::from(u64::MAX);
        assert_eq!(n.repr(), Repr::Big);
        assert_eq!(n.to_string(), "18446744073709551615");
        assert_eq!(Integer::from(-5i128), Integer::Fixed(-5));
        assert!(Integer::from(i128::MIN).is_big());
    }

    #[test]
    fn test_from_big_stays_big() {
        let n = Integer::from(BigInteger::from(3));
        assert!(n.is_big());
        assert_eq!(n, Integer::Fixed(3));
    }

    #[test]
    fn test_from_str_picks_mode() {
        let small: Integer = "-9223372036854775808".parse().unwrap();
        assert_eq!(small, Integer::Fixed(i64::MIN));
        assert!(!small.is_big());

        let big: Integer = "9223372036854775808".parse().unwrap();
        assert!(big.is_big());
        assert_eq!(big.to_string(), "9223372036854775808");

        assert!(matches!(
            "12ab".parse::<Integer>(),
            Err(IntegerError::Arithmetic(bigint::BigIntError::InvalidDigit(_)))
        ));
    }

    // --- Accessors ---

    #[test]
    fn test_as_fixed_wrong_representation() {
        let n = Integer::from(BigInteger::from(1));
        assert_eq!(
            n.as_fixed(),
            Err(IntegerError::WrongRepresentation {
                expected: Repr::Fixed,
                actual: Repr::Big,
            })
        );
        assert_eq!(n.as_big().unwrap(), &BigInteger::from(1));
    }

    #[test]
    fn test_as_big_wrong_representation() {
        let n = Integer::from(1);
        assert_eq!(n.as_fixed(), Ok(1));
        let err = n.as_big().unwrap_err();
        assert_eq!(
            err.to_string(),
            "wrong representation: asked for the big-integer value while holding a fixed-width value"
        );
    }

    #[test]
    fn test_to_big() {
        assert_eq!(Integer::from(-9).to_big(), BigInteger::from(-9));
        assert_eq!(Integer::from(BigInteger::from(9)).to_big(), BigInteger::from(9));
    }

    // --- Promotion / demotion ---

    #[test]
    fn test_promote() {
        let mut n = Integer::from(-5);
        n.promote();
        assert!(n.is_big());
        assert_eq!(n.as_big().unwrap(), &BigInteger::from(-5));
        n.promote();
        assert!(n.is_big());
    }

    #[test]
    fn test_demote_negative_value_keeps_sign() {
        let mut n = Integer::from(BigInteger::from(-123456789));
        assert_eq!(n.demote(), Some(-123456789));
        assert_eq!(n, Integer::Fixed(-123456789));
    }

    #[test]
    fn test_demote_in_fixed_mode_returns_value() {
        let mut n = Integer::from(17);
        assert_eq!(n.demote(), Some(17));
        assert!(!n.is_big());
    }

    // --- Comparison ---

    #[test]
    fn test_mixed_mode_comparison() {
        let fixed = Integer::from(10);
        let big = Integer::from(BigInteger::from(20));
        assert!(fixed < big);
        assert!(big > fixed);
        assert!(fixed <= Integer::from(BigInteger::from(10)));
        assert!(big >= Integer::from(20));
        assert_ne!(fixed, big);
        // Comparison never changes either operand's mode.
        assert!(!fixed.is_big());
        assert!(big.is_big());
    }

    #[test]
    fn test_eq_i64() {
        assert_eq!(Integer::from(4), 4);
        assert_eq!(Integer::from(BigInteger::from(-4)), -4);
    }

    // --- Formatting ---

    #[test]
    fn test_display_delegates() {
        assert_eq!(Integer::from(-31).to_string(), "-31");
        assert_eq!(Integer::from(BigInteger::from(-31)).to_string(), "-31");
        assert_eq!(format!("{:>4}", Integer::from(7)), "   7");
        assert_eq!(format!("{:>4}", Integer::from(BigInteger::from(7))), "   7");
    }
}

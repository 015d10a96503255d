//! The digit-vector representation: construction, normalisation,
//! comparison, digit access, and decimal formatting/parsing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::BigIntError;

/// Signed arbitrary-precision integer.
///
/// Digits are stored least-significant first (`digits[0]` is the ones
/// digit). Values are always normalised: there are no redundant
/// most-significant zeros, zero is the single digit `0`, and zero is never
/// negative. Because of this, derived equality and hashing coincide with
/// numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    pub(crate) negative: bool,
    pub(crate) digits: Vec<u8>,
}

// ============================================================================
// Construction
// ============================================================================

impl BigInteger {
    /// The value zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: vec![0],
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self {
            negative: false,
            digits: vec![1],
        }
    }

    /// Build a value from a sign and an unsigned magnitude.
    pub(crate) fn from_magnitude(negative: bool, mut magnitude: u128) -> Self {
        let mut digits = Vec::with_capacity(39);
        while magnitude > 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        let mut value = Self { negative, digits };
        value.normalize();
        value
    }

    /// Build a value from decimal digits given least-significant first.
    ///
    /// Fails with [`BigIntError::InvalidDigit`] if any entry is outside
    /// `0..=9`. Redundant leading zeros are stripped and an all-zero (or
    /// empty) sequence yields non-negative zero.
    ///
    /// ```
    /// use bigint::BigInteger;
    ///
    /// let n = BigInteger::from_digits(&[3, 2, 1], true).unwrap();
    /// assert_eq!(n.to_string(), "-123");
    /// assert!(BigInteger::from_digits(&[1, 10], false).is_err());
    /// assert!(BigInteger::from_digits(&[-1], false).is_err());
    /// ```
    pub fn from_digits<T>(digits: &[T], negative: bool) -> Result<Self, BigIntError>
    where
        T: Copy + TryInto<u8> + fmt::Display,
    {
        let digits = digits
            .iter()
            .enumerate()
            .map(|(position, &value)| match value.try_into() {
                Ok(digit) if digit <= 9 => Ok(digit),
                _ => Err(BigIntError::InvalidDigit(format!(
                    "{value} at position {position} is not in 0..=9"
                ))),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let mut value = Self { negative, digits };
        value.normalize();
        Ok(value)
    }

    /// Parse a decimal string with an optional leading `-`.
    ///
    /// Same as `s.parse::<BigInteger>()`.
    pub fn parse(s: &str) -> Result<Self, BigIntError> {
        s.parse()
    }

    /// Restore the representation invariants after a digit-level mutation.
    pub(crate) fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_magnitude(value < 0, value.unsigned_abs() as u128)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from_magnitude(false, value as u128)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(BigIntError::InvalidDigit(format!("no digits in {s:?}")));
        }
        let offset = usize::from(negative);
        let mut digits = body
            .char_indices()
            .map(|(i, ch)| {
                ch.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    BigIntError::InvalidDigit(format!("{ch:?} at position {} in {s:?}", i + offset))
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        digits.reverse();
        let mut value = Self { negative, digits };
        value.normalize();
        Ok(value)
    }
}

// ============================================================================
// Queries
// ============================================================================

impl BigInteger {
    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Whether this value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Magnitude as a new non-negative value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// Number of stored decimal digits (always at least one).
    #[inline]
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Digits in storage order (least significant first).
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digit at a logical index, where index 0 is the most significant digit.
    ///
    /// ```
    /// use bigint::BigInteger;
    ///
    /// let n = BigInteger::from(-472);
    /// assert_eq!(n.digit(0), Some(4));
    /// assert_eq!(n.digit(2), Some(2));
    /// assert_eq!(n.digit(3), None);
    /// ```
    pub fn digit(&self, index: usize) -> Option<u8> {
        let len = self.digits.len();
        if index < len {
            Some(self.digits[len - 1 - index])
        } else {
            None
        }
    }

    /// Overwrite the digit at a logical index (0 = most significant).
    ///
    /// The value is re-normalised afterwards, so zeroing the leading digit
    /// shortens the value and zeroing the last non-zero digit yields
    /// non-negative zero.
    pub fn set_digit(&mut self, index: usize, value: u8) -> Result<(), BigIntError> {
        let len = self.digits.len();
        if index >= len {
            return Err(BigIntError::IndexOutOfRange { index, len });
        }
        if value > 9 {
            return Err(BigIntError::InvalidDigit(format!(
                "{value} at position {index} is not in 0..=9"
            )));
        }
        self.digits[len - 1 - index] = value;
        self.normalize();
        Ok(())
    }

    /// Convert to `i128` if the value fits.
    pub fn to_i128(&self) -> Option<i128> {
        let mut acc: i128 = 0;
        for &d in self.digits.iter().rev() {
            acc = acc.checked_mul(10)?;
            acc = if self.negative {
                acc.checked_sub(i128::from(d))?
            } else {
                acc.checked_add(i128::from(d))?
            };
        }
        Some(acc)
    }

    /// Convert to `i64` if the value fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl BigInteger {
    /// Compare magnitudes, ignoring sign.
    ///
    /// More digits means a larger magnitude; equal lengths are compared
    /// from the most significant digit down.
    pub fn compare_absolute(a: &Self, b: &Self) -> Ordering {
        a.digits
            .len()
            .cmp(&b.digits.len())
            .then_with(|| a.digits.iter().rev().cmp(b.digits.iter().rev()))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => Self::compare_absolute(self, other),
            (true, true) => Self::compare_absolute(other, self),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad_integral(!self.negative, "", &magnitude)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

// ============================================================================
// Tests
// ============================================================================

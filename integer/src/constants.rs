//! Fixed-width bounds as BigIntegers, built once on first use.

use bigint::BigInteger;
use once_cell::sync::Lazy;

/// `i64::MIN` as a BigInteger.
pub static FIXED_MIN: Lazy<BigInteger> = Lazy::new(|| BigInteger::from(i64::MIN));

/// `i64::MAX` as a BigInteger.
pub static FIXED_MAX: Lazy<BigInteger> = Lazy::new(|| BigInteger::from(i64::MAX));

/// Whether a BigInteger lies within the fixed-width range (inclusive).
pub fn fits_fixed(value: &BigInteger) -> bool {
    *value >= *FIXED_MIN && *value <= *FIXED_MAX
}

//! Shared immutable constants, built once on first use.

use once_cell::sync::Lazy;

use crate::big_integer::BigInteger;

pub static ZERO: Lazy<BigInteger> = Lazy::new(BigInteger::zero);
pub static ONE: Lazy<BigInteger> = Lazy::new(BigInteger::one);
pub static TWO: Lazy<BigInteger> = Lazy::new(|| BigInteger::from(2u8));

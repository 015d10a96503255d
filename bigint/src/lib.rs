//! Signed arbitrary-precision integers stored as base-10 digit vectors.
//!
//! Every algorithm is schoolbook: digit-by-digit addition and subtraction
//! with carry/borrow, grid multiplication, and division by repeated
//! subtraction of power-of-two multiples of the divisor.
//!
//! ```
//! use bigint::BigInteger;
//!
//! let a: BigInteger = "999999999999999999999".parse().unwrap();
//! let b = BigInteger::from(1);
//! assert_eq!((a + b).to_string(), "1000000000000000000000");
//!
//! let (q, r) = BigInteger::from(7).div_rem(&BigInteger::from(-2)).unwrap();
//! assert_eq!((q.to_string(), r.to_string()), ("-3".to_string(), "1".to_string()));
//! ```

pub mod arith;
pub mod big_integer;
pub mod constants;
pub mod error;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;

pub use big_integer::BigInteger;
pub use error::BigIntError;

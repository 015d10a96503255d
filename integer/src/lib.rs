//! Adaptive integer: an `i64` fast path that switches to an
//! arbitrary-precision [`BigInteger`] when an operation overflows.
//!
//! ```
//! use integer::{Integer, Repr};
//!
//! let mut n = Integer::from(i64::MAX);
//! n += 1;
//! assert_eq!(n.repr(), Repr::Big);
//! assert_eq!(n.to_string(), "9223372036854775808");
//!
//! n -= 1;
//! assert_eq!(n.demote(), Some(i64::MAX));
//! assert_eq!(n.repr(), Repr::Fixed);
//! ```

pub mod arith;
pub mod constants;
pub mod error;
pub mod integer;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;

pub use bigint::{BigIntError, BigInteger};
pub use error::IntegerError;
pub use integer::{Integer, Repr};

use thiserror::Error;

/// Errors from BigInteger construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// A digit value outside `0..=9`, a non-digit character, or input with no digits.
    #[error("invalid digit: {0}")]
    InvalidDigit(String),
    #[error("BigInteger division by zero")]
    DivisionByZero,
    /// Logical digit index past the most significant stored digit.
    #[error("digit index {index} out of range for a {len}-digit value")]
    IndexOutOfRange { index: usize, len: usize },
}

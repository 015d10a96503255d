use bigint::BigIntError;
use thiserror::Error;

use crate::integer::Repr;

/// Errors from the adaptive integer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegerError {
    /// The caller asked for the representation the value is not holding.
    #[error("wrong representation: asked for the {expected} value while holding a {actual} value")]
    WrongRepresentation { expected: Repr, actual: Repr },
    #[error(transparent)]
    Arithmetic(#[from] BigIntError),
}

use thiserror::Error;

/// Precondition violations reported by [`Dyadic`](crate::Dyadic) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DyadicError {
    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("cannot represent non-finite float {0} exactly")]
    NonFiniteFloat(String),

    #[error("square root of a negative value")]
    NegativeSqrt,
}

/// Errors that can occur while reading a [`Dyadic`](crate::Dyadic) from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDyadicError {
    #[error("invalid float literal: {0:?}")]
    InvalidLiteral(String),

    #[error(transparent)]
    NonFinite(#[from] DyadicError),
}

/// Result type for checked arithmetic and conversions
pub type DyadicResult<T> = Result<T, DyadicError>;

/// Result type for parsing
pub type ParseResult<T> = Result<T, ParseDyadicError>;

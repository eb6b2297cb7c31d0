use crate::diagnostics::DiagnosticRecord;
use crate::{decode, input, math};
use thiserror::Error;

/// Failures produced while reconstructing a constant term.
///
/// Failures are never recovered from inside librecon; they are returned to the caller as soon as
/// they are detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input document is structurally invalid.
    #[error("{0}")]
    MalformedInput(String),

    /// The document declares a different number of points than it carries.
    #[error("Expected n={expected} points, found {found}")]
    PointCountMismatch { expected: u64, found: usize },

    /// The number of points to use is not in `[1, n]`.
    #[error("Invalid k={k} for n={n}")]
    InvalidThreshold { k: i64, n: u64 },

    /// A base outside `[2, 62]`.
    #[error("Unsupported base: {0}")]
    UnsupportedBase(i64),

    /// A character that is not a digit of the base, even after the uppercase fallback.
    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// A fraction was constructed, or divided, with a zero denominator.
    #[error("Zero denominator")]
    ZeroDenominator,

    /// A fraction expected to be an integer is not one.
    #[error("Result is not an integer: {0}")]
    NonIntegerResult(String),
}

impl Error {
    /// The diagnostic code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedInput(_) => input::errors::MalformedInput::CODE,
            Error::PointCountMismatch { .. } => input::errors::PointCountMismatch::CODE,
            Error::InvalidThreshold { .. } => input::errors::InvalidThreshold::CODE,
            Error::UnsupportedBase(_) => decode::errors::UnsupportedBase::CODE,
            Error::InvalidDigit { .. } => decode::errors::InvalidDigit::CODE,
            Error::ZeroDenominator => math::errors::ZeroDenominator::CODE,
            Error::NonIntegerResult(_) => math::errors::NonIntegerResult::CODE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Exact arithmetic used to reconstruct constant terms.
//!
//! Everything here works over arbitrary-precision integers. Nothing is ever rounded: a value that
//! is expected to be an integer but is not is reported as an [error][crate::Error].

pub(crate) mod errors;

mod gcd;
pub use gcd::*;

mod fraction;
pub use fraction::*;

mod lagrange;
pub use lagrange::*;

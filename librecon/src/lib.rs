//! librecon reconstructs the constant term of an unknown polynomial from sample points.
//!
//! The pipeline is
//!
//! 1. [decode] each point's y-coordinate from the base it is written in (2 through 62),
//! 2. [select][select_points] the `k` points with the smallest x-coordinates,
//! 3. evaluate the [constant term][constant_term] of the unique polynomial of degree at most
//!    `k - 1` through them by exact Lagrange interpolation over [fractions][Fraction].
//!
//! [reconstruct] runs the whole pipeline on an [input document][input].
//!
//! All arithmetic is over arbitrary-precision integers and nothing is ever rounded. Every failure
//! is returned as an [Error], which maps to a [diagnostic][diagnostics::Diagnostic] with a stable
//! code.

#[macro_use]
pub mod diagnostics;

pub mod common;
pub use common::Point;

mod error;
pub use error::{Error, Result};

pub mod decode;
pub use decode::{decode, encode};

pub mod input;
pub use input::{parse_document, reconstruct, select_points, Document};

mod math;
pub use math::{basis_at_zero, constant_term, gcd, Fraction};

#[cfg(feature = "benchmark-internals")]
pub use math::*;

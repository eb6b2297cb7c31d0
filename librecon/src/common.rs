//! Common types used by librecon.

use num_bigint::BigInt;
use std::fmt;

/// A sample point `(x, y)` of a polynomial.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<BigInt>,
        Y: Into<BigInt>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<BigInt>,
    Y: Into<BigInt>,
{
    fn from(point: (X, Y)) -> Self {
        Self::new(point.0, point.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

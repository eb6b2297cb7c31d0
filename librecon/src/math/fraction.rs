#![allow(clippy::should_implement_trait)]

use super::gcd;
use crate::{Error, Result};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops;
use tracing::trace;

/// An exact rational number.
///
/// A `Fraction` is always in lowest terms and its denominator is always positive, so two fractions
/// are equal exactly when their numerators and denominators are.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Creates the fraction `num / den`, reduced to lowest terms.
    ///
    /// Fails with [ZeroDenominator](Error::ZeroDenominator) if `den` is zero.
    pub fn new<N, D>(num: N, den: D) -> Result<Self>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let den = den.into();
        if den.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::reduce(num.into(), den))
    }

    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Self {
            num: n.into(),
            den: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Moves the sign into the numerator and divides out common factors. `den` must be nonzero.
    fn reduce(mut num: BigInt, mut den: BigInt) -> Self {
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = gcd(num.clone(), den.clone());
        if !g.is_one() {
            trace!(%num, %den, %g, "reducing fraction");
            num = num / &g;
            den = den / &g;
        }
        Self { num, den }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Divides `self` by `rhs`.
    ///
    /// Fails with [ZeroDenominator](Error::ZeroDenominator) if `rhs` is zero.
    pub fn div(&self, rhs: &Fraction) -> Result<Fraction> {
        Fraction::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }

    /// Returns the integer `self` is equal to.
    ///
    /// Fails with [NonIntegerResult](Error::NonIntegerResult) if `self` is not an integer; the
    /// value is never truncated.
    pub fn into_integer(self) -> Result<BigInt> {
        if self.is_integer() {
            Ok(self.num)
        } else {
            Err(Error::NonIntegerResult(self.to_string()))
        }
    }

    pub fn to_integer(&self) -> Result<BigInt> {
        self.clone().into_integer()
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl<'a, 'b> ops::Add<&'b Fraction> for &'a Fraction {
    type Output = Fraction;

    fn add(self, rhs: &'b Fraction) -> Fraction {
        Fraction::reduce(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl<'a, 'b> ops::Mul<&'b Fraction> for &'a Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &'b Fraction) -> Fraction {
        Fraction::reduce(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl ops::Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

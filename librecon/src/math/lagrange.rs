use super::Fraction;
use crate::{Error, Point, Result};

use num_bigint::BigInt;
use num_traits::One;
use tracing::debug;

/// Computes the constant term `f(0)` of the unique polynomial `f` of degree at most `k - 1`
/// passing through the `k` given points.
///
/// The x-coordinates of `points` must be pairwise distinct; a repeated x-coordinate fails with
/// [ZeroDenominator](Error::ZeroDenominator). The result must be an integer, otherwise
/// [NonIntegerResult](Error::NonIntegerResult) is returned.
///
/// ## Algorithm
///
/// By [Lagrange interpolation],
///
/// ```text
/// f(0) = Σᵢ yᵢ · Lᵢ(0),    Lᵢ(0) = Πⱼ≠ᵢ (0 - xⱼ) / (xᵢ - xⱼ)
/// ```
///
/// Each term is computed as a single [Fraction] and the terms are summed in the order of `points`.
///
/// ## Examples
///
/// ```
/// # use librecon::{constant_term, Point};
/// # use num_bigint::BigInt;
/// // f(x) = x² + 3
/// let points = vec![Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// assert_eq!(constant_term(&points), Ok(BigInt::from(3)));
/// ```
///
/// [Lagrange interpolation]: https://en.wikipedia.org/wiki/Lagrange_polynomial
pub fn constant_term(points: &[Point]) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::MalformedInput(
            "At least one point is required".to_owned(),
        ));
    }

    let mut sum = Fraction::zero();
    for (i, point) in points.iter().enumerate() {
        let (num, den) = basis_parts(i, points);
        let term = Fraction::new(&point.y * num, den)?;
        debug!(i, x = %point.x, y = %point.y, %term, "lagrange term");
        sum = sum + term;
    }

    debug!(%sum, "constant term");
    sum.into_integer()
}

/// Evaluates the Lagrange basis polynomial `Lᵢ` of `points` at 0.
///
/// The basis polynomials of a point set sum to 1 everywhere, and `Lᵢ(xⱼ)` is 1 when `i = j`
/// and 0 otherwise.
pub fn basis_at_zero(i: usize, points: &[Point]) -> Result<Fraction> {
    let (num, den) = basis_parts(i, points);
    Fraction::new(num, den)
}

/// Returns `(Πⱼ≠ᵢ -xⱼ, Πⱼ≠ᵢ (xᵢ - xⱼ))`. Empty products are 1.
fn basis_parts(i: usize, points: &[Point]) -> (BigInt, BigInt) {
    let xi = &points[i].x;
    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold((BigInt::one(), BigInt::one()), |(num, den), (_, pj)| {
            (num * -&pj.x, den * (xi - &pj.x))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pts: &[(i64, i64)]) -> Vec<Point> {
        pts.iter().map(|&p| Point::from(p)).collect()
    }

    macro_rules! constant_term_test {
        ($($name:ident: [$($pt:expr),+ $(,)?] => $expected:expr)*) => {
        $(
            #[test]
            fn $name() {
                let points = points(&[$($pt),+]);
                assert_eq!(constant_term(&points), $expected.map(BigInt::from));
            }
        )*
        }
    }

    mod constant_term {
        use super::*;

        constant_term_test! {
            single_point: [(5, 42)] => Ok::<i64, Error>(42)
            single_point_at_zero: [(0, -7)] => Ok::<i64, Error>(-7)
            quadratic: [(1, 4), (2, 7), (3, 12)] => Ok::<i64, Error>(3)
            quadratic_unordered: [(3, 12), (1, 4), (2, 7)] => Ok::<i64, Error>(3)
            line: [(1, 11), (2, 12), (3, 13)] => Ok::<i64, Error>(10)
            line_first_two: [(1, 11), (2, 12)] => Ok::<i64, Error>(10)
            line_last_two: [(2, 12), (3, 13)] => Ok::<i64, Error>(10)
            line_outer_two: [(1, 11), (3, 13)] => Ok::<i64, Error>(10)
            negative_xs: [(-2, 10), (-1, 5), (1, 1)] => Ok::<i64, Error>(2)
            includes_zero: [(0, 9), (4, 1)] => Ok::<i64, Error>(9)
            cubic: [(1, 5), (2, 17), (3, 47), (4, 101)] => Ok::<i64, Error>(5)
            half: [(1, 1), (3, 2)] => Err::<i64, Error>(Error::NonIntegerResult("1/2".into()))
            duplicate_x: [(1, 1), (1, 1)] => Err::<i64, Error>(Error::ZeroDenominator)
        }
    }

    #[test]
    fn no_points() {
        assert!(matches!(constant_term(&[]), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn big_constant_term() {
        // f(x) = 3x² - x + 10^50
        let c = num_traits::pow(BigInt::from(10), 50);
        let f = |x: i64| BigInt::from(3 * x * x - x) + &c;
        let points: Vec<_> = [-5, 2, 9]
            .iter()
            .map(|&x| Point::new(x, f(x)))
            .collect();
        assert_eq!(constant_term(&points), Ok(c));
    }

    #[test]
    fn basis_sums_to_one() {
        let points = points(&[(-3, 0), (1, 0), (4, 0), (10, 0)]);
        let sum = (0..points.len())
            .map(|i| basis_at_zero(i, &points).unwrap())
            .fold(Fraction::zero(), |acc, l| acc + l);
        assert_eq!(sum, Fraction::one());
    }

    #[test]
    fn basis_values() {
        // L₀(0) = (-2)(-3) / ((1 - 2)(1 - 3)) = 3
        let points = points(&[(1, 0), (2, 0), (3, 0)]);
        assert_eq!(basis_at_zero(0, &points), Ok(Fraction::from_integer(3)));
        // L₁(0) = (-1)(-3) / ((2 - 1)(2 - 3)) = -3
        assert_eq!(basis_at_zero(1, &points), Ok(Fraction::from_integer(-3)));
        assert_eq!(basis_at_zero(2, &points), Ok(Fraction::from_integer(1)));
    }
}

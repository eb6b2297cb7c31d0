use num_integer::Integer;
use num_traits::Signed;

/// Calculates the GCD of `|u|` and `|v|`.
///
/// `gcd(0, n) = |n|`, and `gcd(0, 0) = 0`.
pub fn gcd<N: Integer + Signed + Clone>(u: N, v: N) -> N {
    euclidean_gcd(u.abs(), v.abs())
}

/// The [Euclidean GCD] algorithm, for non-negative `u` and `v`.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd<N: Integer + Clone>(mut u: N, mut v: N) -> N {
    while !v.is_zero() {
        let r = u % v.clone();
        u = std::mem::replace(&mut v, r);
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: Integer + Clone>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}

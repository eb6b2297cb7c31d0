#[macro_use]
extern crate criterion;
extern crate librecon;

use criterion::{black_box, BenchmarkId, Criterion};
use librecon::{constant_term, Point};
use num_bigint::BigInt;

/// Samples f(x) = Σᵢ₌₀ᵏ⁻¹ (i + 1)·xⁱ + 10^30 at x = 1..=k.
fn points(k: i64) -> Vec<Point> {
    let c = num_traits::pow(BigInt::from(10), 30);
    (1..=k)
        .map(|x| {
            let y = (0..k).rev().fold(BigInt::from(0), |acc, i| acc * x + (i + 1)) + &c;
            Point::new(x, y)
        })
        .collect()
}

fn bench_constant_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant_term");
    for &k in [3, 10, 30].iter() {
        let points = points(k);
        group.bench_with_input(BenchmarkId::from_parameter(k), &points, |b, points| {
            b.iter(|| constant_term(black_box(points)))
        });
    }
    group.finish();
}

criterion_group!(lagrange_benches, bench_constant_term);
criterion_main!(lagrange_benches);

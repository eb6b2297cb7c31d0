#[macro_use]
extern crate criterion;
extern crate librecon;

use criterion::{black_box, Criterion};
use librecon::{_euclidean_gcd, gcd};
use num_bigint::BigInt;

const INPUT: [(i64, i64); 3] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
];

fn bench_euclidean_gcd(c: &mut Criterion) {
    c.bench_function("euclidean_gcd", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _euclidean_gcd(black_box(*u), black_box(*v));
            }
        })
    });
}

fn bench_big_gcd(c: &mut Criterion) {
    // Consecutive Fibonacci numbers are the worst case for the Euclidean algorithm.
    let (mut u, mut v) = (BigInt::from(0), BigInt::from(1));
    for _ in 0..500 {
        let next = &u + &v;
        u = std::mem::replace(&mut v, next);
    }

    c.bench_function("big_gcd", |b| {
        b.iter(|| gcd(black_box(u.clone()), black_box(v.clone())))
    });
}

criterion_group!(gcd_benches, bench_euclidean_gcd, bench_big_gcd);
criterion_main!(gcd_benches);

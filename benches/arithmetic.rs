use codymath::{factorial, gcd, is_prime, round, sum};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_number_theory(c: &mut Criterion) {
    c.bench_function("is_prime 7919", |b| b.iter(|| is_prime(black_box(7919.0))));
    c.bench_function("gcd 1071 462", |b| b.iter(|| gcd(black_box(1071.0), black_box(462.0))));
    c.bench_function("factorial 170", |b| b.iter(|| factorial(black_box(170.0))));
}

fn bench_utilities(c: &mut Criterion) {
    let numbers: Vec<f64> = (0..1_000).map(|i| i as f64 * 0.5).collect();
    c.bench_function("sum 1000", |b| b.iter(|| sum(black_box(&numbers))));
    c.bench_function("round 2 decimals", |b| b.iter(|| round(black_box(3.14159), 2)));
}

criterion_group!(benches, bench_number_theory, bench_utilities);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eratos::{count_primes_up_to, primes_up_to};

fn bench_primes_up_to_100k(c: &mut Criterion) {
    c.bench_function("primes_up_to(100_000) u64", |b| {
        b.iter(|| primes_up_to(black_box(100_000u64)));
    });
}

fn bench_primes_up_to_1m_u32(c: &mut Criterion) {
    c.bench_function("primes_up_to(1_000_000) u32", |b| {
        b.iter(|| primes_up_to(black_box(1_000_000u32)));
    });
}

fn bench_primes_up_to_1m_u64(c: &mut Criterion) {
    c.bench_function("primes_up_to(1_000_000) u64", |b| {
        b.iter(|| primes_up_to(black_box(1_000_000u64)));
    });
}

fn bench_primes_up_to_10m(c: &mut Criterion) {
    c.bench_function("primes_up_to(10_000_000) u64", |b| {
        b.iter(|| primes_up_to(black_box(10_000_000u64)));
    });
}

fn bench_count_primes_up_to_1m(c: &mut Criterion) {
    // Counting skips the collection pass; the gap to the enumeration
    // benches is the cost of materializing the result vector.
    c.bench_function("count_primes_up_to(1_000_000)", |b| {
        b.iter(|| count_primes_up_to(black_box(1_000_000u64)));
    });
}

criterion_group!(
    benches,
    bench_primes_up_to_100k,
    bench_primes_up_to_1m_u32,
    bench_primes_up_to_1m_u64,
    bench_primes_up_to_10m,
    bench_count_primes_up_to_1m,
);
criterion_main!(benches);

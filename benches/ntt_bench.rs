//! Micro-benchmarks for the transform and the convolution multiplier.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rlwe_core::{ntt, RingElement};

// 13313 = 13 * 2^10 + 1 carries transforms up to length 1024 with root 3.
const MODULUS: u128 = 13_313;
const ROOT: u128 = 3;

fn random_element(rng: &mut SmallRng, len: usize) -> RingElement {
    RingElement::new((0..len).map(|_| rng.gen_range(0..MODULUS)).collect(), MODULUS)
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_multiply");
    let mut rng = SmallRng::seed_from_u64(42);

    for &degree in &[64usize, 128, 256, 512] {
        let a = random_element(&mut rng, degree);
        let b = random_element(&mut rng, degree);

        group.throughput(Throughput::Elements(degree as u64));
        group.bench_with_input(BenchmarkId::from_parameter(degree), &(a, b), |bench, (a, b)| {
            bench.iter(|| ntt::multiply(black_box(a), black_box(b), ROOT).unwrap());
        });
    }

    group.finish();
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("ntt_forward");
    let mut rng = SmallRng::seed_from_u64(42);

    for &len in &[256usize, 512, 1024] {
        let values: Vec<u128> = (0..len).map(|_| rng.gen_range(0..MODULUS)).collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |bench, values| {
            bench.iter_batched(
                || values.clone(),
                |mut values| {
                    ntt::forward(black_box(&mut values), MODULUS, ROOT);
                    values
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply, bench_forward);
criterion_main!(benches);

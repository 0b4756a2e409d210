use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffpack::compression::{decode, encode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn text(len: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn random(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(12345);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_encode");
    for &size in &[1_000, 10_000, 100_000] {
        let input = text(size);
        group.bench_with_input(BenchmarkId::new("text", size), &input, |b, input| {
            b.iter(|| encode(black_box(input)))
        });
        let input = random(size);
        group.bench_with_input(BenchmarkId::new("random", size), &input, |b, input| {
            b.iter(|| encode(black_box(input)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decode");
    for &size in &[1_000, 10_000, 100_000] {
        let container = encode(&text(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("text", size), &container, |b, container| {
            b.iter(|| decode(black_box(container)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);

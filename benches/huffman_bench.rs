use criterion::{criterion_group, criterion_main, Criterion};
use huff::{compress, decompress};

fn text_input(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog. "
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}

fn uniform_input(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 24) as u8
        })
        .collect()
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_text");
    let input = text_input(64 * 1024);

    group.bench_function("compress", |b| b.iter(|| compress(&input)));

    let packed = compress(&input);
    group.bench_function("decompress", |b| b.iter(|| decompress(&packed).unwrap()));
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_uniform");
    let input = uniform_input(64 * 1024);

    group.bench_function("compress", |b| b.iter(|| compress(&input)));

    let packed = compress(&input);
    group.bench_function("decompress", |b| b.iter(|| decompress(&packed).unwrap()));
}

criterion_group!(benches, bench_text, bench_uniform);
criterion_main!(benches);

//! Performance benchmarks for bytepress-huffman

use bytepress_huffman::{compress, expand};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZE: usize = 256 * 1024;

fn text_like(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. \
                 Pack my box with five dozen liquor jugs. ";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        let remaining = size - data.len();
        let chunk_size = remaining.min(text.len());
        data.extend_from_slice(&text[..chunk_size]);
    }
    data
}

fn random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x123456789ABCDEF0;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn bench_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_compression");

    for (name, data) in [("text", text_like(SIZE)), ("random", random(SIZE))] {
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data)).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

fn bench_decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decompression");

    for (name, data) in [("text", text_like(SIZE)), ("random", random(SIZE))] {
        let compressed = compress(&data).unwrap();
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let decompressed = expand(black_box(compressed)).unwrap();
                    black_box(decompressed);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compression, bench_decompression);
criterion_main!(benches);

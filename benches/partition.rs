// benches/partition.rs
//! Cost of padding and range computation, the serial overhead in front of every parallel run

use aesecb_rs::consts::PADDING_BLOCK_SIZE;
use aesecb_rs::{pad, partition};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn bench_pad(c: &mut Criterion) {
    let mut group = c.benchmark_group("pad");

    for size in [1000usize, 1 << 20, 1 << 24] {
        let plaintext = vec![0x41u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &plaintext, |b, p| {
            b.iter(|| black_box(pad(black_box(p), PADDING_BLOCK_SIZE).unwrap()))
        });
    }

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");

    for workers in [1usize, 8, 64, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &w| {
            b.iter(|| black_box(partition(black_box(1 << 20), w).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pad, bench_partition);
criterion_main!(benches);

// benches/encrypt.rs
//! Sequential vs block-parallel ECB throughput across buffer sizes and worker counts

use aesecb_rs::consts::{BLOCK_SIZE, PADDING_BLOCK_SIZE};
use aesecb_rs::{
    default_worker_count, encrypt_parallel, encrypt_sequential, key_from_bytes, key_schedule, pad,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const KEY: &[u8; 16] = b"62990EB44EB0898D";

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecb_encrypt");
    let key = key_schedule(&key_from_bytes(KEY).unwrap());

    let mut worker_counts = vec![2, 4];
    let available = default_worker_count().get();
    if !worker_counts.contains(&available) {
        worker_counts.push(available);
    }

    for &size in &[KB, 64 * KB, MB, 16 * MB] {
        let padded = pad(&vec![0x41u8; size], PADDING_BLOCK_SIZE).unwrap(); // repeating 'A'
        let total = padded.len() / BLOCK_SIZE;

        group.throughput(Throughput::Bytes(padded.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sequential", format_size(size)),
            &padded,
            |b, padded| b.iter(|| black_box(encrypt_sequential(black_box(padded), &key).unwrap())),
        );

        for &workers in &worker_counts {
            group.bench_with_input(
                BenchmarkId::new(format!("parallel/{workers}"), format_size(size)),
                &padded,
                |b, padded| {
                    b.iter(|| {
                        black_box(encrypt_parallel(black_box(padded), &key, total, workers).unwrap())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_encrypt);
criterion_main!(benches);

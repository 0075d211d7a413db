//! Performance benchmarks for the CRC-7 engine
//!
//! - Table-driven vs bit-serial throughput across data sizes
//! - Different data patterns
//! - Command frame construction and verification

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use crc7_core::command::{CommandFrame, SdCommand};
use crc7_core::crc::{Crc7, crc7_bitwise};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes the same
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Reproducible pseudo-random bytes
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    pub fn zeros(size: usize) -> Vec<u8> {
        vec![0; size]
    }
}

mod data_sizes {
    pub const FRAME: usize = 5; // one SD command header
    pub const SMALL: usize = 512; // one SD block
    pub const MEDIUM: usize = 4 * 1024;
    pub const LARGE: usize = 64 * 1024;
}

/// Table-driven vs bit-serial across sizes
fn bench_crc7_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc7_sizes");

    let sizes = [
        ("5B", data_sizes::FRAME),
        ("512B", data_sizes::SMALL),
        ("4KB", data_sizes::MEDIUM),
        ("64KB", data_sizes::LARGE),
    ];

    for (size_name, size) in sizes {
        let data = test_data::random(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("table", size_name), &data, |b, data| {
            b.iter(|| {
                let checksum = Crc7::compute(black_box(data));
                black_box(checksum);
            });
        });
        group.bench_with_input(BenchmarkId::new("bitwise", size_name), &data, |b, data| {
            b.iter(|| {
                let checksum = crc7_bitwise(black_box(data));
                black_box(checksum);
            });
        });
    }

    group.finish();
}

fn bench_crc7_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc7_patterns");

    let patterns: [(&str, PatternGenerator); 3] = [
        ("uniform", test_data::uniform as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
        ("zeros", test_data::zeros as PatternGenerator),
    ];

    let size = data_sizes::MEDIUM;

    for (pattern_name, generator) in patterns {
        let data = generator(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let checksum = Crc7::compute(black_box(data));
                    black_box(checksum);
                });
            },
        );
    }

    group.finish();
}

/// Building and checking the frames a card init sequence sends
fn bench_command_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc7_frames");

    group.bench_function("build_init_sequence", |b| {
        b.iter(|| {
            for cmd in SdCommand::ALL {
                let frame = CommandFrame::from_command(black_box(cmd), black_box(0x1AA));
                black_box(frame.to_bytes());
            }
        });
    });

    let wire = CommandFrame::from_command(SdCommand::SendIfCond, 0x1AA).to_bytes();
    group.bench_function("parse_frame", |b| {
        b.iter(|| {
            let frame = CommandFrame::parse(black_box(&wire));
            let _ = black_box(frame);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_crc7_sizes,
    bench_crc7_patterns,
    bench_command_frames,
);
criterion_main!(benches);

//! Benchmarks for frame analysis throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cine_models::PixelBuffer;
use cine_signal::{build_histograms, FrameAnalyzer, SignalConfig};

fn synthetic_frame(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            data.extend_from_slice(&[
                (x % 256) as u8,
                (y % 256) as u8,
                ((x + y) % 256) as u8,
                255,
            ]);
        }
    }
    data
}

fn bench_analyze(c: &mut Criterion) {
    let data = synthetic_frame(1024);
    let buffer = PixelBuffer::new(1024, 1024, &data).unwrap();

    let default_analyzer = FrameAnalyzer::new();
    c.bench_function("analyze_1024_default_grid", |b| {
        b.iter(|| black_box(default_analyzer.analyze(black_box(&buffer))))
    });

    let fast_analyzer = FrameAnalyzer::with_config(SignalConfig::fast());
    c.bench_function("analyze_1024_fast_grid", |b| {
        b.iter(|| black_box(fast_analyzer.analyze(black_box(&buffer))))
    });
}

fn bench_histograms(c: &mut Criterion) {
    let data = synthetic_frame(1024);
    let buffer = PixelBuffer::new(1024, 1024, &data).unwrap();

    c.bench_function("histograms_1024", |b| {
        b.iter(|| black_box(build_histograms(black_box(&buffer))))
    });
}

criterion_group!(benches, bench_analyze, bench_histograms);
criterion_main!(benches);

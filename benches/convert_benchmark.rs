#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for hex codec and RGB/HSL conversion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swatchbook::color::{hsl_to_rgb, rgb_to_hsl, Rgb};
use swatchbook::hex::{normalize_hex, rgb_to_hex};

fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_codec");

    group.bench_function("normalize_long", |b| {
        b.iter(|| normalize_hex(black_box("  #3b82f6 ")));
    });
    group.bench_function("normalize_shorthand", |b| {
        b.iter(|| normalize_hex(black_box("abc")));
    });
    group.bench_function("normalize_invalid", |b| {
        b.iter(|| normalize_hex(black_box("#gggggg")));
    });
    group.bench_function("rgb_to_hex", |b| {
        b.iter(|| rgb_to_hex(black_box(59.4), black_box(130.5), black_box(300.0)));
    });

    group.finish();
}

fn color_space_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_space");

    // Sweep of the RGB cube for realistic branch mixes
    let colors: Vec<Rgb> = (0..=255u8)
        .step_by(15)
        .flat_map(|r| {
            (0..=255u8)
                .step_by(15)
                .flat_map(move |g| (0..=255u8).step_by(15).map(move |b| Rgb::new(r, g, b)))
        })
        .collect();

    group.bench_function("rgb_to_hsl_sweep", |b| {
        b.iter(|| {
            for &rgb in &colors {
                black_box(rgb_to_hsl(rgb));
            }
        });
    });

    let hsls: Vec<_> = colors.iter().map(|&rgb| rgb_to_hsl(rgb)).collect();
    group.bench_function("hsl_to_rgb_sweep", |b| {
        b.iter(|| {
            for &hsl in &hsls {
                black_box(hsl_to_rgb(hsl));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, codec_benchmark, color_space_benchmark);
criterion_main!(benches);

//! Benchmarks for intensity and histogram algorithms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixmorph_algorithms::histogram::{
    match_cdfs, match_histogram, CdfSearch, Histogram, MatchParams, MatchReference,
};
use pixmorph_algorithms::intensity::{bit_planes, equalize_histogram, gamma_correct};
use pixmorph_core::{GrayImage, Raster};

fn create_test_image(size: usize, seed: usize) -> GrayImage {
    // Varied surface with some structure
    Raster::from_fn(size, size, |(row, col)| ((row * 7 + col * 13 + seed) % 256) as u8)
}

fn bench_equalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("intensity/equalize");
    for size in [256, 512, 1024, 2048] {
        let image = create_test_image(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| equalize_histogram(black_box(&image)).unwrap())
        });
    }
    group.finish();
}

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("intensity/gamma");
    for size in [256, 512, 1024, 2048] {
        let image = create_test_image(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| gamma_correct(black_box(&image), 2.2).unwrap())
        });
    }
    group.finish();
}

fn bench_bit_planes(c: &mut Criterion) {
    let mut group = c.benchmark_group("intensity/bit_planes");
    for size in [256, 512, 1024] {
        let image = create_test_image(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| bit_planes(black_box(&image)))
        });
    }
    group.finish();
}

fn bench_match_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram/match");
    for size in [256, 512, 1024, 2048] {
        let image = create_test_image(size, 0);
        let reference = create_test_image(size / 2, 91);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                match_histogram(
                    black_box(&image),
                    MatchReference::Image(&reference),
                    MatchParams::default(),
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_cdf_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram/cdf_search");
    let source = Histogram::from_image(&create_test_image(512, 0)).cdf().unwrap();
    let target = Histogram::from_image(&create_test_image(300, 17)).cdf().unwrap();
    for search in [CdfSearch::TwoPointer, CdfSearch::Exhaustive] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", search)),
            &search,
            |b, &search| b.iter(|| match_cdfs(black_box(&source), black_box(&target), search)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_equalize,
    bench_gamma,
    bench_bit_planes,
    bench_match_histogram,
    bench_cdf_search
);
criterion_main!(benches);

//! Benchmark suite for frame normalization and sheet compositing
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use avatar_sheet_benches::{generate_frame_set, generate_oversized_frame_set};
use avatar_sheet_types::sheet::{Alignment, Layout, Normalizer, compose};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark padding a frame set to a common size
fn bench_normalize(c: &mut Criterion) {
	let mut group = c.benchmark_group("normalize");

	for base in [64u32, 128, 256] {
		let frames = generate_frame_set(base);
		group.bench_with_input(BenchmarkId::new("pad", base), &frames, |b, frames| {
			let normalizer = Normalizer::new(Alignment::BottomRight);
			b.iter(|| normalizer.normalize(black_box(frames.clone())));
		});
	}

	let frames = generate_oversized_frame_set(128, 500);
	group.bench_function("scale_and_pad", |b| {
		let normalizer = Normalizer::default();
		b.iter(|| normalizer.normalize(black_box(frames.clone())));
	});

	group.finish();
}

/// Benchmark compositing and PNG encoding
fn bench_compose(c: &mut Criterion) {
	let mut group = c.benchmark_group("compose");

	for base in [64u32, 128, 256] {
		let normalized = Normalizer::default().normalize(generate_frame_set(base)).unwrap();
		group.bench_with_input(BenchmarkId::new("grid", base), &normalized, |b, normalized| {
			b.iter(|| compose(&Layout::STREAM_AVATARS, normalized.target(), black_box(normalized.frames())));
		});

		let sheet = compose(&Layout::STREAM_AVATARS, normalized.target(), normalized.frames()).unwrap();
		group.bench_with_input(BenchmarkId::new("encode_png", base), &sheet, |b, sheet| {
			b.iter(|| black_box(sheet).encode_png());
		});
	}

	group.finish();
}

criterion_group!(benches, bench_normalize, bench_compose);
criterion_main!(benches);

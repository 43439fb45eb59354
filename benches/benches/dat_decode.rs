//! Benchmark suite for `Tibia.dat` decoding
//!
//! This benchmark measures object table decoding and sprite index construction
//! on synthetic files of increasing size.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tibiadat_benches::generate_test_dat_data;
use tibiadat_types::file::{SpriteIndex, dat::File};

const SIZES: [(u16, u16); 3] = [(1_000, 50), (10_000, 500), (30_000, 1_500)];

/// Benchmark object table decoding
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("dat_decode");

	for (items, outfits) in SIZES {
		let data = generate_test_dat_data(items, outfits);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("decode", items), &data, |b, data| {
			b.iter(|| {
				let result = File::from_bytes(black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark sprite index construction and rendering
fn bench_index(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_index");

	for (items, outfits) in SIZES {
		let data = generate_test_dat_data(items, outfits);
		let Ok(dat) = File::from_bytes(&data) else {
			eprintln!("Warning: could not decode synthetic file for {items} items");
			continue;
		};

		group.throughput(Throughput::Elements(dat.len() as u64));
		group.bench_with_input(BenchmarkId::new("build", items), dat.objects(), |b, objects| {
			b.iter(|| black_box(SpriteIndex::build(black_box(objects), 1000)));
		});

		if let Ok(index) = dat.sprite_index() {
			group.bench_with_input(BenchmarkId::new("to_text", items), &index, |b, index| {
				b.iter(|| black_box(index.to_text()));
			});
		}
	}

	group.finish();
}

criterion_group!(benches, bench_decode, bench_index);
criterion_main!(benches);

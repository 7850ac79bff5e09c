//! Benchmarks for vehicle identifier lookups

use criterion::{Criterion, criterion_group, criterion_main};
use gta_vehicles::VehicleHash;
use std::hint::black_box;

fn bench_from_name(c: &mut Criterion) {
    c.bench_function("from_name exact", |b| {
        b.iter(|| VehicleHash::from_name(black_box("NightShark")));
    });

    c.bench_function("from_name case-insensitive fallback", |b| {
        b.iter(|| VehicleHash::from_name(black_box("nightshark")));
    });
}

fn bench_from_hash(c: &mut Criterion) {
    c.bench_function("from_hash", |b| {
        b.iter(|| VehicleHash::from_hash(black_box(433954513)));
    });
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("enumerate full table", |b| {
        b.iter(|| {
            for vehicle in VehicleHash::ALL {
                black_box((vehicle.name(), vehicle.hash()));
            }
        });
    });
}

criterion_group!(benches, bench_from_name, bench_from_hash, bench_enumerate);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use cubeshell_complex::{Cuboid, VoxelComplex};
use cubeshell_geom::Point;

fn block(n: i32) -> Vec<Cuboid> {
    let mut out = Vec::with_capacity((n * n * n) as usize);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                out.push(Cuboid::at(Point::new(x, y, z)));
            }
        }
    }
    out
}

// Deterministic sparse pattern, roughly half the cells filled
fn sponge(n: i32) -> Vec<Cuboid> {
    let mut out = Vec::new();
    for i in 0..(n * n * n) as u64 {
        let r = (i * 1664525 + 1013904223) & 0xFFFF_FFFF;
        if r & 1 == 0 {
            let i = i as i32;
            out.push(Cuboid::at(Point::new(i % n, (i / n) % n, i / (n * n))));
        }
    }
    out
}

fn build(cuboids: &[Cuboid]) -> VoxelComplex {
    let mut complex = VoxelComplex::with_capacity(cuboids.len());
    for c in cuboids {
        let _ = complex.insert(c.clone());
    }
    complex
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let solid = block(32);
    let sparse = sponge(32);
    group.bench_function("solid_32", |b| b.iter(|| black_box(build(&solid))));
    group.bench_function("sponge_32", |b| b.iter(|| black_box(build(&sparse))));
    group.finish();
}

fn bench_shell(c: &mut Criterion) {
    let mut group = c.benchmark_group("shell");
    let solid = build(&block(32));
    let sparse = build(&sponge(32));
    group.bench_function("solid_32", |b| b.iter(|| black_box(solid.shell())));
    group.bench_function("sponge_32", |b| b.iter(|| black_box(sparse.shell())));
    group.finish();
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
        .sample_size(30)
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_insert, bench_shell
}
criterion_main!(benches);

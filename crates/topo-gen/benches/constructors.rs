use criterion::{black_box, criterion_group, criterion_main, Criterion};
use topo_core::NeighborMode;
use topo_gen::{atlas, atlas_len, connect_neighborhood, kautz, lattice, linegraph, ring};

fn constructors_bench(c: &mut Criterion) {
    c.bench_function("torus_100x100", |b| {
        b.iter(|| {
            let graph = lattice(black_box(&[100, 100]), 1, false, false, true).unwrap();
            black_box(graph);
        });
    });

    c.bench_function("kautz_3_6", |b| {
        b.iter(|| {
            let graph = kautz(black_box(3), black_box(6)).unwrap();
            black_box(graph);
        });
    });

    c.bench_function("atlas_full_scan", |b| {
        b.iter(|| {
            for number in 0..atlas_len() {
                black_box(atlas(number).unwrap());
            }
        });
    });
}

fn transforms_bench(c: &mut Criterion) {
    let grid = lattice(&[64, 64], 1, false, false, false).unwrap();
    c.bench_function("linegraph_grid_64", |b| {
        b.iter(|| {
            black_box(linegraph(&grid).unwrap());
        });
    });

    c.bench_function("connect_neighborhood_ring_5k", |b| {
        b.iter(|| {
            let mut graph = ring(5_000, false, false, true).unwrap();
            black_box(connect_neighborhood(&mut graph, 3, NeighborMode::All).unwrap());
        });
    });
}

criterion_group!(benches, constructors_bench, transforms_bench);
criterion_main!(benches);

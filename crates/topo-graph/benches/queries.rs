use criterion::{black_box, criterion_group, criterion_main, Criterion};
use topo_core::{Graph, NeighborMode};
use topo_graph::GraphImpl;

fn grid_edges(side: usize) -> Vec<usize> {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let idx = row * side + col;
            if col + 1 < side {
                edges.extend([idx, idx + 1]);
            }
            if row + 1 < side {
                edges.extend([idx, idx + side]);
            }
        }
    }
    edges
}

fn queries_bench(c: &mut Criterion) {
    let side = 64;
    let edges = grid_edges(side);
    let mut graph = GraphImpl::with_vertices(side * side, false).unwrap();
    graph.add_edges(&edges).unwrap();
    let vertices: Vec<_> = graph.vertices().collect();

    c.bench_function("bulk_insert_grid_64", |b| {
        b.iter(|| {
            let mut fresh = GraphImpl::with_vertices(side * side, false).unwrap();
            fresh.add_edges(black_box(&edges)).unwrap();
            black_box(fresh);
        });
    });

    c.bench_function("neighbor_queries", |b| {
        b.iter(|| {
            for vertex in &vertices {
                black_box(graph.neighbors(*vertex, NeighborMode::All).unwrap());
            }
        });
    });
}

criterion_group!(benches, queries_bench);
criterion_main!(benches);

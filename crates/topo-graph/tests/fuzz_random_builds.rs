use topo_core::{Graph, NeighborMode, VertexId};
use topo_graph::{canonical_hash, graph_from_bytes, graph_to_bytes, GraphImpl};
use proptest::prelude::*;

fn check_invariants(graph: &GraphImpl) {
    let n = graph.vertex_count();
    for (from, to) in graph.edge_pairs() {
        assert!(from < n && to < n);
    }
    let total: usize = graph
        .vertices()
        .map(|vertex| graph.degree(vertex, NeighborMode::All, true).unwrap())
        .sum();
    assert_eq!(total, graph.edge_count() * 2);
}

proptest! {
    #[test]
    fn random_edge_lists_respect_invariants(
        n in 1usize..12,
        directed in any::<bool>(),
        raw in proptest::collection::vec(any::<u16>(), 0..40),
    ) {
        let mut flat: Vec<usize> = raw.iter().map(|x| *x as usize % n).collect();
        if flat.len() % 2 == 1 {
            flat.pop();
        }
        let mut graph = GraphImpl::with_vertices(n, directed).unwrap();
        prop_assert_eq!(graph.add_edges(&flat).unwrap(), flat.len() / 2);
        check_invariants(&graph);

        let bytes = graph_to_bytes(&graph).unwrap();
        let restored = graph_from_bytes(&bytes).unwrap();
        prop_assert_eq!(canonical_hash(&graph).unwrap(), canonical_hash(&restored).unwrap());

        let before = graph.edge_count();
        let removed = graph.simplify();
        prop_assert_eq!(graph.edge_count() + removed, before);
        check_invariants(&graph);
        for (from, to) in graph.edge_pairs() {
            prop_assert_ne!(from, to);
            let count = graph
                .neighbors(VertexId::from_raw(from as u64), NeighborMode::All)
                .unwrap()
                .iter()
                .filter(|id| id.as_raw() == to as u64)
                .count();
            prop_assert!(directed || count == 1);
        }
    }
}

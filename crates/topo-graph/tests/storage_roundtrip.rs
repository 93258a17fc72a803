use topo_core::errors::TopoError;
use topo_core::{EdgeId, Graph, NeighborMode, VertexId};
use topo_graph::{
    canonical_hash, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, GraphImpl,
};

fn v(raw: u64) -> VertexId {
    VertexId::from_raw(raw)
}

#[test]
fn add_edges_and_serialize() {
    let mut graph = GraphImpl::with_vertices(4, false).unwrap();
    assert_eq!(graph.add_edges(&[0, 1, 1, 2, 2, 3, 3, 0]).unwrap(), 4);
    graph
        .set_edge_attribute("weight", vec![1.0, 2.0, 3.0, 4.0])
        .unwrap();

    assert_eq!(graph.vertices().len(), 4);
    assert_eq!(graph.edges().len(), 4);
    assert_eq!(
        graph.endpoints(EdgeId::from_raw(2)).unwrap(),
        (v(2), v(3))
    );

    let hash_before = canonical_hash(&graph).unwrap();
    let json = graph_to_json(&graph).unwrap();
    let restored = graph_from_json(&json).unwrap();
    assert_eq!(hash_before, canonical_hash(&restored).unwrap());
    assert_eq!(
        restored.attributes().numeric("weight"),
        Some(&[1.0, 2.0, 3.0, 4.0][..])
    );

    let bytes = graph_to_bytes(&graph).unwrap();
    let restored = graph_from_bytes(&bytes).unwrap();
    assert_eq!(restored.edge_pairs(), graph.edge_pairs());
    assert!(!restored.is_directed());
}

#[test]
fn rejected_batches_leave_graph_untouched() {
    let mut graph = GraphImpl::with_vertices(3, true).unwrap();
    graph.add_edges(&[0, 1]).unwrap();

    let err = graph.add_edges(&[1, 2, 2]).unwrap_err();
    assert!(matches!(err, TopoError::InvalidArgument(ref info) if info.code == "odd-edge-list"));

    let err = graph.add_edges(&[1, 2, 2, 3]).unwrap_err();
    match err {
        TopoError::InvalidArgument(info) => {
            assert_eq!(info.code, "vertex-out-of-range");
            assert_eq!(info.context.get("position"), Some(&"3".to_string()));
            assert_eq!(info.context.get("vertex"), Some(&"3".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(graph.edge_pairs(), vec![(0, 1)]);
}

#[test]
fn incidence_follows_direction() {
    let mut graph = GraphImpl::with_vertices(3, true).unwrap();
    graph.add_edges(&[0, 1, 2, 0, 0, 0]).unwrap();

    let out: Vec<u64> = graph
        .neighbors(v(0), NeighborMode::Out)
        .unwrap()
        .iter()
        .map(VertexId::as_raw)
        .collect();
    assert_eq!(out, vec![1, 0]);
    let all: Vec<u64> = graph
        .neighbors(v(0), NeighborMode::All)
        .unwrap()
        .iter()
        .map(VertexId::as_raw)
        .collect();
    assert_eq!(all, vec![1, 2, 0, 0]);

    assert_eq!(graph.degree(v(0), NeighborMode::All, true).unwrap(), 4);
    assert_eq!(graph.degree(v(0), NeighborMode::All, false).unwrap(), 2);
    assert!(graph.are_connected(v(2), v(0)).unwrap());
    assert!(!graph.are_connected(v(0), v(2)).unwrap());
    assert!(graph.are_connected(v(9), v(0)).is_err());
}

#[test]
fn simplify_drops_loops_and_repeats() {
    let mut graph = GraphImpl::with_vertices(3, false).unwrap();
    graph.add_edges(&[0, 1, 1, 0, 1, 1, 1, 2, 2, 1]).unwrap();
    graph
        .set_edge_attribute("label", vec![10.0, 11.0, 12.0, 13.0, 14.0])
        .unwrap();

    assert_eq!(graph.simplify(), 3);
    assert_eq!(graph.edge_pairs(), vec![(0, 1), (1, 2)]);
    assert_eq!(graph.attributes().numeric("label"), Some(&[10.0, 13.0][..]));
    assert_eq!(graph.degree(v(1), NeighborMode::All, true).unwrap(), 2);
    assert_eq!(graph.simplify(), 0);
}

#[test]
fn attribute_columns_track_edge_count() {
    let mut graph = GraphImpl::with_vertices(2, false).unwrap();
    graph.add_edges(&[0, 1]).unwrap();
    let err = graph.set_edge_attribute("weight", vec![1.0, 2.0]).unwrap_err();
    assert_eq!(err.code(), "attribute-length");

    graph.set_edge_attribute("weight", vec![0.5]).unwrap();
    graph.add_edge(v(1), v(0)).unwrap();
    let weights = graph.attributes().numeric("weight").unwrap();
    assert_eq!(weights.len(), 2);
    assert_eq!(weights[0], 0.5);
    assert!(weights[1].is_nan());
}

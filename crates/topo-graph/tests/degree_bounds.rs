use topo_core::errors::TopoError;
use topo_core::Graph;
use topo_graph::{GraphConfig, GraphImpl};

#[test]
fn undirected_bounds_count_loops_twice() {
    let mut graph = GraphImpl::with_vertices(3, false).unwrap();
    graph.add_edges(&[0, 1, 1, 2, 2, 2]).unwrap();
    let bounds = graph.degree_bounds().unwrap();
    assert_eq!(bounds.min_out_degree, Some(1));
    assert_eq!(bounds.max_out_degree, Some(3));
    assert_eq!(bounds.min_in_degree, bounds.min_out_degree);
    assert_eq!(bounds.regular_degree(), None);
}

#[test]
fn directed_bounds_split_in_and_out() {
    let mut graph = GraphImpl::with_vertices(3, true).unwrap();
    graph.add_edges(&[0, 1, 0, 2, 1, 2]).unwrap();
    let bounds = graph.degree_bounds().unwrap();
    assert_eq!(bounds.min_out_degree, Some(0));
    assert_eq!(bounds.max_out_degree, Some(2));
    assert_eq!(bounds.min_in_degree, Some(0));
    assert_eq!(bounds.max_in_degree, Some(2));
}

#[test]
fn empty_graph_has_unknown_bounds() {
    let graph = GraphImpl::default();
    let bounds = graph.degree_bounds().unwrap();
    assert_eq!(bounds.max_out_degree, None);
}

#[test]
fn configured_limits_are_enforced() {
    let config = GraphConfig {
        max_vertices: 4,
        max_edges: 2,
        ..GraphConfig::default()
    };
    let err = GraphImpl::with_config(config, 5).unwrap_err();
    match err {
        TopoError::Allocation(info) => {
            assert_eq!(info.code, "vertex-limit");
            assert_eq!(info.context.get("max_vertices"), Some(&"4".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let mut graph = GraphImpl::with_config(config, 4).unwrap();
    graph.add_edges(&[0, 1, 2, 3]).unwrap();
    let err = graph.add_edges(&[1, 2]).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(ref info) if info.code == "edge-limit"));
    assert_eq!(graph.edge_count(), 2);
}

use nalgebra::DMatrix;
use proptest::prelude::*;
use topo_core::errors::TopoError;
use topo_core::{AdjacencyMode, Graph, Loops};
use topo_gen::{adjacency, adjacency_with_loops, create, small, weighted_adjacency};
use topo_graph::canonical_hash;

fn matrix(rows: usize, values: &[f64]) -> DMatrix<f64> {
    DMatrix::from_row_slice(rows, values.len() / rows, values)
}

#[test]
fn create_keeps_edges_in_input_order() {
    let graph = create(&[0, 1, 2, 0, 1, 2], 3, true).unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_pairs(), vec![(0, 1), (2, 0), (1, 2)]);
}

#[test]
fn create_rejects_odd_sequences() {
    let err = create(&[0, 1, 2], 3, false).unwrap_err();
    assert!(matches!(err, TopoError::InvalidArgument(_)));
    assert_eq!(err.code(), "odd-edge-list");
    assert_eq!(err.info().context.get("generator").map(String::as_str), Some("create"));
}

#[test]
fn create_rejects_endpoints_past_n() {
    let err = create(&[0, 1, 1, 3], 3, false).unwrap_err();
    assert_eq!(err.code(), "vertex-out-of-range");
    assert_eq!(err.info().context.get("vertex").map(String::as_str), Some("3"));
}

#[test]
fn create_allows_isolated_vertices() {
    let graph = create(&[], 4, false).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn small_matches_create() {
    let pairs = small(4, false, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    let flat = create(&[0, 1, 1, 2, 2, 3], 4, false).unwrap();
    assert_eq!(pairs.edge_pairs(), flat.edge_pairs());
    assert!(small(2, false, &[(0, 2)]).is_err());
}

#[test]
fn directed_adjacency_emits_one_edge_per_unit() {
    let graph = adjacency(&matrix(2, &[0.0, 2.0, 1.0, 0.0]), AdjacencyMode::Directed).unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.edge_pairs(), vec![(0, 1), (0, 1), (1, 0)]);
}

#[test]
fn undirected_modes_combine_cells() {
    let m = matrix(3, &[1.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0]);
    let count = |mode| adjacency(&m, mode).unwrap().edge_count();
    assert_eq!(count(AdjacencyMode::Max), 6);
    assert_eq!(count(AdjacencyMode::Undirected), 6);
    assert_eq!(count(AdjacencyMode::Min), 3);
    assert_eq!(count(AdjacencyMode::Plus), 8);
    assert_eq!(count(AdjacencyMode::Upper), 6);

    let lower = adjacency(&m, AdjacencyMode::Lower).unwrap();
    assert!(!lower.is_directed());
    assert_eq!(lower.edge_pairs(), vec![(0, 0), (1, 0), (2, 1)]);
}

#[test]
fn diagonal_follows_loop_convention() {
    let m = matrix(2, &[4.0, 1.0, 1.0, 3.0]);
    let loops = |convention| {
        adjacency_with_loops(&m, AdjacencyMode::Max, convention)
            .unwrap()
            .edge_pairs()
            .into_iter()
            .filter(|(from, to)| from == to)
            .count()
    };
    assert_eq!(loops(Loops::Ignore), 0);
    assert_eq!(loops(Loops::Once), 7);
    assert_eq!(loops(Loops::Twice), 3);
}

#[test]
fn fractional_entries_are_truncated() {
    let graph = adjacency(&matrix(2, &[0.0, 1.9, 0.4, 0.0]), AdjacencyMode::Directed).unwrap();
    assert_eq!(graph.edge_pairs(), vec![(0, 1)]);
}

#[test]
fn adjacency_rejects_bad_matrices() {
    let non_square = DMatrix::<f64>::zeros(2, 3);
    assert_eq!(
        adjacency(&non_square, AdjacencyMode::Directed).unwrap_err().code(),
        "non-square-matrix"
    );
    let negative = matrix(2, &[0.0, -1.0, 0.0, 0.0]);
    assert_eq!(
        adjacency(&negative, AdjacencyMode::Directed).unwrap_err().code(),
        "negative-multiplicity"
    );
    let nan = matrix(2, &[0.0, f64::NAN, 0.0, 0.0]);
    let err = adjacency(&nan, AdjacencyMode::Max).unwrap_err();
    assert!(matches!(err, TopoError::InvalidArgument(_)));
    assert_eq!(err.code(), "non-finite-entry");
}

#[test]
fn weighted_adjacency_stores_weights() {
    let m = matrix(2, &[0.5, 2.0, -1.5, 0.0]);
    let graph = weighted_adjacency(&m, AdjacencyMode::Directed, "weight", false).unwrap();
    assert_eq!(graph.edge_pairs(), vec![(0, 1), (1, 0)]);
    assert_eq!(graph.attributes().numeric("weight"), Some(&[2.0, -1.5][..]));

    let with_loops = weighted_adjacency(&m, AdjacencyMode::Directed, "weight", true).unwrap();
    assert_eq!(with_loops.edge_pairs(), vec![(0, 0), (0, 1), (1, 0)]);
    assert_eq!(
        with_loops.attributes().numeric("weight"),
        Some(&[0.5, 2.0, -1.5][..])
    );
}

#[test]
fn only_weighted_builds_carry_attributes() {
    assert!(create(&[0, 1, 1, 2], 3, false).unwrap().attributes().is_empty());
    let m = matrix(2, &[0.0, 1.0, 1.0, 0.0]);
    assert!(adjacency(&m, AdjacencyMode::Undirected).unwrap().attributes().is_empty());

    let weighted = weighted_adjacency(&m, AdjacencyMode::Undirected, "weight", false).unwrap();
    assert!(!weighted.attributes().is_empty());
    assert_eq!(weighted.attributes().names().collect::<Vec<_>>(), vec!["weight"]);

    let edgeless = weighted_adjacency(&matrix(1, &[0.0]), AdjacencyMode::Max, "w", false).unwrap();
    assert_eq!(edgeless.edge_count(), 0);
    assert!(!edgeless.attributes().is_empty());
}

#[test]
fn weighted_min_needs_both_cells() {
    let both = matrix(2, &[0.0, 2.0, 3.0, 0.0]);
    let graph = weighted_adjacency(&both, AdjacencyMode::Min, "w", false).unwrap();
    assert_eq!(graph.edge_pairs(), vec![(0, 1)]);
    assert_eq!(graph.attributes().numeric("w"), Some(&[2.0][..]));

    let one_sided = matrix(2, &[0.0, 2.0, 0.0, 0.0]);
    let graph = weighted_adjacency(&one_sided, AdjacencyMode::Min, "w", false).unwrap();
    assert_eq!(graph.edge_count(), 0);

    let plus = weighted_adjacency(&both, AdjacencyMode::Plus, "w", false).unwrap();
    assert_eq!(plus.attributes().numeric("w"), Some(&[5.0][..]));
}

#[test]
fn weighted_adjacency_validates_input() {
    let m = matrix(2, &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(
        weighted_adjacency(&m, AdjacencyMode::Max, "", false).unwrap_err().code(),
        "attribute-name"
    );
    let inf = matrix(2, &[0.0, f64::INFINITY, 1.0, 0.0]);
    assert_eq!(
        weighted_adjacency(&inf, AdjacencyMode::Max, "w", false).unwrap_err().code(),
        "non-finite-entry"
    );
}

proptest! {
    #[test]
    fn upper_triangle_matches_lower_of_transpose(
        n in 1usize..6,
        cells in proptest::collection::vec(0u8..3, 36),
    ) {
        let values: Vec<f64> = cells.iter().take(n * n).map(|&c| f64::from(c)).collect();
        let m = DMatrix::from_row_slice(n, n, &values);
        let upper = adjacency(&m, AdjacencyMode::Upper).unwrap();
        let lower = adjacency(&m.transpose(), AdjacencyMode::Lower).unwrap();
        prop_assert_eq!(upper.edge_count(), lower.edge_count());
        prop_assert_eq!(canonical_hash(&upper).unwrap(), canonical_hash(&lower).unwrap());
    }

    #[test]
    fn create_counts_pairs(
        n in 1usize..20,
        raw in proptest::collection::vec(any::<u16>(), 0..60),
    ) {
        let mut flat: Vec<usize> = raw.iter().map(|&x| usize::from(x) % n).collect();
        flat.truncate(flat.len() / 2 * 2);
        let graph = create(&flat, n, false).unwrap();
        prop_assert_eq!(graph.edge_count(), flat.len() / 2);
        for (from, to) in graph.edge_pairs() {
            prop_assert!(from < n && to < n);
        }
    }
}

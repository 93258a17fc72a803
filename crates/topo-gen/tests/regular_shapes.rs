use proptest::prelude::*;
use topo_core::errors::TopoError;
use topo_core::{Graph, NeighborMode, StarMode, TreeMode, VertexId};
use topo_gen::{full, full_citation, lattice, ring, star, tree};
use topo_graph::GraphImpl;

fn v(idx: usize) -> VertexId {
    VertexId::from_raw(idx as u64)
}

fn regular_degree(graph: &GraphImpl) -> Option<usize> {
    graph.degree_bounds().unwrap().regular_degree()
}

#[test]
fn star_modes_orient_spokes() {
    let out = star(5, StarMode::Out, 0).unwrap();
    assert!(out.is_directed());
    assert_eq!(out.edge_pairs(), vec![(0, 1), (0, 2), (0, 3), (0, 4)]);

    let inward = star(4, StarMode::In, 2).unwrap();
    assert_eq!(inward.edge_pairs(), vec![(0, 2), (1, 2), (3, 2)]);

    let mutual = star(5, StarMode::Mutual, 4).unwrap();
    assert_eq!(mutual.edge_count(), 8);
    assert_eq!(mutual.degree(v(4), NeighborMode::Out, true).unwrap(), 4);
    assert_eq!(mutual.degree(v(4), NeighborMode::In, true).unwrap(), 4);

    let undirected = star(6, StarMode::Undirected, 1).unwrap();
    assert!(!undirected.is_directed());
    assert_eq!(undirected.degree(v(1), NeighborMode::All, true).unwrap(), 5);
}

#[test]
fn star_center_must_exist() {
    let err = star(5, StarMode::Out, 5).unwrap_err();
    assert_eq!(err.code(), "star-center");
    assert!(star(0, StarMode::Undirected, 0).is_err());
    assert_eq!(star(1, StarMode::Out, 0).unwrap().edge_count(), 0);
}

#[test]
fn open_grid_joins_axis_neighbours_only() {
    let grid = lattice(&[3, 4], 1, false, false, false).unwrap();
    assert_eq!(grid.vertex_count(), 12);
    assert_eq!(grid.edge_count(), 17);
    assert!(grid.are_connected(v(0), v(1)).unwrap());
    assert!(grid.are_connected(v(0), v(4)).unwrap());
    assert!(!grid.are_connected(v(0), v(5)).unwrap());
    assert!(!grid.are_connected(v(3), v(4)).unwrap());
}

#[test]
fn torus_is_four_regular() {
    let torus = lattice(&[3, 4], 1, false, false, true).unwrap();
    assert_eq!(torus.edge_count(), 24);
    assert_eq!(regular_degree(&torus), Some(4));
    assert!(torus.are_connected(v(0), v(8)).unwrap());
    assert!(torus.are_connected(v(0), v(3)).unwrap());
}

#[test]
fn short_circular_axes_do_not_duplicate_pairs() {
    let k4 = lattice(&[4], 2, false, false, true).unwrap();
    assert_eq!(k4.edge_count(), 6);
    assert_eq!(regular_degree(&k4), Some(3));

    let k5 = lattice(&[5], 2, false, false, true).unwrap();
    assert_eq!(k5.edge_count(), 10);
    assert_eq!(regular_degree(&k5), Some(4));
}

#[test]
fn directed_lattice_points_forward() {
    let path = lattice(&[3], 1, true, false, false).unwrap();
    assert_eq!(path.edge_pairs(), vec![(0, 1), (1, 2)]);

    let mutual = lattice(&[3], 1, true, true, false).unwrap();
    assert_eq!(mutual.edge_pairs(), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);

    let ignored = lattice(&[3], 1, false, true, false).unwrap();
    assert_eq!(ignored.edge_count(), 2);
}

#[test]
fn lattice_rejects_degenerate_shapes() {
    assert_eq!(
        lattice(&[], 1, false, false, false).unwrap_err().code(),
        "lattice-dimensions"
    );
    assert_eq!(
        lattice(&[3, 0], 1, false, false, false).unwrap_err().code(),
        "lattice-dimension"
    );
    assert_eq!(lattice(&[3], 0, false, false, false).unwrap_err().code(), "lattice-radius");
    assert_eq!(
        lattice(&[usize::MAX, 2], 1, false, false, false).unwrap_err().code(),
        "size-overflow"
    );
}

#[test]
fn lattice_over_vertex_limit_fails_before_building() {
    let too_many = i32::MAX as usize + 1;
    let err = lattice(&[too_many], 1, false, false, false).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(_)));
    assert_eq!(err.code(), "vertex-limit");
    assert_eq!(err.info().context.get("generator"), Some(&"lattice".to_string()));

    let err = lattice(&[1 << 16, 1 << 16], 1, false, false, true).unwrap_err();
    assert_eq!(err.code(), "vertex-limit");
    let err = ring(too_many, true, true, true).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(_)));
}

#[test]
fn lattice_radius_is_clamped_to_the_axis() {
    let complete = lattice(&[4], usize::MAX, false, false, true).unwrap();
    assert_eq!(complete.edge_count(), 6);
    assert_eq!(regular_degree(&complete), Some(3));
    let open = lattice(&[3, 2], usize::MAX, true, true, false).unwrap();
    assert_eq!(open.edge_count(), 2 * (2 * 3 + 3));
}

#[test]
fn small_rings() {
    assert_eq!(ring(0, false, false, true).unwrap().vertex_count(), 0);
    assert_eq!(ring(1, false, false, true).unwrap().edge_count(), 0);
    assert_eq!(ring(2, false, false, true).unwrap().edge_pairs(), vec![(0, 1)]);
    assert_eq!(ring(2, true, false, true).unwrap().edge_pairs(), vec![(0, 1), (1, 0)]);
    assert_eq!(ring(2, true, true, true).unwrap().edge_count(), 2);
    assert_eq!(ring(5, false, false, false).unwrap().edge_count(), 4);
    assert_eq!(ring(4, true, true, true).unwrap().edge_count(), 8);
}

#[test]
fn tree_numbers_vertices_breadth_first() {
    let out = tree(7, 2, TreeMode::Out).unwrap();
    assert!(out.is_directed());
    assert_eq!(
        out.edge_pairs(),
        vec![(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]
    );
    let inward = tree(4, 3, TreeMode::In).unwrap();
    assert_eq!(inward.edge_pairs(), vec![(1, 0), (2, 0), (3, 0)]);
    assert!(!tree(10, 3, TreeMode::Undirected).unwrap().is_directed());
    assert_eq!(tree(0, 2, TreeMode::Out).unwrap().vertex_count(), 0);
    assert_eq!(tree(1, 2, TreeMode::Out).unwrap().edge_count(), 0);
    assert_eq!(tree(5, 0, TreeMode::Out).unwrap_err().code(), "tree-children");
}

#[test]
fn complete_graphs() {
    assert_eq!(full(4, true, false).unwrap().edge_count(), 12);
    assert_eq!(full(4, true, true).unwrap().edge_count(), 16);
    assert_eq!(full(0, false, false).unwrap().vertex_count(), 0);
    assert_eq!(full(1, false, true).unwrap().edge_pairs(), vec![(0, 0)]);
    assert_eq!(regular_degree(&full(6, false, false).unwrap()), Some(5));
}

#[test]
fn oversized_requests_fail_with_allocation() {
    let err = star(usize::MAX, StarMode::Mutual, 0).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(_)));

    let huge = (u32::MAX as usize).saturating_add(1);
    for (directed, loops) in [(true, true), (false, true), (true, false)] {
        let err = full(huge, directed, loops).unwrap_err();
        assert!(matches!(err, TopoError::Allocation(_)));
    }
    assert!(matches!(
        full_citation(huge, true).unwrap_err(),
        TopoError::Allocation(_)
    ));
    assert!(matches!(
        tree(usize::MAX, 2, TreeMode::Out).unwrap_err(),
        TopoError::Allocation(_)
    ));
}

#[test]
fn edge_budget_is_checked_below_the_vertex_limit() {
    let err = full(1 << 17, true, false).unwrap_err();
    assert_eq!(err.code(), "edge-limit");
    assert_eq!(err.info().context.get("generator"), Some(&"full".to_string()));
    assert_eq!(star(1 << 20, StarMode::Mutual, 0).unwrap().edge_count(), 2 * ((1 << 20) - 1));
}

#[test]
fn citation_graph_is_always_directed() {
    let cited = full_citation(4, true).unwrap();
    assert_eq!(
        cited.edge_pairs(),
        vec![(1, 0), (2, 0), (2, 1), (3, 0), (3, 1), (3, 2)]
    );
    let requested_undirected = full_citation(4, false).unwrap();
    assert!(requested_undirected.is_directed());
    assert_eq!(requested_undirected.edge_pairs(), cited.edge_pairs());
    assert_eq!(full_citation(0, true).unwrap().edge_count(), 0);
}

proptest! {
    #[test]
    fn circular_rings_are_cycles(n in 3usize..64) {
        let cycle = ring(n, false, false, true).unwrap();
        prop_assert_eq!(cycle.edge_count(), n);
        prop_assert_eq!(regular_degree(&cycle), Some(2));
        prop_assert!(cycle.are_connected(v(0), v(n - 1)).unwrap());
    }

    #[test]
    fn undirected_complete_graph_sizes(n in 0usize..40, loops in any::<bool>()) {
        let graph = full(n, false, loops).unwrap();
        let expected = n * n.saturating_sub(1) / 2 + if loops { n } else { 0 };
        prop_assert_eq!(graph.edge_count(), expected);
    }

    #[test]
    fn lattices_are_simple(
        dims in proptest::collection::vec(1usize..6, 1..4),
        nei in 1usize..4,
        directed in any::<bool>(),
        mutual in any::<bool>(),
        circular in any::<bool>(),
    ) {
        let mut graph = lattice(&dims, nei, directed, mutual, circular).unwrap();
        prop_assert_eq!(graph.vertex_count(), dims.iter().product::<usize>());
        prop_assert_eq!(graph.simplify(), 0);
    }

    #[test]
    fn open_lattice_edge_count(
        dims in proptest::collection::vec(1usize..6, 1..4),
        nei in 1usize..4,
    ) {
        let graph = lattice(&dims, nei, false, false, false).unwrap();
        let total: usize = dims.iter().product();
        let expected: usize = dims
            .iter()
            .map(|&extent| {
                let per_line: usize = (1..=nei.min(extent - 1)).map(|step| extent - step).sum();
                total / extent * per_line
            })
            .sum();
        prop_assert_eq!(graph.edge_count(), expected);
    }

    #[test]
    fn trees_have_n_minus_one_edges(n in 1usize..200, children in 1usize..6) {
        let graph = tree(n, children, TreeMode::Undirected).unwrap();
        prop_assert_eq!(graph.edge_count(), n - 1);
        for vertex in 1..n {
            prop_assert!(graph.degree(v(vertex), NeighborMode::All, true).unwrap() >= 1);
        }
    }
}

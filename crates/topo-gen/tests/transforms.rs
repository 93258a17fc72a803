use proptest::prelude::*;
use topo_core::{Graph, NeighborMode, StarMode, VertexId};
use topo_gen::{connect_neighborhood, create, linegraph, ring, star};

fn v(idx: usize) -> VertexId {
    VertexId::from_raw(idx as u64)
}

#[test]
fn line_graph_of_a_path_is_a_shorter_path() {
    let path = create(&[0, 1, 1, 2, 2, 3], 4, false).unwrap();
    let line = linegraph(&path).unwrap();
    assert!(!line.is_directed());
    assert_eq!(line.vertex_count(), 3);
    assert_eq!(line.edge_pairs(), vec![(1, 0), (2, 1)]);
}

#[test]
fn line_graph_of_a_star_is_complete() {
    let claw = star(4, StarMode::Undirected, 0).unwrap();
    let line = linegraph(&claw).unwrap();
    assert_eq!(line.vertex_count(), 3);
    assert_eq!(line.edge_count(), 3);
}

#[test]
fn parallel_edges_are_joined_once_per_shared_endpoint() {
    let doubled = create(&[0, 1, 0, 1], 2, false).unwrap();
    assert_eq!(linegraph(&doubled).unwrap().edge_pairs(), vec![(1, 0), (1, 0)]);
}

#[test]
fn loops_share_their_endpoint_once() {
    let looped = create(&[0, 0, 0, 1], 2, false).unwrap();
    assert_eq!(linegraph(&looped).unwrap().edge_pairs(), vec![(1, 0)]);
}

#[test]
fn directed_line_graph_follows_heads_to_tails() {
    let cycle = create(&[0, 1, 1, 2, 2, 0], 3, true).unwrap();
    let line = linegraph(&cycle).unwrap();
    assert!(line.is_directed());
    assert_eq!(line.edge_pairs(), vec![(2, 0), (0, 1), (1, 2)]);

    let fork = create(&[0, 1, 1, 2, 1, 3], 4, true).unwrap();
    assert_eq!(linegraph(&fork).unwrap().edge_pairs(), vec![(0, 1), (0, 2)]);
}

#[test]
fn second_neighbourhood_of_a_five_cycle_is_complete() {
    let mut graph = ring(5, false, false, true).unwrap();
    let added = connect_neighborhood(&mut graph, 2, NeighborMode::All).unwrap();
    assert_eq!(added, 5);
    assert_eq!(graph.edge_count(), 10);
    for from in 0..5 {
        for to in 0..5 {
            if from != to {
                assert!(graph.are_connected(v(from), v(to)).unwrap());
            }
        }
    }
    assert_eq!(graph.simplify(), 0);
}

#[test]
fn neighbourhood_order_bounds_the_reach() {
    let mut graph = ring(6, false, false, true).unwrap();
    assert_eq!(connect_neighborhood(&mut graph, 2, NeighborMode::Out).unwrap(), 6);
    assert!(!graph.are_connected(v(0), v(3)).unwrap());

    let mut graph = ring(6, false, false, true).unwrap();
    assert_eq!(connect_neighborhood(&mut graph, 3, NeighborMode::All).unwrap(), 9);
    assert_eq!(graph.edge_count(), 15);
}

#[test]
fn orders_below_two_change_nothing() {
    let mut graph = ring(6, false, false, true).unwrap();
    let before = graph.edge_pairs();
    assert_eq!(connect_neighborhood(&mut graph, 0, NeighborMode::All).unwrap(), 0);
    assert_eq!(connect_neighborhood(&mut graph, 1, NeighborMode::All).unwrap(), 0);
    assert_eq!(graph.edge_pairs(), before);
}

#[test]
fn directed_neighbourhoods_follow_the_mode() {
    let mut outward = ring(4, true, false, true).unwrap();
    assert_eq!(connect_neighborhood(&mut outward, 2, NeighborMode::Out).unwrap(), 4);
    assert_eq!(&outward.edge_pairs()[4..], &[(0, 2), (1, 3), (2, 0), (3, 1)]);

    let mut inward = ring(4, true, false, true).unwrap();
    assert_eq!(connect_neighborhood(&mut inward, 2, NeighborMode::In).unwrap(), 4);
    assert_eq!(&inward.edge_pairs()[4..], &[(2, 0), (3, 1), (0, 2), (1, 3)]);

    let mut path = create(&[0, 1, 1, 2], 3, true).unwrap();
    assert_eq!(connect_neighborhood(&mut path, 2, NeighborMode::All).unwrap(), 1);
    assert_eq!(path.edge_pairs()[2], (0, 2));
}

proptest! {
    #[test]
    fn two_step_closure_joins_every_pair_at_distance_two(
        n in 1usize..12,
        raw in proptest::collection::vec(any::<u16>(), 0..40),
    ) {
        let mut flat: Vec<usize> = raw.iter().map(|&x| usize::from(x) % n).collect();
        flat.truncate(flat.len() / 2 * 2);
        let mut graph = create(&flat, n, false).unwrap();
        graph.simplify();
        let original = graph.clone();

        let added = connect_neighborhood(&mut graph, 2, NeighborMode::All).unwrap();
        prop_assert_eq!(graph.edge_count(), original.edge_count() + added);
        prop_assert_eq!(graph.simplify(), 0);

        for source in 0..n {
            for middle in original.neighbors(v(source), NeighborMode::All).unwrap() {
                for target in original.neighbors(middle, NeighborMode::All).unwrap() {
                    if target.as_raw() as usize != source {
                        prop_assert!(graph.are_connected(v(source), target).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn line_graph_has_one_vertex_per_edge(
        n in 1usize..10,
        directed in any::<bool>(),
        raw in proptest::collection::vec(any::<u16>(), 0..30),
    ) {
        let mut flat: Vec<usize> = raw.iter().map(|&x| usize::from(x) % n).collect();
        flat.truncate(flat.len() / 2 * 2);
        let graph = create(&flat, n, directed).unwrap();
        let line = linegraph(&graph).unwrap();
        prop_assert_eq!(line.vertex_count(), graph.edge_count());
        prop_assert_eq!(line.is_directed(), directed);
    }
}

use std::collections::VecDeque;

use nalgebra::DMatrix;
use proptest::prelude::*;
use topo_core::errors::TopoError;
use topo_core::{Graph, NeighborMode, VertexId};
use topo_gen::{de_bruijn, extended_chordal_ring, kautz, lcf, lcf_vector, LcfSpec};
use topo_graph::GraphImpl;

fn v(idx: usize) -> VertexId {
    VertexId::from_raw(idx as u64)
}

fn regular_degree(graph: &GraphImpl) -> Option<usize> {
    graph.degree_bounds().unwrap().regular_degree()
}

fn is_connected(graph: &GraphImpl) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return true;
    }
    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([0usize]);
    seen[0] = true;
    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(v(current), NeighborMode::All).unwrap() {
            let next = next.as_raw() as usize;
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen.into_iter().all(|reached| reached)
}

#[test]
fn de_bruijn_binary_words_of_length_three() {
    let graph = de_bruijn(2, 3).unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 16);
    assert_eq!(regular_degree(&graph), Some(2));
}

#[test]
fn de_bruijn_shifts_in_a_letter() {
    let graph = de_bruijn(2, 1).unwrap();
    assert_eq!(graph.edge_pairs(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    let graph = de_bruijn(3, 2).unwrap();
    assert!(graph.are_connected(v(5), v(6)).unwrap());
    assert!(graph.are_connected(v(5), v(8)).unwrap());
    assert!(!graph.are_connected(v(5), v(0)).unwrap());
}

#[test]
fn de_bruijn_degenerate_inputs() {
    assert_eq!(de_bruijn(0, 3).unwrap().vertex_count(), 0);
    let single = de_bruijn(3, 0).unwrap();
    assert_eq!(single.vertex_count(), 1);
    assert_eq!(single.edge_count(), 0);
    let err = de_bruijn(usize::MAX, 2).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(_)));
}

#[test]
fn kautz_graph_dimensions() {
    let graph = kautz(2, 2).unwrap();
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), 12);
    assert_eq!(graph.edge_count(), 24);
    assert_eq!(regular_degree(&graph), Some(2));
    let mut simple = graph.clone();
    assert_eq!(simple.simplify(), 0);
}

#[test]
fn kautz_small_cases() {
    assert_eq!(kautz(1, 1).unwrap().edge_pairs(), vec![(0, 1), (1, 0)]);
    let complete = kautz(2, 0).unwrap();
    assert_eq!(complete.vertex_count(), 3);
    assert_eq!(complete.edge_count(), 6);
    assert_eq!(kautz(0, 2).unwrap().vertex_count(), 0);
}

#[test]
fn kautz_alphabet_overflow_is_an_allocation_error() {
    for n in [0, 1, 3] {
        let err = kautz(usize::MAX, n).unwrap_err();
        assert!(matches!(err, TopoError::Allocation(_)), "n = {n}");
    }
    assert!(matches!(kautz(1 << 16, 2).unwrap_err(), TopoError::Allocation(_)));
}

#[test]
fn lcf_prism_example() {
    let graph = lcf_vector(6, &[3], 6).unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(regular_degree(&graph), Some(3));
    assert!(is_connected(&graph));
}

#[test]
fn lcf_arguments_end_with_repeat_count() {
    let franklin = lcf(12, &[5, -5, 6]).unwrap();
    assert_eq!(franklin.edge_count(), 18);
    assert_eq!(regular_degree(&franklin), Some(3));

    assert_eq!(lcf(6, &[]).unwrap_err().code(), "lcf-arguments");
    assert_eq!(lcf(6, &[3, -1]).unwrap_err().code(), "lcf-repeats");
}

#[test]
fn lcf_shifts_must_cover_the_ring() {
    let err = lcf_vector(7, &[3], 6).unwrap_err();
    assert!(matches!(err, TopoError::InvalidArgument(_)));
    assert_eq!(err.code(), "lcf-coverage");

    let plain = lcf_vector(5, &[], 9).unwrap();
    assert_eq!(plain.edge_count(), 5);
    assert_eq!(regular_degree(&plain), Some(2));
    assert_eq!(lcf_vector(0, &[], 0).unwrap().vertex_count(), 0);
}

#[test]
fn lcf_notation_parses_and_builds() {
    let notation: LcfSpec = "[5,-5]^7".parse().unwrap();
    assert_eq!(notation, LcfSpec::new(vec![5, -5], 7));
    assert_eq!(notation.ring_size(), 14);
    assert_eq!(notation.to_string(), "[5,-5]^7");

    let heawood = notation.build(14).unwrap();
    assert_eq!(heawood.edge_count(), 21);
    assert_eq!(regular_degree(&heawood), Some(3));

    let once: LcfSpec = " [ 3, -3 ] ".parse().unwrap();
    assert_eq!(once.repeats, 1);
    let empty: LcfSpec = "[]^4".parse().unwrap();
    assert!(empty.shifts.is_empty());
}

#[test]
fn lcf_notation_rejects_garbage() {
    for text in ["5,-5^7", "[5,-5", "[5,x]^2", "[5]^-1", "[5]7"] {
        let err = text.parse::<LcfSpec>().unwrap_err();
        assert_eq!(err.code(), "lcf-notation", "input {text:?}");
        assert!(err.info().hint.is_some());
    }
}

#[test]
fn chordal_ring_keeps_every_chord() {
    let offsets = DMatrix::from_row_slice(1, 1, &[4i64]);
    let graph = extended_chordal_ring(8, &offsets).unwrap();
    assert!(!graph.is_directed());
    assert_eq!(graph.edge_count(), 16);
    assert_eq!(regular_degree(&graph), Some(4));
}

#[test]
fn chordal_ring_offsets_cycle_through_rows() {
    let offsets = DMatrix::from_row_slice(2, 1, &[2i64, -2]);
    let graph = extended_chordal_ring(6, &offsets).unwrap();
    assert_eq!(graph.edge_count(), 12);
    assert_eq!(
        &graph.edge_pairs()[6..],
        &[(0, 2), (1, 5), (2, 4), (3, 1), (4, 0), (5, 3)]
    );

    let ring_only = extended_chordal_ring(5, &DMatrix::<i64>::zeros(1, 0)).unwrap();
    assert_eq!(ring_only.edge_count(), 5);
}

#[test]
fn chordal_ring_validation() {
    let offsets = DMatrix::from_row_slice(1, 1, &[2i64]);
    assert_eq!(
        extended_chordal_ring(2, &offsets).unwrap_err().code(),
        "chordal-ring-size"
    );
    assert_eq!(
        extended_chordal_ring(6, &DMatrix::<i64>::zeros(0, 1)).unwrap_err().code(),
        "chordal-ring-offsets"
    );
    let two_rows = DMatrix::from_row_slice(2, 1, &[2i64, 3]);
    assert_eq!(
        extended_chordal_ring(7, &two_rows).unwrap_err().code(),
        "chordal-ring-period"
    );
}

#[test]
fn ring_families_refuse_oversized_rings() {
    let too_many = i32::MAX as usize + 1;
    let offsets = DMatrix::from_row_slice(1, 1, &[2i64]);
    let err = extended_chordal_ring(too_many, &offsets).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(_)));
    assert_eq!(err.code(), "vertex-limit");

    let err = lcf_vector(too_many, &[], 1).unwrap_err();
    assert!(matches!(err, TopoError::Allocation(_)));
}

proptest! {
    #[test]
    fn de_bruijn_is_regular(m in 1usize..5, n in 1usize..5) {
        let graph = de_bruijn(m, n).unwrap();
        prop_assert_eq!(graph.vertex_count(), m.pow(n as u32));
        prop_assert_eq!(regular_degree(&graph), Some(m));
    }

    #[test]
    fn kautz_is_regular_and_simple(m in 1usize..4, n in 1usize..4) {
        let mut graph = kautz(m, n).unwrap();
        prop_assert_eq!(graph.vertex_count(), (m + 1) * m.pow(n as u32));
        prop_assert_eq!(regular_degree(&graph), Some(m));
        prop_assert_eq!(graph.simplify(), 0);
    }

    #[test]
    fn lcf_graphs_are_simple(
        shifts in proptest::collection::vec(-20i64..20, 1..5),
        repeats in 1usize..5,
    ) {
        let n = shifts.len() * repeats;
        let mut graph = lcf_vector(n, &shifts, repeats).unwrap();
        prop_assert!(graph.edge_count() <= n + n);
        prop_assert_eq!(graph.simplify(), 0);
        prop_assert!(is_connected(&graph));
    }
}

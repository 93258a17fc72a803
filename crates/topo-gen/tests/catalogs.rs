use topo_core::errors::TopoError;
use topo_core::Graph;
use topo_gen::{atlas, atlas_len, famous, famous_names};
use topo_graph::GraphImpl;

fn regular_degree(graph: &GraphImpl) -> Option<usize> {
    graph.degree_bounds().unwrap().regular_degree()
}

#[test]
fn atlas_index_past_the_end_is_out_of_range() {
    assert_eq!(atlas_len(), 1253);
    let err = atlas(atlas_len()).unwrap_err();
    assert!(matches!(err, TopoError::OutOfRange(_)));
    assert_eq!(err.code(), "atlas-index");
}

#[test]
fn atlas_opens_with_the_smallest_graphs() {
    let empty = atlas(0).unwrap();
    assert_eq!((empty.vertex_count(), empty.edge_count()), (0, 0));
    let single = atlas(1).unwrap();
    assert_eq!((single.vertex_count(), single.edge_count()), (1, 0));
    assert_eq!(atlas(3).unwrap().edge_pairs(), vec![(0, 1)]);
    assert_eq!(atlas(6).unwrap().edge_pairs(), vec![(0, 1), (0, 2)]);
    let triangle = atlas(7).unwrap();
    assert_eq!(triangle.edge_count(), 3);
    assert_eq!(regular_degree(&triangle), Some(2));
}

#[test]
fn atlas_ends_with_the_complete_graph_on_seven_vertices() {
    let k7 = atlas(1252).unwrap();
    assert_eq!(k7.vertex_count(), 7);
    assert_eq!(k7.edge_count(), 21);
    assert_eq!(regular_degree(&k7), Some(6));
}

#[test]
fn atlas_is_ordered_by_vertices_then_edges() {
    let mut per_size = [0usize; 8];
    let mut previous = (0, 0);
    for number in 0..atlas_len() {
        let mut graph = atlas(number).unwrap();
        assert!(!graph.is_directed());
        let key = (graph.vertex_count(), graph.edge_count());
        assert!(key >= previous, "atlas entry {number} out of order");
        previous = key;
        per_size[key.0] += 1;
        assert_eq!(graph.simplify(), 0, "atlas entry {number} is not simple");
    }
    assert_eq!(per_size, [1, 1, 2, 4, 11, 34, 156, 1044]);
}

#[test]
fn petersen_graph() {
    let graph = famous("petersen").unwrap();
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 15);
    assert_eq!(regular_degree(&graph), Some(3));
    assert_eq!(
        famous("PETERSEN").unwrap().edge_pairs(),
        graph.edge_pairs()
    );
}

#[test]
fn aliases_resolve_to_the_same_graph() {
    for (name, alias) in [
        ("Dodecahedral", "dodecahedron"),
        ("Icosahedral", "Icosahedron"),
        ("Octahedral", "OCTAHEDRON"),
        ("Tetrahedral", "tetrahedron"),
    ] {
        assert_eq!(
            famous(name).unwrap().edge_pairs(),
            famous(alias).unwrap().edge_pairs()
        );
    }
}

#[test]
fn unknown_names_are_reported() {
    let err = famous("Petersens").unwrap_err();
    assert!(matches!(err, TopoError::UnknownName(_)));
    assert_eq!(err.code(), "famous-name");
    assert_eq!(err.info().context.get("name").map(String::as_str), Some("Petersens"));
}

#[test]
fn every_registered_graph_has_its_known_size() {
    let expected = [
        ("Bull", 5, 5),
        ("Chvatal", 12, 24),
        ("Coxeter", 28, 42),
        ("Cubical", 8, 12),
        ("Desargues", 20, 30),
        ("Diamond", 4, 5),
        ("Dodecahedral", 20, 30),
        ("Franklin", 12, 18),
        ("Frucht", 12, 18),
        ("Grotzsch", 11, 20),
        ("Heawood", 14, 21),
        ("House", 5, 6),
        ("HouseX", 5, 8),
        ("Icosahedral", 12, 30),
        ("Krackhardt_Kite", 10, 18),
        ("Levi", 30, 45),
        ("McGee", 24, 36),
        ("Moebius_Kantor", 16, 24),
        ("Nauru", 24, 36),
        ("Octahedral", 6, 12),
        ("Pappus", 18, 27),
        ("Petersen", 10, 15),
        ("Tetrahedral", 4, 6),
        ("Truncated_Tetrahedron", 12, 18),
        ("Tutte", 46, 69),
        ("Utility", 6, 9),
        ("Zachary", 34, 78),
    ];
    let names: Vec<&str> = famous_names().collect();
    assert_eq!(names, expected.iter().map(|(name, _, _)| *name).collect::<Vec<_>>());

    for (name, vertices, edges) in expected {
        let mut graph = famous(name).unwrap();
        assert!(!graph.is_directed(), "{name}");
        assert_eq!(graph.vertex_count(), vertices, "{name}");
        assert_eq!(graph.edge_count(), edges, "{name}");
        assert_eq!(graph.simplify(), 0, "{name}");
    }
}

#[test]
fn cubic_catalog_entries_are_three_regular() {
    for name in [
        "Coxeter",
        "Cubical",
        "Desargues",
        "Dodecahedral",
        "Franklin",
        "Frucht",
        "Heawood",
        "Levi",
        "McGee",
        "Moebius_Kantor",
        "Nauru",
        "Pappus",
        "Petersen",
        "Tetrahedral",
        "Truncated_Tetrahedron",
        "Tutte",
        "Utility",
    ] {
        assert_eq!(regular_degree(&famous(name).unwrap()), Some(3), "{name}");
    }
    assert_eq!(regular_degree(&famous("Chvatal").unwrap()), Some(4));
    assert_eq!(regular_degree(&famous("Icosahedral").unwrap()), Some(5));
}

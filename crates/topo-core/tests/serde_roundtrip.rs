use topo_core::{
    AdjacencyMode, DegreeBounds, EdgeId, Loops, SchemaVersion, TopoError, VertexId,
};

#[test]
fn error_round_trip_json() {
    let err = TopoError::invalid_argument("lattice-dimension", "zero extent")
        .with_context("axis", 1);
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"InvalidArgument\""));
    let decoded: TopoError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn identifiers_and_modes_round_trip() {
    let ids = (VertexId::from_raw(3), EdgeId::from_raw(9));
    let json = serde_json::to_string(&ids).expect("serialize");
    let decoded: (VertexId, EdgeId) = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, ids);

    let modes = (AdjacencyMode::Upper, Loops::Twice);
    let json = serde_json::to_string(&modes).expect("serialize");
    let decoded: (AdjacencyMode, Loops) = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, modes);
}

#[test]
fn schema_compatibility() {
    let reader = SchemaVersion::new(1, 2, 0);
    assert!(reader.accepts(&SchemaVersion::new(1, 0, 3)));
    assert!(!reader.accepts(&SchemaVersion::new(1, 3, 0)));
    assert!(!reader.accepts(&SchemaVersion::new(2, 0, 0)));
}

#[test]
fn regular_degree_requires_uniform_bounds() {
    let bounds = DegreeBounds {
        min_in_degree: Some(3),
        max_in_degree: Some(3),
        min_out_degree: Some(3),
        max_out_degree: Some(3),
    };
    assert_eq!(bounds.regular_degree(), Some(3));
    let skewed = DegreeBounds {
        max_in_degree: Some(4),
        ..bounds
    };
    assert_eq!(skewed.regular_degree(), None);
    assert_eq!(DegreeBounds::unknown().regular_degree(), None);
}

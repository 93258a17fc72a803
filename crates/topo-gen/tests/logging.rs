use topo_core::Graph;
use topo_gen::{atlas, famous, full_citation, lcf_vector};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[test]
fn constructors_run_under_a_subscriber() {
    init_logging();
    assert_eq!(atlas(7).unwrap().edge_count(), 3);
    assert_eq!(famous("zachary").unwrap().edge_count(), 78);
    assert!(full_citation(3, false).unwrap().is_directed());
    assert_eq!(lcf_vector(8, &[3, -3], 4).unwrap().edge_count(), 12);
}

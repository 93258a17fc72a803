use topo_core::errors::{ErrorInfo, TopoError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("index", "1")
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = TopoError::InvalidArgument(sample_info("odd-edge-list", "odd length"));
    assert_eq!(err.info().code, "odd-edge-list");
    assert!(err.info().context.contains_key("index"));
}

#[test]
fn out_of_range_surface() {
    let err =
        TopoError::out_of_range("atlas-index", "past the catalog").with_context("index", 1253);
    assert_eq!(err.code(), "atlas-index");
    assert_eq!(err.info().context.get("index"), Some(&"1253".to_string()));
    assert!(matches!(err, TopoError::OutOfRange(_)));
}

#[test]
fn unknown_name_surface() {
    let err =
        TopoError::unknown_name("famous-name", "no such graph").with_hint("see famous_names()");
    assert_eq!(err.info().hint.as_deref(), Some("see famous_names()"));
    assert!(matches!(err, TopoError::UnknownName(_)));
}

#[test]
fn allocation_surface() {
    let err = TopoError::allocation("vertex-overflow", "too many vertices");
    assert_eq!(err.code(), "vertex-overflow");
}

#[test]
fn display_includes_context_and_hint() {
    let err = TopoError::invalid_argument("star-center", "center out of range")
        .with_context("center", 7)
        .with_context("n", 5)
        .with_hint("use a center below n");
    let text = err.to_string();
    assert_eq!(
        text,
        "invalid argument: center out of range (code: star-center) | context: [center=7, n=5] | hint: use a center below n"
    );
}

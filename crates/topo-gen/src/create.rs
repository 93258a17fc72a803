use topo_core::errors::TopoError;
use topo_core::Graph;
use topo_graph::{GraphConfig, GraphImpl};
use tracing::debug;

/// Builds a graph on `n` vertices from a flat `(from, to, from, to, ...)` sequence.
///
/// Edge identifiers follow the input order. Fails with
/// [`TopoError::InvalidArgument`] when the sequence has odd length or names a
/// vertex outside `0..n`.
pub fn create(edges: &[usize], n: usize, directed: bool) -> Result<GraphImpl, TopoError> {
    materialize("create", n, directed, edges)
}

/// Builds a small graph from an explicit list of vertex pairs.
pub fn small(n: usize, directed: bool, pairs: &[(usize, usize)]) -> Result<GraphImpl, TopoError> {
    let flat: Vec<usize> = pairs.iter().flat_map(|&(from, to)| [from, to]).collect();
    materialize("small", n, directed, &flat)
}

/// Single sink every constructor funnels its edge sequence through.
pub(crate) fn materialize(
    generator: &'static str,
    n: usize,
    directed: bool,
    edges: &[usize],
) -> Result<GraphImpl, TopoError> {
    let mut graph = GraphImpl::with_vertices(n, directed)?;
    graph
        .add_edges(edges)
        .map_err(|err| err.with_context("generator", generator))?;
    debug!(
        generator,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed,
        "graph constructed"
    );
    Ok(graph)
}

/// Multiplies sizes, reporting overflow as an allocation failure.
pub(crate) fn checked_size(
    generator: &'static str,
    factors: &[usize],
) -> Result<usize, TopoError> {
    factors
        .iter()
        .try_fold(1usize, |acc, &factor| acc.checked_mul(factor))
        .ok_or_else(|| overflow(generator))
}

/// Adds sizes, reporting overflow as an allocation failure.
pub(crate) fn checked_sum(generator: &'static str, terms: &[usize]) -> Result<usize, TopoError> {
    terms
        .iter()
        .try_fold(0usize, |acc, &term| acc.checked_add(term))
        .ok_or_else(|| overflow(generator))
}

/// Rejects vertex counts above the default configuration before any edge work starts.
pub(crate) fn vertex_limit(generator: &'static str, n: usize) -> Result<(), TopoError> {
    let limit = GraphConfig::default().max_vertices;
    if n > limit {
        return Err(TopoError::allocation(
            "vertex-limit",
            "vertex count exceeds the configured maximum",
        )
        .with_context("generator", generator)
        .with_context("requested", n)
        .with_context("max_vertices", limit));
    }
    Ok(())
}

/// Allocates the flat buffer for `edge_count` edges, failing early on huge requests.
pub(crate) fn edge_buffer(
    generator: &'static str,
    edge_count: usize,
) -> Result<Vec<usize>, TopoError> {
    let limit = GraphConfig::default().max_edges;
    if edge_count > limit {
        return Err(TopoError::allocation(
            "edge-limit",
            "edge count exceeds the configured maximum",
        )
        .with_context("generator", generator)
        .with_context("requested", edge_count)
        .with_context("max_edges", limit));
    }
    let len = checked_size(generator, &[edge_count, 2])?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|err| {
        TopoError::allocation("edge-reserve", err.to_string()).with_context("generator", generator)
    })?;
    Ok(buffer)
}

/// Raises `base` to `exp`, reporting overflow as an allocation failure.
pub(crate) fn checked_power(
    generator: &'static str,
    base: usize,
    exp: usize,
) -> Result<usize, TopoError> {
    if base <= 1 || exp == 0 {
        return Ok(if exp == 0 { 1 } else { base });
    }
    let exp = u32::try_from(exp).map_err(|_| overflow(generator))?;
    base.checked_pow(exp).ok_or_else(|| overflow(generator))
}

fn overflow(generator: &'static str) -> TopoError {
    TopoError::allocation("size-overflow", "graph size overflows usize")
        .with_context("generator", generator)
}

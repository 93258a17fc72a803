use topo_core::SchemaVersion;

/// Configuration options that control the behaviour of [`GraphImpl`](crate::GraphImpl).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges are directed.
    pub directed: bool,
    /// Largest vertex count the graph will accept.
    pub max_vertices: usize,
    /// Largest edge count the graph will accept.
    pub max_edges: usize,
    /// Schema version stored alongside serialized payloads.
    pub schema_version: SchemaVersion,
}

impl GraphConfig {
    /// Returns the default configuration with the given directedness.
    pub fn directed(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            max_vertices: i32::MAX as usize,
            max_edges: u32::MAX as usize,
            schema_version: SchemaVersion::CURRENT,
        }
    }
}

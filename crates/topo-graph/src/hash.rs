use sha2::{Digest, Sha256};
use topo_core::errors::TopoError;
use topo_core::Graph;

use crate::config::GraphConfig;
use crate::graph::GraphImpl;
use crate::ids::normalize_pair;

/// Computes the canonical structural hash for the provided graph.
///
/// The hash covers directedness, the vertex count and the edge multiset.
/// Edge order does not matter, and undirected edges hash the same in either
/// orientation. Vertex labels do matter: isomorphic graphs with different
/// labelings hash differently.
pub fn canonical_hash(graph: &GraphImpl) -> Result<String, TopoError> {
    let mut hasher = Sha256::new();
    encode_config(graph.config(), &mut hasher);
    hasher.update((graph.vertex_count() as u64).to_le_bytes());

    let directed = graph.is_directed();
    let mut pairs: Vec<(usize, usize)> = graph
        .edge_pairs()
        .into_iter()
        .map(|(from, to)| normalize_pair(directed, from, to))
        .collect();
    pairs.sort_unstable();
    hasher.update((pairs.len() as u64).to_le_bytes());
    for (from, to) in pairs {
        hasher.update((from as u64).to_le_bytes());
        hasher.update((to as u64).to_le_bytes());
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn encode_config(config: &GraphConfig, hasher: &mut Sha256) {
    if config.directed {
        hasher.update(b"directed");
    } else {
        hasher.update(b"undirected");
    }
    hasher.update(config.schema_version.major.to_le_bytes());
}

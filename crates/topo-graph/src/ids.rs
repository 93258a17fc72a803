use topo_core::{EdgeId, VertexId};

/// Converts a [`VertexId`] into its underlying index within incidence arrays.
pub(crate) fn vertex_index(id: VertexId) -> usize {
    id.as_raw() as usize
}

/// Converts an [`EdgeId`] into its underlying index within the edge list.
pub(crate) fn edge_index(id: EdgeId) -> usize {
    id.as_raw() as usize
}

/// Creates a [`VertexId`] from an index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u64)
}

/// Creates an [`EdgeId`] from an index.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}

/// Orders the endpoints of an undirected pair.
pub(crate) fn normalize_pair(directed: bool, from: usize, to: usize) -> (usize, usize) {
    if directed || from <= to {
        (from, to)
    } else {
        (to, from)
    }
}

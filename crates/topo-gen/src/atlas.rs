use std::sync::OnceLock;

use topo_core::errors::TopoError;
use topo_graph::GraphImpl;
use tracing::trace;

use crate::atlas_data::{ATLAS_LEN, ATLAS_RECORDS};
use crate::create::materialize;

static OFFSETS: OnceLock<Vec<usize>> = OnceLock::new();

/// Number of graphs in the atlas.
pub fn atlas_len() -> usize {
    ATLAS_LEN
}

/// Returns graph `number` from "An Atlas of Graphs".
///
/// The atlas lists every undirected graph on at most seven vertices, ordered
/// by vertex count, then edge count, then degree sequence, then number of
/// automorphisms. Indices start at zero.
pub fn atlas(number: usize) -> Result<GraphImpl, TopoError> {
    if number >= ATLAS_LEN {
        return Err(TopoError::out_of_range("atlas-index", "atlas index past the catalog")
            .with_context("number", number)
            .with_context("len", ATLAS_LEN)
            .with_hint("atlas indices run from 0 to atlas_len() - 1"));
    }
    let start = offsets()[number];
    let vertices = usize::from(ATLAS_RECORDS[start]);
    let edge_count = usize::from(ATLAS_RECORDS[start + 1]);
    let body = &ATLAS_RECORDS[start + 2..start + 2 + 2 * edge_count];
    let edges: Vec<usize> = body.iter().copied().map(usize::from).collect();
    materialize("atlas", vertices, false, &edges)
}

fn offsets() -> &'static [usize] {
    OFFSETS.get_or_init(|| {
        let mut offsets = Vec::with_capacity(ATLAS_LEN);
        let mut cursor = 0;
        while cursor < ATLAS_RECORDS.len() {
            offsets.push(cursor);
            cursor += 2 + 2 * usize::from(ATLAS_RECORDS[cursor + 1]);
        }
        trace!(records = offsets.len(), "atlas table indexed");
        offsets
    })
}

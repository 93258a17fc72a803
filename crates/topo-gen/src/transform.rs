use std::collections::VecDeque;

use topo_core::errors::TopoError;
use topo_core::{Graph, NeighborMode, VertexId};
use topo_graph::GraphImpl;
use tracing::debug;

use crate::create::materialize;

/// Builds the line graph of `graph`: one vertex per edge of the input.
///
/// In the undirected case two edges are joined once for every endpoint they
/// share, so parallel edges end up joined twice. In the directed case edge
/// `a` points at edge `b` when `a` ends where `b` starts.
pub fn linegraph(graph: &GraphImpl) -> Result<GraphImpl, TopoError> {
    let pairs = graph.edge_pairs();
    let directed = graph.is_directed();
    let mut edges = Vec::new();
    for (current, &(from, to)) in pairs.iter().enumerate() {
        if directed {
            for previous in graph.incident(vertex(from), NeighborMode::In)? {
                edges.extend([index(previous.as_raw()), current]);
            }
            continue;
        }
        let shared: &[usize] = if from == to { &[from] } else { &[from, to] };
        for &endpoint in shared {
            let mut incident = graph.incident(vertex(endpoint), NeighborMode::All)?;
            // a loop is listed once per end
            incident.dedup();
            for other in incident.into_iter().map(|edge| index(edge.as_raw())) {
                if other >= current {
                    break;
                }
                edges.extend([current, other]);
            }
        }
    }
    materialize("linegraph", pairs.len(), directed, &edges)
}

/// Connects every vertex to all vertices within `order` steps of it.
///
/// Reachability follows `mode` in directed graphs; undirected graphs always
/// walk both ways and add each new pair once. Vertices already adjacent are
/// left alone. `order` values of 0 or 1 change nothing. All new edges are
/// appended in one batch, so a failure leaves the graph as it was. Returns
/// the number of edges added.
pub fn connect_neighborhood(
    graph: &mut GraphImpl,
    order: usize,
    mode: NeighborMode,
) -> Result<usize, TopoError> {
    if order <= 1 {
        debug!(order, "neighbourhood order below two; graph left unchanged");
        return Ok(0);
    }
    let n = graph.vertex_count();
    let mode = if graph.is_directed() {
        mode
    } else {
        NeighborMode::All
    };
    let adjacency = adjacency_lists(graph, mode);

    let mut edges = Vec::new();
    // marker holds `source + 1` once a vertex is reached from `source`
    let mut marker = vec![0usize; n];
    let mut queue = VecDeque::new();
    for source in 0..n {
        let stamp = source + 1;
        marker[source] = stamp;
        for &neighbour in &adjacency[source] {
            marker[neighbour] = stamp;
            queue.push_back((neighbour, 1));
        }
        while let Some((current, distance)) = queue.pop_front() {
            for &reached in &adjacency[current] {
                if marker[reached] == stamp {
                    continue;
                }
                marker[reached] = stamp;
                if distance + 1 < order {
                    queue.push_back((reached, distance + 1));
                }
                match mode {
                    NeighborMode::All if source < reached => edges.extend([source, reached]),
                    NeighborMode::All => {}
                    NeighborMode::Out => edges.extend([source, reached]),
                    NeighborMode::In => edges.extend([reached, source]),
                }
            }
        }
    }

    let added = graph
        .add_edges(&edges)
        .map_err(|err| err.with_context("generator", "connect_neighborhood"))?;
    debug!(order, added, edges = graph.edge_count(), "neighbourhood connected");
    Ok(added)
}

fn adjacency_lists(graph: &GraphImpl, mode: NeighborMode) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); graph.vertex_count()];
    for (from, to) in graph.edge_pairs() {
        match mode {
            NeighborMode::Out => adjacency[from].push(to),
            NeighborMode::In => adjacency[to].push(from),
            NeighborMode::All => {
                adjacency[from].push(to);
                adjacency[to].push(from);
            }
        }
    }
    adjacency
}

fn vertex(idx: usize) -> VertexId {
    VertexId::from_raw(idx as u64)
}

fn index(raw: u64) -> usize {
    raw as usize
}

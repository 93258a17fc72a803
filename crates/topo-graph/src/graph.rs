use std::collections::BTreeSet;

use topo_core::{
    errors::TopoError, DegreeBounds, EdgeId, Graph, NeighborMode, VertexId,
};

use crate::attributes::EdgeAttributes;
use crate::config::GraphConfig;
use crate::ids::{edge_index, make_edge, make_vertex, normalize_pair, vertex_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeRecord {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

/// Deterministic graph storage: a fixed vertex range and an ordered edge list.
///
/// Edge identifiers equal insertion positions, so a graph built from the same
/// edge sequence always assigns the same identifiers.
#[derive(Debug, Clone)]
pub struct GraphImpl {
    config: GraphConfig,
    vertex_count: usize,
    edges: Vec<EdgeRecord>,
    out_edges: Vec<Vec<EdgeId>>,
    in_edges: Vec<Vec<EdgeId>>,
    attributes: EdgeAttributes,
}

impl GraphImpl {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            vertex_count: 0,
            edges: Vec::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            attributes: EdgeAttributes::default(),
        }
    }

    /// Creates an edgeless graph on `n` vertices using the default limits.
    pub fn with_vertices(n: usize, directed: bool) -> Result<Self, TopoError> {
        Self::with_config(GraphConfig::directed(directed), n)
    }

    /// Creates an edgeless graph on `n` vertices with the provided configuration.
    pub fn with_config(config: GraphConfig, n: usize) -> Result<Self, TopoError> {
        let mut graph = Self::new(config);
        if n > 0 {
            graph.add_vertices(n)?;
        }
        Ok(graph)
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the stored edge attributes.
    pub fn attributes(&self) -> &EdgeAttributes {
        &self.attributes
    }

    /// Stores a numeric edge attribute holding one value per edge.
    pub fn set_edge_attribute(&mut self, name: &str, values: Vec<f64>) -> Result<(), TopoError> {
        self.attributes
            .set_numeric(name, values, self.edges.len())
    }

    /// Appends a flat `(from, to, from, to, ...)` sequence of edges.
    ///
    /// The whole sequence is validated before anything is stored, so a
    /// rejected call leaves the graph unchanged. Returns the number of edges
    /// added.
    pub fn add_edges(&mut self, edges: &[usize]) -> Result<usize, TopoError> {
        if edges.len() % 2 != 0 {
            return Err(TopoError::invalid_argument(
                "odd-edge-list",
                "edge sequence must contain an even number of vertex indices",
            )
            .with_context("length", edges.len()));
        }
        if let Some((position, vertex)) = edges
            .iter()
            .copied()
            .enumerate()
            .find(|(_, vertex)| *vertex >= self.vertex_count)
        {
            return Err(TopoError::invalid_argument(
                "vertex-out-of-range",
                "edge endpoint is not a vertex of the graph",
            )
            .with_context("position", position)
            .with_context("vertex", vertex)
            .with_context("vertices", self.vertex_count));
        }
        let added = edges.len() / 2;
        let total = self.edges.len().checked_add(added).ok_or_else(|| {
            TopoError::allocation("edge-overflow", "edge count overflows usize")
        })?;
        if total > self.config.max_edges {
            return Err(TopoError::allocation(
                "edge-limit",
                "edge count exceeds the configured maximum",
            )
            .with_context("requested", total)
            .with_context("max_edges", self.config.max_edges));
        }
        self.edges.try_reserve(added).map_err(|err| {
            TopoError::allocation("edge-reserve", err.to_string()).with_context("edges", total)
        })?;

        for pair in edges.chunks_exact(2) {
            let (from, to) = (pair[0], pair[1]);
            let id = make_edge(self.edges.len());
            self.edges.push(EdgeRecord { from, to });
            self.out_edges[from].push(id);
            self.in_edges[to].push(id);
        }
        self.attributes.pad_to(self.edges.len(), f64::NAN);
        Ok(added)
    }

    /// Returns the endpoints of every edge in identifier order.
    pub fn edge_pairs(&self) -> Vec<(usize, usize)> {
        self.edges.iter().map(|edge| (edge.from, edge.to)).collect()
    }

    /// Returns the number of edges incident on `vertex` under `mode`.
    ///
    /// Self loops count twice unless `loops` is `false`, in which case they are
    /// skipped entirely.
    pub fn degree(
        &self,
        vertex: VertexId,
        mode: NeighborMode,
        loops: bool,
    ) -> Result<usize, TopoError> {
        let incident = self.incident(vertex, mode)?;
        if loops {
            return Ok(incident.len());
        }
        let idx = vertex_index(vertex);
        Ok(incident
            .iter()
            .filter(|edge| {
                let record = self.edges[edge_index(**edge)];
                !(record.from == idx && record.to == idx)
            })
            .count())
    }

    /// Returns whether an edge joins `from` to `to` (in either direction when undirected).
    pub fn are_connected(&self, from: VertexId, to: VertexId) -> Result<bool, TopoError> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        let (source, target) = (vertex_index(from), vertex_index(to));
        let forward = self.out_edges[source]
            .iter()
            .any(|edge| self.edges[edge_index(*edge)].to == target);
        if forward || self.config.directed {
            return Ok(forward);
        }
        Ok(self.in_edges[source]
            .iter()
            .any(|edge| self.edges[edge_index(*edge)].from == target))
    }

    /// Removes self loops and repeated edges, keeping the first occurrence.
    ///
    /// Surviving edges keep their relative order and are renumbered densely.
    /// Returns the number of removed edges.
    pub fn simplify(&mut self) -> usize {
        let mut seen = BTreeSet::new();
        let mut kept = Vec::with_capacity(self.edges.len());
        for (idx, edge) in self.edges.iter().enumerate() {
            if edge.from == edge.to {
                continue;
            }
            if seen.insert(normalize_pair(self.config.directed, edge.from, edge.to)) {
                kept.push(idx);
            }
        }
        let removed = self.edges.len() - kept.len();
        if removed == 0 {
            return 0;
        }
        let records: Vec<EdgeRecord> = kept.iter().map(|&idx| self.edges[idx]).collect();
        self.attributes.retain_edges(&kept);
        self.rebuild_incidence(records);
        removed
    }

    fn rebuild_incidence(&mut self, records: Vec<EdgeRecord>) {
        for list in self.out_edges.iter_mut().chain(self.in_edges.iter_mut()) {
            list.clear();
        }
        for (idx, record) in records.iter().enumerate() {
            self.out_edges[record.from].push(make_edge(idx));
            self.in_edges[record.to].push(make_edge(idx));
        }
        self.edges = records;
    }

    pub(crate) fn edge_record(&self, id: EdgeId) -> Result<EdgeRecord, TopoError> {
        self.edges.get(edge_index(id)).copied().ok_or_else(|| {
            TopoError::invalid_argument("unknown-edge", "edge does not exist")
                .with_context("edge", id.as_raw())
        })
    }

    fn ensure_vertex(&self, id: VertexId) -> Result<usize, TopoError> {
        let idx = vertex_index(id);
        if idx < self.vertex_count {
            Ok(idx)
        } else {
            Err(
                TopoError::invalid_argument("unknown-vertex", "vertex does not exist")
                    .with_context("vertex", id.as_raw())
                    .with_context("vertices", self.vertex_count),
            )
        }
    }

    fn other_endpoint(&self, edge: EdgeId, vertex: usize, mode: NeighborMode) -> usize {
        let record = self.edges[edge_index(edge)];
        match (self.config.directed, mode) {
            (true, NeighborMode::Out) => record.to,
            (true, NeighborMode::In) => record.from,
            _ if record.from == vertex => record.to,
            _ => record.from,
        }
    }
}

impl Default for GraphImpl {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl Graph for GraphImpl {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.config.directed
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_count).map(make_vertex))
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_> {
        Box::new((0..self.edges.len()).map(make_edge))
    }

    fn endpoints(&self, edge: EdgeId) -> Result<(VertexId, VertexId), TopoError> {
        let record = self.edge_record(edge)?;
        Ok((make_vertex(record.from), make_vertex(record.to)))
    }

    fn incident(&self, vertex: VertexId, mode: NeighborMode) -> Result<Vec<EdgeId>, TopoError> {
        let idx = self.ensure_vertex(vertex)?;
        let mode = if self.config.directed {
            mode
        } else {
            NeighborMode::All
        };
        Ok(match mode {
            NeighborMode::Out => self.out_edges[idx].clone(),
            NeighborMode::In => self.in_edges[idx].clone(),
            NeighborMode::All => {
                let mut merged = self.out_edges[idx].clone();
                merged.extend(self.in_edges[idx].iter().copied());
                merged.sort_unstable();
                merged
            }
        })
    }

    fn neighbors(
        &self,
        vertex: VertexId,
        mode: NeighborMode,
    ) -> Result<Vec<VertexId>, TopoError> {
        let idx = vertex_index(vertex);
        let incident = self.incident(vertex, mode)?;
        Ok(incident
            .into_iter()
            .map(|edge| make_vertex(self.other_endpoint(edge, idx, mode)))
            .collect())
    }

    fn degree_bounds(&self) -> Result<DegreeBounds, TopoError> {
        let mut bounds = DegreeBounds::unknown();
        for idx in 0..self.vertex_count {
            let (in_deg, out_deg) = if self.config.directed {
                (self.in_edges[idx].len(), self.out_edges[idx].len())
            } else {
                let total = self.in_edges[idx].len() + self.out_edges[idx].len();
                (total, total)
            };
            bounds.min_in_degree = Some(bounds.min_in_degree.map_or(in_deg, |v| v.min(in_deg)));
            bounds.max_in_degree = Some(bounds.max_in_degree.map_or(in_deg, |v| v.max(in_deg)));
            bounds.min_out_degree =
                Some(bounds.min_out_degree.map_or(out_deg, |v| v.min(out_deg)));
            bounds.max_out_degree =
                Some(bounds.max_out_degree.map_or(out_deg, |v| v.max(out_deg)));
        }
        Ok(bounds)
    }

    fn add_vertices(&mut self, count: usize) -> Result<VertexId, TopoError> {
        let first = self.vertex_count;
        let total = first.checked_add(count).ok_or_else(|| {
            TopoError::allocation("vertex-overflow", "vertex count overflows usize")
        })?;
        if total > self.config.max_vertices {
            return Err(TopoError::allocation(
                "vertex-limit",
                "vertex count exceeds the configured maximum",
            )
            .with_context("requested", total)
            .with_context("max_vertices", self.config.max_vertices));
        }
        self.out_edges
            .try_reserve(count)
            .and_then(|()| self.in_edges.try_reserve(count))
            .map_err(|err| {
                TopoError::allocation("vertex-reserve", err.to_string())
                    .with_context("vertices", total)
            })?;
        self.out_edges.resize_with(total, Vec::new);
        self.in_edges.resize_with(total, Vec::new);
        self.vertex_count = total;
        Ok(make_vertex(first))
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId, TopoError> {
        let id = make_edge(self.edges.len());
        self.add_edges(&[vertex_index(from), vertex_index(to)])?;
        Ok(id)
    }
}

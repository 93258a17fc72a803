use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{Graph, SchemaVersion};

use crate::config::GraphConfig;
use crate::graph::GraphImpl;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &GraphImpl) -> Result<Vec<u8>, TopoError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| TopoError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<GraphImpl, TopoError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| TopoError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &GraphImpl) -> Result<String, TopoError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| TopoError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<GraphImpl, TopoError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| TopoError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    directed: bool,
    schema_version: SchemaVersion,
    vertices: u64,
    edges: Vec<(u64, u64)>,
    #[serde(default)]
    attributes: BTreeMap<String, Vec<f64>>,
}

impl SerializableGraph {
    fn from_graph(graph: &GraphImpl) -> Self {
        let edges = graph
            .edge_pairs()
            .into_iter()
            .map(|(from, to)| (from as u64, to as u64))
            .collect();
        let attributes = graph
            .attributes()
            .names()
            .filter_map(|name| {
                graph
                    .attributes()
                    .numeric(name)
                    .map(|values| (name.to_string(), values.to_vec()))
            })
            .collect();
        Self {
            directed: graph.is_directed(),
            schema_version: graph.config().schema_version,
            vertices: graph.vertex_count() as u64,
            edges,
            attributes,
        }
    }

    fn into_graph(self) -> Result<GraphImpl, TopoError> {
        let config = GraphConfig::directed(self.directed);
        if !config.schema_version.accepts(&self.schema_version) {
            return Err(TopoError::Serde(
                ErrorInfo::new("schema-version", "payload schema is not supported")
                    .with_context("payload", format_version(self.schema_version))
                    .with_context("supported", format_version(config.schema_version)),
            ));
        }
        let vertices = to_index(self.vertices)?;
        let mut graph = GraphImpl::with_config(config, vertices)?;
        let mut flat = Vec::with_capacity(self.edges.len() * 2);
        for (from, to) in self.edges {
            flat.push(to_index(from)?);
            flat.push(to_index(to)?);
        }
        graph.add_edges(&flat)?;
        for (name, values) in self.attributes {
            graph.set_edge_attribute(&name, values)?;
        }
        Ok(graph)
    }
}

fn to_index(raw: u64) -> Result<usize, TopoError> {
    usize::try_from(raw).map_err(|_| {
        TopoError::Serde(
            ErrorInfo::new("index-width", "index does not fit the platform word size")
                .with_context("index", raw.to_string()),
        )
    })
}

fn format_version(version: SchemaVersion) -> String {
    format!("{}.{}.{}", version.major, version.minor, version.patch)
}

#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the topo graph constructors."]

use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod modes;
pub mod schema;

pub use errors::{ErrorInfo, TopoError};
pub use modes::{AdjacencyMode, Loops, NeighborMode, StarMode, TreeMode};
pub use schema::SchemaVersion;

/// Identifier for a vertex within a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for an edge within a [`Graph`]; equal to its insertion position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Bounds on inbound and outbound degrees for a collection of vertices.
///
/// For undirected graphs both pairs hold the total degree, with self loops
/// counted twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeBounds {
    /// Minimum inbound degree observed across all vertices.
    pub min_in_degree: Option<usize>,
    /// Maximum inbound degree observed across all vertices.
    pub max_in_degree: Option<usize>,
    /// Minimum outbound degree observed across all vertices.
    pub min_out_degree: Option<usize>,
    /// Maximum outbound degree observed across all vertices.
    pub max_out_degree: Option<usize>,
}

impl DegreeBounds {
    /// Creates an empty descriptor where no degree information is known yet.
    pub fn unknown() -> Self {
        Self {
            min_in_degree: None,
            max_in_degree: None,
            min_out_degree: None,
            max_out_degree: None,
        }
    }

    /// Returns the common degree when every vertex has the same in and out degree.
    pub fn regular_degree(&self) -> Option<usize> {
        let degree = self.min_out_degree?;
        let uniform = self.max_out_degree == Some(degree)
            && self.min_in_degree == Some(degree)
            && self.max_in_degree == Some(degree);
        uniform.then_some(degree)
    }
}

/// Describes the structural contract for constructed graphs.
pub trait Graph: Send + Sync {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns whether edges are directed.
    fn is_directed(&self) -> bool;

    /// Returns an iterator over all vertex identifiers.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_>;

    /// Returns an iterator over all edge identifiers in insertion order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = EdgeId> + '_>;

    /// Returns the `(source, target)` endpoints of the specified edge.
    fn endpoints(&self, edge: EdgeId) -> Result<(VertexId, VertexId), TopoError>;

    /// Returns the edges incident on a vertex, sorted by identifier.
    fn incident(&self, vertex: VertexId, mode: NeighborMode) -> Result<Vec<EdgeId>, TopoError>;

    /// Returns the neighbours of a vertex, one entry per incident edge.
    fn neighbors(&self, vertex: VertexId, mode: NeighborMode)
        -> Result<Vec<VertexId>, TopoError>;

    /// Returns degree bounds over all vertices.
    fn degree_bounds(&self) -> Result<DegreeBounds, TopoError>;

    /// Appends `count` isolated vertices and returns the first new identifier.
    fn add_vertices(&mut self, count: usize) -> Result<VertexId, TopoError>;

    /// Appends one edge between existing vertices.
    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId, TopoError>;
}

//! Mode selectors shared by constructors and traversal helpers.

use serde::{Deserialize, Serialize};

/// Direction in which neighbours are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborMode {
    /// Follow edges from source to target.
    Out,
    /// Follow edges from target to source.
    In,
    /// Ignore edge direction.
    All,
}

/// Orientation of the spokes of a star graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarMode {
    /// Directed edges point away from the center.
    Out,
    /// Directed edges point at the center.
    In,
    /// Undirected spokes.
    Undirected,
    /// Two directed edges per spoke, one in each direction.
    Mutual,
}

/// Orientation of the edges of a regular tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeMode {
    /// Edges point from parents to children.
    Out,
    /// Edges point from children to parents.
    In,
    /// Undirected tree.
    Undirected,
}

/// Interpretation of an adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjacencyMode {
    /// Cell `(i, j)` describes edges from `i` to `j`.
    Directed,
    /// Undirected graph using the larger of `(i, j)` and `(j, i)`.
    Undirected,
    /// Same as [`AdjacencyMode::Undirected`].
    Max,
    /// Undirected graph using the smaller of `(i, j)` and `(j, i)`.
    Min,
    /// Undirected graph using the sum of `(i, j)` and `(j, i)`.
    Plus,
    /// Undirected graph read from the upper triangle only.
    Upper,
    /// Undirected graph read from the lower triangle only.
    Lower,
}

impl AdjacencyMode {
    /// Returns whether the mode produces a directed graph.
    pub fn is_directed(self) -> bool {
        matches!(self, AdjacencyMode::Directed)
    }
}

/// Treatment of diagonal entries when converting adjacency matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Loops {
    /// Diagonal entries are ignored.
    Ignore,
    /// A diagonal value `k` yields `k` self loops.
    #[default]
    Once,
    /// A diagonal value `k` yields `k / 2` self loops.
    Twice,
}

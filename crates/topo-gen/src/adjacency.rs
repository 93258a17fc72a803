use nalgebra::DMatrix;
use topo_core::errors::TopoError;
use topo_core::{AdjacencyMode, Loops};
use topo_graph::GraphImpl;

use crate::create::{edge_buffer, materialize};

/// Builds a graph from an adjacency matrix of edge multiplicities.
///
/// Diagonal entries become self loops, one per unit. See
/// [`adjacency_with_loops`] for the other diagonal conventions.
pub fn adjacency(matrix: &DMatrix<f64>, mode: AdjacencyMode) -> Result<GraphImpl, TopoError> {
    adjacency_with_loops(matrix, mode, Loops::Once)
}

/// Builds a graph from an adjacency matrix of edge multiplicities.
///
/// Non-integral entries are truncated. `Directed` reads every cell, `Upper`
/// and `Lower` read one triangle, and `Max`, `Min` and `Plus` combine the
/// cells `(i, j)` and `(j, i)` into a single undirected multiplicity.
pub fn adjacency_with_loops(
    matrix: &DMatrix<f64>,
    mode: AdjacencyMode,
    loops: Loops,
) -> Result<GraphImpl, TopoError> {
    let n = ensure_square(matrix)?;
    let counts = Multiplicities::read(matrix)?;
    let mut edges = edge_buffer("adjacency", counts.total)?;
    let diagonal = |k: usize| match loops {
        Loops::Ignore => 0,
        Loops::Once => k,
        Loops::Twice => k / 2,
    };

    for i in 0..n {
        let columns = match mode {
            AdjacencyMode::Directed => 0..n,
            AdjacencyMode::Lower => 0..i + 1,
            _ => i..n,
        };
        for j in columns {
            let k = if i == j {
                diagonal(counts.get(i, i))
            } else {
                match mode {
                    AdjacencyMode::Directed | AdjacencyMode::Upper | AdjacencyMode::Lower => {
                        counts.get(i, j)
                    }
                    AdjacencyMode::Undirected | AdjacencyMode::Max => {
                        counts.get(i, j).max(counts.get(j, i))
                    }
                    AdjacencyMode::Min => counts.get(i, j).min(counts.get(j, i)),
                    AdjacencyMode::Plus => counts.get(i, j) + counts.get(j, i),
                }
            };
            for _ in 0..k {
                edges.extend([i, j]);
            }
        }
    }
    materialize("adjacency", n, mode.is_directed(), &edges)
}

/// Builds a weighted graph from an adjacency matrix.
///
/// Each nonzero (combined) cell yields exactly one edge and its value is
/// stored under the numeric edge attribute `attr`. Diagonal cells are only
/// read when `loops` is set.
pub fn weighted_adjacency(
    matrix: &DMatrix<f64>,
    mode: AdjacencyMode,
    attr: &str,
    loops: bool,
) -> Result<GraphImpl, TopoError> {
    let n = ensure_square(matrix)?;
    if attr.is_empty() {
        return Err(TopoError::invalid_argument(
            "attribute-name",
            "weight attribute name must be non-empty",
        ));
    }
    ensure_finite(matrix)?;

    let mut edges = Vec::new();
    let mut weights = Vec::new();
    for i in 0..n {
        let columns = match mode {
            AdjacencyMode::Directed => 0..n,
            AdjacencyMode::Lower => 0..i + 1,
            _ => i..n,
        };
        for j in columns {
            if i == j && !loops {
                continue;
            }
            let (forward, backward) = (matrix[(i, j)], matrix[(j, i)]);
            let weight = if i == j {
                forward
            } else {
                match mode {
                    AdjacencyMode::Directed | AdjacencyMode::Upper | AdjacencyMode::Lower => {
                        forward
                    }
                    AdjacencyMode::Undirected | AdjacencyMode::Max => forward.max(backward),
                    AdjacencyMode::Min if forward != 0.0 && backward != 0.0 => {
                        forward.min(backward)
                    }
                    AdjacencyMode::Min => 0.0,
                    AdjacencyMode::Plus => forward + backward,
                }
            };
            if weight != 0.0 {
                edges.extend([i, j]);
                weights.push(weight);
            }
        }
    }

    let mut graph = materialize("weighted_adjacency", n, mode.is_directed(), &edges)?;
    graph.set_edge_attribute(attr, weights)?;
    Ok(graph)
}

fn ensure_square(matrix: &DMatrix<f64>) -> Result<usize, TopoError> {
    if matrix.nrows() != matrix.ncols() {
        return Err(TopoError::invalid_argument(
            "non-square-matrix",
            "adjacency matrix must be square",
        )
        .with_context("rows", matrix.nrows())
        .with_context("cols", matrix.ncols()));
    }
    Ok(matrix.nrows())
}

fn ensure_finite(matrix: &DMatrix<f64>) -> Result<(), TopoError> {
    for i in 0..matrix.nrows() {
        for j in 0..matrix.ncols() {
            if !matrix[(i, j)].is_finite() {
                return Err(non_finite(i, j));
            }
        }
    }
    Ok(())
}

fn non_finite(row: usize, col: usize) -> TopoError {
    TopoError::invalid_argument("non-finite-entry", "matrix entries must be finite")
        .with_context("row", row)
        .with_context("col", col)
}

/// Truncated, validated multiplicities read from a square matrix.
struct Multiplicities {
    n: usize,
    cells: Vec<usize>,
    total: usize,
}

impl Multiplicities {
    fn read(matrix: &DMatrix<f64>) -> Result<Self, TopoError> {
        let n = matrix.nrows();
        let mut cells = Vec::with_capacity(n * n);
        let mut total = 0usize;
        for i in 0..n {
            for j in 0..n {
                let value = matrix[(i, j)];
                if !value.is_finite() {
                    return Err(non_finite(i, j));
                }
                if value < 0.0 {
                    return Err(TopoError::invalid_argument(
                        "negative-multiplicity",
                        "edge multiplicities must be non-negative",
                    )
                    .with_context("row", i)
                    .with_context("col", j)
                    .with_context("value", value));
                }
                let count = value.trunc() as usize;
                total = total.checked_add(count).ok_or_else(|| {
                    TopoError::allocation("size-overflow", "total multiplicity overflows usize")
                })?;
                cells.push(count);
            }
        }
        Ok(Self { n, cells, total })
    }

    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.n + col]
    }
}

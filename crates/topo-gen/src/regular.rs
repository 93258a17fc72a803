use std::cmp::Ordering;

use itertools::iproduct;
use topo_core::errors::TopoError;
use topo_core::{StarMode, TreeMode};
use topo_graph::GraphImpl;
use tracing::warn;

use crate::create::{checked_size, checked_sum, edge_buffer, materialize, vertex_limit};

/// Builds a star: `center` joined to every other vertex.
pub fn star(n: usize, mode: StarMode, center: usize) -> Result<GraphImpl, TopoError> {
    if center >= n {
        return Err(TopoError::invalid_argument(
            "star-center",
            "star center must be a vertex of the graph",
        )
        .with_context("center", center)
        .with_context("n", n));
    }
    vertex_limit("star", n)?;
    let per_spoke = if mode == StarMode::Mutual { 2 } else { 1 };
    let mut edges = edge_buffer("star", checked_size("star", &[n - 1, per_spoke])?)?;
    for leaf in (0..n).filter(|&leaf| leaf != center) {
        match mode {
            StarMode::Out | StarMode::Undirected => edges.extend([center, leaf]),
            StarMode::In => edges.extend([leaf, center]),
            StarMode::Mutual => edges.extend([center, leaf, leaf, center]),
        }
    }
    materialize("star", n, mode != StarMode::Undirected, &edges)
}

/// Builds a square lattice over the Cartesian product of `dims`.
///
/// Vertices are numbered in row-major order (the last axis varies fastest).
/// Every vertex is joined to the vertices `1..=nei` steps further along each
/// axis; diagonal neighbours are never joined. With `circular` each axis
/// wraps around, and pairs reachable both ways round a short axis are only
/// joined once. `mutual` adds the reverse of every edge in directed lattices.
pub fn lattice(
    dims: &[usize],
    nei: usize,
    directed: bool,
    mutual: bool,
    circular: bool,
) -> Result<GraphImpl, TopoError> {
    if dims.is_empty() {
        return Err(TopoError::invalid_argument(
            "lattice-dimensions",
            "lattice needs at least one dimension",
        ));
    }
    if let Some(axis) = dims.iter().position(|&extent| extent == 0) {
        return Err(TopoError::invalid_argument(
            "lattice-dimension",
            "lattice extents must be positive",
        )
        .with_context("axis", axis));
    }
    if nei == 0 {
        return Err(TopoError::invalid_argument(
            "lattice-radius",
            "neighbourhood radius must be at least one",
        ));
    }
    let n = checked_size("lattice", dims)?;
    vertex_limit("lattice", n)?;
    let mutual = mutual && directed;
    let symmetric = !directed || mutual;
    let per_edge = if mutual { 2 } else { 1 };
    let reach: Vec<usize> = dims.iter().map(|&extent| nei.min(extent - 1)).collect();
    let bound = checked_size("lattice", &[n, checked_sum("lattice", &reach)?, per_edge])?;

    let mut strides = vec![1usize; dims.len()];
    for axis in (0..dims.len() - 1).rev() {
        strides[axis] = strides[axis + 1] * dims[axis + 1];
    }

    let mut edges = edge_buffer("lattice", bound)?;
    let mut coords = vec![0usize; dims.len()];
    for vertex in 0..n {
        for (axis, (&extent, &stride)) in dims.iter().zip(&strides).enumerate() {
            let coord = coords[axis];
            let base = vertex - coord * stride;
            for step in 1..=nei.min(extent - 1) {
                let target = coord + step;
                let target = if target < extent {
                    if circular && symmetric && !wrapped_step_is_new(coord, step, extent, nei) {
                        continue;
                    }
                    target
                } else if circular {
                    if symmetric && !wrapped_step_is_new(coord, step, extent, nei) {
                        continue;
                    }
                    target - extent
                } else {
                    break;
                };
                let neighbour = base + target * stride;
                edges.extend([vertex, neighbour]);
                if mutual {
                    edges.extend([neighbour, vertex]);
                }
            }
        }
        advance(&mut coords, dims);
    }
    materialize("lattice", n, directed, &edges)
}

/// Builds a ring (a one dimensional lattice with radius one).
pub fn ring(
    n: usize,
    directed: bool,
    mutual: bool,
    circular: bool,
) -> Result<GraphImpl, TopoError> {
    if n == 0 {
        return materialize("ring", 0, directed, &[]);
    }
    lattice(&[n], 1, directed, mutual, circular)
}

/// Builds a complete `children`-ary tree of `n` vertices in breadth-first order.
pub fn tree(n: usize, children: usize, mode: TreeMode) -> Result<GraphImpl, TopoError> {
    if children == 0 {
        return Err(TopoError::invalid_argument(
            "tree-children",
            "every inner tree vertex needs at least one child",
        ));
    }
    vertex_limit("tree", n)?;
    let mut edges = edge_buffer("tree", n.saturating_sub(1))?;
    for child in 1..n {
        let parent = (child - 1) / children;
        match mode {
            TreeMode::Out | TreeMode::Undirected => edges.extend([parent, child]),
            TreeMode::In => edges.extend([child, parent]),
        }
    }
    materialize("tree", n, mode != TreeMode::Undirected, &edges)
}

/// Builds the complete graph, optionally with one self loop per vertex.
pub fn full(n: usize, directed: bool, loops: bool) -> Result<GraphImpl, TopoError> {
    vertex_limit("full", n)?;
    let pairs = if directed {
        checked_size("full", &[n, n.saturating_sub(1)])?
    } else {
        checked_size("full", &[n, n.saturating_sub(1)])? / 2
    };
    let loop_count = if loops { n } else { 0 };
    let mut edges = edge_buffer("full", checked_sum("full", &[pairs, loop_count])?)?;
    if directed {
        for (from, to) in iproduct!(0..n, 0..n).filter(|(from, to)| loops || from != to) {
            edges.extend([from, to]);
        }
    } else {
        for from in 0..n {
            let first = if loops { from } else { from + 1 };
            for to in first..n {
                edges.extend([from, to]);
            }
        }
    }
    materialize("full", n, directed, &edges)
}

/// Builds the full citation graph: every vertex cites every earlier vertex.
///
/// The edge set only makes sense with a direction, so the result is always
/// stored as a directed graph. An undirected request is logged and ignored.
pub fn full_citation(n: usize, directed: bool) -> Result<GraphImpl, TopoError> {
    if !directed {
        warn!(n, "full citation graphs are always directed; ignoring undirected request");
    }
    vertex_limit("full_citation", n)?;
    let pairs = checked_size("full_citation", &[n, n.saturating_sub(1)])? / 2;
    let mut edges = edge_buffer("full_citation", pairs)?;
    for from in 1..n {
        for to in 0..from {
            edges.extend([from, to]);
        }
    }
    materialize("full_citation", n, true, &edges)
}

/// Decides whether the pair `(coord, coord + step)` on a circular axis is
/// emitted from `coord`, given that the partner may reach it going the other way.
fn wrapped_step_is_new(coord: usize, step: usize, extent: usize, nei: usize) -> bool {
    let back = extent - step;
    if back > nei {
        return true;
    }
    match step.cmp(&back) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => coord < back,
    }
}

fn advance(coords: &mut [usize], dims: &[usize]) {
    for axis in (0..dims.len()).rev() {
        coords[axis] += 1;
        if coords[axis] < dims[axis] {
            return;
        }
        coords[axis] = 0;
    }
}

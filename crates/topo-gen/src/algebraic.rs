use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;
use topo_core::errors::TopoError;
use topo_core::Graph;
use topo_graph::GraphImpl;
use tracing::debug;

use crate::create::{
    checked_power, checked_size, checked_sum, edge_buffer, materialize, vertex_limit,
};
use crate::regular::full;

/// Builds the de Bruijn graph of strings of length `n` over `m` letters.
///
/// Vertex `i` encodes a string in base `m`; it points at the `m` strings
/// obtained by shifting one letter out and appending another.
pub fn de_bruijn(m: usize, n: usize) -> Result<GraphImpl, TopoError> {
    if m == 0 {
        return materialize("de_bruijn", 0, true, &[]);
    }
    if n == 0 {
        return materialize("de_bruijn", 1, true, &[]);
    }
    let vertices = checked_power("de_bruijn", m, n)?;
    vertex_limit("de_bruijn", vertices)?;
    let mut edges = edge_buffer("de_bruijn", checked_size("de_bruijn", &[vertices, m])?)?;
    for vertex in 0..vertices {
        let basis = (vertex * m) % vertices;
        for letter in 0..m {
            edges.extend([vertex, basis + letter]);
        }
    }
    materialize("de_bruijn", vertices, true, &edges)
}

/// Builds the Kautz graph of strings of length `n + 1` over `m + 1` letters
/// in which no letter repeats twice in a row.
///
/// Vertices are the valid strings in lexicographic order. Each string points
/// at the strings obtained by dropping its first letter and appending any
/// letter other than its last one.
pub fn kautz(m: usize, n: usize) -> Result<GraphImpl, TopoError> {
    let alphabet = checked_sum("kautz", &[m, 1])?;
    if n == 0 {
        return full(alphabet, true, false);
    }
    if m == 0 {
        return materialize("kautz", 0, true, &[]);
    }
    let tail = checked_power("kautz", m, n)?;
    let vertices = checked_size("kautz", &[alphabet, tail])?;
    vertex_limit("kautz", vertices)?;
    let mut edges = edge_buffer("kautz", checked_size("kautz", &[vertices, m])?)?;

    let words = KautzWords { m, n, tail };
    let mut word = vec![0usize; n + 1];
    let mut next = vec![0usize; n + 1];
    for vertex in 0..vertices {
        words.decode(vertex, &mut word);
        next[..n].copy_from_slice(&word[1..]);
        let last = word[n];
        for letter in (0..=m).filter(|&letter| letter != last) {
            next[n] = letter;
            edges.extend([vertex, words.encode(&next)]);
        }
    }
    materialize("kautz", vertices, true, &edges)
}

/// Lexicographic ranking of Kautz strings.
///
/// The first letter is a digit in base `m + 1`; every later letter is ranked
/// among the `m` letters that differ from its predecessor.
struct KautzWords {
    m: usize,
    n: usize,
    tail: usize,
}

impl KautzWords {
    fn decode(&self, index: usize, word: &mut [usize]) {
        word[0] = index / self.tail;
        let mut rest = index % self.tail;
        let mut place = self.tail;
        for k in 1..=self.n {
            place /= self.m;
            let rank = rest / place;
            rest %= place;
            word[k] = if rank < word[k - 1] { rank } else { rank + 1 };
        }
    }

    fn encode(&self, word: &[usize]) -> usize {
        let mut index = word[0];
        for k in 1..=self.n {
            let rank = if word[k] < word[k - 1] {
                word[k]
            } else {
                word[k] - 1
            };
            index = index * self.m + rank;
        }
        index
    }
}

/// Builds a graph from LCF notation: a ring on `n` vertices plus chords.
///
/// Chord `k` joins vertex `k mod n` to the vertex `shifts[k mod len]` steps
/// further round the ring, for `k` in `0..len * repeats`. Loops and repeated
/// edges are removed afterwards, so a well-formed notation yields a simple
/// cubic graph. The shifts must cover the ring exactly once
/// (`shifts.len() * repeats == n`); an empty shift list yields the plain ring.
pub fn lcf_vector(n: usize, shifts: &[i64], repeats: usize) -> Result<GraphImpl, TopoError> {
    if n == 0 {
        return materialize("lcf", 0, false, &[]);
    }
    vertex_limit("lcf", n)?;
    let chords = if shifts.is_empty() {
        0
    } else {
        let chords = checked_size("lcf", &[shifts.len(), repeats])?;
        if chords != n {
            return Err(TopoError::invalid_argument(
                "lcf-coverage",
                "LCF shifts times repeats must equal the ring size",
            )
            .with_context("n", n)
            .with_context("shifts", shifts.len())
            .with_context("repeats", repeats));
        }
        chords
    };
    let modulus = i64::try_from(n).map_err(|_| {
        TopoError::allocation("size-overflow", "ring size exceeds the shift range")
            .with_context("generator", "lcf")
    })?;

    let mut edges = edge_buffer("lcf", checked_sum("lcf", &[n, chords])?)?;
    for vertex in 0..n {
        edges.extend([vertex, (vertex + 1) % n]);
    }
    for (k, &shift) in shifts.iter().cycle().take(chords).enumerate() {
        let from = k % n;
        // rem_euclid keeps the offset in 0..n, so the sum stays below 2n.
        let offset = shift.rem_euclid(modulus) as usize;
        edges.extend([from, (from + offset) % n]);
    }
    let mut graph = materialize("lcf", n, false, &edges)?;
    let removed = graph.simplify();
    debug!(removed, edges = graph.edge_count(), "lcf graph simplified");
    Ok(graph)
}

/// Builds a graph from LCF arguments: the shifts followed by the repeat count.
pub fn lcf(n: usize, args: &[i64]) -> Result<GraphImpl, TopoError> {
    let Some((&repeats, shifts)) = args.split_last() else {
        return Err(TopoError::invalid_argument(
            "lcf-arguments",
            "LCF arguments must end with a repeat count",
        )
        .with_hint("pass the shifts followed by the number of repeats"));
    };
    let repeats = usize::try_from(repeats).map_err(|_| {
        TopoError::invalid_argument("lcf-repeats", "LCF repeat count must be non-negative")
            .with_context("repeats", repeats)
    })?;
    lcf_vector(n, shifts, repeats)
}

/// Parsed LCF notation such as `[5,-5]^7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcfSpec {
    /// Signed chord offsets, applied modulo the ring size.
    pub shifts: Vec<i64>,
    /// Number of times the shift list is applied round the ring.
    pub repeats: usize,
}

impl LcfSpec {
    /// Creates a notation from explicit shifts and a repeat count.
    pub fn new(shifts: Vec<i64>, repeats: usize) -> Self {
        Self { shifts, repeats }
    }

    /// Number of vertices the notation covers exactly once.
    pub fn ring_size(&self) -> usize {
        self.shifts.len().saturating_mul(self.repeats)
    }

    /// Builds the graph on a ring of `n` vertices.
    pub fn build(&self, n: usize) -> Result<GraphImpl, TopoError> {
        lcf_vector(n, &self.shifts, self.repeats)
    }
}

impl fmt::Display for LcfSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, shift) in self.shifts.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{shift}")?;
        }
        write!(f, "]^{}", self.repeats)
    }
}

impl FromStr for LcfSpec {
    type Err = TopoError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| {
            TopoError::invalid_argument("lcf-notation", "malformed LCF notation")
                .with_context("input", text)
                .with_context("reason", reason)
                .with_hint("write the shifts in brackets, e.g. [5,-5]^7")
        };
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix('[')
            .ok_or_else(|| malformed("missing opening bracket"))?;
        let (list, suffix) = body
            .split_once(']')
            .ok_or_else(|| malformed("missing closing bracket"))?;
        let shifts = if list.trim().is_empty() {
            Vec::new()
        } else {
            list.split(',')
                .map(|item| item.trim().parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| malformed("shift is not an integer"))?
        };
        let suffix = suffix.trim();
        let repeats = if suffix.is_empty() {
            1
        } else {
            suffix
                .strip_prefix('^')
                .ok_or_else(|| malformed("unexpected text after the shifts"))?
                .trim()
                .parse::<usize>()
                .map_err(|_| malformed("repeat count is not a non-negative integer"))?
        };
        Ok(Self { shifts, repeats })
    }
}

/// Builds an extended chordal ring on `nodes` vertices.
///
/// The graph is a `nodes`-cycle plus, for every vertex `i` and every column
/// `c` of `offsets`, a chord to `i + offsets[(i mod rows, c)]` (mod `nodes`).
/// Chords are kept even when they duplicate ring edges or form loops.
pub fn extended_chordal_ring(
    nodes: usize,
    offsets: &DMatrix<i64>,
) -> Result<GraphImpl, TopoError> {
    if nodes < 3 {
        return Err(TopoError::invalid_argument(
            "chordal-ring-size",
            "an extended chordal ring needs at least three vertices",
        )
        .with_context("nodes", nodes));
    }
    let rows = offsets.nrows();
    if rows == 0 {
        return Err(TopoError::invalid_argument(
            "chordal-ring-offsets",
            "offset matrix must have at least one row",
        ));
    }
    if nodes % rows != 0 {
        return Err(TopoError::invalid_argument(
            "chordal-ring-period",
            "ring size must be a multiple of the offset matrix row count",
        )
        .with_context("nodes", nodes)
        .with_context("rows", rows));
    }
    vertex_limit("extended_chordal_ring", nodes)?;
    let modulus = i64::try_from(nodes).map_err(|_| {
        TopoError::allocation("size-overflow", "ring size exceeds the offset range")
            .with_context("generator", "extended_chordal_ring")
    })?;
    let chords = checked_size("extended_chordal_ring", &[nodes, offsets.ncols()])?;
    let total = checked_sum("extended_chordal_ring", &[nodes, chords])?;
    let mut edges = edge_buffer("extended_chordal_ring", total)?;
    for vertex in 0..nodes {
        edges.extend([vertex, (vertex + 1) % nodes]);
    }
    for vertex in 0..nodes {
        for &offset in offsets.row(vertex % rows).iter() {
            let offset = offset.rem_euclid(modulus) as usize;
            edges.extend([vertex, (vertex + offset) % nodes]);
        }
    }
    materialize("extended_chordal_ring", nodes, false, &edges)
}

//! Edge table for the graph atlas.
//!
//! Each record is `vertices, edges, u0, v0, u1, v1, ...`, records laid out back
//! to back in atlas order: by vertex count, then edge count, then degree
//! sequence, then number of automorphisms.

pub(crate) const ATLAS_LEN: usize = 1253;

#[rustfmt::skip]
pub(crate) static ATLAS_RECORDS: &[u8] = &[
    // 0 vertices: 0..=0
    0, 0,
    // 1 vertex: 1..=1
    1, 0,
    // 2 vertices: 2..=3
    2, 0, 2, 1, 0, 1,
    // 3 vertices: 4..=7
    3, 0, 3, 1, 1, 2, 3, 2, 0, 1, 0, 2, 3, 3, 0, 1, 0, 2, 1, 2,
    // 4 vertices: 8..=18
    4, 0, 4, 1, 2, 3, 4, 2, 1, 3, 2, 3, 4, 2, 0, 1, 2, 3, 4, 3, 1, 2, 1, 3, 2, 3, 4, 3, 0, 3, 1, 3,
    2, 3, 4, 3, 0, 1, 0, 3, 1, 2, 4, 4, 0, 3, 1, 2, 1, 3, 2, 3, 4, 4, 0, 1, 0, 3, 1, 2, 2, 3, 4, 5,
    0, 1, 0, 2, 0, 3, 1, 2, 2, 3, 4, 6, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 2, 3,
    // 5 vertices: 19..=52
    5, 0, 5, 1, 3, 4, 5, 2, 0, 1, 1, 2, 5, 2, 0, 2, 3, 4, 5, 3, 0, 1, 0, 2, 1, 2, 5, 3, 1, 3, 2, 3,
    3, 4, 5, 3, 0, 4, 2, 3, 3, 4, 5, 3, 0, 1, 1, 2, 3, 4, 5, 4, 1, 2, 1, 3, 2, 3, 3, 4, 5, 4, 0, 1,
    0, 3, 1, 2, 2, 3, 5, 4, 0, 4, 1, 4, 2, 4, 3, 4, 5, 4, 0, 4, 1, 3, 2, 3, 3, 4, 5, 4, 0, 1, 0, 4,
    1, 2, 2, 3, 5, 4, 0, 1, 0, 2, 1, 2, 3, 4, 5, 5, 0, 1, 0, 2, 0, 3, 1, 2, 2, 3, 5, 5, 0, 4, 1, 4,
    2, 3, 2, 4, 3, 4, 5, 5, 0, 1, 0, 2, 0, 4, 1, 2, 2, 3, 5, 5, 0, 4, 1, 2, 1, 3, 2, 3, 3, 4, 5, 5,
    0, 1, 1, 3, 1, 4, 2, 3, 2, 4, 5, 5, 0, 1, 0, 4, 1, 2, 2, 3, 3, 4, 5, 6, 0, 1, 0, 3, 0, 4, 1, 3,
    1, 4, 3, 4, 5, 6, 0, 1, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 5, 6, 0, 1, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4,
    5, 6, 0, 1, 0, 4, 1, 4, 2, 3, 2, 4, 3, 4, 5, 6, 0, 1, 0, 3, 0, 4, 1, 2, 2, 3, 3, 4, 5, 6, 0, 2,
    0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 5, 7, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 5, 7, 0, 3, 0, 4,
    1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 5, 7, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 5, 7, 0, 2, 0, 3,
    0, 4, 1, 2, 1, 3, 1, 4, 2, 4, 5, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 5, 8, 0, 1,
    0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 4, 3, 4, 5, 9, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4,
    3, 4, 5, 10, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4,
    // 6 vertices: 53..=208
    6, 0, 6, 1, 4, 5, 6, 2, 0, 3, 4, 5, 6, 2, 1, 2, 1, 3, 6, 3, 1, 2, 1, 3, 2, 3, 6, 3, 0, 3, 0, 4,
    0, 5, 6, 3, 0, 5, 3, 4, 4, 5, 6, 3, 1, 5, 2, 5, 3, 4, 6, 3, 0, 3, 1, 2, 4, 5, 6, 4, 0, 3, 0, 4,
    0, 5, 4, 5, 6, 4, 0, 3, 0, 4, 3, 5, 4, 5, 6, 4, 0, 5, 1, 5, 2, 5, 3, 5, 6, 4, 0, 4, 1, 3, 2, 3,
    3, 4, 6, 4, 0, 2, 1, 2, 1, 3, 3, 5, 6, 4, 0, 5, 1, 2, 1, 3, 2, 3, 6, 4, 0, 3, 0, 4, 0, 5, 1, 2,
    6, 4, 0, 5, 1, 2, 3, 4, 4, 5, 6, 4, 0, 2, 0, 4, 1, 3, 3, 5, 6, 5, 0, 3, 0, 4, 0, 5, 3, 5, 4, 5,
    6, 5, 1, 3, 2, 3, 3, 4, 3, 5, 4, 5, 6, 5, 0, 4, 2, 3, 3, 4, 3, 5, 4, 5, 6, 5, 0, 4, 1, 2, 1, 3,
    2, 3, 3, 4, 6, 5, 0, 4, 1, 2, 1, 4, 2, 3, 3, 4, 6, 5, 0, 1, 0, 4, 1, 2, 2, 3, 3, 4, 6, 5, 0, 5,
    1, 5, 2, 5, 3, 5, 4, 5, 6, 5, 0, 1, 1, 2, 1, 4, 1, 5, 2, 3, 6, 5, 0, 1, 0, 2, 0, 3, 3, 4, 3, 5,
    6, 5, 0, 1, 1, 2, 1, 3, 2, 4, 3, 5, 6, 5, 0, 4, 0, 5, 1, 3, 2, 3, 3, 4, 6, 5, 0, 1, 1, 2, 1, 3,
    2, 3, 4, 5, 6, 5, 0, 1, 0, 5, 2, 3, 3, 4, 4, 5, 6, 5, 0, 3, 0, 4, 1, 5, 2, 5, 3, 4, 6, 5, 0, 3,
    0, 4, 1, 2, 3, 5, 4, 5, 6, 6, 0, 3, 0, 4, 0, 5, 3, 4, 3, 5, 4, 5, 6, 6, 0, 4, 1, 3, 1, 4, 2, 3,
    2, 4, 3, 4, 6, 6, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 6, 6, 0, 2, 0, 4, 2, 4, 3, 4, 3, 5, 4, 5,
    6, 6, 0, 1, 0, 3, 0, 4, 1, 2, 2, 3, 3, 4, 6, 6, 0, 1, 0, 2, 1, 3, 1, 4, 2, 3, 2, 4, 6, 6, 0, 5,
    1, 5, 2, 5, 3, 4, 3, 5, 4, 5, 6, 6, 0, 3, 0, 4, 1, 4, 2, 4, 3, 4, 3, 5, 6, 6, 0, 4, 1, 5, 2, 3,
    3, 4, 3, 5, 4, 5, 6, 6, 0, 4, 0, 5, 1, 2, 1, 4, 2, 4, 3, 4, 6, 6, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2,
    1, 3, 6, 6, 0, 2, 1, 2, 1, 3, 1, 4, 2, 4, 3, 5, 6, 6, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 3, 5, 6, 6,
    0, 2, 1, 3, 2, 4, 2, 5, 3, 4, 3, 5, 6, 6, 0, 1, 0, 2, 0, 3, 3, 4, 3, 5, 4, 5, 6, 6, 0, 3, 0, 4,
    0, 5, 1, 2, 3, 5, 4, 5, 6, 6, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 3, 4, 6, 6, 0, 4, 0, 5, 1, 3, 1, 4,
    2, 3, 2, 4, 6, 6, 0, 1, 0, 4, 1, 2, 1, 5, 2, 3, 3, 4, 6, 6, 0, 1, 0, 5, 1, 2, 2, 3, 3, 4, 4, 5,
    6, 6, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 4, 5, 6, 7, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 6, 7,
    0, 1, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 6, 7, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 6, 7,
    0, 1, 0, 2, 0, 3, 1, 3, 1, 5, 2, 3, 2, 5, 6, 7, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 6, 7,
    0, 1, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 6, 7, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 2, 3, 3, 5, 6, 7,
    0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 4, 5, 6, 7, 0, 1, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 4, 5, 6, 7,
    0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 2, 3, 4, 5, 6, 7, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 2, 3, 4, 5, 6, 7,
    0, 1, 0, 4, 1, 2, 1, 4, 1, 5, 2, 3, 3, 4, 6, 7, 0, 1, 0, 2, 0, 3, 0, 4, 1, 4, 2, 3, 3, 5, 6, 7,
    0, 4, 0, 5, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 6, 7, 0, 2, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4, 5, 6, 7,
    0, 1, 0, 3, 0, 4, 1, 2, 1, 5, 2, 3, 3, 4, 6, 7, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 6, 7,
    0, 1, 0, 2, 0, 4, 1, 2, 1, 5, 2, 3, 3, 4, 6, 7, 0, 2, 1, 2, 1, 3, 1, 4, 2, 5, 3, 5, 4, 5, 6, 7,
    0, 2, 0, 5, 1, 3, 1, 4, 2, 3, 3, 4, 3, 5, 6, 7, 0, 2, 0, 5, 1, 2, 1, 3, 2, 3, 3, 4, 4, 5, 6, 7,
    0, 1, 0, 3, 0, 5, 1, 2, 2, 3, 3, 4, 4, 5, 6, 7, 0, 1, 0, 4, 0, 5, 1, 2, 2, 3, 3, 4, 3, 5, 6, 7,
    0, 1, 0, 2, 0, 3, 1, 2, 3, 4, 3, 5, 4, 5, 6, 8, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5,
    6, 8, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 4, 3, 4, 6, 8, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2,
    1, 3, 2, 3, 6, 8, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 2, 3, 3, 5, 6, 8, 0, 1, 0, 2, 1, 2, 1, 3,
    1, 4, 2, 3, 2, 4, 2, 5, 6, 8, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 6, 8, 0, 1, 0, 4,
    1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 4, 5, 6, 8, 0, 1, 0, 2, 0, 4, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 6, 8,
    0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 6, 8, 0, 1, 0, 2, 0, 3, 0, 4, 1, 3, 1, 5, 2, 3,
    2, 5, 6, 8, 0, 2, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 6, 8, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2,
    1, 3, 2, 3, 4, 5, 6, 8, 0, 1, 0, 2, 0, 4, 1, 3, 1, 5, 2, 3, 2, 5, 3, 5, 6, 8, 0, 4, 0, 5, 1, 3,
    1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 6, 8, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 6, 8, 0, 4,
    0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 6, 8, 0, 1, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5,
    6, 8, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 3, 4, 4, 5, 6, 8, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 2, 3,
    2, 5, 3, 4, 6, 8, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 4, 5, 6, 8, 0, 1, 0, 4, 1, 2, 1, 5,
    2, 3, 3, 4, 3, 5, 4, 5, 6, 8, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 6, 8, 0, 1, 0, 4,
    0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 6, 8, 0, 1, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4, 5, 6, 9,
    0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 6, 9, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5,
    2, 3, 2, 4, 2, 5, 6, 9, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 6, 9, 0, 1, 0, 3,
    0, 4, 1, 2, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 6, 9, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 3, 4, 3, 5,
    4, 5, 6, 9, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 4, 5, 6, 9, 0, 4, 0, 5, 1, 4, 1, 5,
    2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 6, 9, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 6, 9,
    0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 3, 4, 4, 5, 6, 9, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4,
    1, 5, 3, 4, 4, 5, 6, 9, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 4, 5, 6, 9, 0, 1, 0, 3,
    0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 6, 9, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 3, 4,
    4, 5, 6, 9, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4, 4, 5, 6, 9, 0, 1, 0, 2, 0, 4, 0, 5,
    1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 6, 9, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 6, 9,
    0, 1, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 6, 9, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5,
    2, 3, 2, 5, 3, 4, 6, 9, 0, 1, 0, 3, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 6, 9, 0, 1, 0, 2,
    0, 3, 1, 4, 1, 5, 2, 3, 2, 5, 3, 4, 4, 5, 6, 9, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4,
    4, 5, 6, 10, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 6, 10, 0, 1, 0, 3, 0,
    4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 6, 10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4,
    2, 3, 2, 4, 3, 4, 6, 10, 0, 1, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 6, 10, 0,
    1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 3, 5, 4, 5, 6, 10, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2,
    1, 3, 2, 3, 2, 4, 3, 4, 4, 5, 6, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 2, 5, 3, 4, 4,
    5, 6, 10, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 4, 5, 6, 10, 0, 1, 0, 3, 0, 4,
    0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 6, 10, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 2,
    3, 2, 5, 3, 4, 6, 10, 0, 1, 0, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 4, 5, 6, 10, 0, 1,
    0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 6, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1,
    5, 2, 3, 2, 4, 3, 4, 4, 5, 6, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5,
    6, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 2, 5, 3, 4, 3, 5, 4, 5, 6, 11, 0, 1, 0, 2, 0, 3, 0,
    4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 6, 11, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 4, 1, 5,
    2, 3, 2, 4, 2, 5, 3, 5, 6, 11, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4,
    5, 6, 11, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5, 4, 5, 6, 11, 0, 1, 0, 2,
    0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 5, 3, 4, 3, 5, 4, 5, 6, 11, 0, 2, 0, 4, 0, 5, 1, 3, 1, 4, 1,
    5, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 6, 11, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 4,
    3, 4, 4, 5, 6, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 6, 11, 0,
    1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 6, 12, 0, 1, 0, 2, 0, 3, 0, 4,
    1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 6, 12, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1,
    3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 6, 12, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5,
    3, 4, 3, 5, 4, 5, 6, 12, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 4,
    5, 6, 12, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 6, 13, 0, 1,
    0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 6, 13, 0, 1, 0, 2, 0,
    3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 6, 14, 0, 1, 0, 2, 0, 4, 0, 5,
    1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 6, 15, 0, 1, 0, 2, 0, 3, 0, 4, 0,
    5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5,
    // 7 vertices: 209..=1252
    7, 0, 7, 1, 5, 6, 7, 2, 1, 2, 2, 3, 7, 2, 0, 6, 4, 5, 7, 3, 0, 2, 0, 4, 2, 4, 7, 3, 0, 1, 0, 5,
    0, 6, 7, 3, 0, 6, 4, 5, 5, 6, 7, 3, 1, 2, 2, 3, 5, 6, 7, 3, 0, 4, 1, 3, 5, 6, 7, 4, 1, 2, 2, 5,
    2, 6, 5, 6, 7, 4, 1, 2, 1, 4, 2, 5, 4, 5, 7, 4, 0, 1, 1, 2, 1, 4, 1, 5, 7, 4, 0, 1, 1, 2, 2, 5,
    2, 6, 7, 4, 0, 1, 1, 2, 2, 3, 3, 4, 7, 4, 0, 2, 0, 4, 2, 4, 5, 6, 7, 4, 0, 1, 0, 5, 0, 6, 2, 4,
    7, 4, 0, 6, 1, 3, 4, 5, 5, 6, 7, 4, 0, 3, 0, 4, 2, 5, 2, 6, 7, 4, 0, 6, 1, 2, 2, 3, 4, 5, 7, 5,
    0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 7, 5, 2, 3, 2, 4, 2, 5, 2, 6, 5, 6, 7, 5, 0, 2, 0, 4, 0, 6, 2, 4,
    4, 5, 7, 5, 0, 1, 1, 2, 2, 5, 2, 6, 5, 6, 7, 5, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 7, 5, 0, 1, 0, 4,
    1, 2, 2, 3, 3, 4, 7, 5, 0, 5, 1, 5, 2, 5, 3, 5, 4, 5, 7, 5, 0, 1, 1, 2, 1, 5, 1, 6, 2, 3, 7, 5,
    1, 2, 1, 4, 1, 5, 2, 3, 2, 6, 7, 5, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 7, 5, 1, 2, 2, 3, 3, 4, 3, 6,
    4, 5, 7, 5, 1, 2, 2, 5, 2, 6, 3, 4, 5, 6, 7, 5, 0, 1, 0, 6, 3, 4, 4, 5, 5, 6, 7, 5, 0, 3, 0, 4,
    2, 5, 2, 6, 5, 6, 7, 5, 1, 4, 2, 3, 2, 5, 3, 6, 5, 6, 7, 5, 0, 1, 1, 2, 1, 3, 1, 4, 5, 6, 7, 5,
    0, 1, 0, 3, 0, 4, 1, 2, 5, 6, 7, 5, 0, 3, 0, 4, 1, 2, 2, 5, 2, 6, 7, 5, 0, 1, 1, 2, 2, 3, 3, 4,
    5, 6, 7, 5, 0, 6, 1, 2, 2, 3, 4, 5, 5, 6, 7, 5, 0, 1, 2, 3, 4, 5, 4, 6, 5, 6, 7, 6, 1, 2, 1, 5,
    1, 6, 2, 5, 2, 6, 5, 6, 7, 6, 0, 1, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 7, 6, 0, 3, 0, 4, 1, 2, 1, 3,
    1, 4, 3, 4, 7, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 6, 4, 5, 7, 6, 0, 1, 0, 4, 1, 2, 1, 4, 2, 5, 4, 5,
    7, 6, 0, 2, 0, 5, 1, 2, 1, 5, 2, 4, 4, 5, 7, 6, 1, 2, 2, 3, 2, 4, 2, 5, 2, 6, 5, 6, 7, 6, 1, 2,
    1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 7, 6, 0, 1, 1, 5, 1, 6, 3, 6, 4, 5, 5, 6, 7, 6, 0, 3, 1, 3, 1, 4,
    1, 5, 1, 6, 5, 6, 7, 6, 0, 3, 0, 4, 2, 3, 2, 4, 2, 5, 2, 6, 7, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5,
    5, 6, 7, 6, 1, 2, 2, 3, 2, 5, 3, 6, 4, 5, 5, 6, 7, 6, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 5, 6, 7, 6,
    0, 3, 0, 4, 2, 3, 2, 4, 3, 6, 4, 5, 7, 6, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 5, 6, 7, 6, 1, 3, 1, 4,
    2, 3, 2, 5, 2, 6, 5, 6, 7, 6, 1, 2, 1, 4, 2, 5, 3, 6, 4, 5, 5, 6, 7, 6, 0, 1, 1, 3, 1, 4, 3, 6,
    4, 5, 5, 6, 7, 6, 0, 1, 0, 5, 1, 2, 2, 3, 3, 4, 4, 5, 7, 6, 0, 3, 0, 4, 2, 5, 2, 6, 3, 4, 5, 6,
    7, 6, 0, 6, 1, 6, 2, 6, 3, 6, 4, 6, 5, 6, 7, 6, 0, 1, 1, 2, 2, 3, 2, 4, 2, 5, 2, 6, 7, 6, 0, 1,
    1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 7, 6, 0, 1, 1, 2, 1, 3, 1, 4, 3, 6, 4, 5, 7, 6, 0, 1, 1, 2, 1, 3,
    1, 4, 2, 5, 5, 6, 7, 6, 0, 1, 2, 3, 2, 4, 2, 5, 2, 6, 5, 6, 7, 6, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5,
    2, 6, 7, 6, 0, 1, 0, 2, 0, 4, 1, 2, 2, 3, 5, 6, 7, 6, 0, 1, 0, 3, 0, 4, 1, 2, 2, 5, 2, 6, 7, 6,
    0, 1, 1, 3, 1, 4, 2, 6, 3, 6, 4, 5, 7, 6, 0, 3, 1, 3, 1, 4, 2, 4, 2, 5, 2, 6, 7, 6, 0, 3, 0, 4,
    1, 2, 2, 3, 2, 4, 5, 6, 7, 6, 0, 3, 0, 4, 1, 2, 2, 5, 2, 6, 5, 6, 7, 6, 0, 1, 1, 2, 2, 5, 2, 6,
    3, 4, 5, 6, 7, 6, 0, 1, 0, 3, 0, 4, 1, 2, 3, 6, 4, 5, 7, 6, 0, 1, 1, 3, 1, 4, 2, 5, 2, 6, 5, 6,
    7, 6, 0, 1, 0, 6, 1, 2, 2, 3, 3, 4, 4, 5, 7, 6, 0, 1, 1, 2, 2, 3, 4, 5, 4, 6, 5, 6, 7, 6, 0, 1,
    0, 4, 2, 3, 2, 5, 3, 6, 5, 6, 7, 6, 0, 1, 0, 4, 1, 2, 2, 3, 3, 4, 5, 6, 7, 7, 0, 1, 1, 2, 1, 3,
    1, 4, 2, 3, 2, 4, 3, 4, 7, 7, 0, 2, 0, 5, 1, 2, 1, 5, 2, 4, 2, 5, 4, 5, 7, 7, 0, 1, 0, 4, 1, 2,
    1, 3, 1, 4, 2, 3, 3, 4, 7, 7, 0, 1, 0, 2, 0, 5, 1, 2, 1, 5, 2, 4, 4, 5, 7, 7, 0, 2, 0, 3, 0, 4,
    2, 3, 2, 4, 2, 5, 2, 6, 7, 7, 0, 1, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 7, 7, 0, 1, 1, 3, 1, 4,
    2, 3, 2, 4, 3, 4, 3, 6, 7, 7, 0, 3, 0, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 7, 7, 0, 1, 0, 3, 0, 4,
    1, 3, 1, 4, 3, 6, 4, 5, 7, 7, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 3, 4, 5, 6, 7, 7, 1, 2, 2, 3, 2, 4,
    2, 5, 2, 6, 3, 6, 4, 5, 7, 7, 0, 1, 0, 2, 0, 4, 1, 2, 2, 3, 2, 5, 3, 4, 7, 7, 1, 3, 2, 3, 2, 4,
    2, 5, 2, 6, 3, 6, 4, 5, 7, 7, 0, 2, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 7, 7, 0, 2, 0, 5, 1, 2,
    1, 5, 2, 4, 3, 5, 4, 5, 7, 7, 0, 1, 0, 2, 0, 4, 1, 2, 2, 3, 3, 4, 3, 5, 7, 7, 0, 1, 0, 2, 0, 4,
    1, 2, 1, 5, 2, 3, 3, 4, 7, 7, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7, 7, 0, 2, 0, 3, 0, 5,
    1, 2, 1, 5, 2, 4, 4, 5, 7, 7, 1, 2, 1, 3, 1, 4, 1, 5, 2, 6, 3, 4, 5, 6, 7, 7, 0, 1, 0, 4, 1, 2,
    1, 4, 2, 3, 3, 5, 4, 5, 7, 7, 1, 2, 1, 5, 2, 3, 2, 4, 3, 6, 4, 5, 5, 6, 7, 7, 1, 2, 1, 4, 2, 3,
    2, 5, 3, 6, 4, 5, 5, 6, 7, 7, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 7, 0, 1, 0, 2, 0, 3,
    0, 4, 0, 5, 0, 6, 3, 6, 7, 7, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 3, 4, 7, 7, 0, 5, 0, 6, 1, 5,
    2, 5, 3, 6, 4, 6, 5, 6, 7, 7, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 1, 4, 4, 5, 7, 7, 0, 1, 1, 2, 2, 3,
    2, 4, 2, 5, 2, 6, 5, 6, 7, 7, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 7, 7, 0, 1, 0, 4, 1, 2,
    1, 4, 1, 6, 2, 3, 4, 5, 7, 7, 0, 1, 0, 4, 1, 2, 1, 4, 2, 3, 4, 5, 4, 6, 7, 7, 0, 5, 1, 2, 2, 3,
    2, 5, 3, 6, 4, 5, 5, 6, 7, 7, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 5, 6, 7, 7, 0, 1, 1, 2, 1, 3,
    2, 4, 2, 5, 2, 6, 5, 6, 7, 7, 0, 1, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 7, 7, 0, 1, 1, 2, 1, 3,
    1, 4, 2, 5, 2, 6, 5, 6, 7, 7, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 3, 6, 4, 5, 7, 7, 0, 1, 1, 2, 2, 5,
    2, 6, 3, 6, 4, 5, 5, 6, 7, 7, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 5, 2, 6, 7, 7, 0, 3, 0, 4, 1, 2,
    1, 3, 1, 4, 3, 4, 5, 6, 7, 7, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 2, 3, 3, 6, 7, 7, 0, 3, 0, 4, 1, 2,
    1, 3, 1, 4, 1, 6, 2, 5, 7, 7, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 2, 3, 5, 6, 7, 7, 0, 1, 0, 2, 0, 4,
    0, 5, 2, 3, 3, 6, 5, 6, 7, 7, 0, 1, 0, 4, 1, 4, 2, 3, 2, 4, 3, 4, 5, 6, 7, 7, 0, 1, 0, 4, 1, 2,
    1, 4, 2, 3, 3, 6, 4, 5, 7, 7, 0, 1, 1, 2, 1, 5, 2, 3, 2, 6, 3, 4, 5, 6, 7, 7, 0, 1, 0, 4, 1, 2,
    1, 4, 2, 3, 4, 5, 5, 6, 7, 7, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 5, 6, 7, 7, 0, 1, 0, 4, 1, 2,
    2, 3, 2, 5, 4, 5, 5, 6, 7, 7, 0, 1, 0, 2, 0, 5, 1, 4, 2, 3, 3, 5, 3, 6, 7, 7, 0, 2, 0, 5, 1, 2,
    2, 3, 3, 6, 4, 5, 5, 6, 7, 7, 0, 1, 0, 3, 0, 4, 1, 2, 2, 5, 2, 6, 5, 6, 7, 7, 0, 3, 0, 4, 1, 2,
    1, 3, 1, 4, 2, 5, 2, 6, 7, 7, 0, 1, 0, 4, 1, 2, 1, 4, 2, 5, 3, 6, 4, 5, 7, 7, 0, 1, 0, 3, 0, 4,
    1, 3, 1, 4, 2, 5, 2, 6, 7, 7, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 5, 6, 7, 7, 0, 3, 0, 4, 1, 2,
    2, 5, 2, 6, 3, 6, 4, 5, 7, 7, 0, 4, 1, 2, 1, 3, 2, 5, 2, 6, 3, 4, 5, 6, 7, 7, 0, 3, 0, 4, 1, 2,
    1, 3, 1, 4, 2, 6, 5, 6, 7, 7, 0, 2, 0, 4, 0, 5, 1, 4, 2, 3, 3, 6, 5, 6, 7, 7, 0, 3, 0, 4, 1, 2,
    2, 5, 2, 6, 3, 4, 5, 6, 7, 7, 0, 1, 0, 6, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 7, 0, 1, 0, 4, 1, 4,
    2, 3, 2, 5, 3, 6, 5, 6, 7, 8, 0, 1, 0, 4, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 4, 5, 7, 8, 0, 1, 0, 2,
    0, 4, 0, 5, 1, 2, 1, 4, 2, 5, 4, 5, 7, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6, 3, 4, 7, 8,
    1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 4, 5, 5, 6, 7, 8, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 4,
    4, 5, 7, 8, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 2, 3, 3, 6, 5, 6, 7, 8, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2,
    2, 5, 4, 5, 5, 6, 7, 8, 0, 1, 1, 2, 1, 3, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 7, 8, 0, 2, 0, 3, 0, 5,
    0, 6, 2, 3, 3, 6, 4, 5, 5, 6, 7, 8, 0, 1, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 7, 8, 1, 2,
    1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7, 8, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 3, 4,
    7, 8, 0, 3, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 7, 8, 0, 2, 0, 3, 0, 4, 2, 3, 2, 4, 2, 5,
    2, 6, 5, 6, 7, 8, 0, 2, 0, 5, 2, 3, 2, 4, 2, 5, 3, 6, 4, 5, 5, 6, 7, 8, 0, 4, 0, 5, 1, 4, 1, 5,
    2, 4, 2, 5, 3, 4, 3, 5, 7, 8, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 3, 6, 4, 5, 5, 6, 7, 8, 0, 3, 0, 4,
    2, 3, 2, 4, 2, 5, 2, 6, 3, 6, 4, 5, 7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 4, 5, 7, 8,
    0, 3, 0, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 8, 0, 1, 0, 5, 1, 3, 1, 6, 2, 3, 2, 5, 2, 6,
    5, 6, 7, 8, 0, 2, 0, 3, 0, 4, 2, 3, 2, 4, 3, 6, 4, 5, 5, 6, 7, 8, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3,
    2, 4, 3, 4, 4, 5, 7, 8, 0, 1, 0, 5, 0, 6, 1, 2, 2, 5, 2, 6, 4, 5, 4, 6, 7, 8, 0, 1, 0, 3, 0, 4,
    1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 7, 8, 0, 1, 0, 2, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6, 7, 8, 0, 1,
    0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6, 2, 4, 7, 8, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 3, 4,
    7, 8, 0, 2, 0, 3, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 5, 6, 7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6,
    2, 4, 3, 4, 7, 8, 0, 2, 0, 3, 0, 5, 1, 2, 2, 5, 3, 4, 3, 5, 5, 6, 7, 8, 0, 1, 1, 2, 1, 3, 2, 3,
    2, 4, 3, 4, 4, 5, 4, 6, 7, 8, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 3, 4, 5, 6, 7, 8, 0, 1, 0, 6,
    1, 6, 2, 3, 2, 6, 3, 6, 4, 6, 5, 6, 7, 8, 0, 6, 1, 2, 1, 6, 2, 3, 2, 6, 4, 5, 4, 6, 5, 6, 7, 8,
    0, 1, 0, 6, 1, 2, 2, 3, 2, 6, 3, 6, 4, 6, 5, 6, 7, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6,
    2, 5, 7, 8, 0, 1, 0, 3, 0, 4, 1, 2, 2, 3, 2, 4, 2, 5, 2, 6, 7, 8, 0, 2, 0, 5, 1, 2, 2, 3, 2, 5,
    3, 6, 4, 5, 5, 6, 7, 8, 0, 1, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 7, 8, 0, 1, 0, 3, 1, 2,
    1, 3, 1, 4, 2, 4, 2, 5, 2, 6, 7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 3, 6, 4, 5, 7, 8, 0, 1,
    0, 4, 1, 2, 1, 4, 1, 5, 2, 4, 3, 6, 4, 5, 7, 8, 0, 1, 0, 2, 0, 5, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4,
    7, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 1, 6, 2, 6, 4, 5, 7, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 1, 6,
    2, 4, 2, 5, 7, 8, 0, 1, 0, 2, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4, 4, 5, 7, 8, 0, 1, 0, 2, 1, 2, 1, 4,
    1, 6, 2, 3, 3, 4, 3, 5, 7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6, 2, 6, 3, 4, 7, 8, 0, 1, 0, 2,
    0, 4, 0, 5, 1, 2, 2, 3, 4, 5, 5, 6, 7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 4, 5, 7, 8,
    0, 1, 0, 4, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 4, 5, 7, 8, 0, 1, 0, 6, 1, 2, 1, 6, 2, 3, 2, 6, 3, 6,
    4, 5, 7, 8, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 7, 8, 0, 1, 1, 2, 1, 6, 2, 3, 2, 6,
    4, 5, 4, 6, 5, 6, 7, 8, 0, 1, 0, 2, 0, 4, 0, 5, 2, 3, 2, 5, 3, 6, 5, 6, 7, 8, 0, 3, 0, 4, 1, 3,
    1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 7, 8, 0, 1, 1, 2, 1, 3, 2, 3, 2, 6, 3, 4, 4, 5, 4, 6, 7, 8, 0, 1,
    1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 5, 6, 7, 8, 0, 1, 0, 4, 1, 2, 1, 4, 2, 3, 2, 5, 4, 5, 5, 6,
    7, 8, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 3, 4, 7, 8, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4, 2, 3,
    2, 4, 2, 5, 7, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 5, 6, 7, 8, 0, 1, 0, 4, 2, 3, 2, 5,
    2, 6, 3, 5, 3, 6, 5, 6, 7, 8, 0, 3, 0, 4, 1, 2, 2, 3, 2, 4, 2, 5, 2, 6, 5, 6, 7, 8, 0, 1, 0, 2,
    0, 4, 0, 5, 0, 6, 1, 2, 3, 6, 4, 5, 7, 8, 0, 1, 0, 2, 1, 2, 1, 4, 1, 6, 2, 3, 3, 5, 4, 5, 7, 8,
    0, 1, 0, 2, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4, 5, 6, 7, 8, 0, 1, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3,
    3, 4, 7, 8, 0, 3, 0, 4, 1, 2, 1, 4, 2, 4, 2, 6, 3, 4, 5, 6, 7, 8, 0, 1, 0, 2, 0, 3, 0, 5, 1, 5,
    1, 6, 2, 4, 3, 4, 7, 8, 0, 1, 0, 4, 1, 4, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 7, 8, 0, 1, 1, 2, 1, 4,
    1, 5, 2, 3, 2, 6, 3, 4, 5, 6, 7, 8, 0, 1, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 4, 5, 4, 6, 7, 8, 0, 1,
    0, 4, 1, 4, 2, 4, 3, 4, 3, 5, 3, 6, 5, 6, 7, 8, 0, 2, 0, 3, 0, 5, 0, 6, 1, 4, 2, 4, 3, 6, 4, 5,
    7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 4, 5, 5, 6, 7, 8, 0, 1, 0, 4, 1, 2, 1, 4, 2, 5, 3, 6,
    4, 5, 5, 6, 7, 8, 0, 1, 0, 2, 1, 2, 1, 4, 2, 3, 3, 5, 4, 5, 4, 6, 7, 8, 0, 4, 1, 2, 1, 4, 1, 5,
    2, 3, 2, 6, 3, 4, 5, 6, 7, 8, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 5, 6, 7, 8, 0, 1, 0, 4,
    1, 4, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 8, 0, 1, 0, 5, 0, 6, 1, 2, 1, 5, 2, 3, 3, 4, 4, 5, 7, 8,
    0, 1, 0, 5, 0, 6, 1, 2, 2, 3, 2, 4, 3, 4, 4, 5, 7, 8, 0, 1, 0, 2, 0, 5, 1, 2, 1, 4, 2, 3, 3, 4,
    5, 6, 7, 8, 0, 4, 1, 2, 1, 5, 2, 3, 2, 4, 3, 6, 4, 5, 5, 6, 7, 8, 0, 3, 0, 5, 0, 6, 1, 2, 1, 5,
    2, 3, 2, 4, 4, 5, 7, 8, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 5, 6, 7, 8, 0, 1, 0, 4, 1, 4,
    2, 4, 2, 6, 3, 4, 3, 5, 5, 6, 7, 8, 0, 1, 0, 5, 1, 6, 2, 3, 2, 6, 3, 4, 4, 6, 5, 6, 7, 8, 0, 1,
    0, 4, 1, 2, 2, 3, 2, 5, 3, 6, 4, 5, 5, 6, 7, 8, 0, 1, 0, 5, 1, 2, 1, 6, 2, 3, 2, 6, 3, 4, 4, 5,
    7, 8, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 5, 6, 7, 8, 0, 1, 0, 5, 1, 2, 1, 6, 2, 3, 3, 4,
    4, 5, 5, 6, 7, 8, 0, 1, 0, 5, 0, 6, 1, 2, 2, 3, 3, 4, 3, 6, 4, 5, 7, 8, 0, 1, 0, 4, 1, 4, 2, 3,
    2, 5, 3, 5, 3, 6, 4, 6, 7, 8, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 2, 5, 2, 6, 5, 6, 7, 9, 0, 1, 0, 3,
    0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 7, 9, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4,
    2, 5, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 7, 9, 0, 1, 0, 3, 0, 4, 1, 2,
    1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 7, 9, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 7, 9,
    0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 4, 5, 7, 9, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5,
    3, 4, 3, 5, 4, 5, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 7, 9, 0, 1, 0, 2,
    0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 3, 4, 4, 5, 7, 9, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 3, 4,
    4, 5, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 4, 5, 7, 9, 0, 1, 0, 3, 0, 4, 0, 5,
    1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 7, 9, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 3, 4, 4, 5, 7, 9,
    0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4, 4, 5, 7, 9, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 5,
    2, 3, 2, 5, 3, 4, 7, 9, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 7, 9, 0, 1, 0, 4,
    0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 7, 9, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5,
    3, 4, 7, 9, 0, 1, 0, 3, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 9, 0, 1, 0, 2, 0, 3, 1, 4,
    1, 5, 2, 3, 2, 5, 3, 4, 4, 5, 7, 9, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4, 5, 7, 9,
    0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 2, 3, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2,
    1, 3, 2, 3, 2, 6, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 6, 2, 3, 3, 5, 7, 9, 0, 1, 0, 2,
    1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 7, 9, 0, 1, 0, 2, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4,
    2, 5, 7, 9, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 3, 4, 7, 9, 0, 1, 0, 4, 1, 2, 1, 3,
    1, 4, 1, 5, 2, 3, 3, 4, 4, 6, 7, 9, 0, 1, 0, 2, 0, 4, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 7, 9,
    0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 4, 5, 4, 6, 7, 9, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3,
    3, 4, 3, 6, 4, 5, 7, 9, 0, 1, 0, 2, 0, 4, 0, 6, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 7, 9, 0, 1, 0, 4,
    0, 5, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 3, 4, 7, 9, 0, 2, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5,
    4, 5, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 0, 6, 1, 3, 1, 5, 2, 3, 2, 5, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4,
    0, 5, 1, 2, 1, 3, 2, 3, 5, 6, 7, 9, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 4, 6, 7, 9,
    0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 6, 3, 4, 4, 5, 7, 9, 0, 2, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4,
    3, 5, 4, 5, 5, 6, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 2, 3, 3, 6, 5, 6, 7, 9, 0, 1, 0, 4,
    0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 7, 9, 0, 1, 0, 3, 0, 4, 1, 2, 2, 3, 2, 4, 3, 4, 3, 6,
    4, 5, 7, 9, 0, 1, 0, 2, 0, 4, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 5, 6, 7, 9, 0, 2, 1, 2, 1, 4, 2, 3,
    2, 5, 3, 4, 3, 5, 4, 5, 4, 6, 7, 9, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 4, 6, 7, 9,
    0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 6, 3, 4, 7, 9, 0, 1, 0, 2, 0, 3, 0, 4, 1, 3, 1, 5,
    2, 3, 2, 5, 5, 6, 7, 9, 0, 1, 0, 2, 0, 3, 1, 3, 1, 5, 2, 3, 2, 5, 2, 6, 4, 5, 7, 9, 0, 1, 0, 2,
    0, 4, 0, 6, 1, 3, 1, 5, 2, 3, 2, 5, 3, 5, 7, 9, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 4, 5,
    5, 6, 7, 9, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 4, 3, 4, 5, 6, 7, 9, 0, 4, 0, 5, 1, 3, 1, 4,
    2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 7, 9, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 7, 9,
    0, 4, 0, 5, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 6, 4, 5, 7, 9, 0, 1, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3,
    2, 4, 2, 5, 5, 6, 7, 9, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7, 9, 0, 1, 0, 5,
    1, 2, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 4, 5, 7, 9, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 3, 4,
    5, 6, 7, 9, 0, 4, 0, 5, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 3, 4, 4, 5, 7, 9, 0, 4, 0, 5, 0, 6, 1, 3,
    1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 7, 9, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 6, 3, 6, 5, 6, 7, 9,
    0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 7, 9, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3,
    2, 4, 4, 5, 4, 6, 7, 9, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 4, 5, 5, 6, 7, 9, 0, 1, 0, 5,
    1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 4, 6, 7, 9, 0, 1, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5,
    5, 6, 7, 9, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 3, 1, 6, 3, 6, 5, 6, 7, 9, 0, 1, 0, 2, 0, 4, 0, 5,
    1, 2, 1, 6, 2, 3, 2, 5, 3, 4, 7, 9, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 4, 6, 7, 9,
    0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 4, 5, 7, 9, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 2, 3,
    2, 5, 3, 4, 3, 6, 7, 9, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 2, 6, 3, 4, 7, 9, 0, 1, 0, 2,
    0, 6, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 4, 6, 7, 9, 0, 4, 0, 5, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 3, 4,
    3, 5, 7, 9, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 3, 4, 5, 6, 7, 9, 0, 1, 0, 5, 1, 2, 1, 6,
    2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 9, 0, 1, 0, 5, 0, 6, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 9,
    0, 1, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 5, 7, 9, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 6,
    2, 4, 3, 6, 5, 6, 7, 9, 0, 1, 0, 4, 1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 3, 6, 4, 5, 7, 9, 0, 1, 0, 3,
    0, 4, 0, 5, 1, 2, 1, 6, 2, 3, 2, 5, 3, 4, 7, 9, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5,
    4, 6, 7, 9, 0, 1, 0, 2, 0, 3, 0, 6, 1, 3, 1, 5, 2, 3, 2, 5, 4, 6, 7, 9, 0, 1, 0, 4, 0, 5, 1, 2,
    1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 7, 9, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 4, 5, 7, 9,
    0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 9, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5,
    2, 3, 2, 5, 3, 4, 7, 9, 0, 1, 0, 4, 1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 4, 5, 5, 6, 7, 9, 0, 1, 0, 3,
    0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 4, 6, 7, 9, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 6, 3, 6, 4, 5,
    5, 6, 7, 9, 0, 1, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4, 5, 5, 6, 7, 9, 0, 1, 0, 4, 1, 2, 1, 5,
    1, 6, 2, 3, 3, 4, 3, 5, 4, 5, 7, 9, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 6, 4, 5, 7, 9,
    0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 4, 5, 4, 6, 7, 9, 0, 1, 0, 4, 0, 6, 1, 2, 1, 5, 2, 3,
    3, 4, 3, 5, 4, 5, 7, 9, 0, 1, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 4, 6, 7, 9, 0, 1, 0, 5,
    0, 6, 1, 2, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 7, 9, 0, 1, 0, 2, 0, 6, 1, 3, 1, 5, 2, 3, 2, 5, 3, 5,
    4, 6, 7, 9, 0, 1, 0, 5, 0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4, 5, 7, 9, 0, 5, 0, 6, 1, 2, 1, 6,
    2, 6, 3, 4, 3, 6, 4, 6, 5, 6, 7, 9, 0, 1, 0, 2, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 4, 5, 6, 7, 9,
    0, 4, 0, 6, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 5, 6, 7, 9, 0, 4, 0, 5, 1, 3, 1, 4, 2, 3, 2, 4,
    3, 6, 4, 5, 4, 6, 7, 9, 0, 2, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 6, 4, 5, 5, 6, 7, 9, 0, 4, 0, 5,
    1, 3, 1, 4, 2, 3, 2, 5, 4, 5, 4, 6, 5, 6, 7, 9, 0, 1, 0, 2, 1, 2, 2, 3, 2, 6, 3, 4, 3, 5, 3, 6,
    4, 5, 7, 9, 0, 2, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 3, 6, 4, 5, 5, 6, 7, 9, 0, 1, 0, 6, 1, 2, 1, 3,
    1, 4, 2, 3, 3, 4, 4, 5, 5, 6, 7, 9, 0, 1, 0, 4, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 4, 5, 7, 9,
    0, 1, 0, 4, 1, 2, 1, 4, 1, 5, 2, 3, 2, 6, 3, 4, 5, 6, 7, 9, 0, 1, 0, 2, 1, 2, 1, 4, 2, 3, 3, 4,
    3, 5, 3, 6, 5, 6, 7, 9, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 2, 3, 3, 6, 4, 5, 5, 6, 7, 9, 0, 1, 0, 4,
    0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 3, 5, 7, 9, 0, 1, 0, 2, 0, 4, 1, 5, 2, 3, 2, 5, 3, 6, 4, 5,
    5, 6, 7, 9, 0, 1, 0, 5, 1, 2, 1, 4, 2, 3, 2, 4, 3, 6, 4, 5, 4, 6, 7, 9, 0, 1, 0, 3, 0, 4, 1, 2,
    1, 3, 1, 4, 2, 5, 2, 6, 5, 6, 7, 9, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 5, 6, 7, 9,
    0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 2, 3, 2, 5, 3, 6, 5, 6, 7, 9, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4,
    2, 5, 2, 6, 5, 6, 7, 9, 0, 1, 0, 2, 0, 5, 0, 6, 1, 4, 2, 3, 3, 4, 3, 6, 4, 5, 7, 9, 0, 1, 0, 5,
    0, 6, 1, 2, 1, 6, 2, 3, 3, 4, 3, 6, 4, 5, 7, 9, 0, 1, 0, 3, 0, 6, 1, 2, 1, 4, 2, 3, 3, 5, 4, 5,
    4, 6, 7, 9, 0, 1, 0, 4, 1, 2, 1, 4, 2, 3, 2, 5, 3, 6, 4, 5, 5, 6, 7, 9, 0, 1, 0, 4, 0, 5, 1, 2,
    1, 4, 2, 6, 3, 5, 3, 6, 5, 6, 7, 9, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 9,
    0, 1, 0, 5, 0, 6, 1, 2, 1, 6, 2, 3, 3, 4, 4, 5, 5, 6, 7, 9, 0, 1, 0, 3, 0, 4, 1, 2, 2, 3, 2, 4,
    3, 6, 4, 5, 5, 6, 7, 9, 0, 1, 0, 5, 1, 2, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 5, 6, 7, 9, 0, 1, 0, 4,
    1, 2, 1, 6, 2, 3, 3, 4, 3, 5, 4, 5, 5, 6, 7, 9, 0, 1, 0, 5, 0, 6, 1, 2, 2, 3, 2, 6, 3, 4, 4, 5,
    4, 6, 7, 9, 0, 3, 0, 4, 1, 2, 1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 5, 6, 7, 10, 0, 1, 0, 2, 0, 3, 0,
    4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 7, 10, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4,
    3, 4, 4, 5, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 7, 10, 0, 1, 0,
    4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 10, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5,
    2, 3, 3, 4, 3, 5, 4, 5, 7, 10, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4, 4, 5, 7,
    10, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 4, 5, 7, 10, 0, 2, 0, 3, 0, 5, 1, 2,
    1, 3, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 10, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2,
    5, 3, 4, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 7, 10, 0, 1, 0, 2,
    1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 4, 5, 7, 10, 0, 1, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2,
    5, 3, 4, 3, 5, 4, 5, 7, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 7, 10,
    0, 1, 0, 2, 0, 3, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 7, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1,
    3, 1, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 10, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 2, 5,
    2, 6, 7, 10, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 7, 10, 0, 1, 0, 2, 0,
    3, 0, 4, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0, 6, 1, 2, 1, 3,
    1, 5, 2, 3, 2, 5, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 3, 6, 7, 10, 0,
    1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 7, 10, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3,
    2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 7, 10, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 2, 6, 4,
    5, 7, 10, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 10, 0, 1, 0, 2, 0, 4,
    0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 4, 5, 5, 6, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 2,
    3, 2, 5, 5, 6, 7, 10, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 4, 6, 7, 10, 0, 1,
    0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 4, 5, 5, 6, 7, 10, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1,
    4, 2, 3, 2, 4, 3, 4, 5, 6, 7, 10, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6,
    7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 7, 10, 0, 1, 0, 2, 0, 3, 0,
    4, 0, 5, 1, 2, 2, 3, 2, 5, 2, 6, 3, 4, 7, 10, 0, 4, 0, 5, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 3, 4,
    3, 5, 4, 5, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 3, 6, 7, 10, 0, 1, 0,
    2, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 3, 4, 4, 5, 7, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4,
    1, 5, 1, 6, 3, 4, 4, 5, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 2, 3, 4, 5, 7,
    10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 3, 6, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4,
    0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 5, 6, 7, 10, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 3, 4, 3,
    6, 4, 5, 7, 10, 0, 1, 0, 2, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 3, 4, 4, 5, 7, 10, 0, 2, 0, 4,
    0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 7, 10, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 5, 2,
    3, 2, 5, 2, 6, 4, 6, 7, 10, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 2, 6, 3, 4, 7, 10,
    0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 3, 4, 4, 5, 5, 6, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0,
    5, 1, 2, 2, 3, 2, 5, 3, 4, 4, 6, 7, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4, 3, 6,
    4, 5, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 2, 6, 4, 5, 7, 10, 0, 2, 0, 4, 0,
    5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 5, 6, 7, 10, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3,
    2, 6, 3, 4, 4, 5, 7, 10, 0, 2, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 7, 10, 0,
    1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 3, 5, 7, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3,
    2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 7, 10, 0, 1, 0, 2, 0, 3, 0, 6, 1, 2, 1, 3, 1, 5, 2, 3, 2, 5, 4,
    6, 7, 10, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 5, 6, 7, 10, 0, 1, 0, 2, 0, 4,
    0, 5, 1, 2, 1, 3, 1, 4, 3, 4, 4, 5, 5, 6, 7, 10, 0, 2, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 2, 4, 2,
    5, 3, 4, 3, 5, 7, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 6, 3, 4, 4, 5, 7, 10, 0, 1,
    0, 3, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 4, 5, 7, 10, 0, 1, 0, 4, 0, 5, 1, 2, 2, 3, 2,
    5, 3, 4, 3, 5, 4, 5, 5, 6, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4,
    7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 4, 5, 5, 6, 7, 10, 0, 1, 0, 3, 0, 4, 1,
    2, 1, 4, 2, 3, 2, 4, 3, 4, 4, 6, 5, 6, 7, 10, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3,
    3, 4, 4, 5, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 4, 6, 7, 10, 0, 1, 0,
    4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 4, 6, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5,
    2, 3, 2, 6, 3, 4, 3, 5, 7, 10, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 7,
    10, 0, 1, 0, 3, 0, 5, 1, 2, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 5, 6, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5,
    1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 7, 10, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3,
    4, 3, 6, 7, 10, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 10, 0, 1, 1, 2,
    1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 4, 5, 4, 6, 7, 10, 0, 1, 0, 3, 0, 5, 0, 6, 1, 2, 2, 3, 2,
    4, 2, 5, 3, 4, 4, 5, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 6, 7, 10,
    0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 2, 6, 3, 4, 7, 10, 0, 1, 0, 2, 0, 3, 1, 2, 1,
    3, 1, 5, 2, 3, 2, 5, 4, 6, 5, 6, 7, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3, 2, 4, 3, 4,
    4, 5, 7, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4, 4, 5, 5, 6, 7, 10, 0, 2, 0, 4, 0,
    5, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 3, 4, 3, 5, 7, 10, 0, 1, 0, 4, 0, 5, 1, 2, 1, 6, 2, 3, 2, 5,
    3, 4, 3, 5, 4, 5, 7, 10, 0, 1, 0, 3, 0, 5, 1, 2, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 10, 0,
    1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 4, 6, 7, 10, 0, 1, 0, 2, 0, 3, 1, 4, 1, 5,
    2, 3, 2, 5, 3, 4, 4, 5, 4, 6, 7, 10, 0, 1, 0, 3, 0, 5, 0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4,
    5, 7, 10, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 7, 10, 0, 2, 0, 5, 1, 2,
    1, 5, 2, 3, 2, 4, 2, 5, 3, 6, 4, 5, 5, 6, 7, 10, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1,
    4, 1, 5, 1, 6, 7, 10, 0, 5, 0, 6, 1, 2, 1, 6, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 10, 0, 1,
    0, 5, 0, 6, 1, 6, 2, 3, 2, 6, 3, 4, 3, 6, 4, 6, 5, 6, 7, 10, 0, 1, 0, 2, 0, 5, 1, 2, 1, 4, 1,
    6, 2, 3, 2, 5, 2, 6, 3, 4, 7, 10, 0, 1, 0, 2, 0, 5, 0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 4,
    7, 10, 0, 4, 0, 5, 1, 2, 1, 6, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 10, 0, 1, 0, 2, 1, 2, 1,
    6, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 4, 6, 7, 10, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4,
    2, 5, 2, 6, 7, 10, 0, 2, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 6, 3, 6, 4, 5, 5, 6, 7, 10, 0, 1, 0,
    2, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 2, 6, 3, 4, 7, 10, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 2, 3,
    2, 6, 3, 4, 4, 5, 4, 6, 7, 10, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7,
    10, 0, 1, 0, 2, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 3, 4, 4, 5, 5, 6, 7, 10, 0, 5, 0, 6, 1, 2, 1, 6,
    2, 3, 2, 6, 3, 4, 4, 5, 4, 6, 5, 6, 7, 10, 0, 1, 0, 5, 0, 6, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 4,
    6, 5, 6, 7, 10, 0, 1, 0, 4, 0, 5, 1, 2, 1, 6, 2, 3, 2, 5, 3, 5, 4, 5, 5, 6, 7, 10, 0, 2, 0, 3,
    0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 2, 4, 3, 4, 5, 6, 7, 10, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1,
    3, 1, 4, 3, 4, 5, 6, 7, 10, 0, 1, 0, 5, 0, 6, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 4, 6, 5, 6, 7, 10,
    0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 5, 2, 6, 5, 6, 7, 10, 0, 1, 0, 2, 0, 4, 0, 6, 1,
    4, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 7, 10, 0, 2, 0, 4, 0, 6, 1, 4, 1, 5, 2, 4, 2, 5, 3, 5, 3, 6,
    4, 5, 7, 10, 0, 3, 0, 4, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4, 3, 5, 4, 5, 5, 6, 7, 10, 0, 1, 0, 4, 1,
    2, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 7, 10, 0, 1, 0, 2, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4,
    4, 5, 4, 6, 5, 6, 7, 10, 0, 1, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 3, 6, 4, 5, 5, 6, 7, 10, 0,
    1, 0, 2, 0, 4, 0, 5, 1, 4, 2, 3, 2, 5, 2, 6, 3, 6, 5, 6, 7, 10, 0, 1, 0, 4, 1, 2, 1, 5, 1, 6,
    2, 3, 3, 4, 3, 5, 4, 5, 5, 6, 7, 10, 0, 1, 0, 5, 1, 2, 1, 4, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 5,
    6, 7, 10, 0, 1, 0, 2, 1, 2, 1, 4, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 4, 6, 7, 10, 0, 1, 0, 2, 0, 4,
    0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 4, 5, 5, 6, 7, 10, 0, 1, 0, 2, 0, 3, 0, 4, 1, 5, 2, 5, 3, 4, 3,
    5, 4, 6, 5, 6, 7, 10, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 6, 3, 4, 4, 5, 5, 6, 7, 10, 0, 3,
    0, 4, 0, 5, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 3, 4, 5, 6, 7, 10, 0, 1, 0, 4, 1, 2, 2, 3, 3, 4, 3,
    5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 10, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4,
    7, 10, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 6, 3, 4, 4, 5, 4, 6, 7, 10, 0, 1, 0, 3, 0, 5, 0,
    6, 1, 4, 1, 5, 2, 3, 2, 4, 4, 5, 4, 6, 7, 10, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 3, 5, 3, 6,
    4, 5, 4, 6, 7, 10, 0, 1, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 6, 5, 6, 7, 10, 0, 1, 0,
    4, 1, 2, 1, 4, 2, 3, 2, 5, 3, 5, 3, 6, 4, 5, 5, 6, 7, 10, 0, 1, 0, 5, 1, 2, 1, 6, 2, 3, 2, 4,
    2, 6, 3, 4, 4, 5, 5, 6, 7, 10, 0, 1, 0, 4, 0, 5, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 4, 6, 5, 6, 7,
    10, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 6, 3, 4, 3, 6, 4, 5, 7, 10, 0, 1, 0, 5, 0, 6, 1, 2,
    2, 3, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 10, 0, 1, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 4,
    5, 4, 6, 7, 10, 0, 1, 0, 2, 0, 5, 0, 6, 1, 2, 2, 3, 3, 4, 4, 5, 4, 6, 5, 6, 7, 10, 0, 1, 0, 5,
    0, 6, 1, 2, 1, 6, 2, 3, 3, 4, 3, 6, 4, 5, 5, 6, 7, 10, 0, 2, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 1,
    6, 2, 3, 3, 4, 5, 6, 7, 10, 0, 1, 0, 4, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 3, 5, 4, 6, 5, 6, 7, 10,
    0, 1, 0, 5, 0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 4, 5, 5, 6, 7, 10, 0, 3, 0, 4, 0, 5, 0, 6, 1,
    2, 1, 3, 1, 5, 2, 4, 2, 6, 4, 6, 7, 10, 0, 1, 0, 5, 1, 2, 1, 6, 2, 3, 2, 6, 3, 4, 4, 5, 4, 6,
    5, 6, 7, 10, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 6, 2, 4, 3, 4, 4, 5, 4, 6, 7, 10, 0, 1, 0, 5, 1,
    5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 4, 6, 5, 6, 7, 10, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4,
    2, 5, 2, 6, 5, 6, 7, 10, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 10, 0,
    3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 3, 6, 4, 5, 5, 6, 7, 10, 0, 1, 0, 5, 0, 6, 1, 2, 1, 6,
    2, 3, 2, 4, 3, 4, 4, 5, 5, 6, 7, 10, 0, 1, 0, 3, 0, 5, 1, 2, 1, 5, 2, 3, 2, 6, 3, 6, 4, 5, 4,
    6, 7, 10, 0, 1, 0, 5, 0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 3, 6, 4, 5, 7, 11, 0, 1, 0, 2, 0, 3,
    0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 7, 11, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 4, 1,
    5, 2, 3, 2, 4, 2, 5, 3, 5, 7, 11, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4,
    4, 5, 7, 11, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5, 4, 5, 7, 11, 0, 1, 0,
    2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 5, 3, 4, 3, 5, 4, 5, 7, 11, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5,
    2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 5, 1, 6, 2,
    6, 3, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 7, 11,
    0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 11, 0, 1, 0, 3, 0, 4, 1,
    2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3,
    2, 4, 3, 4, 3, 5, 4, 6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 3, 4, 4,
    6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 7, 11, 0, 1, 0, 3,
    0, 4, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 3, 4, 7, 11, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1,
    3, 1, 4, 2, 3, 2, 4, 3, 4, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5,
    4, 5, 4, 6, 7, 11, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 3, 4, 3, 5, 4, 5, 7, 11, 0,
    1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 3, 5, 4, 5, 4, 6, 7, 11, 0, 1, 0, 4, 0, 5, 1, 4,
    1, 5, 1, 6, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 11, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 2, 3, 2,
    4, 2, 6, 3, 4, 4, 5, 7, 11, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 3, 5, 4, 5, 5, 6,
    7, 11, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 4, 5, 7, 11, 0, 1, 0, 4, 0,
    5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 3, 4, 4, 5, 7, 11, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3,
    2, 4, 2, 5, 3, 4, 3, 6, 4, 5, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 4,
    5, 4, 6, 7, 11, 0, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1,
    0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 7, 11, 0, 2, 0, 3, 0, 5, 0, 6, 1,
    2, 1, 3, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 1, 6,
    2, 3, 2, 5, 3, 4, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 4, 5, 5, 6, 7,
    11, 0, 1, 0, 4, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 3, 4, 3, 5, 4, 5, 7, 11, 0, 1, 0, 2, 1, 3,
    1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 4, 5, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1,
    5, 2, 3, 3, 4, 3, 6, 4, 5, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 2, 6,
    3, 4, 7, 11, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 5, 6, 7, 11, 0, 1, 0,
    3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 5, 6, 7, 11, 0, 1, 0, 2, 1, 3, 1, 4, 1, 5,
    2, 3, 2, 4, 2, 5, 3, 5, 4, 5, 5, 6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3,
    4, 4, 5, 5, 6, 7, 11, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 7, 11,
    0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 3, 4, 4, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0,
    5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 3, 4, 5, 6, 7, 11, 0, 1, 0, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4,
    2, 5, 3, 5, 4, 5, 4, 6, 7, 11, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3, 2, 4, 3, 4, 4,
    5, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 3, 4, 5, 6, 7, 11, 0, 1, 0, 4,
    0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7, 11, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1,
    5, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4,
    3, 5, 4, 5, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 6, 3, 4, 4, 5, 7, 11, 0,
    2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 7, 11, 0, 6, 1, 4, 1, 5, 1, 6,
    2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 6, 2,
    5, 3, 4, 3, 5, 4, 5, 7, 11, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 5, 6,
    7, 11, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 3, 6, 4, 5, 7, 11, 0, 1, 0, 3, 0,
    4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 4, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4,
    1, 5, 2, 3, 2, 5, 3, 4, 3, 6, 7, 11, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 3,
    4, 4, 5, 7, 11, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 11, 0, 1,
    0, 2, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 4, 5, 7, 11, 0, 6, 1, 4, 1, 5, 1, 6, 2,
    4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 7, 11, 0, 5, 0, 6, 1, 5, 1, 6, 2, 5, 2, 6, 3, 5, 3, 6,
    4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 7,
    11, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 3, 4, 3, 5, 4, 6, 7, 11, 0, 3, 0, 6, 1, 3,
    1, 4, 2, 3, 2, 4, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 5, 1, 2, 2, 3, 2, 4, 2,
    5, 2, 6, 3, 4, 4, 5, 4, 6, 7, 11, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 3, 4, 3, 6,
    4, 5, 7, 11, 0, 1, 0, 2, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 11, 0, 2, 0,
    5, 1, 2, 1, 4, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 2, 3,
    2, 4, 2, 5, 2, 6, 3, 4, 4, 5, 4, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2, 1, 6, 2, 3, 2,
    5, 2, 6, 3, 4, 7, 11, 0, 5, 0, 6, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 4, 5, 4, 6, 5, 6, 7, 11,
    0, 5, 0, 6, 1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 11, 0, 5, 0, 6, 1, 2, 1,
    6, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 6, 1, 2, 2, 3, 2, 4,
    2, 5, 3, 4, 4, 5, 5, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 6, 1, 2, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 5,
    6, 7, 11, 0, 1, 0, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 4, 5, 7, 11, 0, 1, 0, 5,
    1, 2, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 4, 5, 4, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1,
    2, 2, 3, 2, 6, 3, 4, 4, 5, 4, 6, 7, 11, 0, 1, 0, 4, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 3, 4, 3, 5,
    4, 5, 5, 6, 7, 11, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 11, 0,
    5, 0, 6, 1, 4, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 11, 0, 1, 0, 4, 1, 2, 1, 4,
    1, 5, 2, 3, 2, 4, 2, 5, 3, 6, 4, 5, 5, 6, 7, 11, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2,
    4, 2, 5, 2, 6, 3, 4, 7, 11, 0, 1, 0, 5, 0, 6, 1, 6, 2, 3, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6,
    7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 5, 2, 6, 5, 6, 7, 11, 0, 1, 0, 3, 0,
    4, 1, 2, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2,
    2, 3, 2, 5, 3, 4, 3, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 3, 4, 3, 6, 4,
    5, 4, 6, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 4, 6, 5, 6, 7, 11, 0, 1,
    0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 6, 3, 4, 3, 6, 4, 5, 7, 11, 0, 1, 0, 5, 0, 6, 1, 2, 2,
    3, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4, 3, 5,
    3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0, 3, 0, 6, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7,
    11, 0, 1, 0, 2, 0, 6, 1, 3, 1, 5, 2, 3, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 7, 11, 0, 2, 0, 3, 0, 4,
    0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 5, 6, 7, 11, 0, 1, 0, 5, 1, 2, 1, 4, 2, 3, 2, 4, 2,
    6, 3, 4, 3, 6, 4, 5, 4, 6, 7, 11, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6,
    5, 6, 7, 11, 0, 1, 0, 4, 1, 2, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0,
    3, 0, 4, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 4, 6, 5, 6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3,
    1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 5, 6, 7, 11, 0, 1, 0, 3, 0, 5, 1, 5, 1, 6, 2, 5, 2, 6, 3, 5, 3,
    6, 4, 5, 4, 6, 7, 11, 0, 1, 0, 2, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 6, 7, 11,
    0, 1, 0, 2, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 5, 3, 6, 4, 6, 5, 6, 7, 11, 0, 1, 0, 4, 1, 2, 1,
    4, 1, 5, 2, 3, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 6,
    3, 4, 3, 5, 3, 6, 5, 6, 7, 11, 0, 1, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 3, 6, 4, 5, 4, 6, 5,
    6, 7, 11, 0, 1, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 4, 5, 5, 6, 7, 11, 0, 1, 0, 3,
    0, 4, 1, 2, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7, 11, 0, 1, 0, 5, 1, 2, 1, 5, 1, 6, 2,
    3, 2, 6, 3, 4, 4, 5, 4, 6, 5, 6, 7, 11, 0, 3, 0, 6, 1, 2, 1, 5, 2, 4, 2, 6, 3, 4, 3, 5, 4, 5,
    4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 5, 0, 6, 1, 5, 2, 3, 2, 4, 2, 6, 3, 4, 4, 6, 5, 6, 7, 11, 0,
    1, 0, 4, 0, 6, 1, 2, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 11, 0, 3, 0, 4, 0, 6, 1, 3,
    1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 5, 4, 5, 7, 11, 0, 5, 0, 6, 1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 3,
    4, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 3, 0, 6, 1, 2, 1, 3, 1, 6, 2, 6, 3, 5, 4, 5, 4, 6,
    7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0, 2, 1,
    4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 11, 0, 5, 0, 6, 1, 4, 1, 6, 2, 4, 2, 5,
    2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 7, 11, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 2, 3, 2, 6, 3, 4, 3, 6, 4,
    5, 4, 6, 7, 11, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 6, 3, 5, 4, 5, 4, 6, 7, 11, 0, 1,
    0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1,
    3, 1, 4, 2, 4, 2, 5, 2, 6, 3, 4, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 6, 2, 3, 2, 5, 3, 4,
    3, 5, 4, 5, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 5, 3, 6, 4, 5, 5, 6, 7,
    11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5,
    1, 2, 1, 5, 2, 3, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 7, 11, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1,
    6, 2, 5, 2, 6, 3, 4, 5, 6, 7, 11, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 3, 6, 4, 5,
    5, 6, 7, 11, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 2, 3, 2, 4, 3, 5, 3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0,
    2, 0, 3, 0, 6, 1, 4, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 7, 11, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2,
    1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 7, 11, 0, 3, 0, 4, 1, 2, 1, 5, 1, 6, 2, 4, 2, 6, 3, 5, 3,
    6, 4, 5, 5, 6, 7, 11, 0, 1, 0, 4, 0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 3, 5, 4, 6, 5, 6, 7, 11,
    0, 1, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 5, 6, 7, 11, 0, 3, 0, 4, 1, 2, 1,
    3, 1, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4, 1, 5,
    2, 3, 2, 4, 2, 5, 5, 6, 7, 11, 0, 3, 0, 4, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 6, 4, 5, 5,
    6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 5, 6, 7, 11, 0, 1, 0, 4,
    0, 5, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 6, 4, 5, 5, 6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 6, 2,
    3, 2, 4, 3, 4, 3, 5, 4, 5, 5, 6, 7, 11, 0, 1, 0, 4, 1, 2, 1, 4, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5,
    4, 5, 5, 6, 7, 11, 0, 1, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 7, 11, 0,
    1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 4, 5, 7, 11, 0, 3, 0, 4, 1, 2, 1, 5,
    1, 6, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 7, 11, 0, 1, 0, 3, 0, 4, 1, 2, 1, 5, 2, 3, 2, 4, 3,
    5, 3, 6, 4, 5, 4, 6, 7, 11, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 6, 4, 5,
    7, 11, 0, 3, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 7, 11, 0, 1, 0, 2, 0,
    4, 0, 5, 1, 3, 1, 4, 2, 3, 2, 5, 3, 6, 4, 6, 5, 6, 7, 11, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 6,
    2, 6, 3, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3,
    4, 3, 5, 4, 5, 7, 12, 0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 5, 1, 6, 2, 6, 3, 6, 5, 6,
    7, 12, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 12, 0, 1, 0,
    2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 4, 5, 7, 12, 0, 1, 0, 2, 0, 4, 0, 5,
    1, 2, 1, 3, 1, 5, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1,
    4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4,
    3, 4, 3, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3,
    5, 7, 12, 0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 7, 12, 0, 1,
    0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0,
    5, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 7, 12, 0, 1, 0, 2, 0, 3, 0, 6, 1, 2, 1, 3,
    1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2,
    3, 2, 4, 3, 4, 4, 5, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 6, 3, 4,
    4, 5, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 3, 5, 4, 5, 7, 12, 0,
    1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5, 4, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 3,
    0, 4, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 3, 4, 5, 6, 7, 12, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1,
    4, 1, 5, 1, 6, 2, 5, 3, 4, 3, 5, 4, 5, 7, 12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 5,
    3, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 6, 3,
    6, 5, 6, 7, 12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 7, 12,
    0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0,
    5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5,
    1, 2, 1, 3, 1, 5, 1, 6, 2, 6, 3, 6, 5, 6, 7, 12, 0, 2, 0, 4, 0, 5, 1, 3, 1, 4, 1, 5, 2, 3, 2,
    4, 2, 5, 3, 4, 3, 6, 4, 5, 7, 12, 0, 2, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5,
    3, 4, 4, 5, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 4, 5, 5, 6, 7,
    12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5, 5, 6, 7, 12, 0, 1, 0, 2,
    0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 4, 0, 5, 0,
    6, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 7, 12, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 5,
    1, 6, 2, 6, 3, 6, 4, 5, 5, 6, 7, 12, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3,
    4, 3, 5, 3, 6, 7, 12, 0, 1, 0, 3, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 4, 5,
    7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 3, 0,
    6, 1, 3, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 4, 1, 2, 1, 4,
    1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 4, 5, 4, 6, 7, 12, 0, 3, 0, 5, 1, 4, 1, 5, 2, 3, 2, 4, 3,
    4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 2, 0, 3, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3, 2, 4,
    3, 4, 3, 5, 3, 6, 7, 12, 0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3,
    6, 7, 12, 0, 1, 0, 4, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 4, 5, 5, 6, 7, 12, 0, 1,
    0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0,
    5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3,
    1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 4, 5, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 4, 2, 5, 3,
    4, 3, 6, 4, 5, 4, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4,
    2, 6, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 2, 3, 2, 4, 2, 5, 2, 6, 4, 5, 4, 6, 7, 12, 0,
    1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 3,
    0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1,
    2, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 4, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5,
    1, 6, 2, 3, 2, 4, 4, 5, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 6, 2, 3, 2,
    4, 2, 5, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12,
    0, 3, 0, 5, 0, 6, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 5, 6, 7, 12, 0, 1, 0, 3, 0,
    4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3,
    1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 4, 6, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2,
    4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4,
    3, 5, 4, 5, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 6, 4, 6, 7,
    12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 4, 5, 5, 6, 7, 12, 0, 1, 0, 2,
    0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 1, 6, 2, 4, 3, 4, 3, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 0,
    6, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 3, 6, 4, 5, 7, 12, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5,
    2, 3, 2, 5, 2, 6, 3, 6, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2,
    6, 3, 5, 4, 6, 7, 12, 0, 1, 0, 2, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5,
    7, 12, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 4, 3, 4, 3, 6, 4, 5, 5, 6, 7, 12, 0, 1, 0,
    2, 0, 3, 1, 2, 1, 3, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 1, 4, 1,
    5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 7, 12, 0, 1, 0, 4, 1, 2, 1, 5, 1, 6, 2, 3, 3, 4, 3, 5, 3, 6,
    4, 5, 4, 6, 5, 6, 7, 12, 0, 5, 0, 6, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4,
    6, 7, 12, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 5, 6, 7, 12, 0, 1,
    0, 5, 0, 6, 1, 5, 1, 6, 2, 3, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 4, 0, 5, 1,
    2, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 1, 5,
    2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 2, 0, 5, 1, 2, 1, 4, 1, 5, 1, 6, 2, 5, 3,
    4, 3, 5, 3, 6, 4, 5, 7, 12, 0, 4, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 5, 4, 5, 4, 6,
    5, 6, 7, 12, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 12, 0,
    1, 0, 2, 0, 3, 1, 2, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 5, 4, 6, 7, 12, 0, 1, 0, 3, 0, 4,
    1, 2, 1, 5, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1,
    4, 1, 6, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 1, 4, 1, 5, 1, 6,
    2, 3, 2, 4, 3, 4, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2,
    6, 4, 6, 7, 12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 5, 4, 5, 7, 12,
    0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 5, 4, 5, 4, 6, 7, 12, 0, 1, 0, 3, 0,
    5, 0, 6, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 5, 4, 5, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 5,
    2, 3, 2, 4, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 7, 12, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2,
    4, 3, 5, 3, 6, 4, 5, 5, 6, 7, 12, 0, 3, 0, 5, 1, 2, 1, 5, 1, 6, 2, 4, 2, 6, 3, 4, 3, 6, 4, 5,
    4, 6, 5, 6, 7, 12, 0, 3, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7,
    12, 0, 1, 0, 4, 0, 6, 1, 2, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 1, 0, 2,
    0, 3, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 4, 6, 7, 12, 0, 1, 0, 2, 0, 5, 1, 2, 1,
    3, 1, 4, 1, 6, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 7, 12, 0, 3, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 2, 3,
    2, 4, 2, 6, 3, 4, 3, 6, 4, 6, 7, 12, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 3,
    5, 3, 6, 4, 5, 7, 12, 0, 3, 0, 5, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 6, 5, 6,
    7, 12, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 6, 3, 6, 4, 6, 7, 12, 0, 5, 0,
    6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2, 6, 3, 5, 4, 5, 4, 6, 5, 6, 7, 12, 0, 3, 0, 5, 1, 2, 1, 4,
    1, 6, 2, 4, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 3, 0, 6, 1, 4, 1, 5, 1, 6, 2, 4, 2,
    5, 2, 6, 3, 4, 3, 5, 4, 6, 5, 6, 7, 12, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 5, 3, 6, 4, 6, 7, 12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 4,
    5, 7, 12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 2,
    0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 5, 0, 6, 1, 3, 1,
    4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 5, 5, 6, 7, 12, 0, 1, 0, 3, 0, 5, 1, 2, 1, 4, 2, 3,
    2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 5, 6, 7, 12, 0, 2, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 3, 4, 3, 5, 3,
    6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 2, 0, 6, 1, 3, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 6,
    5, 6, 7, 12, 0, 2, 0, 6, 1, 3, 1, 4, 1, 5, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0,
    5, 0, 6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 4, 5, 5, 6, 7, 12, 0, 5, 0, 6, 1, 2,
    1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 3, 0, 4, 0, 6, 1, 5, 1, 6, 2,
    3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 7, 12, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5,
    3, 6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 2, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4,
    6, 5, 6, 7, 12, 0, 3, 0, 4, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 6, 7, 12,
    0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 6, 4, 6, 5, 6, 7, 12, 0, 3, 0, 4, 0,
    6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 5, 6, 7, 12, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4,
    1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 6, 7, 12, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 3, 2,
    6, 3, 5, 4, 5, 4, 6, 5, 6, 7, 12, 0, 3, 0, 4, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 6,
    4, 5, 4, 6, 7, 12, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 3, 4, 3, 6, 5, 6, 7,
    12, 0, 3, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 4, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 7, 12, 0, 3, 0, 5,
    0, 6, 1, 2, 1, 4, 1, 6, 2, 3, 2, 5, 3, 4, 4, 5, 4, 6, 5, 6, 7, 12, 0, 3, 0, 5, 0, 6, 1, 2, 1,
    5, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 1, 3, 1, 4, 2, 3, 2, 4,
    2, 5, 2, 6, 3, 6, 4, 5, 5, 6, 7, 12, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 5, 3,
    6, 4, 5, 4, 6, 7, 12, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 4, 5, 4, 6,
    7, 12, 0, 3, 0, 4, 0, 6, 1, 3, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 12, 0, 1, 0,
    4, 0, 5, 1, 4, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 12, 0, 1, 0, 2, 0, 4, 0, 5,
    1, 3, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 4, 6, 5, 6, 7, 12, 0, 1, 0, 5, 0, 6, 1, 2, 1, 6, 2, 3, 2,
    6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 12, 0, 3, 0, 4, 0, 6, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 3, 4,
    3, 6, 4, 5, 4, 6, 7, 13, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4,
    6, 5, 6, 7, 13, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6,
    7, 13, 0, 6, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0,
    1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2,
    0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 4, 3, 4, 4, 5, 7, 13, 0, 1, 0, 2, 0, 3, 0,
    4, 0, 5, 0, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 6, 4, 5, 5, 6, 7, 13, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3,
    2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 3, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2,
    6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 2, 5, 2, 6,
    3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3,
    5, 3, 6, 4, 5, 5, 6, 7, 13, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5,
    4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4,
    5, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 5, 6, 7, 13,
    0, 5, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 6, 5, 6, 7, 13, 0, 6, 1,
    3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 5, 0, 6,
    1, 2, 1, 5, 1, 6, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0,
    5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 6, 7, 13, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 1, 3,
    1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 7, 13, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1,
    4, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 7, 13, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3,
    2, 4, 3, 4, 3, 5, 4, 6, 7, 13, 0, 5, 0, 6, 1, 3, 1, 4, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4,
    5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5,
    4, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 5, 6, 7,
    13, 0, 4, 0, 6, 1, 3, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 5,
    0, 6, 1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 5, 6, 7, 13, 0, 5, 0, 6, 1,
    3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4,
    1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 4, 6, 5, 6, 7, 13, 0, 5, 0, 6, 1, 5, 1, 6, 2, 3, 2,
    4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5,
    1, 6, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7, 13, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 2, 3, 2,
    4, 3, 4, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 5, 2, 6,
    3, 4, 3, 5, 4, 5, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2,
    4, 5, 6, 7, 13, 0, 1, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6,
    7, 13, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 13, 0,
    3, 0, 6, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 13, 0, 3, 0, 4,
    1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0,
    4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 4, 2, 5, 3, 5, 3, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1,
    2, 1, 3, 1, 4, 2, 3, 2, 5, 3, 6, 4, 5, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3,
    1, 6, 2, 4, 2, 5, 3, 4, 3, 5, 7, 13, 0, 2, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 3,
    6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 6, 4, 5, 7, 13, 0, 4, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 5,
    6, 7, 13, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 6, 2, 5, 3, 4, 3, 5, 4, 5, 4, 6, 7, 13,
    0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 4, 5, 5, 6, 7, 13, 0, 1, 0,
    2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 4, 6, 7, 13, 0, 1, 0, 2, 0, 3,
    0, 5, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 2, 6, 3, 4, 4, 5, 5, 6, 7, 13, 0, 3, 0, 4, 0, 5, 1, 3, 1,
    4, 1, 5, 2, 3, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 2, 0, 6, 1, 3, 1, 4, 1, 5, 2, 5,
    2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2,
    4, 2, 5, 3, 4, 3, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 5,
    3, 4, 3, 5, 4, 5, 4, 6, 7, 13, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2,
    4, 3, 6, 4, 5, 7, 13, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6,
    5, 6, 7, 13, 0, 1, 0, 2, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7,
    13, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 7, 13, 0, 1,
    0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 2, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 5, 0, 6, 1,
    4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 7, 13, 0, 5, 0, 6, 1, 3, 1, 4,
    1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1,
    2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 5, 4, 6, 5, 6, 7, 13, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 4, 2, 5,
    2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 13, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 5, 2,
    3, 2, 4, 3, 4, 4, 5, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 4, 1, 5, 2, 3, 2, 5, 2, 6,
    3, 4, 3, 6, 4, 5, 7, 13, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4,
    5, 4, 6, 7, 13, 0, 1, 0, 6, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6,
    7, 13, 0, 1, 0, 6, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0,
    1, 0, 4, 0, 5, 0, 6, 1, 2, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2,
    0, 4, 0, 6, 1, 2, 2, 3, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 3, 0, 4, 1,
    2, 1, 3, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 13, 0, 1, 0, 4, 0, 5, 1, 2, 1, 5,
    2, 3, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 3, 0, 6, 1, 2, 1, 3, 1, 4, 1,
    5, 1, 6, 2, 3, 2, 6, 3, 4, 4, 5, 5, 6, 7, 13, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3,
    1, 4, 2, 5, 2, 6, 3, 5, 4, 6, 7, 13, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 3,
    4, 3, 5, 3, 6, 5, 6, 7, 13, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 1, 4, 2, 3, 2, 5, 3, 4, 3, 5, 3, 6,
    4, 5, 4, 6, 7, 13, 0, 1, 0, 4, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 5,
    6, 7, 13, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 13,
    0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0,
    2, 0, 5, 1, 2, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 5, 0, 6,
    1, 2, 1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 1, 0, 2, 0, 4, 0, 5, 0,
    6, 1, 3, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 4, 6, 5, 6, 7, 13, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6,
    2, 3, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0, 2, 0, 3, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1,
    6, 2, 3, 2, 5, 3, 4, 4, 5, 4, 6, 7, 13, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5,
    2, 6, 3, 4, 4, 5, 5, 6, 7, 13, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3,
    5, 3, 6, 4, 6, 7, 13, 0, 3, 0, 4, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5,
    4, 6, 7, 13, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7,
    13, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 6, 5, 6, 7, 13, 0, 2,
    0, 5, 0, 6, 1, 2, 1, 4, 1, 6, 2, 3, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 5, 0,
    6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 6, 7, 13, 0, 2, 0, 5, 0, 6, 1, 2,
    1, 3, 1, 4, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 13, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1,
    4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 7, 13, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5,
    1, 6, 2, 3, 3, 4, 3, 6, 4, 5, 4, 6, 7, 13, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 3, 2, 5, 2,
    6, 3, 4, 3, 5, 4, 5, 4, 6, 7, 13, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 5, 3, 6, 4, 5, 7, 13, 0, 1, 0, 3, 0, 4, 1, 2, 1, 4, 2, 3, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4,
    6, 5, 6, 7, 13, 0, 1, 0, 5, 0, 6, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6,
    7, 13, 0, 1, 0, 5, 0, 6, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 7, 13, 0,
    1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 3, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2,
    0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 14, 0, 1, 0, 2, 0,
    3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 4, 5, 7, 14, 0, 6, 1, 3, 1, 4,
    1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0,
    4, 0, 5, 0, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 14, 0, 6, 1, 3, 1, 4, 1, 5,
    1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 14, 0, 3, 1, 2, 1, 4, 1, 5, 1,
    6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2,
    1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1,
    2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 6, 1, 2,
    1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1,
    2, 1, 3, 1, 4, 1, 5, 2, 4, 3, 4, 4, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2,
    1, 3, 1, 4, 1, 5, 1, 6, 3, 4, 3, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 6, 2,
    5, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 4, 2, 5,
    2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1,
    5, 2, 5, 3, 4, 3, 5, 4, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6,
    2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 6, 2, 5, 2, 6, 3,
    4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 14, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4,
    3, 5, 3, 6, 4, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3,
    5, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 4, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 5, 2, 6, 3, 4,
    3, 5, 4, 5, 5, 6, 7, 14, 0, 3, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4,
    5, 4, 6, 5, 6, 7, 14, 0, 3, 0, 6, 1, 2, 1, 4, 1, 5, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5,
    4, 6, 5, 6, 7, 14, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4,
    5, 4, 6, 7, 14, 0, 1, 0, 6, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6,
    5, 6, 7, 14, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5,
    6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 6, 4, 6,
    7, 14, 0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7,
    14, 0, 4, 0, 6, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 14,
    0, 4, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 5, 6, 7, 14, 0,
    5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 14, 0, 1,
    0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 5, 3, 4, 4, 6, 5, 6, 7, 14, 0, 2, 0,
    3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 3, 4, 4, 5, 7, 14, 0, 1, 0, 5,
    0, 6, 1, 2, 1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0,
    3, 0, 4, 0, 5, 0, 6, 1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 14, 0, 1, 0, 2, 0, 4,
    0, 5, 0, 6, 1, 3, 1, 6, 2, 3, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 14, 0, 3, 0, 4, 0, 5, 0,
    6, 1, 3, 1, 4, 1, 6, 2, 4, 2, 5, 2, 6, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 6, 4, 5, 7, 14, 0, 3, 0, 4, 0, 6, 1, 4, 1,
    5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 4, 1, 5, 2, 3, 2, 6, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 4, 0, 6, 1, 3, 1, 6, 2,
    3, 2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6,
    2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 14, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2,
    3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3,
    2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 6, 2,
    4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 6, 5, 6, 7, 14, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1, 6, 2, 4, 2, 5,
    2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 6, 2,
    5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 14, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 5, 1, 6, 2, 3,
    2, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 14, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2,
    5, 3, 5, 3, 6, 4, 5, 5, 6, 7, 14, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4,
    3, 5, 4, 5, 4, 6, 5, 6, 7, 14, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3,
    4, 3, 6, 4, 5, 5, 6, 7, 14, 0, 3, 0, 4, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 2, 5, 2, 6, 3, 5, 3, 6,
    4, 5, 4, 6, 5, 6, 7, 14, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3,
    6, 4, 5, 5, 6, 7, 14, 0, 1, 0, 5, 0, 6, 1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6,
    4, 5, 5, 6, 7, 14, 0, 1, 0, 4, 0, 6, 1, 3, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4,
    6, 5, 6, 7, 14, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5,
    4, 6, 7, 14, 0, 1, 0, 5, 0, 6, 1, 3, 1, 4, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5,
    6, 7, 14, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 2, 3, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6,
    7, 14, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7,
    14, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 7, 14,
    0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 6, 7, 14, 0,
    4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 7, 14, 0, 4,
    0, 5, 0, 6, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 4, 6, 5, 6, 7, 14, 0, 3, 0,
    4, 0, 5, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 6, 5, 6, 7, 14, 0, 3, 0, 4,
    0, 5, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 6, 4, 6, 5, 6, 7, 14, 0, 1, 0, 2, 0,
    5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 14, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 6, 4, 5, 7, 15, 0, 1, 0, 2, 0, 3, 0,
    4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 15, 0, 1, 0, 2, 0, 4,
    0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 15, 0, 1, 0, 2, 0,
    4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 7, 15, 0, 1, 0, 2,
    0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 15, 0, 1, 0,
    2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 5, 1, 6, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1,
    0, 3, 0, 4, 0, 5, 0, 6, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0,
    3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 15,
    0, 1, 0, 3, 0, 4, 0, 5, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7,
    15, 0, 1, 0, 3, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 4, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6,
    7, 15, 0, 1, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5,
    6, 7, 15, 0, 2, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6,
    5, 6, 7, 15, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 5, 3, 6, 4, 5, 4,
    6, 5, 6, 7, 15, 0, 3, 0, 4, 0, 5, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5,
    4, 6, 5, 6, 7, 15, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4,
    5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6,
    3, 4, 3, 5, 3, 6, 7, 15, 0, 1, 0, 2, 0, 3, 0, 4, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 6, 3, 4, 3,
    5, 3, 6, 4, 5, 4, 6, 7, 15, 0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 4, 2, 3, 2, 4, 3, 4, 3, 5,
    3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 3, 0, 4, 0, 6, 1, 2, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3,
    4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 4, 2,
    5, 2, 6, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 3,
    2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 3, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 4, 2,
    5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 15, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 6, 2, 3, 2, 4,
    2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 6, 2,
    3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4,
    1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 6, 5, 6, 7, 15, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1,
    5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 7, 15, 0, 1, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4,
    1, 6, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 3, 0, 5, 0, 6, 1, 3, 1,
    4, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 15, 0, 1, 0, 3, 0, 5, 0, 6, 1, 3,
    1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 2, 0, 3, 0, 6, 1, 3, 1,
    4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 15, 0, 4, 0, 5, 0, 6, 1, 3,
    1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 7, 15, 0, 3, 0, 4, 0, 5, 0,
    6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 6, 4, 6, 5, 6, 7, 15, 0, 1, 0, 3, 0, 4,
    0, 6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 4, 0, 5, 0,
    6, 1, 2, 1, 3, 1, 5, 1, 6, 2, 3, 2, 4, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0, 2,
    0, 3, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1, 0,
    2, 0, 3, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 4, 6, 5, 6, 7, 15, 0, 1,
    0, 2, 0, 3, 0, 6, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 15, 0,
    3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 15,
    0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 7,
    15, 0, 1, 0, 3, 0, 4, 0, 5, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 6, 5, 6,
    7, 15, 0, 1, 0, 4, 0, 5, 0, 6, 1, 2, 1, 5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4,
    6, 7, 16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 5, 4, 5, 7, 16, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 3, 5, 3,
    6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4,
    3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2,
    5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 7, 16, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3,
    2, 4, 2, 5, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1,
    6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 3, 0, 4, 0, 5, 0,
    6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 1, 0, 3,
    0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0,
    1, 0, 3, 0, 5, 0, 6, 1, 3, 1, 4, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7,
    16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 4, 5, 4, 6,
    5, 6, 7, 16, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3,
    6, 4, 6, 5, 6, 7, 16, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 6, 2, 3, 2, 4, 2, 5, 3, 5,
    3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2,
    4, 2, 5, 3, 4, 3, 6, 4, 6, 5, 6, 7, 16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4,
    1, 5, 1, 6, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 7, 16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 4, 1,
    5, 1, 6, 2, 3, 2, 5, 2, 6, 3, 4, 3, 6, 4, 5, 5, 6, 7, 16, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6,
    1, 4, 1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 5, 6, 7, 16, 0, 1, 0, 4, 0, 5, 0, 6, 1,
    4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 16, 0, 1, 0, 3, 0, 4,
    0, 6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 16, 0, 1, 0,
    3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 6, 4, 6, 5, 6, 7, 16,
    0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6,
    7, 17, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3,
    4, 3, 5, 4, 5, 7, 17, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3,
    2, 4, 2, 5, 2, 6, 4, 5, 4, 6, 7, 17, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 5, 1, 6, 2, 4, 2,
    5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 17, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4,
    1, 5, 1, 6, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 17, 0, 1, 0, 3, 0, 4, 0, 5, 1,
    3, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 17, 0, 1, 0, 3,
    0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7,
    17, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5,
    4, 6, 5, 6, 7, 17, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3,
    4, 3, 5, 3, 6, 4, 6, 5, 6, 7, 17, 0, 1, 0, 3, 0, 4, 0, 5, 0, 6, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3,
    2, 4, 2, 5, 2, 6, 3, 6, 4, 5, 4, 6, 5, 6, 7, 17, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1,
    5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 7, 18, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5, 5, 6, 7, 18, 0, 1, 0,
    2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3,
    6, 7, 18, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 1, 2, 1, 4, 1, 5, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 6, 4, 5, 4, 6, 5, 6, 7, 18, 0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2,
    3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 18, 0, 1, 0, 2, 0, 3, 0, 4, 0, 6, 1, 3, 1, 4,
    1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 19, 0, 1, 0, 2, 0, 3, 0,
    4, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7,
    19, 0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4,
    3, 6, 4, 5, 4, 6, 5, 6, 7, 20, 0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2,
    3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6, 7, 21, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5,
    0, 6, 1, 2, 1, 3, 1, 4, 1, 5, 1, 6, 2, 3, 2, 4, 2, 5, 2, 6, 3, 4, 3, 5, 3, 6, 4, 5, 4, 6, 5, 6,
];

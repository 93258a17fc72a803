use std::collections::HashMap;
use std::sync::OnceLock;

use topo_core::errors::TopoError;
use topo_graph::GraphImpl;
use tracing::trace;

use crate::algebraic::lcf_vector;
use crate::create::materialize;

/// How a catalog entry is stored.
enum Definition {
    /// Explicit undirected edge list.
    Edges {
        vertices: usize,
        edges: &'static [u16],
    },
    /// LCF notation for a Hamiltonian cubic graph.
    Lcf {
        vertices: usize,
        shifts: &'static [i64],
        repeats: usize,
    },
}

struct Entry {
    name: &'static str,
    aliases: &'static [&'static str],
    definition: Definition,
}

const fn edges(vertices: usize, edges: &'static [u16]) -> Definition {
    Definition::Edges { vertices, edges }
}

const fn lcf(vertices: usize, shifts: &'static [i64], repeats: usize) -> Definition {
    Definition::Lcf {
        vertices,
        shifts,
        repeats,
    }
}

const fn entry(name: &'static str, definition: Definition) -> Entry {
    Entry {
        name,
        aliases: &[],
        definition,
    }
}

const fn aliased(
    name: &'static str,
    aliases: &'static [&'static str],
    definition: Definition,
) -> Entry {
    Entry {
        name,
        aliases,
        definition,
    }
}

static REGISTRY: &[Entry] = &[
    entry("Bull", edges(5, BULL)),
    entry("Chvatal", edges(12, CHVATAL)),
    entry("Coxeter", edges(28, COXETER)),
    entry("Cubical", lcf(8, &[3, -3], 4)),
    entry("Desargues", lcf(20, &[5, -5, 9, -9], 5)),
    entry("Diamond", edges(4, DIAMOND)),
    aliased(
        "Dodecahedral",
        &["Dodecahedron"],
        lcf(20, &[10, 7, 4, -4, -7, 10, -4, 7, -7, 4], 2),
    ),
    entry("Franklin", lcf(12, &[5, -5], 6)),
    entry("Frucht", lcf(12, &[-5, -2, -4, 2, 5, -2, 2, 5, -2, -5, 4, 2], 1)),
    entry("Grotzsch", edges(11, GROTZSCH)),
    entry("Heawood", lcf(14, &[5, -5], 7)),
    entry("House", edges(5, HOUSE)),
    entry("HouseX", edges(5, HOUSE_X)),
    aliased("Icosahedral", &["Icosahedron"], edges(12, ICOSAHEDRAL)),
    entry("Krackhardt_Kite", edges(10, KRACKHARDT_KITE)),
    entry("Levi", lcf(30, &[-13, -9, 7, -7, 9, 13], 5)),
    entry("McGee", lcf(24, &[12, 7, -7], 8)),
    entry("Moebius_Kantor", lcf(16, &[5, -5], 8)),
    entry("Nauru", lcf(24, &[5, -9, 7, -7, 9, -5], 4)),
    aliased("Octahedral", &["Octahedron"], edges(6, OCTAHEDRAL)),
    entry("Pappus", lcf(18, &[5, 7, -7, 7, -7, -5], 3)),
    entry("Petersen", edges(10, PETERSEN)),
    aliased("Tetrahedral", &["Tetrahedron"], lcf(4, &[2], 4)),
    entry("Truncated_Tetrahedron", lcf(12, &[2, 6, -2], 4)),
    entry("Tutte", edges(46, TUTTE)),
    entry("Utility", lcf(6, &[3, -3], 3)),
    entry("Zachary", edges(34, ZACHARY)),
];

static INDEX: OnceLock<HashMap<String, usize>> = OnceLock::new();

/// Returns a named graph from the catalog of well-known graphs.
///
/// Names are matched case-insensitively; a few entries also answer to an
/// alternative spelling (`Dodecahedron`, `Icosahedron`, `Octahedron`,
/// `Tetrahedron`). All catalog graphs are undirected and simple.
pub fn famous(name: &str) -> Result<GraphImpl, TopoError> {
    let key = name.trim().to_ascii_lowercase();
    let Some(&slot) = index().get(&key) else {
        return Err(TopoError::unknown_name("famous-name", "no famous graph with this name")
            .with_context("name", name)
            .with_hint("famous_names() lists the registered graphs"));
    };
    match REGISTRY[slot].definition {
        Definition::Edges { vertices, edges } => {
            let flat: Vec<usize> = edges.iter().copied().map(usize::from).collect();
            materialize("famous", vertices, false, &flat)
        }
        Definition::Lcf {
            vertices,
            shifts,
            repeats,
        } => lcf_vector(vertices, shifts, repeats),
    }
}

/// Canonical names of the catalog entries, in registry order.
pub fn famous_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|entry| entry.name)
}

fn index() -> &'static HashMap<String, usize> {
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(REGISTRY.len() + 4);
        for (slot, entry) in REGISTRY.iter().enumerate() {
            for name in std::iter::once(&entry.name).chain(entry.aliases) {
                index.insert(name.to_ascii_lowercase(), slot);
            }
        }
        trace!(names = index.len(), "famous graph registry indexed");
        index
    })
}

#[rustfmt::skip]
const BULL: &[u16] = &[
    0, 1, 0, 2, 1, 2, 1, 3, 2, 4,
];

#[rustfmt::skip]
const CHVATAL: &[u16] = &[
    0, 1, 0, 4, 0, 6, 0, 9, 1, 2, 1, 5, 1, 7, 2, 3, 2, 6, 2, 8, 3, 4, 3, 7, 3, 9, 4, 5, 4, 8, 5,
    10, 5, 11, 6, 10, 6, 11, 7, 8, 7, 11, 8, 10, 9, 10, 9, 11,
];

#[rustfmt::skip]
const COXETER: &[u16] = &[
    0, 1, 0, 6, 0, 21, 1, 2, 1, 22, 2, 3, 2, 23, 3, 4, 3, 24, 4, 5, 4, 25, 5, 6, 5, 26, 6, 27,
    7, 9, 7, 12, 7, 21, 8, 10, 8, 13, 8, 22, 9, 11, 9, 23, 10, 12, 10, 24, 11, 13, 11, 25, 12,
    26, 13, 27, 14, 17, 14, 18, 14, 21, 15, 18, 15, 19, 15, 22, 16, 19, 16, 20, 16, 23, 17, 20,
    17, 24, 18, 25, 19, 26, 20, 27,
];

#[rustfmt::skip]
const DIAMOND: &[u16] = &[
    0, 1, 0, 2, 1, 2, 1, 3, 2, 3,
];

#[rustfmt::skip]
const GROTZSCH: &[u16] = &[
    0, 1, 0, 4, 0, 6, 0, 9, 1, 2, 1, 5, 1, 7, 2, 3, 2, 6, 2, 8, 3, 4, 3, 7, 3, 9, 4, 5, 4, 8, 5,
    10, 6, 10, 7, 10, 8, 10, 9, 10,
];

#[rustfmt::skip]
const HOUSE: &[u16] = &[
    0, 1, 0, 2, 1, 3, 2, 3, 2, 4, 3, 4,
];

#[rustfmt::skip]
const HOUSE_X: &[u16] = &[
    0, 1, 0, 2, 0, 3, 1, 2, 1, 3, 2, 3, 2, 4, 3, 4,
];

#[rustfmt::skip]
const ICOSAHEDRAL: &[u16] = &[
    0, 1, 0, 5, 0, 7, 0, 8, 0, 11, 1, 2, 1, 5, 1, 6, 1, 8, 2, 3, 2, 6, 2, 8, 2, 9, 3, 4, 3, 6,
    3, 9, 3, 10, 4, 5, 4, 6, 4, 10, 4, 11, 5, 6, 5, 11, 7, 8, 7, 9, 7, 10, 7, 11, 8, 9, 9, 10,
    10, 11,
];

#[rustfmt::skip]
const KRACKHARDT_KITE: &[u16] = &[
    0, 1, 0, 2, 0, 3, 0, 5, 1, 3, 1, 4, 1, 6, 2, 3, 2, 5, 3, 4, 3, 5, 3, 6, 4, 6, 5, 6, 5, 7, 6,
    7, 7, 8, 8, 9,
];

#[rustfmt::skip]
const OCTAHEDRAL: &[u16] = &[
    0, 1, 0, 2, 0, 3, 0, 4, 1, 2, 1, 3, 1, 5, 2, 4, 2, 5, 3, 4, 3, 5, 4, 5,
];

#[rustfmt::skip]
const PETERSEN: &[u16] = &[
    0, 1, 0, 4, 0, 5, 1, 2, 1, 6, 2, 3, 2, 7, 3, 4, 3, 8, 4, 9, 5, 7, 5, 8, 6, 8, 6, 9, 7, 9,
];

#[rustfmt::skip]
const TUTTE: &[u16] = &[
    0, 1, 0, 2, 0, 3, 1, 4, 1, 26, 2, 10, 2, 11, 3, 18, 3, 19, 4, 5, 4, 33, 5, 6, 5, 29, 6, 7,
    6, 27, 7, 8, 7, 14, 8, 9, 8, 38, 9, 10, 9, 37, 10, 39, 11, 12, 11, 39, 12, 13, 12, 35, 13,
    14, 13, 15, 14, 34, 15, 16, 15, 22, 16, 17, 16, 44, 17, 18, 17, 43, 18, 45, 19, 20, 19, 45,
    20, 21, 20, 41, 21, 22, 21, 23, 22, 40, 23, 24, 23, 27, 24, 25, 24, 32, 25, 26, 25, 31, 26,
    33, 27, 28, 28, 29, 28, 32, 29, 30, 30, 31, 30, 33, 31, 32, 34, 35, 34, 38, 35, 36, 36, 37,
    36, 39, 37, 38, 40, 41, 40, 44, 41, 42, 42, 43, 42, 45, 43, 44,
];

#[rustfmt::skip]
const ZACHARY: &[u16] = &[
    0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0, 8, 0, 10, 0, 11, 0, 12, 0, 13, 0, 17, 0, 19, 0,
    21, 0, 31, 1, 2, 1, 3, 1, 7, 1, 13, 1, 17, 1, 19, 1, 21, 1, 30, 2, 3, 2, 7, 2, 8, 2, 9, 2,
    13, 2, 27, 2, 28, 2, 32, 3, 7, 3, 12, 3, 13, 4, 6, 4, 10, 5, 6, 5, 10, 5, 16, 6, 16, 8, 30,
    8, 32, 8, 33, 9, 33, 13, 33, 14, 32, 14, 33, 15, 32, 15, 33, 18, 32, 18, 33, 19, 33, 20, 32,
    20, 33, 22, 32, 22, 33, 23, 25, 23, 27, 23, 29, 23, 32, 23, 33, 24, 25, 24, 27, 24, 31, 25,
    31, 26, 29, 26, 33, 27, 33, 28, 31, 28, 33, 29, 32, 29, 33, 30, 32, 30, 33, 31, 32, 31, 33,
    32, 33,
];

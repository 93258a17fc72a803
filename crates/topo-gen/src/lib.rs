#![deny(missing_docs)]

//! Deterministic graph constructors built on the `topo-graph` storage.
//!
//! Every constructor computes its complete edge sequence first and hands it
//! to the storage in a single batch, so a failed call never returns a
//! partially built graph. Construction events are reported through `tracing`.

mod adjacency;
mod algebraic;
mod atlas;
mod atlas_data;
mod create;
mod famous;
mod regular;
mod transform;

pub use adjacency::{adjacency, adjacency_with_loops, weighted_adjacency};
pub use algebraic::{de_bruijn, extended_chordal_ring, kautz, lcf, lcf_vector, LcfSpec};
pub use atlas::{atlas, atlas_len};
pub use create::{create, small};
pub use famous::{famous, famous_names};
pub use regular::{full, full_citation, lattice, ring, star, tree};
pub use transform::{connect_neighborhood, linegraph};

#![deny(missing_docs)]

//! Deterministic graph storage implementing the `topo-core` contracts.

mod attributes;
mod config;
mod graph;
mod hash;
mod ids;
mod serialization;

pub use attributes::EdgeAttributes;
pub use config::GraphConfig;
pub use graph::GraphImpl;
pub use hash::canonical_hash;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};

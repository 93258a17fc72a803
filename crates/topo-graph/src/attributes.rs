use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use topo_core::errors::TopoError;

/// Named numeric edge attributes, one value per edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    columns: BTreeMap<String, Vec<f64>>,
}

impl EdgeAttributes {
    /// Returns the values stored under `name`, indexed by edge identifier.
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Returns the registered attribute names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Returns whether no attribute is registered.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Stores a column, rejecting columns whose length differs from the edge count.
    pub(crate) fn set_numeric(
        &mut self,
        name: &str,
        values: Vec<f64>,
        edge_count: usize,
    ) -> Result<(), TopoError> {
        if name.is_empty() {
            return Err(TopoError::invalid_argument(
                "attribute-name",
                "attribute names must be non-empty",
            ));
        }
        if values.len() != edge_count {
            return Err(TopoError::invalid_argument(
                "attribute-length",
                "attribute column must hold one value per edge",
            )
            .with_context("attribute", name)
            .with_context("values", values.len())
            .with_context("edges", edge_count));
        }
        self.columns.insert(name.to_string(), values);
        Ok(())
    }

    /// Extends every column with a default for newly appended edges.
    pub(crate) fn pad_to(&mut self, edge_count: usize, fill: f64) {
        for column in self.columns.values_mut() {
            column.resize(edge_count, fill);
        }
    }

    /// Keeps only the values of the listed edges, in the listed order.
    pub(crate) fn retain_edges(&mut self, kept: &[usize]) {
        for column in self.columns.values_mut() {
            *column = kept.iter().map(|&idx| column[idx]).collect();
        }
    }
}

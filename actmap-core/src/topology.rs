//! Topology descriptor: ordered per-layer neuron counts.

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// Network shape as published by the external network: one positive neuron
/// count per layer, input first. Immutable once loaded; replacing it means a
/// full re-layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TopologyDoc")]
pub struct Topology {
    layers: Vec<usize>,
}

/// Wire form of the topology document: `{"layers": [3, 4, 2]}`.
#[derive(Debug, Deserialize)]
struct TopologyDoc {
    layers: Vec<usize>,
}

impl TryFrom<TopologyDoc> for Topology {
    type Error = TopologyError;

    fn try_from(doc: TopologyDoc) -> Result<Self, TopologyError> {
        Topology::new(doc.layers)
    }
}

impl Topology {
    pub fn new(layers: Vec<usize>) -> Result<Self, TopologyError> {
        if layers.is_empty() {
            return Err(TopologyError::NoLayers);
        }
        if let Some(i) = layers.iter().position(|&n| n == 0) {
            return Err(TopologyError::EmptyLayer(i));
        }
        Ok(Self { layers })
    }

    /// Parse and validate a topology document.
    pub fn from_json(text: &str) -> Result<Self, TopologyError> {
        let doc: TopologyDoc =
            serde_json::from_str(text).map_err(|e| TopologyError::BadDocument(e.to_string()))?;
        Topology::new(doc.layers)
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Largest layer size, floored at 1 so slot-height math never divides
    /// into a zero denominator.
    pub fn max_neurons(&self) -> usize {
        self.layers.iter().copied().max().unwrap_or(1).max(1)
    }

    pub fn neuron_count(&self) -> usize {
        self.layers.iter().sum()
    }
}

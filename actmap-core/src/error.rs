use thiserror::Error;

/// Topology problems are fatal to initialization: a partially-valid layer
/// list cannot be laid out meaningfully.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("topology has no layers")]
    NoLayers,
    #[error("layer {0} has zero neurons")]
    EmptyLayer(usize),
    #[error("topology document is not valid JSON: {0}")]
    BadDocument(String),
}

// Document-source abstraction so the view can be fed from anything that
// publishes the two JSON documents (files on disk today, an HTTP endpoint
// later).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use actmap_core::{ActivationSnapshot, Topology};

/// Common interface for fetching the two documents the view consumes.
pub trait DocumentSource {
    /// Fetch and validate the topology descriptor. Errors here are fatal at
    /// startup: a network that cannot be laid out is never rendered.
    fn load_topology(&mut self) -> Result<Topology>;

    /// Fetch the current activation snapshot. Errors are recoverable; the
    /// caller keeps the previous snapshot and retries on its next cycle.
    fn load_activations(&mut self) -> Result<ActivationSnapshot>;
}

/// Reads the documents from disk. The external network (or a sidecar
/// publisher) rewrites the activation file on its own cadence; each load
/// sees whatever is current.
pub struct FileSource {
    topology_path: PathBuf,
    activations_path: PathBuf,
}

impl FileSource {
    pub fn new(topology_path: PathBuf, activations_path: PathBuf) -> Self {
        Self {
            topology_path,
            activations_path,
        }
    }
}

impl DocumentSource for FileSource {
    fn load_topology(&mut self) -> Result<Topology> {
        let text = fs::read_to_string(&self.topology_path)
            .with_context(|| format!("reading topology document {}", self.topology_path.display()))?;
        let topology = Topology::from_json(&text)
            .with_context(|| format!("parsing topology document {}", self.topology_path.display()))?;
        Ok(topology)
    }

    fn load_activations(&mut self) -> Result<ActivationSnapshot> {
        let text = fs::read_to_string(&self.activations_path).with_context(|| {
            format!("reading activation document {}", self.activations_path.display())
        })?;
        let snapshot = ActivationSnapshot::from_json(&text).with_context(|| {
            format!("parsing activation document {}", self.activations_path.display())
        })?;
        Ok(snapshot)
    }
}

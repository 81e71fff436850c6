//! actmap-core: layout and heat-map rendering model for a feed-forward
//! network view. Consumes a topology descriptor and periodic activation
//! snapshots published by an external network; knows nothing about terminals
//! or files.

pub mod color;
pub mod error;
pub mod layout;
pub mod render;
pub mod snapshot;
pub mod surface;
pub mod topology;

// Re-exports
pub use color::{intensity_to_coolwarm, Rgb};
pub use error::TopologyError;
pub use layout::{compute_layout, Layout, Neuron};
pub use render::{recolor, render_static, RenderStyle};
pub use snapshot::{effective_intensity, ActivationSnapshot};
pub use surface::Surface;
pub use topology::Topology;

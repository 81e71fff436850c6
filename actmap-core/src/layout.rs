//! Layout engine: positions neurons on a 2D surface from a layer-size list.
//!
//! Coordinates are screen-style: x grows right, y grows down, origin at the
//! top-left of the surface.

use crate::topology::Topology;

/// A positioned neuron. `(layer, id)` is the stable identity used to look up
/// activation values; `(x, y)` is a rendering cache derived from topology and
/// surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neuron {
    pub x: f64,
    pub y: f64,
    pub layer: usize,
    pub id: usize,
}

/// Result of a layout run. Rebuilt wholesale on every topology load or
/// surface resize; never mutated incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub neurons: Vec<Neuron>,
    pub layer_count: usize,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn neurons_in_layer(&self, layer: usize) -> impl Iterator<Item = &Neuron> {
        self.neurons.iter().filter(move |n| n.layer == layer)
    }

    /// Adjacent-layer edges, derived on demand. Every neuron in layer i
    /// connects to every neuron in layer i+1; edges are never stored.
    pub fn edges(&self) -> impl Iterator<Item = (&Neuron, &Neuron)> {
        self.neurons.iter().flat_map(move |a| {
            self.neurons_in_layer(a.layer + 1).map(move |b| (a, b))
        })
    }
}

/// Position every neuron on a `width` x `height` surface.
///
/// Layers are spaced evenly across the width with one spare slot so the
/// outer layers stay off the edges. All layers share a slot height derived
/// from the widest layer, and each layer is then vertically centered within
/// the surface, so rows align across layers while narrow layers stay
/// balanced.
pub fn compute_layout(topology: &Topology, width: f64, height: f64) -> Layout {
    let layer_count = topology.layer_count();
    let layer_width = width / (layer_count as f64 + 1.0);
    let slot_height = height / (topology.max_neurons() as f64 + 1.0);

    let mut neurons = Vec::with_capacity(topology.neuron_count());
    for (layer, &count) in topology.layers().iter().enumerate() {
        let offset = (height - count as f64 * slot_height) / 2.0;
        for id in 0..count {
            neurons.push(Neuron {
                x: (layer as f64 + 1.0) * layer_width,
                y: offset + (id as f64 + 1.0) * slot_height,
                layer,
                id,
            });
        }
    }

    Layout {
        neurons,
        layer_count,
        width,
        height,
    }
}

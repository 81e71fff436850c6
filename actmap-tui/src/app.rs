// Application state: one network view owning its topology, layout cache,
// latest snapshot, and polling schedule. No process-level globals.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use actmap_core::{compute_layout, ActivationSnapshot, Layout, RenderStyle, Topology};

use crate::config::PollPolicy;
use crate::source::DocumentSource;

pub struct App<S: DocumentSource> {
    source: S,
    pub topology: Topology,
    /// Position cache; rebuilt only on topology load or surface resize,
    /// read-only everywhere else.
    pub layout: Layout,
    pub snapshot: ActivationSnapshot,
    pub style: RenderStyle,
    pub policy: PollPolicy,
    pub paused: bool,
    pub polls: u64,
    pub fetch_errors: u64,
    pub last_error: Option<String>,
    last_poll: Option<Instant>,
}

impl<S: DocumentSource> App<S> {
    /// Loads the topology up front; a topology that cannot be fetched or
    /// laid out is fatal before anything is drawn.
    pub fn new(mut source: S, policy: PollPolicy) -> Result<Self> {
        let topology = source.load_topology()?;
        let layout = compute_layout(&topology, 0.0, 0.0);
        let style = fitted_style(&topology, 0.0, 0.0);
        Ok(Self {
            source,
            topology,
            layout,
            snapshot: ActivationSnapshot::default(),
            style,
            policy,
            paused: false,
            polls: 0,
            fetch_errors: 0,
            last_error: None,
            last_poll: None,
        })
    }

    /// Re-derive the layout when the surface size changes. Neuron identities
    /// are stable across re-layout; only positions move.
    pub fn ensure_surface(&mut self, width: f64, height: f64) {
        if self.layout.width != width || self.layout.height != height {
            self.layout = compute_layout(&self.topology, width, height);
            self.style = fitted_style(&self.topology, width, height);
        }
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Re-fetch the topology and rebuild the layout on the current surface.
    /// A failed reload keeps the existing view.
    pub fn reload_topology(&mut self) {
        match self.source.load_topology() {
            Ok(topology) => {
                info!(layers = ?topology.layers(), "topology reloaded");
                self.layout = compute_layout(&topology, self.layout.width, self.layout.height);
                self.style = fitted_style(&topology, self.layout.width, self.layout.height);
                self.topology = topology;
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "topology reload failed");
                self.last_error = Some(format!("{e:#}"));
            }
        }
    }

    /// One scheduling step, called on every repaint tick. Chained polling
    /// fetches each tick (the previous apply has completed by then); interval
    /// polling fetches when its own wall clock has elapsed. A failed fetch
    /// keeps the previous snapshot and retries on the next cycle.
    pub fn on_tick(&mut self, now: Instant) {
        if self.paused {
            return;
        }
        let due = match self.policy {
            PollPolicy::Chained => true,
            PollPolicy::Interval(period) => self
                .last_poll
                .map_or(true, |t| now.duration_since(t) >= period),
        };
        if !due {
            return;
        }
        self.last_poll = Some(now);
        self.polls += 1;

        match self.source.load_activations() {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.last_error = None;
            }
            Err(e) => {
                self.fetch_errors += 1;
                warn!(error = %format!("{e:#}"), "activation fetch failed; keeping last snapshot");
                self.last_error = Some(format!("{e:#}"));
            }
        }
    }
}

/// One disc radius for the whole view, scaled down from the classic 20-unit
/// disc when the surface is too cramped for it.
fn fitted_style(topology: &Topology, width: f64, height: f64) -> RenderStyle {
    let slot = height / (topology.max_neurons() as f64 + 1.0);
    let lane = width / (topology.layer_count() as f64 + 1.0);
    let radius = (0.35 * slot).min(0.15 * lane).clamp(1.0, RenderStyle::default().radius);
    RenderStyle { radius }
}

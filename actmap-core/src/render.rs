//! The two paint passes: a full static render of the network structure, and
//! the per-poll recolor pass that repaints discs only.

use crate::color::{intensity_to_coolwarm, Rgb};
use crate::layout::Layout;
use crate::snapshot::{effective_intensity, ActivationSnapshot};
use crate::surface::Surface;

/// Neutral disc fill before any activation arrives.
pub const BASE_FILL: Rgb = Rgb::new(0x88, 0x88, 0x88);
/// Disc outline.
pub const STROKE: Rgb = Rgb::new(0x00, 0x00, 0x00);
/// Connections and input/output arrows.
pub const WIRE: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Per-view drawing parameters. The radius is fixed for every neuron in a
/// view; front-ends pick one that suits their surface resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { radius: 20.0 }
    }
}

impl RenderStyle {
    /// Arrow tail sits at 2.5 radii from the center, the tip touches the
    /// disc edge, and the head notches back a quarter radius.
    fn arrow_tail(&self) -> f64 {
        2.5 * self.radius
    }
    fn arrow_notch(&self) -> f64 {
        0.25 * self.radius
    }
}

/// Draw the full static structure: connections beneath the discs, then every
/// disc in its neutral color, with inbound arrows on the first layer and
/// outbound arrows on the last. Runs once per topology load or resize.
pub fn render_static<S: Surface>(surface: &mut S, layout: &Layout, style: RenderStyle) {
    surface.clear();

    for (a, b) in layout.edges() {
        surface.line(a.x, a.y, b.x, b.y, WIRE);
    }

    for n in &layout.neurons {
        surface.fill_circle(n.x, n.y, style.radius, BASE_FILL);
        surface.stroke_circle(n.x, n.y, style.radius, STROKE);

        if n.layer == 0 {
            inbound_arrow(surface, n.x, n.y, style);
        }
        if n.layer + 1 == layout.layer_count {
            outbound_arrow(surface, n.x, n.y, style);
        }
    }
}

/// Repaint every disc from the given snapshot. Connections and arrows are
/// untouched, so this pass is strictly cheaper than the full render, and
/// repeating it with the same snapshot changes nothing.
pub fn recolor<S: Surface>(
    surface: &mut S,
    layout: &Layout,
    snapshot: &ActivationSnapshot,
    style: RenderStyle,
) {
    for n in &layout.neurons {
        let intensity = effective_intensity(snapshot.get(n.layer, n.id));
        surface.fill_circle(n.x, n.y, style.radius, intensity_to_coolwarm(intensity));
        surface.stroke_circle(n.x, n.y, style.radius, STROKE);
    }
}

fn inbound_arrow<S: Surface>(surface: &mut S, x: f64, y: f64, style: RenderStyle) {
    let r = style.radius;
    let notch = style.arrow_notch();
    surface.line(x - style.arrow_tail(), y, x - r, y, WIRE);
    surface.fill_polygon(
        &[
            (x - r - notch, y - notch),
            (x - r, y),
            (x - r - notch, y + notch),
        ],
        WIRE,
    );
}

fn outbound_arrow<S: Surface>(surface: &mut S, x: f64, y: f64, style: RenderStyle) {
    let r = style.radius;
    let notch = style.arrow_notch();
    surface.line(x + r, y, x + style.arrow_tail(), y, WIRE);
    surface.fill_polygon(
        &[
            (x + style.arrow_tail() - notch, y - notch),
            (x + style.arrow_tail(), y),
            (x + style.arrow_tail() - notch, y + notch),
        ],
        WIRE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::topology::Topology;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        FillCircle { x: f64, y: f64, color: Rgb },
        StrokeCircle { x: f64, y: f64 },
        Line,
        Polygon,
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.cmds.push(Cmd::Clear);
        }
        fn fill_circle(&mut self, x: f64, y: f64, _radius: f64, color: Rgb) {
            self.cmds.push(Cmd::FillCircle { x, y, color });
        }
        fn stroke_circle(&mut self, x: f64, y: f64, _radius: f64, _color: Rgb) {
            self.cmds.push(Cmd::StrokeCircle { x, y });
        }
        fn line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, _color: Rgb) {
            self.cmds.push(Cmd::Line);
        }
        fn fill_polygon(&mut self, _points: &[(f64, f64)], _color: Rgb) {
            self.cmds.push(Cmd::Polygon);
        }
    }

    fn layout_342() -> Layout {
        let t = Topology::new(vec![3, 4, 2]).unwrap();
        compute_layout(&t, 800.0, 600.0)
    }

    #[test]
    fn static_render_draws_the_whole_scene() {
        let mut rec = Recorder::default();
        render_static(&mut rec, &layout_342(), RenderStyle::default());

        assert_eq!(rec.cmds[0], Cmd::Clear);
        let discs = rec.cmds.iter().filter(|c| matches!(c, Cmd::FillCircle { .. })).count();
        assert_eq!(discs, 9);
        // 20 connections + one arrow shaft per first/last-layer neuron
        let lines = rec.cmds.iter().filter(|c| matches!(c, Cmd::Line)).count();
        assert_eq!(lines, 20 + 3 + 2);
        // one arrowhead per arrow shaft
        let heads = rec.cmds.iter().filter(|c| matches!(c, Cmd::Polygon)).count();
        assert_eq!(heads, 3 + 2);
    }

    #[test]
    fn connections_precede_discs() {
        let mut rec = Recorder::default();
        render_static(&mut rec, &layout_342(), RenderStyle::default());
        let last_line = rec.cmds.iter().rposition(|c| matches!(c, Cmd::Line)).unwrap();
        let first_disc = rec
            .cmds
            .iter()
            .position(|c| matches!(c, Cmd::FillCircle { .. }))
            .unwrap();
        // Connection lines come first; only arrow shafts follow the discs.
        let connection_lines: Vec<usize> = rec
            .cmds
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Cmd::Line))
            .map(|(i, _)| i)
            .take(20)
            .collect();
        assert!(connection_lines.iter().all(|&i| i < first_disc));
        assert!(last_line > first_disc); // arrows interleave with discs
    }

    #[test]
    fn recolor_touches_discs_only() {
        let layout = layout_342();
        let snap = ActivationSnapshot::new(vec![vec![0.0, 0.5, 1.0], vec![0.2; 4], vec![0.9; 2]]);
        let mut rec = Recorder::default();
        recolor(&mut rec, &layout, &snap, RenderStyle::default());

        assert!(rec
            .cmds
            .iter()
            .all(|c| matches!(c, Cmd::FillCircle { .. } | Cmd::StrokeCircle { .. })));
        assert_eq!(
            rec.cmds.iter().filter(|c| matches!(c, Cmd::FillCircle { .. })).count(),
            9
        );
    }

    #[test]
    fn recolor_maps_activations_through_the_palette() {
        let layout = layout_342();
        let snap = ActivationSnapshot::new(vec![vec![0.0, 0.5, 1.0], vec![], vec![]]);
        let mut rec = Recorder::default();
        recolor(&mut rec, &layout, &snap, RenderStyle::default());

        let fills: Vec<Rgb> = rec
            .cmds
            .iter()
            .filter_map(|c| match c {
                Cmd::FillCircle { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills[0], Rgb::new(0, 0, 255));
        assert_eq!(fills[1], Rgb::new(255, 255, 255));
        assert_eq!(fills[2], Rgb::new(255, 0, 0));
        // undersized snapshot: remaining neurons fall back to cold blue
        assert!(fills[3..].iter().all(|&c| c == Rgb::new(0, 0, 255)));
    }

    #[test]
    fn recolor_is_idempotent() {
        let layout = layout_342();
        let snap = ActivationSnapshot::new(vec![vec![0.3; 3], vec![0.7; 4], vec![1.5; 2]]);
        let style = RenderStyle::default();

        let mut once = Recorder::default();
        recolor(&mut once, &layout, &snap, style);

        let mut twice = Recorder::default();
        recolor(&mut twice, &layout, &snap, style);
        recolor(&mut twice, &layout, &snap, style);

        // The second pass emits exactly the same commands; replaying them
        // over the first leaves the final surface state unchanged.
        assert_eq!(&twice.cmds[..once.cmds.len()], &once.cmds[..]);
        assert_eq!(&twice.cmds[once.cmds.len()..], &once.cmds[..]);
    }

    #[test]
    fn single_layer_gets_both_arrows() {
        let t = Topology::new(vec![2]).unwrap();
        let layout = compute_layout(&t, 100.0, 100.0);
        let mut rec = Recorder::default();
        render_static(&mut rec, &layout, RenderStyle::default());
        // No connections; each neuron is both first and last layer.
        let lines = rec.cmds.iter().filter(|c| matches!(c, Cmd::Line)).count();
        assert_eq!(lines, 4);
        let heads = rec.cmds.iter().filter(|c| matches!(c, Cmd::Polygon)).count();
        assert_eq!(heads, 4);
    }
}

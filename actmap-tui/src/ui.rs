// Frame composition: activity canvas on top, status panel below. The canvas
// replays the cached static scene, then the recolor pass for the latest
// snapshot; layout itself only runs on topology load or resize.

use std::io::Stdout;

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as TermLayout},
    style::{Color, Style},
    text::Text,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use actmap_core::{recolor, render_static, Rgb, Surface};

use crate::app::App;
use crate::shapes::{FilledCircle, FilledPolygon};
use crate::source::DocumentSource;

/// Draws the UI each frame:
/// - Top: the network heat map (discs colored by activation).
/// - Bottom: status with poll counters, topology shape, policy, controls.
pub fn draw<S: DocumentSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> anyhow::Result<()> {
    terminal.draw(|f| {
        let chunks = TermLayout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Percentage(80), Constraint::Percentage(20)].as_ref())
            .split(f.size());

        // Surface size in braille dots (2 per cell across, 4 down); re-layout
        // happens only when this changes.
        let width = f64::from(chunks[0].width.saturating_sub(2)) * 2.0;
        let height = f64::from(chunks[0].height.saturating_sub(2)) * 4.0;
        app.ensure_surface(width, height);

        let layout = &app.layout;
        let snapshot = &app.snapshot;
        let style = app.style;
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title("Network Activity  (blue = idle, red = hot)")
                    .borders(Borders::ALL),
            )
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                let mut surface = CanvasSurface { ctx, height };
                render_static(&mut surface, layout, style);
                recolor(&mut surface, layout, snapshot, style);
            });
        f.render_widget(canvas, chunks[0]);

        let mut status = format!(
            "Polls: {} | Layers: {:?} | Neurons: {} | Policy: {} | Paused: {} | Controls: [p] Pause  [r] Reload  [q] Quit",
            app.polls,
            app.topology.layers(),
            app.topology.neuron_count(),
            app.policy,
            if app.paused { "yes" } else { "no" }
        );
        if let Some(err) = &app.last_error {
            status.push_str(&format!(
                "\nLast error ({} so far): {}",
                app.fetch_errors, err
            ));
        }
        let status_widget = Paragraph::new(Text::from(status))
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(status_widget, chunks[1]);
    })?;
    Ok(())
}

/// Adapter from the core's drawing primitives onto a ratatui canvas context.
/// The core uses screen coordinates (y down); the canvas y axis grows up, so
/// every y flips here.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
}

impl CanvasSurface<'_, '_> {
    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self) {
        // Each terminal frame starts from a blank canvas already.
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.ctx.draw(&FilledCircle {
            x,
            y: self.flip(y),
            radius,
            color: to_color(color),
        });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.ctx.draw(&Circle {
            x,
            y: self.flip(y),
            radius,
            color: to_color(color),
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb) {
        self.ctx.draw(&CanvasLine {
            x1,
            y1: self.flip(y1),
            x2,
            y2: self.flip(y2),
            color: to_color(color),
        });
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb) {
        self.ctx.draw(&FilledPolygon {
            points: points.iter().map(|&(x, y)| (x, self.flip(y))).collect(),
            color: to_color(color),
        });
    }
}

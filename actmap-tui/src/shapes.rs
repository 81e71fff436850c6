// Canvas shapes ratatui doesn't ship: filled discs and filled polygons.
// Both sample their bounding box at sub-cell resolution and paint every
// braille dot that falls inside.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

const SAMPLE_STEP: f64 = 0.25;

pub struct FilledCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let r2 = self.radius * self.radius;
        let mut sy = self.y - self.radius;
        while sy <= self.y + self.radius {
            let mut sx = self.x - self.radius;
            while sx <= self.x + self.radius {
                let (dx, dy) = (sx - self.x, sy - self.y);
                if dx * dx + dy * dy <= r2 {
                    if let Some((px, py)) = painter.get_point(sx, sy) {
                        painter.paint(px, py, self.color);
                    }
                }
                sx += SAMPLE_STEP;
            }
            sy += SAMPLE_STEP;
        }
    }
}

pub struct FilledPolygon {
    pub points: Vec<(f64, f64)>,
    pub color: Color,
}

impl Shape for FilledPolygon {
    fn draw(&self, painter: &mut Painter) {
        if self.points.len() < 3 {
            return;
        }
        let min_x = self.points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = self.points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = self.points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

        let mut sy = min_y;
        while sy <= max_y {
            let mut sx = min_x;
            while sx <= max_x {
                if polygon_contains(&self.points, sx, sy) {
                    if let Some((px, py)) = painter.get_point(sx, sy) {
                        painter.paint(px, py, self.color);
                    }
                }
                sx += SAMPLE_STEP;
            }
            sy += SAMPLE_STEP;
        }
    }
}

/// Even-odd ray-crossing containment test.
fn polygon_contains(points: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

//! Drawing-surface boundary: the minimal primitive set the render passes
//! need. Front-ends implement this for whatever actually paints (a terminal
//! canvas, a test recorder), so the passes stay engine-agnostic.

use crate::color::Rgb;

pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self);
    /// Filled disc centered at (x, y).
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);
    /// Circle outline centered at (x, y).
    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);
    /// Straight segment from (x1, y1) to (x2, y2).
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgb);
    /// Filled polygon over the given vertices (used for arrowheads).
    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb);
}

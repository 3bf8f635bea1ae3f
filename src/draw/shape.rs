//! Candidate shape stroking for the live preview tools.
//!
//! Shapes are stroked with the same disc-stamping brush as freehand strokes,
//! so previews and committed shapes share one rasterization path. All
//! functions take the gesture's start point and the current pointer position;
//! degenerate gestures (start == current) collapse to a single dot the same
//! way a stroked zero-size path would.

use std::f64::consts::TAU;

use super::Color;
use super::brush;
use super::canvas::Canvas;

/// Strokes a straight segment from the start point to the current point.
pub fn stroke_line(
    canvas: &mut Canvas,
    start: (f64, f64),
    current: (f64, f64),
    width: u32,
    color: Color,
) {
    brush::stroke_segment(canvas, start.0, start.1, current.0, current.1, width, color);
}

/// Strokes the axis-aligned rectangle spanned by two corner points.
///
/// The corners are normalized per axis (min/max of the x values, min/max of
/// the y values), so dragging in any of the four directions produces the same
/// correctly oriented, non-negative box.
pub fn stroke_rect(
    canvas: &mut Canvas,
    start: (f64, f64),
    current: (f64, f64),
    width: u32,
    color: Color,
) {
    let min_x = start.0.min(current.0);
    let max_x = start.0.max(current.0);
    let min_y = start.1.min(current.1);
    let max_y = start.1.max(current.1);

    brush::stroke_segment(canvas, min_x, min_y, max_x, min_y, width, color);
    brush::stroke_segment(canvas, max_x, min_y, max_x, max_y, width, color);
    brush::stroke_segment(canvas, max_x, max_y, min_x, max_y, width, color);
    brush::stroke_segment(canvas, min_x, max_y, min_x, min_y, width, color);
}

/// Strokes a circle centered on the start point whose radius is the Euclidean
/// distance to the current point.
///
/// The circle is flattened into short chords that are stroked like any other
/// segment. Step count scales with the radius so large circles stay smooth;
/// it is capped so a radius far beyond the canvas cannot stall the loop.
pub fn stroke_circle(
    canvas: &mut Canvas,
    center: (f64, f64),
    current: (f64, f64),
    width: u32,
    color: Color,
) {
    let radius = (current.0 - center.0).hypot(current.1 - center.1);
    let steps = ((TAU * radius / 1.5).ceil() as usize).clamp(16, 65_536);

    let point_at = |i: usize| {
        let angle = TAU * i as f64 / steps as f64;
        (
            center.0 + radius * angle.cos(),
            center.1 + radius * angle.sin(),
        )
    };

    let mut prev = point_at(0);
    for i in 1..=steps {
        let next = point_at(i);
        brush::stroke_segment(canvas, prev.0, prev.1, next.0, next.1, width, color);
        prev = next;
    }
}

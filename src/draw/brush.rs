//! Brush and eraser stroke rendering.
//!
//! Strokes are rasterized by stamping a filled disc along the path, which
//! gives round caps and round joints for free. The eraser is the same
//! operation with the background color; there is no transparency-based
//! erasing.

use super::Color;
use super::canvas::Canvas;

/// Stamps a filled dot of the given diameter centered on a point.
///
/// Coordinates are in pixel-lattice space (the same space normalized pointer
/// events use). Pixels whose center lies within the radius are painted; the
/// radius check is floored so a width-1 dot always covers the nearest pixel.
pub fn stamp_dot(canvas: &mut Canvas, x: f64, y: f64, diameter: u32, color: Color) {
    if diameter == 0 {
        return;
    }
    let pixel = color.to_rgba8();
    let radius = diameter as f64 / 2.0;
    let r2 = (radius * radius).max(0.5);

    let min_x = (x - radius).floor() as i32;
    let max_x = (x + radius).ceil() as i32;
    let min_y = (y - radius).floor() as i32;
    let max_y = (y + radius).ceil() as i32;

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let dx = px as f64 - x;
            let dy = py as f64 - y;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            canvas.blend_pixel(px, py, pixel);
        }
    }
}

/// Strokes a round-capped segment between two points.
///
/// The brush disc is stamped at every Bresenham step including both
/// endpoints, so adjacent segments of a freehand stroke join without gaps.
/// The segment is clipped to the canvas (plus the brush radius) before the
/// integer walk, so arbitrarily far off-canvas pointer coordinates stay
/// cheap and within `i32` range.
pub fn stroke_segment(
    canvas: &mut Canvas,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    width: u32,
    color: Color,
) {
    let margin = width as f64 / 2.0 + 1.0;
    let Some((a, b)) = clip_segment(
        (x1, y1),
        (x2, y2),
        -margin,
        -margin,
        canvas.width() as f64 + margin,
        canvas.height() as f64 + margin,
    ) else {
        return;
    };
    let start = (a.0.round() as i32, a.1.round() as i32);
    let end = (b.0.round() as i32, b.1.round() as i32);
    bresenham_line(start.0, start.1, end.0, end.1, |px, py| {
        stamp_dot(canvas, px as f64, py as f64, width, color);
    });
}

/// Liang-Barsky clip of a segment against an axis-aligned rectangle.
///
/// Returns the clipped endpoints in parametric order from `p1` to `p2`, or
/// `None` when the segment lies entirely outside the rectangle.
fn clip_segment(
    p1: (f64, f64),
    p2: (f64, f64),
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (p2.0 - p1.0, p2.1 - p1.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, p1.0 - min_x),
        (dx, max_x - p1.0),
        (-dy, p1.1 - min_y),
        (dy, max_y - p1.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }

    Some((
        (p1.0 + t0 * dx, p1.1 + t0 * dy),
        (p1.0 + t1 * dx, p1.1 + t1 * dy),
    ))
}

/// Walks the integer line from (x1, y1) to (x2, y2), invoking the callback
/// for every covered lattice point, endpoints included.
fn bresenham_line<F>(mut x1: i32, mut y1: i32, x2: i32, y2: i32, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x1, y1);
        if x1 == x2 && y1 == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x1 += sx;
        }
        if e2 <= dx {
            err += dx;
            y1 += sy;
        }
    }
}

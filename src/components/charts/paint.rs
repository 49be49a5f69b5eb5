//! Path helpers shared by the chart views
//!
//! Chart geometry works in local `f32` coordinates; these helpers offset into
//! the element bounds and paint through GPUI's path builder.

use gpui::{Bounds, Hsla, PathBuilder, Pixels, Point, Window, point, px};

/// Local coordinate to window point
pub fn to_window(bounds: Bounds<Pixels>, (x, y): (f32, f32)) -> Point<Pixels> {
    point(bounds.origin.x + px(x), bounds.origin.y + px(y))
}

/// Points along a compass arc (degrees clockwise from north)
pub fn arc_points(center: (f32, f32), radius: f32, from_deg: f64, to_deg: f64, steps: usize) -> Vec<(f32, f32)> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let bearing = (from_deg + (to_deg - from_deg) * i as f64 / steps as f64).to_radians();
            (
                center.0 + radius * bearing.sin() as f32,
                center.1 - radius * bearing.cos() as f32,
            )
        })
        .collect()
}

/// Stroke an open polyline
pub fn stroke_polyline(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    points: &[(f32, f32)],
    width: f32,
    color: impl Into<Hsla>,
) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() {
        return;
    }

    let mut builder = PathBuilder::stroke(px(width));
    builder.move_to(to_window(bounds, first));
    for &p in rest {
        builder.line_to(to_window(bounds, p));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, color.into());
    }
}

/// Fill a closed polygon
pub fn fill_polygon(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    points: &[(f32, f32)],
    color: impl Into<Hsla>,
) {
    if points.len() < 3 {
        return;
    }

    let mut builder = PathBuilder::fill();
    builder.move_to(to_window(bounds, points[0]));
    for &p in &points[1..] {
        builder.line_to(to_window(bounds, p));
    }
    builder.close();
    if let Ok(path) = builder.build() {
        window.paint_path(path, color.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_runs_clockwise_from_north() {
        let points = arc_points((0.0, 0.0), 10.0, 0.0, 90.0, 2);
        assert_eq!(points.len(), 3);
        assert!((points[0].0).abs() < 1e-4 && (points[0].1 + 10.0).abs() < 1e-4);
        assert!((points[2].0 - 10.0).abs() < 1e-4 && points[2].1.abs() < 1e-4);
    }
}

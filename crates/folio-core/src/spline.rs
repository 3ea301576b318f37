//! Closed Catmull-Rom loops rendered as SVG path data.

use std::fmt::Write as _;

use glam::DVec2;

/// Build the `d` attribute for a smooth closed loop through `points`.
///
/// Every segment between consecutive points becomes one cubic Bezier whose
/// handles are the neighbouring chords scaled by 1/6, the classic
/// Catmull-Rom conversion. Indices wrap, so the last segment bends back
/// into the first point and `Z` closes the outline. An empty slice yields
/// an empty string; a single point yields a degenerate closed dot.
pub fn closed_path(points: &[DVec2]) -> String {
    let n = points.len();
    if n == 0 {
        return String::new();
    }
    let mut d = String::with_capacity(16 + n * 56);
    let _ = write!(d, "M {:.2} {:.2}", points[0].x, points[0].y);
    for i in 0..n {
        let p0 = points[(i + n - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let p3 = points[(i + 2) % n];
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        let _ = write!(
            d,
            " C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
            c1.x, c1.y, c2.x, c2.y, p2.x, p2.y
        );
    }
    d.push_str(" Z");
    d
}

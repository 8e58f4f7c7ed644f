//! Polygon geometry in pixel coordinates

use crate::types::Point;

/// Gauss / shoelace polygon area in px².
///
/// The polygon is implicitly closed (last vertex connects back to the
/// first). Fewer than 3 vertices is a degenerate polygon with area 0,
/// not an error. The absolute value makes the result independent of
/// winding direction, and the cyclic sum of the starting vertex.
pub fn shoelace_area_px2(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - a.y * b.x;
    }
    sum.abs() / 2.0
}

//! Overlap predicates between a candidate label rectangle and chart shapes.
//!
//! Every predicate returns `false` for an empty rectangle (zero or negative
//! extent), so degenerate label sizes never block or get blocked.
//!
//! The segment tests use the strict orientation comparison: exactly
//! collinear touches (a segment lying along a rectangle edge, or ending
//! exactly on one) are not guaranteed to be reported as crossings.

use glam::DVec2;

use crate::types::Rect;

/// Axis-aligned overlap; rectangles that only share an edge do not overlap
pub fn rect_overlaps_rect(candidate: &Rect, other: &Rect) -> bool {
    if candidate.is_empty() || other.is_empty() {
        return false;
    }
    candidate.min_x() < other.max_x()
        && other.min_x() < candidate.max_x()
        && candidate.min_y() < other.max_y()
        && other.min_y() < candidate.max_y()
}

/// Closest-point test: clamp the center into the rectangle and compare
/// squared distance with the squared radius
pub fn rect_overlaps_circle(candidate: &Rect, center: DVec2, radius: f64) -> bool {
    if candidate.is_empty() || radius.is_nan() || radius < 0.0 {
        return false;
    }
    let closest = DVec2::new(
        center.x.clamp(candidate.min_x(), candidate.max_x()),
        center.y.clamp(candidate.min_y(), candidate.max_y()),
    );
    closest.distance_squared(center) <= radius * radius
}

/// Segment test: bounding box rejection, then endpoint containment, then
/// crossing tests against each of the four edges
pub fn rect_overlaps_segment(candidate: &Rect, start: DVec2, finish: DVec2) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let lo = start.min(finish);
    let hi = start.max(finish);
    if hi.x < candidate.min_x()
        || lo.x > candidate.max_x()
        || hi.y < candidate.min_y()
        || lo.y > candidate.max_y()
    {
        return false;
    }

    if candidate.contains(start) || candidate.contains(finish) {
        return true;
    }

    candidate
        .edges()
        .iter()
        .any(|&(a, b)| segments_cross(start, finish, a, b))
}

/// Outline test for polygons: any edge crosses the rectangle, or the
/// rectangle sits wholly inside the outline (even-odd rule on its center)
pub fn rect_overlaps_polygon(candidate: &Rect, vertices: &[DVec2]) -> bool {
    if candidate.is_empty() || vertices.is_empty() {
        return false;
    }
    if vertices.len() == 1 {
        return candidate.contains(vertices[0]);
    }
    let crosses_edge = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .any(|(&a, &b)| rect_overlaps_segment(candidate, a, b));
    crosses_edge || polygon_contains(vertices, candidate.mid())
}

/// Even-odd point-in-polygon test
pub fn polygon_contains(vertices: &[DVec2], point: DVec2) -> bool {
    let mut inside = false;
    let n = vertices.len();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + n - 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// True when `c` lies strictly counter-clockwise of `a → b` (screen axes)
fn ccw(a: DVec2, b: DVec2, c: DVec2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Two-segment crossing test: each segment's endpoints lie on opposite
/// sides of the other segment
pub fn segments_cross(p1: DVec2, p2: DVec2, q1: DVec2, q2: DVec2) -> bool {
    ccw(p1, q1, q2) != ccw(p2, q1, q2) && ccw(p1, p2, q1) != ccw(p1, p2, q2)
}

/// The point where two crossing segments meet
///
/// Returns `None` when the segments do not cross (per [`segments_cross`])
/// or are parallel.
pub fn segment_intersection(p1: DVec2, p2: DVec2, q1: DVec2, q2: DVec2) -> Option<DVec2> {
    if !segments_cross(p1, p2, q1, q2) {
        return None;
    }
    let r = p2 - p1;
    let s = q2 - q1;
    let denom = r.perp_dot(s);
    if denom == 0.0 {
        return None;
    }
    let t = (q1 - p1).perp_dot(s) / denom;
    let point = p1 + r * t;
    point.is_finite().then_some(point)
}

//! Path builder for rounded polygons.
//!
//! Every vertex of a cyclic polygon is replaced by a circular arc tangent to
//! both of its edges. The arc for a corner with interior angle `θ` and radius
//! `r` touches each edge at distance `r / tan(θ/2)` from the vertex; that
//! tangent distance is capped at the length of each adjacent edge, and the
//! radius actually drawn is recomputed from the capped distance.
//!
//! # Degenerate input
//!
//! - Fewer than 3 vertices is a [`GeometryError::DegenerateGeometry`].
//! - Zero-length edges, non-positive radii and collinear corners (straight
//!   through or folding back) fall back to a sharp corner without an error. No path ever contains NaN.

use glam::DVec2;

use super::defaults::{COS_CLAMP, EPSILON};
use super::outline::Outline;
use crate::errors::GeometryError;
use crate::log::{debug, trace, warn};
use crate::types::{Point, RoundedVertex};

/// The resolved geometry of one polygon corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Corner {
    /// Where the incoming edge stops (tangent point on the edge from the
    /// previous vertex).
    pub start: Point,
    /// Where the outgoing edge begins.
    pub end: Point,
    /// Radius actually drawn; 0 for a sharp corner.
    pub radius: f64,
    /// SVG sweep flag for the arc from `start` to `end`.
    pub sweep: bool,
}

impl Corner {
    fn sharp(at: Point) -> Self {
        Self {
            start: at,
            end: at,
            radius: 0.0,
            sweep: false,
        }
    }

    fn has_arc(&self) -> bool {
        self.radius > EPSILON && self.start.distance(self.end) > EPSILON
    }
}

/// Resolve the corner at `vertex` between its cyclic neighbours.
pub(crate) fn round_corner(prev: Point, vertex: RoundedVertex, next: Point) -> Corner {
    let at = vertex.position();
    let v1 = prev - at;
    let v2 = next - at;
    let len1 = v1.length();
    let len2 = v2.length();

    // NaN radius lands here too
    if !(vertex.radius > 0.0) || len1 < EPSILON || len2 < EPSILON {
        return Corner::sharp(at);
    }

    if v1.perp_dot(v2).abs() < EPSILON * len1 * len2 {
        return Corner::sharp(at);
    }

    let cos = (v1.dot(v2) / (len1 * len2)).clamp(-1.0 + COS_CLAMP, 1.0 - COS_CLAMP);
    let half_tan = (cos.acos() / 2.0).tan();

    let wanted = (vertex.radius / half_tan).abs();
    let dist = wanted.min(len1).min(len2);
    let radius = dist * half_tan;
    if dist < wanted {
        debug!(
            x = vertex.x,
            y = vertex.y,
            requested = vertex.radius,
            effective = radius,
            "corner radius clamped by edge length"
        );
    }

    if !(radius > EPSILON) || !(dist > EPSILON) {
        return Corner::sharp(at);
    }

    let dir1: DVec2 = v1 / len1;
    let dir2: DVec2 = v2 / len2;

    Corner {
        start: at + dir1 * dist,
        end: at + dir2 * dist,
        radius,
        // Negative cross means the path turns clockwise on screen (y-down)
        sweep: v1.perp_dot(v2) < 0.0,
    }
}

/// Build a closed outline from an ordered, cyclic list of rounded vertices.
///
/// The first vertex's corner opens the path with a move-to; every later corner
/// is reached with a line-to; rounded corners then draw their arc, and the path
/// is closed back to its starting point.
pub fn build_path(vertices: &[RoundedVertex]) -> Result<Outline, GeometryError> {
    let n = vertices.len();
    if n < 3 {
        return Err(GeometryError::DegenerateGeometry { vertex_count: n });
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(GeometryError::NonFiniteVertex { index });
    }

    let mut outline = Outline::new();
    for (i, &vertex) in vertices.iter().enumerate() {
        let prev = vertices[(i + n - 1) % n].position();
        let next = vertices[(i + 1) % n].position();
        let corner = round_corner(prev, vertex, next);
        trace!(index = i, ?corner, "corner");

        outline = if i == 0 {
            outline.m(corner.start)
        } else {
            outline.l(corner.start)
        };
        if corner.has_arc() {
            outline = outline.a(corner.radius, corner.sweep, corner.end);
        }
    }

    Ok(outline.z())
}

/// Like [`build_path`], but logs the failure and returns an empty outline
/// instead, for render passes that must keep going.
pub fn build_path_or_empty(vertices: &[RoundedVertex]) -> Outline {
    build_path(vertices).unwrap_or_else(|err| {
        warn!(error = %err, "cannot build outline, drawing nothing");
        Outline::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::outline::PathCommand;
    use glam::dvec2;

    fn v(x: f64, y: f64, r: f64) -> RoundedVertex {
        RoundedVertex::new(x, y, r)
    }

    fn assert_close(actual: Point, expected: Point) {
        const TOLERANCE: f64 = 1e-9;
        assert!(
            actual.distance(expected) < TOLERANCE,
            "point mismatch: {actual} != {expected}"
        );
    }

    #[test]
    fn fewer_than_three_vertices_is_degenerate() {
        for count in 0..3 {
            let vertices = vec![v(0.0, 0.0, 1.0); count];
            assert_eq!(
                build_path(&vertices),
                Err(GeometryError::DegenerateGeometry { vertex_count: count })
            );
            assert!(build_path_or_empty(&vertices).is_empty());
        }
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        let vertices = [v(0.0, 0.0, 0.0), v(f64::NAN, 0.0, 0.0), v(1.0, 1.0, 0.0)];
        assert_eq!(
            build_path(&vertices),
            Err(GeometryError::NonFiniteVertex { index: 1 })
        );
    }

    #[test]
    fn sharp_square_has_no_arcs() {
        let square = [
            v(0.0, 0.0, 0.0),
            v(4.0, 0.0, 0.0),
            v(4.0, 4.0, 0.0),
            v(0.0, 4.0, 0.0),
        ];
        let outline = build_path(&square).unwrap();
        assert_eq!(outline.arc_count(), 0);
        assert_eq!(outline.line_count(), 3);
        assert!(outline.is_closed());
        assert_eq!(outline.to_string(), "M0,0 L4,0 L4,4 L0,4 Z");
    }

    #[test]
    fn right_angle_corner_tangent_points() {
        // Clockwise on screen: top edge heading right, then down
        let corner = round_corner(dvec2(0.0, 0.0), v(10.0, 0.0, 2.0), dvec2(10.0, 10.0));
        assert_close(corner.start, dvec2(8.0, 0.0));
        assert_close(corner.end, dvec2(10.0, 2.0));
        assert!((corner.radius - 2.0).abs() < 1e-9);
        assert!(corner.sweep);
    }

    #[test]
    fn sweep_follows_winding() {
        // Same corner walked the other way round turns counter-clockwise
        let corner = round_corner(dvec2(10.0, 10.0), v(10.0, 0.0, 2.0), dvec2(0.0, 0.0));
        assert!(!corner.sweep);
        assert_close(corner.start, dvec2(10.0, 2.0));
        assert_close(corner.end, dvec2(8.0, 0.0));
    }

    #[test]
    fn radius_is_clamped_to_the_shorter_edge() {
        // Edges of 4 and 100: a 10 radius at 90 degrees wants 10 along each edge
        let corner = round_corner(dvec2(6.0, 0.0), v(10.0, 0.0, 10.0), dvec2(10.0, 100.0));
        assert!((corner.radius - 4.0).abs() < 1e-9);
        assert_close(corner.start, dvec2(6.0, 0.0));
        assert_close(corner.end, dvec2(10.0, 4.0));
    }

    #[test]
    fn radius_fitting_the_whole_edge_is_kept() {
        let corner = round_corner(dvec2(0.0, 0.0), v(10.0, 0.0, 10.0), dvec2(10.0, 20.0));
        assert!((corner.radius - 10.0).abs() < 1e-9);
        assert_close(corner.start, dvec2(0.0, 0.0));
        assert_close(corner.end, dvec2(10.0, 10.0));
    }

    #[test]
    fn zero_length_edge_gives_sharp_corner() {
        let corner = round_corner(dvec2(5.0, 5.0), v(5.0, 5.0, 3.0), dvec2(9.0, 9.0));
        assert_eq!(corner, Corner::sharp(dvec2(5.0, 5.0)));
    }

    #[test]
    fn nan_and_negative_radius_are_sharp() {
        for radius in [f64::NAN, -1.0, 0.0] {
            let corner = round_corner(dvec2(0.0, 0.0), v(10.0, 0.0, radius), dvec2(10.0, 10.0));
            assert_eq!(corner.radius, 0.0);
            assert!(!corner.has_arc());
        }
    }

    #[test]
    fn straight_through_vertex_is_sharp() {
        let triangle = [
            v(0.0, 0.0, 5.0),
            v(5.0, 0.0, 5.0),
            v(10.0, 0.0, 5.0),
            v(5.0, 8.0, 5.0),
        ];
        let corner = round_corner(dvec2(0.0, 0.0), triangle[1], dvec2(10.0, 0.0));
        assert_eq!(corner, Corner::sharp(dvec2(5.0, 0.0)));

        let outline = build_path(&triangle).unwrap();
        assert_eq!(outline.arc_count(), 3, "{outline}");
        assert_eq!(outline.commands()[2], PathCommand::LineTo(dvec2(5.0, 0.0)));
        for command in outline.commands() {
            if let Some(p) = command.endpoint() {
                assert!(p.is_finite(), "non-finite point in {outline}");
            }
            if let PathCommand::ArcTo { radius, .. } = command {
                assert!(radius.is_finite());
            }
        }
    }

    #[test]
    fn hairpin_corner_stays_finite() {
        let spike = [v(0.0, 0.0, 4.0), v(20.0, 0.5, 4.0), v(0.0, 1.0, 4.0)];
        let outline = build_path(&spike).unwrap();
        assert!(!outline.to_string().contains("NaN"));
        assert!(!outline.to_string().contains("inf"));
    }

    #[test]
    fn rounded_square_matches_expected_path() {
        let square = [
            v(0.0, 0.0, 2.0),
            v(10.0, 0.0, 2.0),
            v(10.0, 10.0, 2.0),
            v(0.0, 10.0, 2.0),
        ];
        let outline = build_path(&square).unwrap();
        assert_eq!(outline.arc_count(), 4);
        assert_eq!(
            outline.to_string(),
            "M0,2 A2,2 0 0,1 2,0 L8,0 A2,2 0 0,1 10,2 L10,8 A2,2 0 0,1 8,10 L2,10 A2,2 0 0,1 0,8 Z"
        );
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let shape = [
            v(3.0, 1.0, 1.5),
            v(17.0, 2.0, 0.0),
            v(12.0, 14.0, 4.0),
            v(1.0, 9.0, 2.5),
        ];
        let a = build_path(&shape).unwrap();
        let b = build_path(&shape).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }
}

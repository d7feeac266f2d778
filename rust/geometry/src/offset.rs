// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parallel boundary curves offset from wall centerlines

use crate::error::{Error, Result};
use crate::polyline::{Polyline, EPS};
use nalgebra::{Point2, Vector2};

/// Maximum miter extension as a multiple of the offset distance.
///
/// Above this ratio the join point is clamped to the cap distance along the
/// corner bisector, which flattens the join instead of spiking. Only very
/// acute corners (below roughly 39 degrees) hit the cap.
pub const MITER_LIMIT: f64 = 3.0;

/// Left and right boundary curves of an offset centerline.
///
/// Both curves share the centerline's closure and have exactly one vertex
/// per centerline vertex; capped miter joins never insert points.
#[derive(Debug, Clone)]
pub struct OffsetPair {
    pub left: Polyline,
    pub right: Polyline,
}

/// Offset a centerline by half the wall thickness to each side.
///
/// "Left" is the side a +90 degree rotation of the travel direction points
/// to. For a counter-clockwise closed loop that is the interior, so `left`
/// is the inner ring and `right` the outer one.
pub fn offset_centerline(centerline: &Polyline, thickness: f64) -> Result<OffsetPair> {
    if thickness <= 0.0 {
        return Err(Error::InvalidOffset(format!(
            "Thickness must be positive, got {}",
            thickness
        )));
    }

    let points = centerline.points();
    let half = thickness / 2.0;

    let directions = segment_directions(centerline)?;

    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());

    for (i, point) in points.iter().enumerate() {
        let (incoming, outgoing) = vertex_directions(&directions, i, centerline.is_closed());
        let (normal, scale) = join_offset(incoming, outgoing);
        let shift = normal * (half * scale);
        left.push(point + shift);
        right.push(point - shift);
    }

    Ok(OffsetPair {
        left: Polyline::new(left, centerline.is_closed())?,
        right: Polyline::new(right, centerline.is_closed())?,
    })
}

/// Unit direction of every segment, including the wrap segment when closed
fn segment_directions(centerline: &Polyline) -> Result<Vec<Vector2<f64>>> {
    let points = centerline.points();
    centerline
        .segments()
        .map(|(i, j)| {
            (points[j] - points[i]).try_normalize(EPS).ok_or_else(|| {
                Error::InvalidOffset(format!("Degenerate segment between points {} and {}", i, j))
            })
        })
        .collect()
}

/// Incoming and outgoing segment directions at a vertex.
///
/// Open endpoints reuse their single adjacent segment on both sides.
fn vertex_directions(
    directions: &[Vector2<f64>],
    index: usize,
    closed: bool,
) -> (Vector2<f64>, Vector2<f64>) {
    let n = directions.len();
    if closed {
        let incoming = directions[(index + n - 1) % n];
        (incoming, directions[index])
    } else if index == 0 {
        (directions[0], directions[0])
    } else if index >= n {
        (directions[n - 1], directions[n - 1])
    } else {
        (directions[index - 1], directions[index])
    }
}

/// Join normal and miter scale at a vertex.
///
/// The normal is the bisector of the adjacent segment normals; the scale is
/// the miter ratio `1 / cos(theta / 2)` capped at [`MITER_LIMIT`]. A full
/// reversal (outgoing opposite the incoming direction) falls back to the
/// incoming normal at the cap distance.
fn join_offset(incoming: Vector2<f64>, outgoing: Vector2<f64>) -> (Vector2<f64>, f64) {
    let n0 = left_normal(incoming);
    let n1 = left_normal(outgoing);

    let bisector = n0 + n1;
    match bisector.try_normalize(EPS) {
        Some(normal) => {
            // |n0 + n1| = 2 cos(theta / 2) for unit normals
            let scale = (2.0 / bisector.norm()).min(MITER_LIMIT);
            (normal, scale)
        }
        None => (n0, MITER_LIMIT),
    }
}

fn left_normal(direction: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-direction.y, direction.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn open_segment() -> Polyline {
        Polyline::new(
            vec![Point2::new(0.0, 0.0), Point2::new(4000.0, 0.0)],
            false,
        )
        .unwrap()
    }

    fn closed_rect() -> Polyline {
        Polyline::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4000.0, 0.0),
                Point2::new(4000.0, 3000.0),
                Point2::new(0.0, 3000.0),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_non_positive_thickness() {
        assert!(offset_centerline(&open_segment(), 0.0).is_err());
        assert!(offset_centerline(&open_segment(), -200.0).is_err());
    }

    #[test]
    fn test_straight_segment_offsets_perpendicular() {
        let pair = offset_centerline(&open_segment(), 200.0).unwrap();

        assert_eq!(pair.left.len(), 2);
        assert_eq!(pair.right.len(), 2);
        assert!(!pair.left.is_closed());

        // Heading +x, left is +y
        assert_relative_eq!(pair.left.points()[0].y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(pair.left.points()[1].y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(pair.right.points()[0].y, -100.0, epsilon = 1e-9);
        assert_relative_eq!(pair.right.points()[1].x, 4000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_closed_rect_offsets_to_nested_rings() {
        let pair = offset_centerline(&closed_rect(), 200.0).unwrap();

        assert_eq!(pair.left.len(), 4);
        assert_eq!(pair.right.len(), 4);
        assert!(pair.left.is_closed());
        assert!(pair.right.is_closed());

        // Counter-clockwise loop: left is the inner ring
        assert_relative_eq!(pair.left.points()[0].x, 100.0, epsilon = 1e-6);
        assert_relative_eq!(pair.left.points()[0].y, 100.0, epsilon = 1e-6);
        assert_relative_eq!(pair.left.points()[2].x, 3900.0, epsilon = 1e-6);
        assert_relative_eq!(pair.left.points()[2].y, 2900.0, epsilon = 1e-6);

        // Right is the outer ring
        assert_relative_eq!(pair.right.points()[0].x, -100.0, epsilon = 1e-6);
        assert_relative_eq!(pair.right.points()[0].y, -100.0, epsilon = 1e-6);
        assert_relative_eq!(pair.right.points()[2].x, 4100.0, epsilon = 1e-6);
        assert_relative_eq!(pair.right.points()[2].y, 3100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_right_angle_miter_ratio() {
        // L-shaped open path; the corner join extends by sqrt(2) * half
        let path = Polyline::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1000.0, 0.0),
                Point2::new(1000.0, 1000.0),
            ],
            false,
        )
        .unwrap();

        let pair = offset_centerline(&path, 200.0).unwrap();
        let corner = pair.left.points()[1];
        let distance = (corner - Point2::new(1000.0, 0.0)).norm();
        assert_relative_eq!(distance, 100.0 * 2.0_f64.sqrt(), epsilon = 1e-9);

        // Inner corner of the left curve for this turn
        assert_relative_eq!(corner.x, 900.0, epsilon = 1e-9);
        assert_relative_eq!(corner.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_acute_corner_hits_miter_cap() {
        // Sharp hairpin: roughly 11 degrees between segments
        let path = Polyline::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1000.0, 0.0),
                Point2::new(0.0, 200.0),
            ],
            false,
        )
        .unwrap();

        let pair = offset_centerline(&path, 200.0).unwrap();
        let corner_shift = (pair.left.points()[1] - Point2::new(1000.0, 0.0)).norm();
        assert_relative_eq!(corner_shift, 100.0 * MITER_LIMIT, epsilon = 1e-9);
    }

    #[test]
    fn test_vertex_counts_match_centerline() {
        let path = Polyline::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2000.0, 100.0),
                Point2::new(4000.0, 0.0),
                Point2::new(6000.0, 400.0),
            ],
            false,
        )
        .unwrap();

        let pair = offset_centerline(&path, 150.0).unwrap();
        assert_eq!(pair.left.len(), path.len());
        assert_eq!(pair.right.len(), path.len());
    }
}

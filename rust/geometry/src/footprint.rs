// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall plan outlines assembled from offset boundary pairs

use crate::error::{Error, Result};
use crate::offset::OffsetPair;
use crate::polyline::{signed_area, EPS};
use nalgebra::Point2;

/// Closed plan outline of a wall volume.
///
/// Offsetting an open centerline yields a single outer ring. Offsetting a
/// closed centerline loop yields two nested rings; the enclosed one becomes
/// the hole. Outer rings are counter-clockwise, holes clockwise.
#[derive(Debug, Clone)]
pub struct Footprint {
    pub outer: Vec<Point2<f64>>,
    pub hole: Option<Vec<Point2<f64>>>,
}

impl Footprint {
    /// Create a hole-less footprint from a single ring.
    ///
    /// The ring is validated (simple, non-zero area) and normalized to
    /// counter-clockwise winding.
    pub fn new(outer: Vec<Point2<f64>>) -> Result<Self> {
        let outer = normalized_ring(outer, false)?;
        Ok(Self { outer, hole: None })
    }

    /// Number of ring vertices, hole included
    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.hole.as_ref().map_or(0, |h| h.len())
    }

    /// Single-loop cap outline.
    ///
    /// When a hole is present the two rings are bridged into one loop at
    /// their first vertices, so a cap face can still be drawn as a single
    /// even-odd filled polygon.
    pub fn cap_loop(&self) -> Vec<Point2<f64>> {
        match &self.hole {
            None => self.outer.clone(),
            Some(hole) => {
                let mut loop_points =
                    Vec::with_capacity(self.outer.len() + hole.len() + 2);
                loop_points.extend_from_slice(&self.outer);
                loop_points.push(self.outer[0]);
                loop_points.extend_from_slice(hole);
                loop_points.push(hole[0]);
                loop_points
            }
        }
    }
}

/// Merge an offset pair into the wall's plan outline.
///
/// Open pairs concatenate `left` forward with `right` reversed into one
/// closed ring. Closed pairs keep both rings, the enclosing one as outer
/// boundary and the enclosed one as hole. A self-intersecting or zero-area
/// result is reported as a degenerate footprint, never repaired here.
pub fn build_footprint(pair: &OffsetPair) -> Result<Footprint> {
    if pair.left.is_closed() != pair.right.is_closed() {
        return Err(Error::DegenerateFootprint(
            "Offset pair mixes open and closed curves".to_string(),
        ));
    }

    if !pair.left.is_closed() {
        let mut outer =
            Vec::with_capacity(pair.left.len() + pair.right.len());
        outer.extend_from_slice(pair.left.points());
        outer.extend(pair.right.points().iter().rev().copied());

        let outer = normalized_ring(outer, false)?;
        return Ok(Footprint { outer, hole: None });
    }

    let left_area = signed_area(pair.left.points()).abs();
    let right_area = signed_area(pair.right.points()).abs();
    let (outer_ring, hole_ring) = if left_area >= right_area {
        (pair.left.points(), pair.right.points())
    } else {
        (pair.right.points(), pair.left.points())
    };

    let outer = normalized_ring(outer_ring.to_vec(), false)?;
    let hole = normalized_ring(hole_ring.to_vec(), true)?;
    Ok(Footprint {
        outer,
        hole: Some(hole),
    })
}

/// Validate a ring and normalize its winding.
///
/// Holes are wound clockwise, outer rings counter-clockwise.
fn normalized_ring(mut ring: Vec<Point2<f64>>, is_hole: bool) -> Result<Vec<Point2<f64>>> {
    if ring.len() < 3 {
        return Err(Error::DegenerateFootprint(format!(
            "Ring needs at least 3 vertices, got {}",
            ring.len()
        )));
    }

    let area = signed_area(&ring);
    if area.abs() < EPS {
        return Err(Error::DegenerateFootprint(
            "Ring area is zero".to_string(),
        ));
    }

    ensure_simple(&ring)?;

    let wants_positive = !is_hole;
    if (area > 0.0) != wants_positive {
        ring.reverse();
    }
    Ok(ring)
}

/// Reject rings with properly crossing edges.
///
/// Adjacent edges share a vertex and are skipped; everything else is tested
/// pairwise with the orientation predicate. Sharp miter-capped corners can
/// still fold an offset curve over itself, which shows up here.
fn ensure_simple(ring: &[Point2<f64>]) -> Result<()> {
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        for j in i + 2..n {
            // The wrap edge is adjacent to edge 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let c = ring[j];
            let d = ring[(j + 1) % n];
            if segments_cross(a, b, c, d) {
                return Err(Error::DegenerateFootprint(format!(
                    "Ring edges {} and {} intersect",
                    i, j
                )));
            }
        }
    }
    Ok(())
}

fn segments_cross(
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
    d: Point2<f64>,
) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// Twice the signed area of the triangle a, b, c
fn orientation(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

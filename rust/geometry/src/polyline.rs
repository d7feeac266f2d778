// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polyline and wall value types shared by every pipeline stage

use crate::error::{Error, Result};
use nalgebra::Point2;

/// Distance below which two points are considered coincident (mm)
pub const EPS: f64 = 1e-6;

/// Winding direction of a closed path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Ordered 2D point sequence in millimeters.
///
/// Closed polylines do not repeat the first point at the end; the `closed`
/// flag implies the wrap edge from the last point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2<f64>>,
    closed: bool,
}

impl Polyline {
    /// Create a validated polyline.
    ///
    /// An explicit duplicated closing point on a closed polyline is stripped.
    /// Open polylines need at least 2 points, closed ones at least 3, and no
    /// two consecutive points (including the wrap pair) may coincide.
    pub fn new(mut points: Vec<Point2<f64>>, closed: bool) -> Result<Self> {
        if closed && points.len() > 1 {
            let first = points[0];
            let last = points[points.len() - 1];
            if (last - first).norm() < EPS {
                points.pop();
            }
        }

        let min_points = if closed { 3 } else { 2 };
        if points.len() < min_points {
            return Err(Error::InvalidPolyline(format!(
                "Need at least {} points, got {}",
                min_points,
                points.len()
            )));
        }

        for i in 1..points.len() {
            if (points[i] - points[i - 1]).norm() < EPS {
                return Err(Error::InvalidPolyline(format!(
                    "Coincident consecutive points at index {}",
                    i
                )));
            }
        }
        if closed {
            let first = points[0];
            let last = points[points.len() - 1];
            if (last - first).norm() < EPS {
                return Err(Error::InvalidPolyline(
                    "Coincident points across the closing edge".to_string(),
                ));
            }
        }

        Ok(Self { points, closed })
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total path length, including the wrap edge for closed polylines
    pub fn length(&self) -> f64 {
        let mut total = 0.0;
        for i in 1..self.points.len() {
            total += (self.points[i] - self.points[i - 1]).norm();
        }
        if self.closed {
            total += (self.points[0] - self.points[self.points.len() - 1]).norm();
        }
        total
    }

    /// Segment index pairs, including the wrap pair for closed polylines
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.points.len();
        let count = if self.closed { n } else { n - 1 };
        (0..count).map(move |i| (i, (i + 1) % n))
    }
}

/// Signed polygon area via the shoelace formula.
///
/// Positive for counter-clockwise rings. The loop is treated as implicitly
/// closed; an explicit duplicate end point contributes nothing.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

/// Winding of a closed ring, or `None` when the area is too small to tell
pub fn winding(points: &[Point2<f64>]) -> Option<Winding> {
    let area = signed_area(points);
    if area > EPS {
        Some(Winding::CounterClockwise)
    } else if area < -EPS {
        Some(Winding::Clockwise)
    } else {
        None
    }
}

/// A wall accepted into the pipeline: centerline plus positive thickness and
/// height in millimeters. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Wall {
    pub centerline: Polyline,
    pub thickness: f64,
    pub height: f64,
}

impl Wall {
    pub fn new(centerline: Polyline, thickness: f64, height: f64) -> Result<Self> {
        if thickness <= 0.0 {
            return Err(Error::InvalidWall(format!(
                "Thickness must be positive, got {}",
                thickness
            )));
        }
        if height <= 0.0 {
            return Err(Error::InvalidWall(format!(
                "Height must be positive, got {}",
                height
            )));
        }
        Ok(Self {
            centerline,
            thickness,
            height,
        })
    }
}

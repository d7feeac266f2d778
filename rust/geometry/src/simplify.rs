// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw path cleanup: point reduction, short-segment removal, winding
//! normalization and optional smoothing.
//!
//! Inputs here come straight from vectorization and have not passed the
//! `Polyline` invariants yet. Malformed paths (fewer than 2 points) pass
//! through unchanged instead of raising an error; upstream data quality
//! varies and the caller decides what to do with leftovers. This leniency
//! is a documented contract, not an accident.

use crate::polyline::{signed_area, Winding, EPS};
use nalgebra::Point2;

/// A raw path prior to validation
#[derive(Debug, Clone, PartialEq)]
pub struct RawPath {
    pub points: Vec<Point2<f64>>,
    pub closed: bool,
}

impl RawPath {
    pub fn new(points: Vec<Point2<f64>>, closed: bool) -> Self {
        Self { points, closed }
    }
}

/// Configuration for the cleanup pipeline.
///
/// Stages run in fixed order (reduce, filter segments, equalize direction);
/// a stage is skipped when its knob is zero or `None`.
#[derive(Debug, Clone)]
pub struct SimplifyOptions {
    /// Perpendicular-distance tolerance for point reduction (mm)
    pub tolerance: f64,
    /// Minimum distance between consecutive kept points (mm)
    pub min_segment_length: f64,
    /// Target winding for closed paths; `None` leaves direction untouched
    pub winding: Option<Winding>,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            min_segment_length: 50.0,
            winding: Some(Winding::CounterClockwise),
        }
    }
}

/// Clean a batch of raw paths
pub fn simplify(paths: &[RawPath], options: &SimplifyOptions) -> Vec<RawPath> {
    paths
        .iter()
        .map(|path| simplify_path(path, options))
        .collect()
}

fn simplify_path(path: &RawPath, options: &SimplifyOptions) -> RawPath {
    // Pass-through for degenerate input
    if path.points.len() < 2 {
        return path.clone();
    }

    let mut points = path.points.clone();

    if options.tolerance > 0.0 {
        points = douglas_peucker(&points, options.tolerance);
    }

    if options.min_segment_length > 0.0 {
        points = remove_small_segments(&points, options.min_segment_length);
    }

    if let Some(target) = options.winding {
        let closed = path.closed || endpoints_coincide(&points, options.tolerance.max(EPS));
        if closed {
            points = reverse_to_winding(&points, target);
        }
    }

    RawPath {
        points,
        closed: path.closed,
    }
}

/// Douglas-Peucker point reduction.
///
/// Discards points whose perpendicular distance to the chord between the
/// retained neighbors stays below `tolerance`. Both endpoints are always
/// kept and the result is a subsequence of the input. Paths with 2 or fewer
/// points are returned unchanged.
pub fn douglas_peucker(points: &[Point2<f64>], tolerance: f64) -> Vec<Point2<f64>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark_kept(points, 0, points.len() - 1, tolerance, &mut keep);

    points
        .iter()
        .zip(keep.iter())
        .filter_map(|(p, &k)| if k { Some(*p) } else { None })
        .collect()
}

fn mark_kept(points: &[Point2<f64>], first: usize, last: usize, tolerance: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let mut max_distance = 0.0;
    let mut max_index = first;
    for i in first + 1..last {
        let distance = perpendicular_distance(&points[i], &points[first], &points[last]);
        if distance > max_distance {
            max_distance = distance;
            max_index = i;
        }
    }

    if max_distance > tolerance {
        keep[max_index] = true;
        mark_kept(points, first, max_index, tolerance, keep);
        mark_kept(points, max_index, last, tolerance, keep);
    }
}

/// Perpendicular distance from a point to the chord between two others
pub fn perpendicular_distance(
    point: &Point2<f64>,
    chord_start: &Point2<f64>,
    chord_end: &Point2<f64>,
) -> f64 {
    let dx = chord_end.x - chord_start.x;
    let dy = chord_end.y - chord_start.y;
    let length_sq = dx * dx + dy * dy;

    if length_sq < EPS * EPS {
        return (point - chord_start).norm();
    }

    let t = ((point.x - chord_start.x) * dx + (point.y - chord_start.y) * dy) / length_sq;
    let t = t.clamp(0.0, 1.0);

    let proj_x = chord_start.x + t * dx;
    let proj_y = chord_start.y + t * dy;
    let px = point.x - proj_x;
    let py = point.y - proj_y;
    (px * px + py * py).sqrt()
}

/// Drop points closer than `min_length` to the last kept point.
///
/// The first point is always kept. When the input was closed (first and last
/// point within `min_length`) and filtering opened the loop up, the first
/// point is re-appended to restore closure. A path that collapses below two
/// useful points degenerates to its first and last original point.
pub fn remove_small_segments(points: &[Point2<f64>], min_length: f64) -> Vec<Point2<f64>> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let was_closed = (points[points.len() - 1] - points[0]).norm() < min_length;

    let mut kept = vec![points[0]];
    for point in &points[1..] {
        let last = kept[kept.len() - 1];
        if (point - last).norm() >= min_length {
            kept.push(*point);
        }
    }

    if kept.len() < 2 {
        return vec![points[0], points[points.len() - 1]];
    }

    if was_closed {
        let first = kept[0];
        let last = kept[kept.len() - 1];
        if (last - first).norm() >= min_length {
            kept.push(first);
        }
    }

    kept
}

/// Normalize the winding of a closed path.
///
/// The path counts as closed when its endpoints lie within `tolerance`;
/// open paths are returned untouched. Reversal keeps the first point fixed
/// and reverses the remainder.
pub fn equalize_direction(
    points: &[Point2<f64>],
    target: Winding,
    tolerance: f64,
) -> Vec<Point2<f64>> {
    if !endpoints_coincide(points, tolerance) {
        return points.to_vec();
    }
    reverse_to_winding(points, target)
}

fn endpoints_coincide(points: &[Point2<f64>], tolerance: f64) -> bool {
    points.len() >= 3 && (points[points.len() - 1] - points[0]).norm() < tolerance
}

fn reverse_to_winding(points: &[Point2<f64>], target: Winding) -> Vec<Point2<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    // Strip an explicit duplicate end point so the reversal cannot create a
    // coincident pair at the front; restored below.
    let explicit_close = (points[points.len() - 1] - points[0]).norm() < EPS;
    let ring = if explicit_close {
        &points[..points.len() - 1]
    } else {
        points
    };

    let area = signed_area(ring);
    let current = if area > 0.0 {
        Winding::CounterClockwise
    } else if area < 0.0 {
        Winding::Clockwise
    } else {
        return points.to_vec();
    };

    if current == target {
        return points.to_vec();
    }

    let mut reversed = Vec::with_capacity(points.len());
    reversed.push(ring[0]);
    reversed.extend(ring[1..].iter().rev().copied());
    if explicit_close {
        reversed.push(ring[0]);
    }
    reversed
}

/// Blend each point toward the average of a symmetric neighbor window.
///
/// Closed paths wrap around the ends, open paths clamp at them.
/// `smoothness` is clamped to `[0, 1]`; zero smoothness or a window below 2
/// is a no-op.
pub fn smooth_path(path: &RawPath, window_size: usize, smoothness: f64) -> RawPath {
    if smoothness <= 0.0 || window_size < 2 || path.points.len() < 3 {
        return path.clone();
    }

    let blend = smoothness.min(1.0);
    let half = (window_size / 2) as isize;
    let n = path.points.len() as isize;

    let points = path
        .points
        .iter()
        .enumerate()
        .map(|(i, original)| {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            let mut count = 0.0;
            for offset in -half..=half {
                let j = if path.closed {
                    (i as isize + offset).rem_euclid(n)
                } else {
                    (i as isize + offset).clamp(0, n - 1)
                };
                let neighbor = &path.points[j as usize];
                sum_x += neighbor.x;
                sum_y += neighbor.y;
                count += 1.0;
            }
            let avg = Point2::new(sum_x / count, sum_y / count);
            Point2::new(
                original.x + (avg.x - original.x) * blend,
                original.y + (avg.y - original.y) * blend,
            )
        })
        .collect();

    RawPath {
        points,
        closed: path.closed,
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw-path cleanup at the product boundary.
//!
//! Thin conversion layer between the serialized path representation and the
//! geometry simplifier. The simplifier's leniency carries through: paths
//! that are too short to clean come back unchanged.

use crate::types::RawPathSpec;
use axon_lite_geometry::{simplify, smooth_path, Point2, RawPath, SimplifyOptions};

/// Clean a batch of serialized raw paths
pub fn clean_paths(paths: &[RawPathSpec], options: &SimplifyOptions) -> Vec<RawPathSpec> {
    let raw: Vec<RawPath> = paths.iter().map(to_raw_path).collect();
    simplify(&raw, options).iter().map(from_raw_path).collect()
}

/// Smooth a batch of serialized raw paths
pub fn smooth_paths(
    paths: &[RawPathSpec],
    window_size: usize,
    smoothness: f64,
) -> Vec<RawPathSpec> {
    paths
        .iter()
        .map(|path| from_raw_path(&smooth_path(&to_raw_path(path), window_size, smoothness)))
        .collect()
}

fn to_raw_path(spec: &RawPathSpec) -> RawPath {
    RawPath::new(
        spec.points.iter().map(|[x, y]| Point2::new(*x, *y)).collect(),
        spec.closed,
    )
}

fn from_raw_path(path: &RawPath) -> RawPathSpec {
    RawPathSpec {
        points: path.points.iter().map(|p| [p.x, p.y]).collect(),
        closed: path.closed,
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary types crossing the topology-extractor and renderer interfaces

use axon_lite_geometry::{FaceKind, Point2};
use serde::{Deserialize, Serialize};

/// Wall description as supplied by upstream topology extraction.
///
/// Coordinates are millimeters. The centerline counts as closed when
/// `closed` is set, or when its first and last points coincide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpec {
    /// Centerline vertices
    pub centerline: Vec<[f64; 2]>,
    /// Wall thickness in millimeters
    pub thickness: f64,
    /// Wall height in millimeters
    pub height: f64,
    /// Explicit closure override; inferred from coincident endpoints when
    /// absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

impl WallSpec {
    pub fn new(centerline: Vec<[f64; 2]>, thickness: f64, height: f64) -> Self {
        Self {
            centerline,
            thickness,
            height,
            closed: None,
        }
    }

    pub fn points(&self) -> Vec<Point2<f64>> {
        self.centerline
            .iter()
            .map(|[x, y]| Point2::new(*x, *y))
            .collect()
    }
}

/// Raw vectorized path prior to cleanup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPathSpec {
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub closed: bool,
}

/// Drawing style of an output face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceStyle {
    Top,
    Side,
}

impl From<FaceKind> for FaceStyle {
    fn from(kind: FaceKind) -> Self {
        match kind {
            FaceKind::Top => FaceStyle::Top,
            // Bottom caps never reach the output; anything else draws as a
            // side surface
            _ => FaceStyle::Side,
        }
    }
}

/// One face of the final drawing. The sequence order is the draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFace {
    pub points: Vec<[f64; 2]>,
    pub style: FaceStyle,
}

/// Per-wall failure report; sibling walls keep rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallFailure {
    pub wall_index: usize,
    pub message: String,
}

/// Counters and timings for one scene invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneStats {
    pub wall_count: usize,
    pub rendered_walls: usize,
    pub failed_walls: usize,
    pub face_count: usize,
    pub geometry_time_ms: u64,
    pub sort_time_ms: u64,
    pub total_time_ms: u64,
}

/// Ordered drawing plus per-wall diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneResult {
    pub faces: Vec<SceneFace>,
    pub failures: Vec<WallFailure>,
    pub stats: SceneStats,
}

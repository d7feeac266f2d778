// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene pipeline: parallel per-wall geometry and the global draw ordering

use crate::types::{SceneFace, SceneResult, SceneStats, WallFailure, WallSpec};
use axon_lite_geometry as geometry;
use axon_lite_geometry::{
    build_footprint, cull_faces, depth_sort, extrude, offset_centerline, project_faces,
    AxonFace, Polyline, Wall,
};
use rayon::prelude::*;

/// Distance below which a centerline's endpoints count as coincident (mm)
const CLOSURE_EPS: f64 = 1e-6;

/// Errors that can occur at the scene level.
///
/// Geometry failures of individual walls are not scene errors; they are
/// collected per wall so sibling walls keep rendering.
#[derive(Debug, Clone)]
pub enum SceneError {
    EmptyScene,
    AllWallsFailed(Vec<WallFailure>),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::EmptyScene => write!(f, "No walls in scene"),
            SceneError::AllWallsFailed(failures) => {
                write!(f, "All {} walls failed geometry", failures.len())
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Run the full stage chain for one wall.
///
/// Offset, footprint, extrusion, culling and projection in strict order;
/// the cross-wall depth sort happens in [`render_scene`].
pub fn render_wall(spec: &WallSpec) -> geometry::Result<Vec<AxonFace>> {
    let wall = wall_from_spec(spec)?;
    let pair = offset_centerline(&wall.centerline, wall.thickness)?;
    let footprint = build_footprint(&pair)?;
    let volume = extrude(&footprint, wall.height)?;
    let visible = cull_faces(volume.faces, None);
    Ok(project_faces(&visible))
}

fn wall_from_spec(spec: &WallSpec) -> geometry::Result<Wall> {
    let points = spec.points();
    let closed = spec.closed.unwrap_or_else(|| {
        points.len() > 2
            && (points[points.len() - 1] - points[0]).norm() < CLOSURE_EPS
    });
    let centerline = Polyline::new(points, closed)?;
    Wall::new(centerline, spec.thickness, spec.height)
}

/// Render every wall and produce the final back-to-front drawing.
///
/// Walls run in parallel and fan in before the single cross-wall depth
/// sort. One wall's failure never aborts its siblings; failures come back
/// in `failures`, indexed by input position.
pub fn render_scene(walls: &[WallSpec]) -> Result<SceneResult, SceneError> {
    let total_start = std::time::Instant::now();

    if walls.is_empty() {
        return Err(SceneError::EmptyScene);
    }

    tracing::info!(walls = walls.len(), "Starting scene rendering");

    // PARALLEL WALL PROCESSING
    let geometry_start = std::time::Instant::now();
    let per_wall: Vec<(usize, geometry::Result<Vec<AxonFace>>)> = walls
        .par_iter()
        .enumerate()
        .map(|(index, spec)| (index, render_wall(spec)))
        .collect();
    let geometry_time = geometry_start.elapsed();

    let mut all_faces: Vec<AxonFace> = Vec::new();
    let mut failures: Vec<WallFailure> = Vec::new();

    for (index, outcome) in per_wall {
        match outcome {
            Ok(faces) => {
                tracing::debug!(wall = index, faces = faces.len(), "Wall rendered");
                all_faces.extend(faces);
            }
            Err(error) => {
                tracing::warn!(wall = index, error = %error, "Wall skipped");
                failures.push(WallFailure {
                    wall_index: index,
                    message: error.to_string(),
                });
            }
        }
    }

    if failures.len() == walls.len() {
        return Err(SceneError::AllWallsFailed(failures));
    }

    // Single cross-wall synchronization point
    let sort_start = std::time::Instant::now();
    let ordered = depth_sort(all_faces);
    let sort_time = sort_start.elapsed();

    let faces: Vec<SceneFace> = ordered.iter().map(scene_face).collect();
    let total_time = total_start.elapsed();

    let stats = SceneStats {
        wall_count: walls.len(),
        rendered_walls: walls.len() - failures.len(),
        failed_walls: failures.len(),
        face_count: faces.len(),
        geometry_time_ms: geometry_time.as_millis() as u64,
        sort_time_ms: sort_time.as_millis() as u64,
        total_time_ms: total_time.as_millis() as u64,
    };

    tracing::info!(
        faces = stats.face_count,
        rendered_walls = stats.rendered_walls,
        failed_walls = stats.failed_walls,
        geometry_time_ms = stats.geometry_time_ms,
        total_time_ms = stats.total_time_ms,
        "Scene rendering complete"
    );

    Ok(SceneResult {
        faces,
        failures,
        stats,
    })
}

fn scene_face(face: &AxonFace) -> SceneFace {
    SceneFace {
        points: face.points.iter().map(|p| [p.x, p.y]).collect(),
        style: face.kind.into(),
    }
}

/// Fixture scene: four straight 200mm walls around a 10m x 8m plan
pub fn generate_test_scene() -> Vec<WallSpec> {
    let corners = [
        [0.0, 0.0],
        [10_000.0, 0.0],
        [10_000.0, 8000.0],
        [0.0, 8000.0],
    ];

    (0..4)
        .map(|i| {
            WallSpec::new(
                vec![corners[i], corners[(i + 1) % 4]],
                200.0,
                2700.0,
            )
        })
        .collect()
}

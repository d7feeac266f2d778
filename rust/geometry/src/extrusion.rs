// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion of wall footprints into 3D face sets

use crate::error::{Error, Result};
use crate::footprint::Footprint;
use crate::polyline::EPS;
use nalgebra::{Point2, Point3, Vector3};
use smallvec::SmallVec;

/// Style tag carried through culling, projection and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Top,
    Bottom,
    Side,
}

/// A planar face of an extruded wall volume.
///
/// Side faces are always quads and stay inline in the SmallVec; cap loops
/// may spill to the heap.
#[derive(Debug, Clone)]
pub struct Face {
    pub points: SmallVec<[Point3<f64>; 4]>,
    pub normal: Vector3<f64>,
    pub kind: FaceKind,
}

impl Face {
    /// Arithmetic mean of the face's vertices
    pub fn centroid(&self) -> Point3<f64> {
        let mut sum = Vector3::zeros();
        for point in &self.points {
            sum += point.coords;
        }
        Point3::from(sum / self.points.len() as f64)
    }
}

/// Faces of one extruded wall
#[derive(Debug, Clone)]
pub struct WallVolume {
    pub faces: Vec<Face>,
}

impl WallVolume {
    /// Number of side faces (one per footprint edge)
    pub fn side_count(&self) -> usize {
        self.faces
            .iter()
            .filter(|f| f.kind == FaceKind::Side)
            .count()
    }

    /// Distinct corner vertices: each footprint vertex at two elevations
    pub fn vertex_count(&self) -> usize {
        self.side_count() * 2
    }

    /// Distinct edges: one base, one top and one vertical per footprint edge
    pub fn edge_count(&self) -> usize {
        self.side_count() * 3
    }
}

/// Extrude a footprint along +Z into a prism.
///
/// The bottom cap sits at z = 0, the top cap at z = `height`, and every ring
/// edge becomes one outward-facing quad. An N-vertex hole-less footprint
/// yields N + 2 faces over 2N distinct vertices.
pub fn extrude(footprint: &Footprint, height: f64) -> Result<WallVolume> {
    if height <= 0.0 {
        return Err(Error::InvalidExtrusion(format!(
            "Height must be positive, got {}",
            height
        )));
    }

    let mut faces = Vec::with_capacity(footprint.vertex_count() + 2);

    let cap = footprint.cap_loop();

    // Bottom cap, wound so the outward normal points down
    faces.push(Face {
        points: cap.iter().rev().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
        normal: Vector3::new(0.0, 0.0, -1.0),
        kind: FaceKind::Bottom,
    });

    side_faces(&footprint.outer, height, &mut faces);
    if let Some(hole) = &footprint.hole {
        side_faces(hole, height, &mut faces);
    }

    faces.push(Face {
        points: cap.iter().map(|p| Point3::new(p.x, p.y, height)).collect(),
        normal: Vector3::new(0.0, 0.0, 1.0),
        kind: FaceKind::Top,
    });

    Ok(WallVolume { faces })
}

/// One outward quad per ring edge.
///
/// The outer ring is counter-clockwise, so rotating each edge by -90
/// degrees points away from the solid; the clockwise hole winding flips the
/// edges and the same rotation points into the cavity, which is still away
/// from the solid.
fn side_faces(ring: &[Point2<f64>], height: f64, faces: &mut Vec<Face>) {
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        let p0 = ring[i];
        let p1 = ring[j];

        let edge = Vector3::new(p1.x - p0.x, p1.y - p0.y, 0.0);
        let normal = match Vector3::new(edge.y, -edge.x, 0.0).try_normalize(EPS) {
            Some(n) => n,
            None => continue, // Degenerate edge, nothing to draw
        };

        let points = SmallVec::from_buf([
            Point3::new(p0.x, p0.y, 0.0),
            Point3::new(p1.x, p1.y, 0.0),
            Point3::new(p1.x, p1.y, height),
            Point3::new(p0.x, p0.y, height),
        ]);

        faces.push(Face {
            points,
            normal,
            kind: FaceKind::Side,
        });
    }
}

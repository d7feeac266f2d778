// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hidden-face elimination for the fixed axonometric view

use crate::extrusion::{Face, FaceKind};
use crate::polyline::EPS;
use crate::projection;
use nalgebra::Vector3;

/// Drop faces that cannot contribute to the drawing.
///
/// Bottom caps are never visible from the above-horizon view and are
/// removed unconditionally. Any other face survives when its outward
/// normal faces the camera; side faces additionally survive whenever their
/// footprint edge does not project to a degenerate direction, and the
/// painter's ordering overpaints the back-facing ones. The filter is
/// stable: surviving faces keep their relative order.
///
/// `view` defaults to the projection's camera direction.
pub fn cull_faces(faces: Vec<Face>, view: Option<Vector3<f64>>) -> Vec<Face> {
    let view = view.unwrap_or_else(projection::view_direction);
    faces
        .into_iter()
        .filter(|face| is_visible(face, &view))
        .collect()
}

fn is_visible(face: &Face, view: &Vector3<f64>) -> bool {
    match face.kind {
        FaceKind::Bottom => false,
        FaceKind::Top => face.normal.dot(view) < 0.0,
        FaceKind::Side => {
            face.normal.dot(view) < 0.0 || !projected_edge_degenerate(face)
        }
    }
}

/// Screen-space direction of a side face's footprint edge.
///
/// The first two vertices of a side quad are its base edge. An edge that
/// collapses under projection would draw as a sliver, so it is discarded.
fn projected_edge_degenerate(face: &Face) -> bool {
    if face.points.len() < 2 {
        return true;
    }
    let a = projection::project_point(&face.points[0]);
    let b = projection::project_point(&face.points[1]);
    (b - a).norm() < EPS
}

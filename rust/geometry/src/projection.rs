// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The canonical axonometric projection.
//!
//! Every 3D-to-2D mapping in the system routes through [`project_point`];
//! no other module applies its own transform. The view uses two 30 degree
//! axes and compresses heights to keep tall walls from stretching the
//! drawing vertically.

use crate::extrusion::{Face, FaceKind};
use nalgebra::{Point2, Point3, Vector3};

/// Angle of the two plan axes against the horizontal (30 degrees)
pub const AXIS_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Vertical compression factor applied to heights
pub const HEIGHT_SCALE: f64 = 0.6;

/// A face after projection: screen-space loop plus its sort depth.
///
/// `depth` is the camera-axis component of the 3D face centroid and is used
/// only for ordering, never for geometry.
#[derive(Debug, Clone)]
pub struct AxonFace {
    pub points: Vec<Point2<f64>>,
    pub depth: f64,
    pub kind: FaceKind,
}

/// Map a 3D point into the drawing plane.
///
/// Pure function: the input is untouched and the output is a fresh point.
///
/// ```text
/// x' = (x - y) * cos 30
/// y' = (x + y) * sin 30 - z * 0.6
/// ```
pub fn project_point(point: &Point3<f64>) -> Point2<f64> {
    Point2::new(
        (point.x - point.y) * AXIS_ANGLE.cos(),
        (point.x + point.y) * AXIS_ANGLE.sin() - point.z * HEIGHT_SCALE,
    )
}

/// Unit vector from the scene toward the camera.
///
/// This is the projection's null direction: moving a point along it does
/// not change its screen position, which makes it the canonical depth axis.
pub fn camera_axis() -> Vector3<f64> {
    let vertical = 2.0 * AXIS_ANGLE.sin() / HEIGHT_SCALE;
    Vector3::new(1.0, 1.0, vertical).normalize()
}

/// Direction the camera looks along (into the scene, from above)
pub fn view_direction() -> Vector3<f64> {
    -camera_axis()
}

/// Scalar position of a point along the camera axis; larger is nearer the
/// camera
pub fn camera_depth(point: &Point3<f64>) -> f64 {
    point.coords.dot(&camera_axis())
}

/// Project a face's loop and attach its centroid depth and style tag
pub fn project_face(face: &Face) -> AxonFace {
    AxonFace {
        points: face.points.iter().map(project_point).collect(),
        depth: camera_depth(&face.centroid()),
        kind: face.kind,
    }
}

/// Project a batch of faces, preserving order
pub fn project_faces(faces: &[Face]) -> Vec<AxonFace> {
    faces.iter().map(project_face).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_origin_projects_to_origin() {
        let projected = project_point(&Point3::new(0.0, 0.0, 0.0));
        assert_eq!(projected, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_x_axis_sample() {
        let projected = project_point(&Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(projected.x, 10.0 * AXIS_ANGLE.cos(), epsilon = 1e-12);
        assert_relative_eq!(projected.y, 10.0 * AXIS_ANGLE.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_height_compresses() {
        let base = project_point(&Point3::new(500.0, 700.0, 0.0));
        let lifted = project_point(&Point3::new(500.0, 700.0, 1000.0));
        assert_relative_eq!(base.x, lifted.x, epsilon = 1e-12);
        assert_relative_eq!(base.y - lifted.y, 600.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_is_pure_and_deterministic() {
        let point = Point3::new(123.25, -456.5, 789.75);
        let before = point;

        let first = project_point(&point);
        let second = project_point(&point);

        assert_eq!(point, before);
        assert_eq!(first, second);
        assert!(first.x.to_bits() == second.x.to_bits());
        assert!(first.y.to_bits() == second.y.to_bits());
    }

    #[test]
    fn test_camera_axis_is_invisible_to_projection() {
        let point = Point3::new(100.0, 200.0, 300.0);
        let shifted = point + camera_axis() * 5000.0;

        let a = project_point(&point);
        let b = project_point(&shifted);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);

        // Moving toward the camera increases depth
        assert!(camera_depth(&shifted) > camera_depth(&point));
    }

    #[test]
    fn test_project_face_carries_style_and_depth() {
        use smallvec::SmallVec;

        let face = Face {
            points: SmallVec::from_buf([
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1000.0, 0.0, 0.0),
                Point3::new(1000.0, 0.0, 2700.0),
                Point3::new(0.0, 0.0, 2700.0),
            ]),
            normal: Vector3::new(0.0, -1.0, 0.0),
            kind: FaceKind::Side,
        };

        let projected = project_face(&face);
        assert_eq!(projected.kind, FaceKind::Side);
        assert_eq!(projected.points.len(), 4);
        assert_relative_eq!(
            projected.depth,
            camera_depth(&face.centroid()),
            epsilon = 1e-12
        );
    }
}

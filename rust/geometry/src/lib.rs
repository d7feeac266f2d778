//! Axon-Lite Geometry Processing
//!
//! Pipeline stages that turn cleaned 2D wall centerlines into a
//! depth-correct axonometric face drawing, using nalgebra for the vector
//! math. Per wall the stages run strictly in order: offset the centerline,
//! merge the boundaries into a footprint, extrude, cull, project; the final
//! depth sort runs once across all walls.

pub mod polyline;
pub mod simplify;
pub mod offset;
pub mod footprint;
pub mod extrusion;
pub mod culling;
pub mod projection;
pub mod depth_sort;
pub mod error;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use polyline::{signed_area, winding, Polyline, Wall, Winding};
pub use simplify::{douglas_peucker, equalize_direction, simplify, smooth_path, RawPath, SimplifyOptions};
pub use offset::{offset_centerline, OffsetPair, MITER_LIMIT};
pub use footprint::{build_footprint, Footprint};
pub use extrusion::{extrude, Face, FaceKind, WallVolume};
pub use culling::cull_faces;
pub use projection::{camera_depth, project_face, project_faces, project_point, view_direction, AxonFace};
pub use depth_sort::{depth_sort, is_depth_sorted};

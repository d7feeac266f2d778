use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning wall centerlines into drawable faces
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid polyline: {0}")]
    InvalidPolyline(String),

    #[error("Invalid wall parameters: {0}")]
    InvalidWall(String),

    #[error("Invalid offset parameters: {0}")]
    InvalidOffset(String),

    #[error("Degenerate footprint: {0}")]
    DegenerateFootprint(String),

    #[error("Invalid extrusion parameters: {0}")]
    InvalidExtrusion(String),
}

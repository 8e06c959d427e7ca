use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Primitive {index}: sphere radius {radius} must be positive")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Primitive {index}: triangle has zero area")]
    DegenerateTriangle { index: usize },

    #[error("Primitive {index}: plane normal has zero length")]
    ZeroNormal { index: usize },

    #[error("Primitive {index}: square size {size} must be positive")]
    InvalidSize { index: usize, size: f32 },

    #[error("Primitive {index}: parallelepiped has zero extent along an axis")]
    FlatBox { index: usize },

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Non-finite value in {0}")]
    NonFinite(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

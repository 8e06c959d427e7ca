//! Lark Scene - scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `PrimitiveDesc`,
//!   `MaterialDesc`, `LightDesc`, `CameraDesc`
//! - **JSON loading** with validation of degenerate geometry
//! - **Built-in scenes** for quick renders and tests
//!
//! # Example
//!
//! ```ignore
//! use lark_scene::{load_scene, SceneDescription};
//!
//! let scene = load_scene("scene.json")?;
//! let fallback = SceneDescription::showcase();
//! ```

mod builtin;
pub mod description;
pub mod error;
pub mod loader;

// Re-export commonly used types
pub use description::{
    CameraDesc, LightDesc, MaterialDesc, PrimitiveDesc, SceneDescription, DEFAULT_BACKGROUND,
};
pub use error::{SceneError, SceneResult};
pub use loader::{load_scene, parse_scene};

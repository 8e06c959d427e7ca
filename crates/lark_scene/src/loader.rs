//! Scene file loading.
//!
//! Scenes are JSON documents matching [`SceneDescription`]. Loading always
//! validates, so a successfully loaded scene is safe to trace.

use std::path::Path;

use crate::description::SceneDescription;
use crate::error::SceneResult;

/// Load and validate a JSON scene file.
///
/// If the file does not set a `name`, the file stem is used.
///
/// # Example
///
/// ```ignore
/// use lark_scene::load_scene;
///
/// let scene = load_scene("scenes/mirrors.json")?;
/// println!("{} primitives, {} lights", scene.primitives.len(), scene.lights.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let mut scene = parse_scene(&content)?;
    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    log::info!(
        "Loaded scene '{}' from {}: {} primitives, {} lights",
        scene.name,
        path.display(),
        scene.primitives.len(),
        scene.lights.len()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string (useful for testing).
pub fn parse_scene(content: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(content)?;
    scene.validate()?;
    Ok(scene)
}

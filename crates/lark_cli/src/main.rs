use anyhow::{anyhow, Context, Result};
use clap::Parser;
use lark_scene::{load_scene, SceneDescription};
use lark_tracer::{render, Camera, Scene, TracerConfig, WhittedTracer};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Load the scene file, or fall back to a built-in scene.
fn scene_description(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => SceneDescription::builtin(&args.builtin).ok_or_else(|| {
            anyhow!(
                "Unknown built-in scene '{}' (available: {})",
                args.builtin,
                SceneDescription::BUILTIN_NAMES.join(", ")
            )
        }),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let description = scene_description(&args)?;
    log::info!(
        "Scene '{}': {} primitives, {} lights",
        description.name,
        description.primitives.len(),
        description.lights.len()
    );

    let mut config = TracerConfig::from_description(&description);
    if let Some(max_bounces) = args.max_bounces {
        config = config.with_max_bounces(max_bounces);
    }
    let tracer = WhittedTracer::new(config);

    let settings = args.render_settings();
    let camera = Camera::from_description(&description.camera, settings.width, settings.height);
    let scene = Scene::from_description(&description);

    let film = render(&camera, &scene, &tracer, &settings);

    film.save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}

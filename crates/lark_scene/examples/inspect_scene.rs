//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/showcase.json

use std::env;

use lark_scene::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/showcase.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!(
                "Camera: eye {:?} -> {:?}, fov {}",
                scene.camera.eye, scene.camera.look_at, scene.camera.fov
            );
            println!("Background: {:?}", scene.background);
            println!("Tint: {:?}", scene.tint);

            println!("\nPrimitives ({}):", scene.primitives.len());
            for (i, primitive) in scene.primitives.iter().enumerate() {
                println!("  [{}] {} {:?}", i, primitive.type_name(), primitive.material());
            }

            println!("\nLights ({}):", scene.lights.len());
            for light in &scene.lights {
                println!("  {:?} color {:?}", light.position, light.color);
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}

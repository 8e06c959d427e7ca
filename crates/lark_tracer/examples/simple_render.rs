//! Simple Whitted render built directly in code.
//!
//! Two mirror spheres and a diffuse triangle over a diffuse floor, saved as PPM.

use lark_tracer::{
    render, Camera, Color, Material, Plane, PointLight, RenderSettings, Scene, Sphere,
    TracerConfig, Triangle, Vec3, WhittedTracer,
};

fn main() {
    println!("Lark Whitted Tracer - Simple Example");
    println!("====================================");

    let scene = build_scene();

    let mut camera = Camera::new()
        .with_resolution(800, 450)
        .with_position(Vec3::new(0.0, 2.0, 8.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_fov(50.0);
    camera.initialize();

    let settings = RenderSettings {
        width: 800,
        height: 450,
        samples_per_pixel: 4,
        ..Default::default()
    };
    let tracer = WhittedTracer::new(TracerConfig::default().with_max_bounces(8));

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, settings.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let film = render(&camera, &scene, &tracer, &settings);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    film.save(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Floor
    scene.add(Box::new(Plane::new(
        Vec3::ZERO,
        Vec3::Y,
        Material::diffuse(Color::new(0.6, 0.6, 0.6)),
    )));

    scene.add(Box::new(Sphere::new(
        Vec3::new(-1.5, 1.0, 0.0),
        1.0,
        Material::mirror(Color::new(0.9, 0.9, 0.9)),
    )));
    scene.add(Box::new(Sphere::new(
        Vec3::new(1.5, 1.0, 0.0),
        1.0,
        Material::mirror(Color::new(1.0, 0.6, 0.3)),
    )));
    scene.add(Box::new(Triangle::new(
        Vec3::new(-3.0, 0.0, -3.0),
        Vec3::new(3.0, 0.0, -3.0),
        Vec3::new(0.0, 4.0, -3.0),
        Material::diffuse(Color::new(0.2, 0.4, 0.8)),
    )));

    scene.add_light(PointLight::new(Vec3::new(-4.0, 8.0, 6.0), Color::ONE));
    scene.add_light(PointLight::new(Vec3::new(5.0, 5.0, 2.0), Color::splat(0.4)));

    scene
}

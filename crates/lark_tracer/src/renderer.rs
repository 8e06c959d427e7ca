//! Image rendering on top of the Whitted tracer.
//!
//! Implements:
//! - Sample averaging and exposure scaling per pixel
//! - Parallel bucket rendering with rayon
//! - Deterministic per-bucket sampling

use std::time::Instant;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, Film, Scene, WhittedTracer};
use rand::RngCore;
use rayon::prelude::*;

/// Render settings.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples averaged per pixel; more than one jitters inside the pixel
    pub samples_per_pixel: u32,
    /// Exposure multiplier applied after averaging
    pub exposure: f32,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Seed for pixel jitter
    pub seed: u64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            samples_per_pixel: 1,
            exposure: 1.0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            seed: 0,
        }
    }
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    tracer: &WhittedTracer,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = settings.samples_per_pixel.max(1);
    let jitter = samples > 1;
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let ray = camera.get_ray(x, y, jitter, rng);
        pixel_color += tracer.trace(&ray, scene);
    }

    // Average the samples, then expose
    pixel_color / samples as f32 * settings.exposure
}

/// Render the entire scene to a film.
///
/// Buckets are traced in parallel; every pixel reads only the shared,
/// immutable scene.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    tracer: &WhittedTracer,
    settings: &RenderSettings,
) -> Film {
    let start = Instant::now();
    let buckets = generate_buckets(camera.image_width, camera.image_height, settings.bucket_size);

    log::info!(
        "Rendering {}x{} @ {} spp in {} buckets ({} primitives, {} lights)",
        camera.image_width,
        camera.image_height,
        settings.samples_per_pixel.max(1),
        buckets.len(),
        scene.len(),
        scene.lights().len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let pixels = render_bucket(bucket, camera, scene, tracer, settings);
            log::debug!(
                "Bucket {} at ({}, {}) done",
                bucket.index,
                bucket.x,
                bucket.y
            );
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut film = Film::new(camera.image_width, camera.image_height);
    for result in &results {
        film.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    film
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, PointLight, Sphere, TracerConfig};
    use lark_math::Vec3;
    use lark_scene::SceneDescription;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sphere_setup() -> (Camera, Scene) {
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(
            Vec3::ZERO,
            1.0,
            Material::diffuse(Color::new(0.5, 0.5, 0.5)),
        )));
        scene.add_light(PointLight::new(Vec3::new(0.0, 5.0, 5.0), Color::ONE));

        let mut camera = Camera::new()
            .with_resolution(11, 11)
            .with_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .with_fov(45.0);
        camera.initialize();

        (camera, scene)
    }

    #[test]
    fn test_render_pixel_center_hits_sphere() {
        let (camera, scene) = sphere_setup();
        let tracer = WhittedTracer::default();
        let settings = RenderSettings::default();
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &scene, &tracer, 5, 5, &settings, &mut rng);
        let cos = 4.0 / 41.0_f32.sqrt();
        assert!((color - Color::splat(0.5 * cos)).length() < 1e-4);
    }

    #[test]
    fn test_exposure_scales_pixel() {
        let (camera, scene) = sphere_setup();
        let tracer = WhittedTracer::default();
        let mut rng = StdRng::seed_from_u64(42);

        let base = render_pixel(&camera, &scene, &tracer, 0, 0, &RenderSettings::default(), &mut rng);
        let settings = RenderSettings {
            exposure: 2.0,
            ..Default::default()
        };
        let doubled = render_pixel(&camera, &scene, &tracer, 0, 0, &settings, &mut rng);

        assert!((doubled - base * 2.0).length() < 1e-6);
    }

    #[test]
    fn test_sample_average_of_constant_sky() {
        // Empty scene, so every jittered sample of a corner pixel sees sky
        let (camera, _) = sphere_setup();
        let scene = Scene::new();
        let tracer = WhittedTracer::default();
        let settings = RenderSettings {
            samples_per_pixel: 16,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let color = render_pixel(&camera, &scene, &tracer, 0, 0, &settings, &mut rng);
        let single = tracer.sky_gradient(&camera.get_ray(0, 0, false, &mut rng));
        assert!((color - single).length() < 0.05);
    }

    #[test]
    fn test_render_is_deterministic_and_fills_film() {
        let description = SceneDescription::showcase();
        let scene = Scene::from_description(&description);
        let tracer = WhittedTracer::new(TracerConfig::from_description(&description));
        let camera = Camera::from_description(&description.camera, 24, 16);
        let settings = RenderSettings {
            width: 24,
            height: 16,
            samples_per_pixel: 2,
            bucket_size: 8,
            seed: 9,
            ..Default::default()
        };

        let a = render(&camera, &scene, &tracer, &settings);
        let b = render(&camera, &scene, &tracer, &settings);

        assert_eq!(a.width, 24);
        assert_eq!(a.height, 16);
        assert_eq!(a.pixels(), b.pixels());
        assert!(a.pixels().iter().all(|c| c.is_finite()));
        assert!(a.pixels().iter().any(|c| c.length() > 0.0));
    }
}

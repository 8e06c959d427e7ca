//! Whitted-style shading loop.
//!
//! A path follows ideal-mirror reflections until it escapes to the sky,
//! hits an emissive surface, or lands on a diffuse surface where direct
//! lighting from the point lights is evaluated with one shadow probe per
//! light. There are no indirect diffuse bounces.

use crate::{
    hittable::{Hittable, SurfaceHit},
    intersect::{find_nearest, is_occluded, DEFAULT_T_MIN},
    Color, Lambertian, Material, PointLight, Ray, Scene,
};
use lark_scene::{SceneDescription, DEFAULT_BACKGROUND};

/// Tracer configuration.
#[derive(Debug, Clone)]
pub struct TracerConfig {
    /// Sky color blended with white by ray elevation
    pub background: Color,
    /// Starting value of the path color, multiplied into every result
    pub base_tint: Color,
    /// Maximum number of mirror reflections along one path
    pub max_bounces: u32,
    /// Returned when a path runs out of bounces
    pub bounce_limit_color: Color,
    /// Minimum hit distance for every ray
    pub t_min: f32,
    /// Offset along the normal for shadow ray origins
    pub shadow_bias: f32,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            base_tint: Color::ONE,
            max_bounces: 16,
            bounce_limit_color: Color::ZERO,
            t_min: DEFAULT_T_MIN,
            shadow_bias: 1e-4,
        }
    }
}

impl TracerConfig {
    /// Defaults with the scene's sky color and tint.
    pub fn from_description(description: &SceneDescription) -> Self {
        Self::default()
            .with_background(description.background)
            .with_base_tint(description.tint)
    }

    /// Set the sky color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the path tint.
    pub fn with_base_tint(mut self, tint: Color) -> Self {
        self.base_tint = tint;
        self
    }

    /// Set the mirror bounce limit.
    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }
}

/// Iterative Whitted ray tracer.
#[derive(Debug, Clone, Default)]
pub struct WhittedTracer {
    config: TracerConfig,
}

impl WhittedTracer {
    pub fn new(config: TracerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Trace a ray through a scene.
    pub fn trace(&self, ray: &Ray, scene: &Scene) -> Color {
        self.trace_ray(ray, scene.primitives(), scene.lights())
    }

    /// Compute the unclamped radiance carried back along `ray`.
    ///
    /// Mirror reflectances multiply into the path color in reflection
    /// order; the terminal state (sky, light surface or diffuse surface)
    /// supplies the last factor.
    pub fn trace_ray(
        &self,
        ray: &Ray,
        primitives: &[Box<dyn Hittable>],
        lights: &[PointLight],
    ) -> Color {
        let mut color = self.config.base_tint;
        let mut throughput = Color::ONE;
        let mut current = *ray;
        let mut bounces = 0;

        loop {
            color *= throughput;

            let Some(mut hit) = find_nearest(&current, primitives, self.config.t_min) else {
                return color * self.sky_gradient(&current);
            };
            hit.face_forward(current.direction());

            match hit.material {
                Material::DiffuseLight(light) => return color * light.emitted(),
                Material::Lambertian(surface) => {
                    return color * self.direct_lighting(&hit, surface, primitives, lights);
                }
                Material::IdealMirror(mirror) => {
                    if bounces >= self.config.max_bounces {
                        log::trace!(
                            "Path exceeded {} mirror bounces at {:?}",
                            self.config.max_bounces,
                            hit.p
                        );
                        return self.config.bounce_limit_color;
                    }
                    bounces += 1;

                    let (attenuation, reflected) = mirror.scatter(&current, &hit);
                    throughput = attenuation;
                    current = reflected;
                }
            }
        }
    }

    /// Sum of unoccluded point light contributions at a diffuse hit.
    fn direct_lighting(
        &self,
        hit: &SurfaceHit,
        surface: &Lambertian,
        primitives: &[Box<dyn Hittable>],
        lights: &[PointLight],
    ) -> Color {
        let origin = hit.p + hit.normal.normalize() * self.config.shadow_bias;

        lights.iter().fold(Color::ZERO, |sum, light| {
            let to_light = light.direction_from(hit.p);
            let shadow = Ray::new(origin, to_light);

            if is_occluded(&shadow, primitives, self.config.t_min) {
                sum
            } else {
                sum + surface.shade(to_light, hit) * light.color
            }
        })
    }

    /// Sky color for a ray that hit nothing.
    pub fn sky_gradient(&self, ray: &Ray) -> Color {
        sky_gradient(ray, self.config.background)
    }
}

/// Blend from white (looking down) to `background` (looking up).
pub fn sky_gradient(ray: &Ray, background: Color) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    Color::ONE * (1.0 - a) + background * a
}

//! Lark tracer - recursive Whitted-style ray tracing
//!
//! Traces camera rays against a flat list of primitives, shades diffuse
//! surfaces with hard-shadowed point lights, follows ideal mirror
//! reflections, and renders buckets of the image in parallel.

mod bucket;
mod camera;
mod film;
mod hittable;
mod intersect;
mod light;
mod material;
mod parallelepiped;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod square;
mod triangle;
mod whitted;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use film::{color_to_rgb, linear_to_gamma, Film, OutputError, OutputResult};
pub use hittable::{Hittable, SurfaceHit};
pub use intersect::{find_nearest, is_occluded, DEFAULT_T_MIN};
pub use light::PointLight;
pub use material::{Color, DiffuseLight, IdealMirror, Lambertian, Material};
pub use parallelepiped::Parallelepiped;
pub use plane::Plane;
pub use renderer::{render, render_pixel, RenderSettings};
pub use scene::Scene;
pub use sphere::Sphere;
pub use square::Square;
pub use triangle::Triangle;
pub use whitted::{sky_gradient, TracerConfig, WhittedTracer};

/// Re-export the math types the tracer API is expressed in
pub use lark_math::{Interval, Ray, Vec3};

//! Image tiling for parallel rendering.
//!
//! Each bucket is traced on its own with its own seeded RNG, so the result
//! does not depend on which thread picks it up.

use crate::renderer::{render_pixel, RenderSettings};
use crate::{Camera, Color, Scene, WhittedTracer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A rectangular tile of the image, top-left corner at (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order; also selects the bucket's RNG stream
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Number of pixels covered.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from the bucket's center to `(x, y)`.
    fn distance_sq_to(&self, (x, y): (f32, f32)) -> f32 {
        let cx = self.x as f32 + self.width as f32 / 2.0;
        let cy = self.y as f32 + self.height as f32 / 2.0;
        (cx - x).powi(2) + (cy - y).powi(2)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile the image into buckets, ordered outward from the image center.
///
/// Edge buckets are clipped to the image. A `bucket_size` of zero is
/// treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y), 0)
            })
        })
        .collect();

    let image_center = (width as f32 / 2.0, height as f32 / 2.0);
    buckets.sort_by(|a, b| {
        a.distance_sq_to(image_center)
            .total_cmp(&b.distance_sq_to(image_center))
    });

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// RNG stream for one bucket.
pub fn bucket_rng(seed: u64, bucket: &Bucket) -> StdRng {
    StdRng::seed_from_u64(seed ^ (bucket.index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Trace every pixel of a bucket, row-major within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    scene: &Scene,
    tracer: &WhittedTracer,
    settings: &RenderSettings,
) -> Vec<Color> {
    let mut rng = bucket_rng(settings.seed, bucket);
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            let color = render_pixel(camera, scene, tracer, global_x, global_y, settings, &mut rng);
            pixels.push(color);
        }
    }

    pixels
}

/// Colors traced for one bucket, row-major.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

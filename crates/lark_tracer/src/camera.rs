//! Camera for primary ray generation.

use crate::Ray;
use lark_math::Vec3;
use lark_scene::CameraDesc;
use rand::{Rng, RngCore};

/// Pinhole camera generating one ray per pixel sample.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    vfov: f32, // Vertical field of view in degrees

    // Cached computed values (set by initialize())
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 640,
            image_height: 480,
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            // Cached values (initialized to defaults)
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            w: Vec3::Z,
        }
    }

    /// Camera placed as the scene describes, already initialized.
    pub fn from_description(desc: &CameraDesc, width: u32, height: u32) -> Self {
        let mut camera = Self::new()
            .with_resolution(width, height)
            .with_position(desc.eye, desc.look_at, desc.up)
            .with_fov(desc.fov);
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width.max(1);
        self.image_height = height.max(1);
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Aspect ratio of the image.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        // Calculate viewport dimensions on a plane at unit distance
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * self.aspect_ratio();

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(self.w).normalize();
        let v = self.w.cross(u);

        // Calculate viewport vectors; v runs down the image
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left = self.center - self.w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate a ray for pixel (i, j), row 0 at the top.
    ///
    /// Without `jitter` the ray passes through the pixel center; with it,
    /// through a uniformly random point inside the pixel.
    pub fn get_ray(&self, i: u32, j: u32, jitter: bool, rng: &mut dyn RngCore) -> Ray {
        let (dx, dy) = if jitter {
            (rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
        } else {
            (0.0, 0.0)
        };

        let pixel_sample = self.pixel00_loc
            + ((i as f32) + dx) * self.pixel_delta_u
            + ((j as f32) + dy) * self.pixel_delta_v;

        Ray::new(self.center, pixel_sample - self.center)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn looking_down_z(width: u32, height: u32) -> Camera {
        let mut camera = Camera::new()
            .with_resolution(width, height)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_fov(90.0);
        camera.initialize();
        camera
    }

    #[test]
    fn test_camera_initialize() {
        let camera = looking_down_z(800, 600);

        assert_eq!(camera.center, Vec3::ZERO);
        assert!((camera.w - Vec3::Z).length() < 0.001);
        assert!((camera.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_center_ray_points_forward() {
        // Odd resolution so a pixel center sits on the optical axis
        let camera = looking_down_z(101, 101);
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(50, 50, false, &mut rng);
        let dir = ray.direction().normalize();
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_row_zero_is_top() {
        let camera = looking_down_z(100, 100);
        let mut rng = StdRng::seed_from_u64(42);

        let top = camera.get_ray(50, 0, false, &mut rng);
        let bottom = camera.get_ray(50, 99, false, &mut rng);
        assert!(top.direction().y > 0.0);
        assert!(bottom.direction().y < 0.0);

        let left = camera.get_ray(0, 50, false, &mut rng);
        assert!(left.direction().x < 0.0);
    }

    #[test]
    fn test_fov_90_spans_unit_slope() {
        let camera = looking_down_z(2, 2);
        let mut rng = StdRng::seed_from_u64(0);

        // Pixel (0, 0) center sits half way to the top-left viewport corner
        let ray = camera.get_ray(0, 0, false, &mut rng);
        assert!((ray.direction() - Vec3::new(-0.5, 0.5, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_jitter_stays_inside_pixel() {
        let camera = looking_down_z(10, 10);
        let mut rng = StdRng::seed_from_u64(7);
        let center = camera.get_ray(3, 4, false, &mut rng).direction();

        for _ in 0..100 {
            let d = camera.get_ray(3, 4, true, &mut rng).direction();
            assert!((d.x - center.x).abs() <= 0.5 * camera.pixel_delta_u.length() + 1e-6);
            assert!((d.y - center.y).abs() <= 0.5 * camera.pixel_delta_v.length() + 1e-6);
            assert_eq!(d.z, -1.0);
        }
    }

    #[test]
    fn test_from_description() {
        let desc = CameraDesc {
            eye: Vec3::new(0.0, 2.0, 20.0),
            look_at: Vec3::new(0.0, 2.0, 0.0),
            up: Vec3::Y,
            fov: 90.0,
        };
        let camera = Camera::from_description(&desc, 640, 480);
        assert_eq!(camera.image_width, 640);
        assert_eq!(camera.image_height, 480);
        assert_eq!(camera.center, desc.eye);
    }
}

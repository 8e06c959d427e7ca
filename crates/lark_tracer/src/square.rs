//! Horizontal square primitive.

use crate::{
    hittable::{Hittable, SurfaceHit},
    Material, Ray,
};
use lark_math::{Interval, Vec3};

/// An axis-aligned square lying in the plane `y = corner.y`.
///
/// Covers `[corner.x, corner.x + size] x [corner.z, corner.z + size]` with
/// geometric normal `+Y`.
#[derive(Debug, Clone)]
pub struct Square {
    corner: Vec3,
    size: f32,
    material: Material,
}

impl Square {
    /// Create a new square from its minimum x/z corner and side length.
    pub fn new(corner: Vec3, size: f32, material: Material) -> Self {
        Self {
            corner,
            size: size.max(0.0),
            material,
        }
    }
}

impl Hittable for Square {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit<'_>> {
        let denom = ray.direction().y;
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.corner.y - ray.origin().y) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        let x = Interval::new(self.corner.x, self.corner.x + self.size);
        let z = Interval::new(self.corner.z, self.corner.z + self.size);
        if !x.contains(p.x) || !z.contains(p.z) {
            return None;
        }

        Some(SurfaceHit::new(t, p, Vec3::Y, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

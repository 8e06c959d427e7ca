//! Axis-aligned box primitive.

use crate::{
    hittable::{Hittable, SurfaceHit},
    Material, Ray,
};
use lark_math::{Interval, Vec3};

/// An axis-aligned box spanned by two opposite corners.
#[derive(Debug, Clone)]
pub struct Parallelepiped {
    min: Vec3,
    max: Vec3,
    material: Material,
}

impl Parallelepiped {
    /// Create a new box. The corners may be given in any order.
    pub fn new(a: Vec3, b: Vec3, material: Material) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            material,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Outward normal of the face containing `p`.
    fn face_normal(&self, p: Vec3) -> Vec3 {
        let center = 0.5 * (self.min + self.max);
        let half = 0.5 * (self.max - self.min);
        let local = (p - center) / half;
        let a = local.abs();

        if a.x >= a.y && a.x >= a.z {
            Vec3::new(local.x.signum(), 0.0, 0.0)
        } else if a.y >= a.z {
            Vec3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, local.z.signum())
        }
    }
}

impl Hittable for Parallelepiped {
    /// Slab test; returns the entry point, or the exit point when the ray
    /// starts inside the box.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit<'_>> {
        let inv_dir = ray.direction().recip();
        let t0 = (self.min - ray.origin()) * inv_dir;
        let t1 = (self.max - ray.origin()) * inv_dir;

        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();
        if t_near > t_far {
            return None;
        }

        let t = if ray_t.surrounds(t_near) {
            t_near
        } else if ray_t.surrounds(t_far) {
            t_far
        } else {
            return None;
        };

        let p = ray.at(t);
        Some(SurfaceHit::new(t, p, self.face_normal(p), &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

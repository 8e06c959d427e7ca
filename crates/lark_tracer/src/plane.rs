//! Infinite plane primitive.

use crate::{
    hittable::{Hittable, SurfaceHit},
    Material, Ray,
};
use lark_math::{Interval, Vec3};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit<'_>> {
        let denom = ray.direction().dot(self.normal);

        // Ray is parallel to the plane
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(SurfaceHit::new(t, ray.at(t), self.normal, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(-2.0, -1.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Material::mirror(Color::ONE),
        )
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(5.0, 4.0, 7.0), Vec3::new(0.0, -1.0, 0.0));

        let rec = plane.hit(&ray, Interval::from_min(0.001)).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-6);
        assert_eq!(rec.p, Vec3::new(5.0, -1.0, 7.0));
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::X);
        assert!(plane.hit(&ray, Interval::from_min(0.001)).is_none());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::Y);
        assert!(plane.hit(&ray, Interval::from_min(0.001)).is_none());
    }
}

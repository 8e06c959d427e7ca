//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{
    hittable::{Hittable, SurfaceHit},
    Material, Ray,
};
use lark_math::{Interval, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// First vertex
    v0: Vec3,
    /// Edges v1 - v0 and v2 - v0
    edge1: Vec3,
    edge2: Vec3,
    /// Pre-computed face normal (unit length)
    normal: Vec3,
    /// Material
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The vertices must not be collinear; scene validation rejects those.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        // Calculate normal using cross product
        let normal = edge1.cross(edge2).normalize();

        Self {
            v0,
            edge1,
            edge2,
            normal,
            material,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit<'_>> {
        let h = ray.direction().cross(self.edge2);
        let a = self.edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(self.edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * self.edge2.dot(q);
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(SurfaceHit::new(t, ray.at(t), self.normal, &self.material))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

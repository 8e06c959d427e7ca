//! Hittable trait and SurfaceHit for ray-object intersection.

use crate::{Material, Ray};
use lark_math::{Interval, Vec3};

/// Record of a ray-object intersection.
///
/// Lives for one shading step; the material is borrowed from the primitive
/// that produced the hit.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit geometric normal as the primitive defines it. Not guaranteed to
    /// face the incoming ray until [`SurfaceHit::face_forward`] is called.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> SurfaceHit<'a> {
    /// Create a hit record.
    pub fn new(t: f32, p: Vec3, normal: Vec3, material: &'a Material) -> Self {
        Self {
            t,
            p,
            normal,
            material,
        }
    }

    /// Flip the normal so it points against `direction`.
    ///
    /// Returns true if the normal was flipped (the ray hit the back side).
    pub fn face_forward(&mut self, direction: Vec3) -> bool {
        if direction.dot(self.normal) > 0.0 {
            self.normal = -self.normal;
            true
        } else {
            false
        }
    }
}

/// Trait for primitives that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with `t` strictly inside `ray_t`.
    ///
    /// The nearest qualifying root is returned when the primitive has more
    /// than one.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit<'_>>;

    /// The material owned by this primitive.
    fn material(&self) -> &Material;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Parallelepiped, Plane, Sphere, Square, Triangle};

    #[test]
    fn test_face_forward_flips_back_facing() {
        let material = Material::diffuse(Color::ONE);
        let mut hit = SurfaceHit::new(1.0, Vec3::ZERO, Vec3::Z, &material);

        assert!(hit.face_forward(Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(hit.normal, -Vec3::Z);

        // Already facing the ray, left alone
        assert!(!hit.face_forward(Vec3::new(0.0, 0.0, 1.0)));
        assert_eq!(hit.normal, -Vec3::Z);
    }

    /// After the correction step the shading normal never points along the
    /// incoming direction, whichever side of the primitive is hit.
    #[test]
    fn test_normal_faces_ray_for_every_primitive() {
        let m = Material::diffuse(Color::ONE);
        let primitives: Vec<Box<dyn Hittable>> = vec![
            Box::new(Sphere::new(Vec3::ZERO, 1.0, m)),
            Box::new(Plane::new(Vec3::ZERO, Vec3::new(0.3, 1.0, 0.2), m)),
            Box::new(Triangle::new(
                Vec3::new(-2.0, 0.0, -2.0),
                Vec3::new(2.0, 0.0, -2.0),
                Vec3::new(0.0, 0.0, 2.0),
                m,
            )),
            Box::new(Square::new(Vec3::new(-1.0, 0.0, -1.0), 2.0, m)),
            Box::new(Parallelepiped::new(Vec3::splat(-1.0), Vec3::splat(1.0), m)),
        ];

        let rays = [
            Ray::new(Vec3::new(0.1, 5.0, 0.1), Vec3::new(0.0, -1.0, 0.0)),
            Ray::new(Vec3::new(0.1, -5.0, 0.1), Vec3::new(0.0, 1.0, 0.0)),
            Ray::new(Vec3::new(0.1, 0.05, 0.1), Vec3::new(0.0, 1.0, 0.0)),
            Ray::new(Vec3::new(0.1, 0.05, 0.1), Vec3::new(0.0, -1.0, 0.0)),
        ];

        for (i, primitive) in primitives.iter().enumerate() {
            let mut hits = 0;
            for ray in &rays {
                if let Some(mut hit) = primitive.hit(ray, Interval::from_min(0.001)) {
                    hits += 1;
                    hit.face_forward(ray.direction);
                    assert!(
                        ray.direction.dot(hit.normal) <= 0.0,
                        "primitive {i} normal {:?} faces along {:?}",
                        hit.normal,
                        ray.direction
                    );
                    assert!((hit.normal.length() - 1.0).abs() < 1e-5);
                }
            }
            assert!(hits > 0, "primitive {i} was never hit");
        }
    }
}

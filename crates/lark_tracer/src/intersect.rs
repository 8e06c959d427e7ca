//! Linear-scan scene queries shared by primary, reflected and shadow rays.
//!
//! There is no acceleration structure; both queries walk every primitive.

use crate::{
    hittable::{Hittable, SurfaceHit},
    Ray,
};
use lark_math::Interval;

/// Minimum hit distance, keeps rays from re-hitting the surface they left.
pub const DEFAULT_T_MIN: f32 = 0.001;

/// Find the nearest hit with `t > t_min`.
///
/// Each primitive is tested against `(t_min, t_near)` where `t_near` is the
/// best distance so far, and a candidate must also be strictly closer than
/// `t_near`. On equal distances the primitive that comes first in the slice
/// wins.
pub fn find_nearest<'a>(
    ray: &Ray,
    primitives: &'a [Box<dyn Hittable>],
    t_min: f32,
) -> Option<SurfaceHit<'a>> {
    let mut closest: Option<SurfaceHit<'a>> = None;
    let mut t_near = f32::INFINITY;

    for primitive in primitives {
        if let Some(hit) = primitive.hit(ray, Interval::new(t_min, t_near)) {
            if hit.t < t_near {
                t_near = hit.t;
                closest = Some(hit);
            }
        }
    }

    closest
}

/// Report whether anything blocks a shadow ray.
///
/// Returns on the first primitive with any hit past `t_min`. The search is
/// not limited to the light's distance, so geometry beyond the light along
/// the same direction also counts as an occluder.
pub fn is_occluded(shadow_ray: &Ray, primitives: &[Box<dyn Hittable>], t_min: f32) -> bool {
    let ray_t = Interval::from_min(t_min);
    primitives
        .iter()
        .any(|primitive| primitive.hit(shadow_ray, ray_t).is_some())
}

// Re-export glam for convenience
pub use glam::*;

// Lark math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

//! Point lights for direct illumination.

use crate::Color;
use lark_math::Vec3;
use lark_scene::LightDesc;

/// A point light: position plus color/intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    /// Unit vector from `p` toward the light.
    #[inline]
    pub fn direction_from(&self, p: Vec3) -> Vec3 {
        (self.position - p).normalize()
    }
}

impl From<LightDesc> for PointLight {
    fn from(desc: LightDesc) -> Self {
        Self::new(desc.position, desc.color)
    }
}

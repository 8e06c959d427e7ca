//! Renderable scene: owned primitives plus point lights.

use crate::{
    Hittable, Material, Parallelepiped, Plane, PointLight, Sphere, Square, Triangle,
};
use lark_scene::{PrimitiveDesc, SceneDescription};

/// Primitives and lights, read-only while rendering.
///
/// Primitive order is the scan order of every intersection query.
pub struct Scene {
    primitives: Vec<Box<dyn Hittable>>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Build a scene from a validated description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new();

        for primitive in &description.primitives {
            scene.add(build_primitive(primitive));
        }
        for light in &description.lights {
            scene.add_light((*light).into());
        }

        log::debug!(
            "Built scene '{}': {} primitives, {} lights",
            description.name,
            scene.len(),
            scene.lights.len()
        );

        scene
    }

    /// Add a primitive to the end of the scan order.
    pub fn add(&mut self, primitive: Box<dyn Hittable>) {
        self.primitives.push(primitive);
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Box<dyn Hittable>] {
        &self.primitives
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

fn build_primitive(desc: &PrimitiveDesc) -> Box<dyn Hittable> {
    let material = Material::from(desc.material());

    match *desc {
        PrimitiveDesc::Sphere { center, radius, .. } => {
            Box::new(Sphere::new(center, radius, material))
        }
        PrimitiveDesc::Plane { point, normal, .. } => {
            Box::new(Plane::new(point, normal, material))
        }
        PrimitiveDesc::Triangle { a, b, c, .. } => Box::new(Triangle::new(a, b, c, material)),
        PrimitiveDesc::Square { corner, size, .. } => {
            Box::new(Square::new(corner, size, material))
        }
        PrimitiveDesc::Parallelepiped { min, max, .. } => {
            Box::new(Parallelepiped::new(min, max, material))
        }
    }
}

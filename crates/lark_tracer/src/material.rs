//! Surface materials.
//!
//! The set is closed: the shading loop makes a hard decision per hit
//! (continue along a mirror, stop at a diffuse surface, stop at a light) and
//! matches on [`Material`] exhaustively. Adding a material means adding a
//! variant here and an arm in the loop.

use crate::{hittable::SurfaceHit, Ray};
use lark_math::{reflect, Vec3};
use lark_scene::MaterialDesc;

/// Color type alias (RGB, unclamped)
pub type Color = Vec3;

/// Material attached to a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    IdealMirror(IdealMirror),
    Lambertian(Lambertian),
    DiffuseLight(DiffuseLight),
}

impl Material {
    /// Ideal mirror with the given reflectance.
    pub fn mirror(reflectance: Color) -> Self {
        Material::IdealMirror(IdealMirror::new(reflectance))
    }

    /// Diffuse surface with the given albedo.
    pub fn diffuse(albedo: Color) -> Self {
        Material::Lambertian(Lambertian::new(albedo))
    }

    /// Emissive surface with the given emission.
    pub fn light(emission: Color) -> Self {
        Material::DiffuseLight(DiffuseLight::new(emission))
    }
}

impl From<MaterialDesc> for Material {
    fn from(desc: MaterialDesc) -> Self {
        match desc {
            MaterialDesc::Mirror { color } => Material::mirror(color),
            MaterialDesc::Diffuse { color } => Material::diffuse(color),
            MaterialDesc::Light { color } => Material::light(color),
        }
    }
}

/// Perfect specular reflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealMirror {
    reflectance: Color,
}

impl IdealMirror {
    /// Create a new mirror. Reflectance may exceed 1 to tint.
    pub fn new(reflectance: Color) -> Self {
        Self { reflectance }
    }

    pub fn reflectance(&self) -> Color {
        self.reflectance
    }

    /// Reflect the incoming ray about the hit normal.
    ///
    /// Always continues the path. `rec.normal` must already face the ray.
    pub fn scatter(&self, ray_in: &Ray, rec: &SurfaceHit) -> (Color, Ray) {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        (self.reflectance, Ray::new(rec.p, reflected))
    }
}

/// Lambertian (diffuse) material, lit directly by point lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    /// Reflected fraction for light arriving from the unit direction
    /// `to_light`. Zero when the light is behind the surface.
    pub fn shade(&self, to_light: Vec3, rec: &SurfaceHit) -> Color {
        self.albedo * to_light.dot(rec.normal).max(0.0)
    }
}

/// Diffuse light emitter.
///
/// Marks a primitive as a light surface. This is separate from
/// [`crate::PointLight`], which is what diffuse shading samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuseLight {
    emit: Color,
}

impl DiffuseLight {
    /// Create a new diffuse light with the given emission color.
    pub fn new(emit: Color) -> Self {
        Self { emit }
    }

    /// Color carried back by a ray that hits this surface.
    pub fn emitted(&self) -> Color {
        self.emit
    }
}

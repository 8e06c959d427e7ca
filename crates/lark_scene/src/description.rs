//! Serializable scene description.
//!
//! This is the renderer-agnostic form of a scene: plain data that can be
//! read from JSON, validated, and then handed to the tracer which builds its
//! own primitive list from it.

use lark_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Sky color used when a scene file does not set one.
pub const DEFAULT_BACKGROUND: Vec3 = Vec3::new(0.1, 0.1, 0.5);

/// Surface behavior attached to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialDesc {
    /// Ideal mirror with the given reflectance.
    Mirror { color: Vec3 },
    /// Lambertian surface lit only by point lights.
    Diffuse { color: Vec3 },
    /// Emissive surface; a ray that hits it ends with this color.
    Light { color: Vec3 },
}

impl MaterialDesc {
    /// Color carried by the material regardless of kind.
    pub fn color(&self) -> Vec3 {
        match *self {
            MaterialDesc::Mirror { color }
            | MaterialDesc::Diffuse { color }
            | MaterialDesc::Light { color } => color,
        }
    }
}

/// One geometric primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDesc {
    Sphere {
        center: Vec3,
        radius: f32,
        material: MaterialDesc,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        material: MaterialDesc,
    },
    Triangle {
        a: Vec3,
        b: Vec3,
        c: Vec3,
        material: MaterialDesc,
    },
    /// Horizontal square with `corner` as its minimum x/z corner.
    Square {
        corner: Vec3,
        size: f32,
        material: MaterialDesc,
    },
    /// Axis-aligned box spanned by two opposite corners.
    Parallelepiped {
        min: Vec3,
        max: Vec3,
        material: MaterialDesc,
    },
}

impl PrimitiveDesc {
    /// The primitive's material.
    pub fn material(&self) -> MaterialDesc {
        match *self {
            PrimitiveDesc::Sphere { material, .. }
            | PrimitiveDesc::Plane { material, .. }
            | PrimitiveDesc::Triangle { material, .. }
            | PrimitiveDesc::Square { material, .. }
            | PrimitiveDesc::Parallelepiped { material, .. } => material,
        }
    }

    /// Short name for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveDesc::Sphere { .. } => "sphere",
            PrimitiveDesc::Plane { .. } => "plane",
            PrimitiveDesc::Triangle { .. } => "triangle",
            PrimitiveDesc::Square { .. } => "square",
            PrimitiveDesc::Parallelepiped { .. } => "parallelepiped",
        }
    }

    fn validate(&self, index: usize) -> SceneResult<()> {
        check_finite(&format!("primitive {index} color"), self.material().color())?;

        match *self {
            PrimitiveDesc::Sphere { center, radius, .. } => {
                check_finite(&format!("primitive {index} center"), center)?;
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(SceneError::InvalidRadius { index, radius });
                }
            }
            PrimitiveDesc::Plane { point, normal, .. } => {
                check_finite(&format!("primitive {index} point"), point)?;
                check_finite(&format!("primitive {index} normal"), normal)?;
                if normal.length_squared() < 1e-12 {
                    return Err(SceneError::ZeroNormal { index });
                }
            }
            PrimitiveDesc::Triangle { a, b, c, .. } => {
                for (name, v) in [("a", a), ("b", b), ("c", c)] {
                    check_finite(&format!("primitive {index} vertex {name}"), v)?;
                }
                if (b - a).cross(c - a).length_squared() < 1e-12 {
                    return Err(SceneError::DegenerateTriangle { index });
                }
            }
            PrimitiveDesc::Square { corner, size, .. } => {
                check_finite(&format!("primitive {index} corner"), corner)?;
                if !(size.is_finite() && size > 0.0) {
                    return Err(SceneError::InvalidSize { index, size });
                }
            }
            PrimitiveDesc::Parallelepiped { min, max, .. } => {
                check_finite(&format!("primitive {index} min"), min)?;
                check_finite(&format!("primitive {index} max"), max)?;
                if (max - min).abs().min_element() <= 0.0 {
                    return Err(SceneError::FlatBox { index });
                }
            }
        }

        Ok(())
    }
}

/// A point light used for direct illumination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub position: Vec3,
    pub color: Vec3,
}

/// Pinhole camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    pub eye: Vec3,
    pub look_at: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    /// Vertical field of view in degrees.
    #[serde(default = "default_fov")]
    pub fov: f32,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_fov() -> f32 {
    90.0
}

fn default_background() -> Vec3 {
    DEFAULT_BACKGROUND
}

fn default_tint() -> Vec3 {
    Vec3::ONE
}

impl CameraDesc {
    fn validate(&self) -> SceneResult<()> {
        check_finite("camera eye", self.eye)?;
        check_finite("camera look_at", self.look_at)?;
        check_finite("camera up", self.up)?;

        let forward = self.look_at - self.eye;
        if forward.length_squared() < 1e-12 {
            return Err(SceneError::InvalidCamera(
                "eye and look_at coincide".to_string(),
            ));
        }
        if forward.cross(self.up).length_squared() < 1e-12 {
            return Err(SceneError::InvalidCamera(
                "up vector is parallel to the view direction".to_string(),
            ));
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::InvalidCamera(format!(
                "field of view {} is outside (0, 180)",
                self.fov
            )));
        }
        Ok(())
    }
}

/// A complete scene: camera, geometry, lights and sky settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (file stem or built-in name)
    #[serde(default)]
    pub name: String,

    pub camera: CameraDesc,

    /// Sky color blended with white by ray elevation
    #[serde(default = "default_background")]
    pub background: Vec3,

    /// Multiplier applied to every traced path
    #[serde(default = "default_tint")]
    pub tint: Vec3,

    #[serde(default)]
    pub primitives: Vec<PrimitiveDesc>,

    #[serde(default)]
    pub lights: Vec<LightDesc>,
}

impl SceneDescription {
    /// Create an empty scene with the given camera.
    pub fn new(name: impl Into<String>, camera: CameraDesc) -> Self {
        Self {
            name: name.into(),
            camera,
            background: DEFAULT_BACKGROUND,
            tint: Vec3::ONE,
            primitives: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Append a primitive.
    pub fn with_primitive(mut self, primitive: PrimitiveDesc) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Append a point light.
    pub fn with_light(mut self, position: Vec3, color: Vec3) -> Self {
        self.lights.push(LightDesc { position, color });
        self
    }

    /// Check the description for geometry the tracer cannot handle.
    ///
    /// The tracer itself never fails, so everything that would produce
    /// NaNs or degenerate hits is rejected here.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;
        check_finite("background", self.background)?;
        check_finite("tint", self.tint)?;

        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive.validate(index)?;
        }

        for (index, light) in self.lights.iter().enumerate() {
            check_finite(&format!("light {index} position"), light.position)?;
            check_finite(&format!("light {index} color"), light.color)?;
        }

        if self.lights.is_empty() {
            log::warn!("Scene '{}' has no point lights; diffuse surfaces will be black", self.name);
        }

        Ok(())
    }
}

fn check_finite(what: &str, v: Vec3) -> SceneResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite(what.to_string()))
    }
}

//! Built-in scenes.

use lark_math::Vec3;

use crate::description::{CameraDesc, MaterialDesc, PrimitiveDesc, SceneDescription};

fn mirror(r: f32, g: f32, b: f32) -> MaterialDesc {
    MaterialDesc::Mirror {
        color: Vec3::new(r, g, b),
    }
}

fn diffuse(r: f32, g: f32, b: f32) -> MaterialDesc {
    MaterialDesc::Diffuse {
        color: Vec3::new(r, g, b),
    }
}

impl SceneDescription {
    /// Names accepted by [`SceneDescription::builtin`].
    pub const BUILTIN_NAMES: [&'static str; 2] = ["showcase", "single_sphere"];

    /// Look up a built-in scene by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "showcase" => Some(Self::showcase()),
            "single_sphere" => Some(Self::single_sphere()),
            _ => None,
        }
    }

    /// Mirrors and diffuse shapes over a mirror floor, lit by one white light.
    ///
    /// Several mirror colors exceed 1 and tint rather than attenuate.
    pub fn showcase() -> Self {
        let camera = CameraDesc {
            eye: Vec3::new(0.0, 2.0, 20.0),
            look_at: Vec3::new(0.0, 2.0, 0.0),
            up: Vec3::Y,
            fov: 90.0,
        };

        let mut scene = Self::new("showcase", camera)
            .with_primitive(PrimitiveDesc::Plane {
                point: Vec3::new(-2.0, -1.0, 0.0),
                normal: Vec3::Y,
                material: mirror(1.0, 0.5, 1.0),
            })
            .with_primitive(PrimitiveDesc::Sphere {
                center: Vec3::new(5.0, 2.0, 2.0),
                radius: 5.0,
                material: mirror(1.0, 5.0, 7.0),
            })
            .with_primitive(PrimitiveDesc::Sphere {
                center: Vec3::new(-2.0, 9.0, 3.0),
                radius: 2.5,
                material: diffuse(3.0, 0.5, 0.5),
            })
            .with_primitive(PrimitiveDesc::Triangle {
                a: Vec3::new(8.0, 15.0, 2.0),
                b: Vec3::new(10.0, 13.0, 4.0),
                c: Vec3::new(5.0, 10.0, 3.0),
                material: mirror(2.0, 5.0, 4.36),
            })
            .with_primitive(PrimitiveDesc::Triangle {
                a: Vec3::new(5.0, 12.0, 2.0),
                b: Vec3::new(7.0, 5.0, 4.0),
                c: Vec3::new(2.0, 11.0, 0.0),
                material: diffuse(0.5, 1.0, 1.0),
            })
            .with_primitive(PrimitiveDesc::Square {
                corner: Vec3::new(-15.0, 0.0, -10.0),
                size: 5.0,
                material: diffuse(3.0, 4.0, 7.0),
            })
            .with_primitive(PrimitiveDesc::Square {
                corner: Vec3::new(10.0, 5.0, 5.0),
                size: 3.0,
                material: mirror(0.5, 1.0, 1.0),
            })
            .with_primitive(PrimitiveDesc::Parallelepiped {
                min: Vec3::new(-5.0, 10.0, 1.0),
                max: Vec3::new(-11.0, 6.0, -1.0),
                material: mirror(3.0, 5.0, 0.5),
            })
            .with_light(Vec3::new(-10.0, 16.0, 3.0), Vec3::ONE);

        scene.tint = Vec3::new(1.0, 0.9, 0.8);
        scene
    }

    /// One diffuse unit sphere at the origin with a light above the camera.
    pub fn single_sphere() -> Self {
        let camera = CameraDesc {
            eye: Vec3::new(0.0, 0.0, 5.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov: 45.0,
        };

        Self::new("single_sphere", camera)
            .with_primitive(PrimitiveDesc::Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
                material: diffuse(0.8, 0.3, 0.3),
            })
            .with_light(Vec3::new(0.0, 5.0, 5.0), Vec3::ONE)
    }
}

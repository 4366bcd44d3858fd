use cgmath::{Deg, Point3, Vector3};

use crate::common::math::{
    camera::Camera,
    geometry::Animation,
    light::{Material, PointLight},
};

pub const WINDOW_SIZE: winit::dpi::LogicalSize = winit::dpi::LogicalSize {
    width: 640.0,
    height: 480.0,
};
pub const WINDOW_TITLE: &str = "My spinning cube";
pub const GL_VERSION: (u8, u8) = (3, 3);

pub const RESOURCE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res");
pub const VERTEX_SHADER: &str = "shaders/spinningcube_withlight_vs.glsl";
pub const FRAGMENT_SHADER: &str = "shaders/spinningcube_withlight_fs.glsl";
pub const TEXTURE: &str = "textures/box.ppm";

// compile/link diagnostics are cut to this many bytes
pub const INFO_LOG_CAPACITY: usize = 512;

pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

pub const CAMERA: Camera = Camera {
    eye: Point3 { x: 0.0, y: 0.0, z: 3.0 },
    target: Point3 { x: 0.0, y: 0.0, z: 0.0 },
    up: Vector3 { x: 0.0, y: 1.0, z: 0.0 },
    fovy: Deg(50.0),
    near: 0.1,
    far: 1000.0,
};

pub const ANIMATION: Animation = Animation {
    base_translation: Vector3 { x: 0.0, y: 0.0, z: -1.5 },
    phase_rate: 0.3,
    spin_y: 25.0,
    spin_x: 41.0,
};

pub const LIGHTS: [PointLight; 2] = [
    PointLight {
        position: Vector3 { x: 1.5, y: 0.0, z: 1.0 },
        ambient: [0.2, 0.2, 0.2],
        diffuse: [0.5, 0.5, 0.5],
        specular: [1.0, 0.0, 0.0],
    },
    PointLight {
        position: Vector3 { x: -1.5, y: 0.5, z: 0.5 },
        ambient: [0.2, 0.2, 0.2],
        diffuse: [0.5, 0.5, 0.5],
        specular: [0.0, 1.0, 0.0],
    },
];

pub const MATERIAL: Material = Material {
    diffuse_unit: 0,
    specular: [0.5, 0.5, 0.5],
    shininess: 32.0,
};

pub use super::geometry::Position3D;

pub type Color = [f32; 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Position3D,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// texture unit the diffuse sampler reads from
    pub diffuse_unit: i32,
    pub specular: Color,
    pub shininess: f32,
}

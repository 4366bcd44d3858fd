use std::collections::HashMap;

use cgmath::{Matrix3, Matrix4};
use tracing::debug;

use super::{pipeline::ProgramState, Device};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightField {
    Position,
    Ambient,
    Diffuse,
    Specular,
}

/// What a uniform means to the renderer, independent of its GLSL name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantic {
    Model,
    View,
    Projection,
    NormalToWorld,
    ViewPosition,
    Light { slot: usize, field: LightField },
    MaterialDiffuse,
    MaterialSpecular,
    MaterialShininess,
}

const fn light(slot: usize, field: LightField) -> Semantic {
    Semantic::Light { slot, field }
}

/// Every uniform the renderer writes, with its name in the shaders.
pub const UNIFORM_TABLE: [(Semantic, &str); 16] = [
    (Semantic::Model, "model"),
    (Semantic::View, "view"),
    (Semantic::Projection, "projection"),
    (Semantic::NormalToWorld, "normal_to_world"),
    (Semantic::ViewPosition, "view_pos"),
    (light(0, LightField::Position), "light.position"),
    (light(0, LightField::Ambient), "light.ambient"),
    (light(0, LightField::Diffuse), "light.diffuse"),
    (light(0, LightField::Specular), "light.specular"),
    (light(1, LightField::Position), "second_light.position"),
    (light(1, LightField::Ambient), "second_light.ambient"),
    (light(1, LightField::Diffuse), "second_light.diffuse"),
    (light(1, LightField::Specular), "second_light.specular"),
    (Semantic::MaterialDiffuse, "material.diffuse"),
    (Semantic::MaterialSpecular, "material.specular"),
    (Semantic::MaterialShininess, "material.shininess"),
];

/// Uniform locations resolved once after linking.
///
/// A name the program does not expose resolves to `None`; every setter
/// silently skips those, nothing is ever sent for them.
pub struct UniformBindings<D: Device> {
    locations: HashMap<Semantic, Option<D::UniformLocation>>,
}

impl<D: Device> UniformBindings<D> {
    pub fn resolve(
        device: &D,
        program: &ProgramState<D>,
        table: &[(Semantic, &str)],
    ) -> UniformBindings<D> {
        let locations = table
            .iter()
            .map(|&(semantic, name)| {
                let location = program
                    .program
                    .and_then(|program| device.uniform_location(program, name));
                if location.is_none() {
                    debug!("uniform {} is not active in the program", name);
                }
                (semantic, location)
            })
            .collect();
        UniformBindings { locations }
    }

    pub fn location(&self, semantic: Semantic) -> Option<D::UniformLocation> {
        self.locations.get(&semantic).cloned().flatten()
    }

    /// semantics that did not resolve, in no particular order
    pub fn missing(&self) -> Vec<Semantic> {
        self.locations
            .iter()
            .filter(|(_, location)| location.is_none())
            .map(|(&semantic, _)| semantic)
            .collect()
    }

    pub fn set_i32(&self, device: &D, semantic: Semantic, value: i32) {
        if let Some(location) = self.location(semantic) {
            device.uniform_1_i32(location, value);
        }
    }

    pub fn set_f32(&self, device: &D, semantic: Semantic, value: f32) {
        if let Some(location) = self.location(semantic) {
            device.uniform_1_f32(location, value);
        }
    }

    pub fn set_vec3(&self, device: &D, semantic: Semantic, value: &[f32; 3]) {
        if let Some(location) = self.location(semantic) {
            device.uniform_3_f32(location, value);
        }
    }

    pub fn set_mat3(&self, device: &D, semantic: Semantic, value: &Matrix3<f32>) {
        if let Some(location) = self.location(semantic) {
            device.uniform_matrix_3_f32(location, value.as_ref());
        }
    }

    pub fn set_mat4(&self, device: &D, semantic: Semantic, value: &Matrix4<f32>) {
        if let Some(location) = self.location(semantic) {
            device.uniform_matrix_4_f32(location, value.as_ref());
        }
    }
}

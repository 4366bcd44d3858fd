use cgmath::{
    Deg,
    Matrix,
    Matrix3,
    Matrix4,
    SquareMatrix,
    Vector3,
};

pub type Position3D = Vector3<f32>;

pub type TransformMatrix = Matrix4<f32>;

pub type NormalMatrix = Matrix3<f32>;

/// Describes how the cube wanders and spins over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// where the cube sits before any motion is applied
    pub base_translation: Position3D,
    /// phase = seconds * phase_rate
    pub phase_rate: f32,
    /// degrees per second around Y, then around X
    pub spin_y: f32,
    pub spin_x: f32,
}

impl Animation {
    /// Offset of the Lissajous-like wander at phase `f`.
    pub fn orbit(f: f32) -> Position3D {
        Vector3::new(
            f32::sin(2.1 * f) * 0.5,
            f32::cos(1.7 * f) * 0.5,
            f32::sin(1.3 * f) * f32::cos(1.5 * f) * 2.0,
        )
    }

    /// Model matrix at `seconds` since startup.
    ///
    /// Each step post-multiplies, so both rotations happen in the cube's
    /// already translated frame.
    pub fn model_matrix(&self, seconds: f32) -> TransformMatrix {
        let f = seconds * self.phase_rate;
        Matrix4::from_translation(self.base_translation)
            * Matrix4::from_translation(Animation::orbit(f))
            * Matrix4::from_angle_y(Deg(seconds * self.spin_y))
            * Matrix4::from_angle_x(Deg(seconds * self.spin_x))
    }
}

/// Transpose of the inverse of the upper-left 3x3 block of `model`.
///
/// Falls back to identity for a singular model matrix.
pub fn normal_matrix(model: &TransformMatrix) -> NormalMatrix {
    let linear = Matrix3::from_cols(
        model.x.truncate(),
        model.y.truncate(),
        model.z.truncate(),
    );
    linear
        .invert()
        .map(|inverse| inverse.transpose())
        .unwrap_or_else(Matrix3::identity)
}

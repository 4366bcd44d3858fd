use cgmath::{
    Deg,
    Matrix4,
    Point3,
    Vector3,
};

use super::geometry::TransformMatrix;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    // vertical field of view
    pub fovy: Deg<f32>,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// transforming vertices from world space to eye space
    pub fn view(&self) -> TransformMatrix {
        Matrix4::look_at(self.eye, self.target, self.up)
    }

    /// transforming vertices from eye space to clip space
    pub fn projection(&self, aspect: f32) -> TransformMatrix {
        cgmath::perspective(self.fovy, aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Transform};

    const EPSILON: f32 = 1e-5;

    fn camera() -> Camera {
        Camera {
            eye: Point3::new(0.0, 0.0, 3.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
            fovy: Deg(50.0),
            near: 0.1,
            far: 1000.0,
        }
    }

    #[test]
    fn projection_aspect_matches_viewport_ratio() {
        for &(width, height) in &[(640u32, 480u32), (1920, 1080), (300, 900), (1, 1)] {
            let aspect = width as f32 / height as f32;
            let projection = camera().projection(aspect);
            // m[1][1] = cot(fovy / 2), m[0][0] = m[1][1] / aspect
            let derived = projection.y.y / projection.x.x;
            assert!(
                (derived - aspect).abs() <= aspect * EPSILON,
                "{}x{}: {} != {}",
                width,
                height,
                derived,
                aspect
            );
        }
    }

    #[test]
    fn view_moves_eye_to_origin() {
        let view = camera().view();
        let eye = view.transform_point(Point3::new(0.0, 0.0, 3.0));
        assert!((eye - Point3::new(0.0, 0.0, 0.0)).magnitude() < EPSILON);

        // the target ends up straight ahead, down -Z
        let target = view.transform_point(Point3::new(0.0, 0.0, 0.0));
        assert!((target - Point3::new(0.0, 0.0, -3.0)).magnitude() < EPSILON);
    }
}

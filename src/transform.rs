//! Matrix composition helpers.
//!
//! Projections are built with `cgmath` in the OpenGL convention (clip-space depth
//! in [-1, 1]) and then remapped with [`OPENGL_TO_WGPU_MATRIX`] to wgpu's [0, 1]
//! depth range, so the demo code can keep the familiar `perspective` / `ortho` /
//! `look_at` calls.
//!
//! The second half of the module is the articulated arm: a three segment chain
//! whose world matrices are recomputed from scratch every frame.

use cgmath::{Deg, Matrix, Matrix4, Point3, Rad, SquareMatrix, Vector3};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub fn perspective(fovy: Deg<f32>, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX * cgmath::perspective(fovy, aspect, near, far)
}

pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4<f32> {
    OPENGL_TO_WGPU_MATRIX * cgmath::ortho(left, right, bottom, top, near, far)
}

/// Right handed view matrix looking from `eye` at the origin with +Y up.
pub fn look_at_origin(eye: Point3<f32>) -> Matrix4<f32> {
    Matrix4::look_at_rh(eye, Point3::new(0.0, 0.0, 0.0), Vector3::unit_y())
}

/// Inverse transpose of the model matrix, used to carry normals into world space.
///
/// Singular matrices (for example a zero scale) have no inverse; their normals
/// are left untouched.
pub fn normal_matrix(model: Matrix4<f32>) -> Matrix4<f32> {
    model
        .invert()
        .map(|inverse| inverse.transpose())
        .unwrap_or_else(Matrix4::identity)
}

/// Mirror about the Y axis (negates X).
pub fn reflect_x() -> Matrix4<f32> {
    Matrix4::from_nonuniform_scale(-1.0, 1.0, 1.0)
}

/// Distance from a segment's pivot to its centre. Segments are 0.4 long.
pub const SEGMENT_OFFSET: f32 = 0.2;

/// Radians per second applied while a joint key is held.
pub const ROTATE_SENSITIVITY: f32 = 0.5;
/// Units per second applied while a movement key is held.
pub const TRANSLATE_SENSITIVITY: f32 = 0.5;

/// Rotation about a pivot that sits `SEGMENT_OFFSET` below the segment centre,
/// followed by the move to the next segment's centre.
///
/// `T(0, o, 0) * Rz(angle) * T(0, o, 0)`
pub fn joint(angle: f32) -> Matrix4<f32> {
    let offset = Matrix4::from_translation(Vector3::new(0.0, SEGMENT_OFFSET, 0.0));
    offset * Matrix4::from_angle_z(Rad(angle)) * offset
}

/// Mutable state of the arm: base position and the three joint angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmPose {
    pub base_position: Vector3<f32>,
    pub angles: [f32; 3],
}

impl Default for ArmPose {
    fn default() -> Self {
        Self {
            base_position: Vector3::new(-0.1, -0.6, 0.0),
            angles: [0.0; 3],
        }
    }
}

/// World matrices of every arm segment and of its mirror image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmMatrices {
    pub base: Matrix4<f32>,
    pub arm1: Matrix4<f32>,
    pub arm2: Matrix4<f32>,
    pub ref_base: Matrix4<f32>,
    pub ref_arm1: Matrix4<f32>,
    pub ref_arm2: Matrix4<f32>,
}

impl ArmMatrices {
    pub const NAMES: [&'static str; 6] = ["Base", "Arm1", "Arm2", "RefBase", "RefArm1", "RefArm2"];

    /// Draw order: the three segments, then their reflections.
    pub fn to_array(&self) -> [Matrix4<f32>; 6] {
        [
            self.base,
            self.arm1,
            self.arm2,
            self.ref_base,
            self.ref_arm1,
            self.ref_arm2,
        ]
    }

    pub fn get(&self, name: &str) -> Option<Matrix4<f32>> {
        Self::NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.to_array()[idx])
    }
}

impl ArmPose {
    /// Apply held-key directions for one frame.
    ///
    /// `joints` holds -1, 0 or 1 per joint, `movement` the (x, y) direction of
    /// the base. Nothing is clamped.
    pub fn advance(&mut self, joints: [f32; 3], movement: [f32; 2], dt: f32) {
        for (angle, dir) in self.angles.iter_mut().zip(joints) {
            *angle += dir * ROTATE_SENSITIVITY * dt;
        }
        self.base_position.x += movement[0] * TRANSLATE_SENSITIVITY * dt;
        self.base_position.y += movement[1] * TRANSLATE_SENSITIVITY * dt;
    }

    /// Compose the hierarchy `Base -> Arm1 -> Arm2` and mirror each node.
    pub fn evaluate(&self) -> ArmMatrices {
        let base = Matrix4::from_translation(self.base_position)
            * Matrix4::from_angle_z(Rad(self.angles[0]))
            * Matrix4::from_translation(Vector3::new(0.0, SEGMENT_OFFSET, 0.0));
        let arm1 = base * joint(self.angles[1]);
        let arm2 = arm1 * joint(self.angles[2]);

        let reflect = reflect_x();
        ArmMatrices {
            base,
            arm1,
            arm2,
            ref_base: reflect * base,
            ref_arm1: reflect * arm1,
            ref_arm2: reflect * arm2,
        }
    }
}

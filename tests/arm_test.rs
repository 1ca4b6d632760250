use cgmath::{Matrix4, Rad, Vector3, Vector4};
use flow_demos::transform::{ArmMatrices, ArmPose, ROTATE_SENSITIVITY, SEGMENT_OFFSET, joint, reflect_x};

const EPSILON: f32 = 1e-5;

fn assert_matrix_eq(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for (a, e) in actual.iter().flatten().zip(expected.iter().flatten()) {
        assert!((a - e).abs() < EPSILON, "{actual:?} != {expected:?}");
    }
}

fn poses() -> Vec<ArmPose> {
    let mut poses = vec![ArmPose::default()];
    for (i, angles) in [[0.3, -1.2, 2.0], [-3.1, 0.7, 0.0], [10.0, -10.0, 5.5]]
        .into_iter()
        .enumerate()
    {
        poses.push(ArmPose {
            base_position: Vector3::new(i as f32 * 0.25, -0.4, 0.0),
            angles,
        });
    }
    poses
}

#[test]
fn should_compose_arm2_from_base_and_local_joints() {
    for pose in poses() {
        let matrices = pose.evaluate();
        let local1 = joint(pose.angles[1]);
        let local2 = joint(pose.angles[2]);

        assert_matrix_eq(matrices.arm1, matrices.base * local1);
        assert_matrix_eq(matrices.arm2, matrices.base * local1 * local2);
        assert_matrix_eq(matrices.arm2, matrices.base * (local1 * local2));
    }
}

#[test]
fn should_mirror_every_segment_about_the_y_axis() {
    for pose in poses() {
        let m = pose.evaluate();
        let mirror = Matrix4::from_nonuniform_scale(-1.0, 1.0, 1.0);

        assert_matrix_eq(reflect_x(), mirror);
        assert_matrix_eq(m.ref_base, mirror * m.base);
        assert_matrix_eq(m.ref_arm1, mirror * m.arm1);
        assert_matrix_eq(m.ref_arm2, mirror * m.arm2);
    }
}

#[test]
fn should_place_the_base_above_its_position_when_not_rotated() {
    let matrices = ArmPose::default().evaluate();
    let centre = matrices.base * Vector4::new(0.0, 0.0, 0.0, 1.0);

    assert!((centre.x - -0.1).abs() < EPSILON);
    assert!((centre.y - (-0.6 + SEGMENT_OFFSET)).abs() < EPSILON);

    // the straight arm stacks the segment centres 0.4 apart
    let tip = matrices.arm2 * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((tip.y - (-0.6 + 5.0 * SEGMENT_OFFSET)).abs() < EPSILON);
}

#[test]
fn should_rotate_joints_with_frame_time() {
    let mut pose = ArmPose::default();
    pose.advance([1.0, -1.0, 0.0], [0.0, 0.0], 2.0);

    assert_eq!(
        pose.angles,
        [2.0 * ROTATE_SENSITIVITY, -2.0 * ROTATE_SENSITIVITY, 0.0]
    );
    assert_eq!(pose.base_position, ArmPose::default().base_position);
}

#[test]
fn should_move_base_without_clamping() {
    let mut pose = ArmPose::default();
    for _ in 0..100 {
        pose.advance([0.0; 3], [1.0, -1.0], 0.1);
    }

    assert!(pose.base_position.x > 4.0);
    assert!(pose.base_position.y < -5.0);
    assert_eq!(pose.angles, [0.0; 3]);
}

#[test]
fn should_look_up_matrices_by_name() {
    let matrices = ArmPose::default().evaluate();

    assert_eq!(matrices.get("Arm1"), Some(matrices.arm1));
    assert_eq!(matrices.get("RefArm2"), Some(matrices.ref_arm2));
    assert_eq!(matrices.get("Elbow"), None);
    assert_eq!(matrices.to_array().len(), ArmMatrices::NAMES.len());
}

#[test]
fn should_pivot_joint_below_the_segment_centre() {
    let quarter = joint(std::f32::consts::FRAC_PI_2);
    let expected = Matrix4::from_translation(Vector3::new(0.0, SEGMENT_OFFSET, 0.0))
        * Matrix4::from_angle_z(Rad(std::f32::consts::FRAC_PI_2))
        * Matrix4::from_translation(Vector3::new(0.0, SEGMENT_OFFSET, 0.0));

    assert_matrix_eq(quarter, expected);
    let moved = quarter * Vector4::new(0.0, 0.0, 0.0, 1.0);
    assert!((moved.x - -SEGMENT_OFFSET).abs() < EPSILON);
    assert!((moved.y - SEGMENT_OFFSET).abs() < EPSILON);
}

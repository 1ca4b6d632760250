use std::time::Duration;

use cgmath::{Matrix4, Vector4};
use flow_demos::{
    context::DEFAULT_CLEAR_COLOUR,
    demos::{
        Arm, Coordinates, DrawCircle, Orbit, PolygonalShading, Primitives, ScreenPoints,
        SimpleTriangle, Spotlight, TextureCoordinates, Transformation2d, VertexColors, Viewports,
        arm::{joint_input, movement_input},
        draw_circle::step_slices,
        orbit::orbit_matrices,
        screen_points::to_screen_point,
        transformation_2d::{ANGLE_STEP, model_matrix},
    },
    flow::{Demo, FrameStats},
    input::{InputState, is_exit_request, quits_on},
    transform::ArmPose,
};
use winit::{event::WindowEvent, keyboard::KeyCode};

const EPSILON: f32 = 1e-5;

fn origin_of(m: Matrix4<f32>) -> Vector4<f32> {
    m * Vector4::new(0.0, 0.0, 0.0, 1.0)
}

#[test]
fn should_keep_orbiting_cube_at_radius_two() {
    for orbit in [0.0, 0.4, 1.5, 3.0, -2.2] {
        let [_, object2] = orbit_matrices(orbit, [0.3, 0.9]);
        let centre = origin_of(object2);

        assert!(((centre.x * centre.x + centre.z * centre.z).sqrt() - 2.0).abs() < EPSILON);
        assert!(centre.y.abs() < EPSILON);
    }
}

#[test]
fn should_spin_first_cube_in_place() {
    let [object1, _] = orbit_matrices(1.0, [2.0, 0.0]);
    let centre = origin_of(object1);

    assert!(centre.truncate().x.abs() < EPSILON);
    assert!(centre.truncate().z.abs() < EPSILON);
}

#[test]
fn should_decouple_own_spin_from_orbit() {
    // with the orbit cancelled, the local X axis only follows rotation[1]
    let axis = |orbit: f32| {
        let [_, m] = orbit_matrices(orbit, [0.0, 0.7]);
        m * Vector4::new(1.0, 0.0, 0.0, 0.0)
    };
    let a = axis(0.0);
    let b = axis(1.3);

    assert!((a - b).truncate().x.abs() < EPSILON);
    assert!((a - b).truncate().z.abs() < EPSILON);
}

#[test]
fn should_translate_quad_by_sine_of_angle() {
    for step in 0..100 {
        let angle = step as f32 * ANGLE_STEP;
        let centre = origin_of(model_matrix(angle));

        assert!((centre.x - angle.sin() * 0.5).abs() < EPSILON);
        assert_eq!(centre.y, 0.0);
        assert!(centre.x.abs() <= 0.5 + EPSILON);
    }
}

#[test]
fn should_flip_cursor_into_bottom_left_origin() {
    assert_eq!(to_screen_point([0.0, 0.0], 600), [0.0, 600.0, 0.0]);
    assert_eq!(to_screen_point([799.0, 599.0], 600), [799.0, 1.0, 0.0]);
    assert_eq!(to_screen_point([120.5, 300.0], 600), [120.5, 300.0, 0.0]);
}

#[test]
fn should_average_frame_stats_over_a_second() {
    let mut stats = FrameStats::default();
    assert_eq!(stats.fps(), 60.0);

    for _ in 0..9 {
        stats.advance(Duration::from_millis(100));
    }
    // still the initial estimate until a full second has passed
    assert_eq!(stats.fps(), 60.0);

    stats.advance(Duration::from_millis(100));
    assert!((stats.fps() - 10.0).abs() < 1e-3);
    assert!((stats.frame_time() - 0.1).abs() < 1e-5);

    for _ in 0..50 {
        stats.advance(Duration::from_millis(20));
    }
    assert!((stats.fps() - 50.0).abs() < 1e-3);
}

#[test]
fn should_configure_demo_windows() {
    let configs = [
        (SimpleTriangle::config(), "Simple Triangle", [800, 600]),
        (Primitives::config(), "Primitives", [800, 600]),
        (DrawCircle::config(), "Draw Circle", [800, 600]),
        (VertexColors::config(), "Vertex Colours", [800, 600]),
        (Coordinates::config(), "Coordinates", [800, 600]),
        (Transformation2d::config(), "2D Transformation", [800, 800]),
        (Arm::config(), "2D Arm", [800, 800]),
        (ScreenPoints::config(), "Screen Points", [800, 600]),
        (Viewports::config(), "Multiple Viewports", [800, 600]),
        (Orbit::config(), "3D Orbit", [800, 600]),
        (PolygonalShading::config(), "Polygonal Shading", [800, 600]),
        (Spotlight::config(), "Spotlight", [800, 600]),
        (
            TextureCoordinates::config(),
            "Texture Coordinates",
            [800, 800],
        ),
    ];

    for (config, title, [width, height]) in configs {
        assert_eq!(config.title, title);
        assert_eq!((config.width, config.height), (width, height), "{title}");
        if title == "Screen Points" {
            assert_eq!(config.clear_colour, wgpu::Color::BLACK);
        } else {
            assert_eq!(config.clear_colour, DEFAULT_CLEAR_COLOUR, "{title}");
        }
    }
}

#[test]
fn should_enable_depth_test_for_3d_scenes() {
    assert!(Viewports::config().depth_test);
    assert!(Orbit::config().depth_test);
    assert!(PolygonalShading::config().depth_test);
    assert!(Spotlight::config().depth_test);
    assert!(!SimpleTriangle::config().depth_test);
    assert!(!Arm::config().depth_test);
}

#[test]
fn should_show_tweak_bar_only_where_needed() {
    assert_eq!(Spotlight::config().tweak_bar, Some([250.0, 500.0]));
    assert_eq!(PolygonalShading::config().tweak_bar, Some([250.0, 220.0]));
    assert_eq!(TextureCoordinates::config().tweak_bar, Some([250.0, 250.0]));
    assert_eq!(DrawCircle::config().tweak_bar, None);
    assert_eq!(Arm::config().tweak_bar, None);
}

#[test]
fn should_clamp_circle_slices() {
    assert_eq!(step_slices(8, -1), 8);
    assert_eq!(step_slices(32, 1), 32);
    assert_eq!(step_slices(8, 1), 9);
    assert_eq!(step_slices(20, -1), 19);
    assert_eq!(step_slices(9, -5), 8);
}

#[test]
fn should_turn_joints_with_their_keys() {
    let cases = [
        (KeyCode::KeyZ, 0, 1.0),
        (KeyCode::KeyC, 0, -1.0),
        (KeyCode::KeyA, 1, 1.0),
        (KeyCode::KeyD, 1, -1.0),
        (KeyCode::KeyQ, 2, 1.0),
        (KeyCode::KeyE, 2, -1.0),
    ];

    for (key, joint, expected) in cases {
        let mut input = InputState::default();
        input.press(key);
        let joints = joint_input(&input);

        for (i, value) in joints.into_iter().enumerate() {
            let want = if i == joint { expected } else { 0.0 };
            assert_eq!(value, want, "{key:?} joint {i}");
        }
        assert_eq!(movement_input(&input), [0.0, 0.0], "{key:?}");

        input.release(key);
        assert_eq!(joint_input(&input), [0.0; 3], "{key:?}");
    }
}

#[test]
fn should_cancel_opposite_joint_keys() {
    let mut input = InputState::default();
    input.press(KeyCode::KeyZ);
    input.press(KeyCode::KeyC);

    assert_eq!(joint_input(&input)[0], 0.0);
}

#[test]
fn should_move_base_with_arrow_keys() {
    let cases = [
        (KeyCode::ArrowLeft, [-1.0, 0.0]),
        (KeyCode::ArrowRight, [1.0, 0.0]),
        (KeyCode::ArrowDown, [0.0, -1.0]),
        (KeyCode::ArrowUp, [0.0, 1.0]),
    ];

    for (key, expected) in cases {
        let mut input = InputState::default();
        input.press(key);

        assert_eq!(movement_input(&input), expected, "{key:?}");
        assert_eq!(joint_input(&input), [0.0; 3], "{key:?}");
    }
}

#[test]
fn should_raise_first_angle_while_z_is_held() {
    let mut input = InputState::default();
    input.press(KeyCode::KeyZ);
    input.press(KeyCode::ArrowLeft);
    let mut pose = ArmPose::default();
    pose.advance(joint_input(&input), movement_input(&input), 0.5);

    assert!(pose.angles[0] > 0.0);
    assert_eq!(pose.angles[1], 0.0);
    assert!(pose.base_position.x < ArmPose::default().base_position.x);
}

#[test]
fn should_quit_on_escape_only_outside_the_tweak_bar() {
    assert!(quits_on(Some(KeyCode::Escape), false));
    assert!(!quits_on(Some(KeyCode::Escape), true));
    assert!(!quits_on(Some(KeyCode::KeyQ), false));
    assert!(!quits_on(None, false));

    // closing the window always quits
    assert!(is_exit_request(&WindowEvent::CloseRequested, false));
    assert!(is_exit_request(&WindowEvent::CloseRequested, true));
    assert!(!is_exit_request(&WindowEvent::Focused(true), false));
}

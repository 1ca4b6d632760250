use std::mem;

use flow_demos::{
    data_structures::{
        light::{Light, LightUniform, LightingUniform, Material, MaterialUniform, ObjectUniform},
        uniform::aligned_stride,
        vertex::{PointInstance, VertexColor, VertexNormal, VertexPosition, VertexTex},
    },
    render::Viewport,
};

#[test]
fn should_round_strides_up_to_alignment() {
    assert_eq!(aligned_stride(80, 256), 256);
    assert_eq!(aligned_stride(256, 256), 256);
    assert_eq!(aligned_stride(257, 256), 512);
    assert_eq!(aligned_stride(192, 64), 192);
    assert_eq!(aligned_stride(12, 0), 12);
}

#[test]
fn should_match_wgsl_uniform_sizes() {
    assert_eq!(mem::size_of::<LightUniform>(), 96);
    assert_eq!(mem::size_of::<MaterialUniform>(), 48);
    assert_eq!(mem::size_of::<LightingUniform>(), 160);
    assert_eq!(mem::size_of::<ObjectUniform>(), 3 * 64);
}

#[test]
fn should_pack_vertices_tightly() {
    assert_eq!(mem::size_of::<VertexPosition>(), 12);
    assert_eq!(mem::size_of::<VertexColor>(), 24);
    assert_eq!(mem::size_of::<VertexNormal>(), 24);
    assert_eq!(mem::size_of::<VertexTex>(), 20);
    assert_eq!(mem::size_of::<PointInstance>(), 24);
}

#[test]
fn should_upload_cone_angles_in_radians() {
    let light = Light {
        inner_angle: 90.0,
        outer_angle: 180.0,
        ..Default::default()
    };
    let raw: [f32; 24] = bytemuck::cast(light.to_raw());

    assert!((raw[3] - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert!((raw[7] - std::f32::consts::PI).abs() < 1e-6);
}

#[test]
fn should_put_shininess_next_to_ambient_reflectance() {
    let material = Material {
        ambient: [0.1, 0.2, 0.3],
        shininess: 40.0,
        ..Default::default()
    };
    let raw: [f32; 12] = bytemuck::cast(material.to_raw());

    assert_eq!(&raw[..4], &[0.1, 0.2, 0.3, 40.0]);
}

#[test]
fn should_flip_viewport_to_top_left_origin() {
    let lower_left = Viewport::new(0.0, 0.0, 400.0, 300.0);
    let upper_right = Viewport::new(400.0, 300.0, 400.0, 300.0);

    assert_eq!(
        lower_left.to_surface([800, 600], [800, 600]),
        Some([0.0, 300.0, 400.0, 300.0])
    );
    assert_eq!(
        upper_right.to_surface([800, 600], [800, 600]),
        Some([400.0, 0.0, 400.0, 300.0])
    );
}

#[test]
fn should_scale_viewport_with_surface() {
    let right = Viewport::new(400.0, 0.0, 400.0, 400.0);

    assert_eq!(
        right.to_surface([800, 600], [1600, 1200]),
        Some([800.0, 400.0, 800.0, 800.0])
    );
}

#[test]
fn should_clip_viewport_to_surface() {
    let oversized = Viewport::new(-100.0, 0.0, 1000.0, 700.0);
    assert_eq!(
        oversized.to_surface([800, 600], [800, 600]),
        Some([0.0, 0.0, 800.0, 600.0])
    );

    let outside = Viewport::new(900.0, 0.0, 100.0, 100.0);
    assert_eq!(outside.to_surface([800, 600], [800, 600]), None);

    let any = Viewport::new(0.0, 0.0, 400.0, 300.0);
    assert_eq!(any.to_surface([800, 600], [0, 0]), None);
}

#[test]
fn should_compute_viewport_aspect() {
    assert_eq!(Viewport::new(400.0, 0.0, 400.0, 400.0).aspect(), 1.0);
    assert_eq!(Viewport::new(0.0, 0.0, 800.0, 600.0).aspect(), 800.0 / 600.0);
    assert_eq!(Viewport::new(0.0, 0.0, 10.0, 0.0).aspect(), 1.0);
}

use std::f32::consts::TAU;

use flow_demos::geometry::{
    QUAD_TEX_COORDS, circle, close_loop, colour_cube, fan_indices, floor_plane, grid,
    reset_tex_coords, textured_quad, uv_sphere,
};

const EPSILON: f32 = 1e-5;

#[test]
fn should_generate_centre_and_closed_perimeter_for_every_slice_count() {
    for slices in [8, 9, 16, 31, 32] {
        let vertices = circle(0.5, slices, 1.0);

        // one centre vertex plus N + 1 perimeter vertices
        assert_eq!(vertices.len(), slices as usize + 2);
        assert_eq!(vertices[0].position, [0.0, 0.0, 0.0]);

        let step = TAU / slices as f32;
        for (i, v) in vertices[1..].iter().enumerate() {
            let [x, y, z] = v.position;
            let angle = i as f32 * step;
            assert!((x - 0.5 * angle.cos()).abs() < EPSILON);
            assert!((y - 0.5 * angle.sin()).abs() < EPSILON);
            assert_eq!(z, 0.0);
            assert!(((x * x + y * y).sqrt() - 0.5).abs() < EPSILON);
        }

        let first = vertices[1].position;
        let last = vertices[slices as usize + 1].position;
        assert!((first[0] - last[0]).abs() < EPSILON);
        assert!((first[1] - last[1]).abs() < EPSILON);
    }
}

#[test]
fn should_space_perimeter_vertices_evenly() {
    let slices = 12;
    let vertices = circle(1.0, slices, 1.0);
    let angles: Vec<f32> = vertices[1..]
        .iter()
        .map(|v| v.position[1].atan2(v.position[0]).rem_euclid(TAU))
        .collect();

    for pair in angles[..slices as usize].windows(2) {
        let delta = (pair[1] - pair[0]).rem_euclid(TAU);
        assert!((delta - TAU / slices as f32).abs() < 1e-4);
    }
}

#[test]
fn should_scale_only_x_by_aspect_factor() {
    let vertices = circle(0.5, 8, 600.0 / 800.0);

    assert!((vertices[1].position[0] - 0.375).abs() < EPSILON);
    // a quarter turn later x is zero and y keeps the full radius
    assert!((vertices[3].position[1] - 0.5).abs() < EPSILON);
}

#[test]
fn should_turn_fan_into_triangle_list() {
    assert_eq!(fan_indices(4), vec![0, 1, 2, 0, 2, 3]);
    assert!(fan_indices(2).is_empty());
    assert!(fan_indices(0).is_empty());

    let vertices = circle(0.5, 8, 1.0);
    let indices = fan_indices(vertices.len() as u32);
    assert_eq!(indices.len(), 8 * 3);
    assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));
}

#[test]
fn should_close_line_loop_with_first_vertex() {
    assert_eq!(close_loop(&[1, 2, 3]), vec![1, 2, 3, 1]);
    assert!(close_loop::<u32>(&[]).is_empty());
}

#[test]
fn should_build_grid_with_nine_lines_per_half_axis() {
    let lines = grid();

    assert_eq!(lines.len(), 72);
    assert!(
        lines
            .iter()
            .all(|v| v.position.iter().all(|c| c.abs() <= 1.0 + EPSILON))
    );
    // no grid line on top of the axes
    assert!(lines.chunks_exact(2).all(|line| {
        let vertical = line[0].position[0] == line[1].position[0];
        let offset = if vertical { line[0].position[0] } else { line[0].position[1] };
        offset.abs() > 0.05
    }));
}

#[test]
fn should_index_all_cube_corners() {
    let (vertices, indices) = colour_cube();

    assert_eq!(vertices.len(), 8);
    assert_eq!(indices.len(), 36);
    for corner in 0..8 {
        assert!(indices.contains(&corner));
    }
}

#[test]
fn should_reset_quad_tex_coords() {
    let mut quad = textured_quad();
    for (i, vertex) in quad.iter_mut().enumerate() {
        vertex.tex_coord = [-2.0 + i as f32, 1.7];
    }
    let positions = quad.map(|v| v.position);

    reset_tex_coords(&mut quad);

    assert_eq!(
        quad.map(|v| v.tex_coord),
        [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
    );
    assert_eq!(quad.map(|v| v.tex_coord), QUAD_TEX_COORDS);
    assert_eq!(quad.map(|v| v.position), positions);
}

#[test]
fn should_face_floor_up() {
    for vertex in floor_plane() {
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertex.position[1], 0.0);
    }
}

#[test]
fn should_generate_unit_normals_on_sphere() {
    let sphere = uv_sphere(2.0, 16, 8);

    assert_eq!(sphere.vertices.len(), 17 * 9);
    assert_eq!(sphere.indices.len(), 16 * 8 * 6);
    for vertex in &sphere.vertices {
        let [x, y, z] = vertex.normal;
        assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < EPSILON);
        for (p, n) in vertex.position.iter().zip(vertex.normal) {
            assert!((p - 2.0 * n).abs() < EPSILON);
        }
    }
}

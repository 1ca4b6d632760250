//! Vertex data of the demo scenes.
//!
//! Everything here is plain CPU side data. wgpu has neither triangle fans nor
//! line loops, so [`fan_indices`] and [`close_loop`] rewrite those into lists
//! and strips.

use std::f32::consts::TAU;

use crate::data_structures::vertex::{VertexColor, VertexNormal, VertexPosition, VertexTex};

/// A triangle fan circle around the origin.
///
/// Vertex 0 is the centre, followed by `slices + 1` perimeter vertices at angles
/// `i * 2π / slices`; the last one closes the fan on top of the first. `x` is
/// multiplied by `scale_factor` to undo the aspect ratio of the window.
pub fn circle(radius: f32, slices: u32, scale_factor: f32) -> Vec<VertexPosition> {
    let slices = slices.max(1);
    let step = TAU / slices as f32;

    let mut vertices = Vec::with_capacity(slices as usize + 2);
    vertices.push(VertexPosition::new(0.0, 0.0, 0.0));
    vertices.extend((0..=slices).map(|i| {
        let angle = i as f32 * step;
        VertexPosition::new(radius * angle.cos() * scale_factor, radius * angle.sin(), 0.0)
    }));
    vertices
}

/// Triangle list indices for a fan of `vertex_count` vertices with the hub at 0.
pub fn fan_indices(vertex_count: u32) -> Vec<u32> {
    (1..vertex_count.saturating_sub(1))
        .flat_map(|i| [0, i, i + 1])
        .collect()
}

/// A line strip that draws the same outline as a line loop over `vertices`.
pub fn close_loop<V: Copy>(vertices: &[V]) -> Vec<V> {
    let mut strip = vertices.to_vec();
    if let Some(first) = vertices.first() {
        strip.push(*first);
    }
    strip
}

/// The X and Y axis as a line list spanning the whole clip space.
pub fn axes() -> [VertexPosition; 4] {
    [
        VertexPosition::new(-1.0, 0.0, 0.0),
        VertexPosition::new(1.0, 0.0, 0.0),
        VertexPosition::new(0.0, 1.0, 0.0),
        VertexPosition::new(0.0, -1.0, 0.0),
    ]
}

/// Grid lines every 0.1 units, excluding the axes, as a line list.
///
/// Each `i` in 1..=9 yields eight vertices: the vertical lines at `±i/10` and
/// the horizontal ones at `±i/10`.
pub fn grid() -> Vec<VertexPosition> {
    (1..=9)
        .flat_map(|i| {
            let d = i as f32 * 0.1;
            [
                VertexPosition::new(d, -1.0, 0.0),
                VertexPosition::new(d, 1.0, 0.0),
                VertexPosition::new(-d, -1.0, 0.0),
                VertexPosition::new(-d, 1.0, 0.0),
                VertexPosition::new(-1.0, d, 0.0),
                VertexPosition::new(1.0, d, 0.0),
                VertexPosition::new(-1.0, -d, 0.0),
                VertexPosition::new(1.0, -d, 0.0),
            ]
        })
        .collect()
}

/// Unit cube centred at the origin with a distinct colour per corner.
pub fn colour_cube() -> ([VertexColor; 8], [u32; 36]) {
    let vertices = [
        VertexColor::new([-0.5, 0.5, 0.5], [1.0, 0.0, 1.0]),
        VertexColor::new([-0.5, -0.5, 0.5], [1.0, 0.0, 0.0]),
        VertexColor::new([0.5, 0.5, 0.5], [1.0, 1.0, 1.0]),
        VertexColor::new([0.5, -0.5, 0.5], [1.0, 1.0, 0.0]),
        VertexColor::new([-0.5, 0.5, -0.5], [0.0, 0.0, 1.0]),
        VertexColor::new([-0.5, -0.5, -0.5], [0.0, 0.0, 0.0]),
        VertexColor::new([0.5, 0.5, -0.5], [0.0, 1.0, 1.0]),
        VertexColor::new([0.5, -0.5, -0.5], [0.0, 1.0, 0.0]),
    ];
    #[rustfmt::skip]
    let indices = [
        0, 1, 2, 2, 1, 3, // front
        4, 5, 0, 0, 5, 1, // left
        2, 3, 6, 6, 3, 7, // right
        4, 0, 6, 6, 0, 2, // top
        1, 5, 3, 3, 5, 7, // bottom
        5, 4, 7, 7, 4, 6, // back
    ];
    (vertices, indices)
}

/// Default texture coordinates of the quad, in strip order: bottom left,
/// bottom right, top left, top right.
pub const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// The textured quad of the texture coordinate demo as a triangle strip.
pub fn textured_quad() -> [VertexTex; 4] {
    let positions = [
        [-0.2, -0.5, 0.0],
        [0.8, -0.5, 0.0],
        [-0.2, 0.5, 0.0],
        [0.8, 0.5, 0.0],
    ];
    let mut quad = [VertexTex::default(); 4];
    for ((vertex, position), tex_coord) in quad.iter_mut().zip(positions).zip(QUAD_TEX_COORDS) {
        *vertex = VertexTex::new(position, tex_coord);
    }
    quad
}

/// Put the texture coordinates of a quad back to [`QUAD_TEX_COORDS`].
pub fn reset_tex_coords(quad: &mut [VertexTex; 4]) {
    for (vertex, tex_coord) in quad.iter_mut().zip(QUAD_TEX_COORDS) {
        vertex.tex_coord = tex_coord;
    }
}

/// A 4 by 4 floor in the XZ plane facing up, as a triangle strip.
pub fn floor_plane() -> [VertexNormal; 4] {
    let up = [0.0, 1.0, 0.0];
    [
        VertexNormal::new([-2.0, 0.0, 2.0], up),
        VertexNormal::new([2.0, 0.0, 2.0], up),
        VertexNormal::new([-2.0, 0.0, -2.0], up),
        VertexNormal::new([2.0, 0.0, -2.0], up),
    ]
}

/// Indexed triangle mesh with normals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<VertexNormal>,
    pub indices: Vec<u32>,
}

/// Sphere of the given radius around the origin, split into `slices` around the
/// Y axis and `stacks` from pole to pole. Normals point outwards.
pub fn uv_sphere(radius: f32, slices: u32, stacks: u32) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(2);

    let mut vertices = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
    for stack in 0..=stacks {
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        for slice in 0..=slices {
            let theta = TAU * slice as f32 / slices as f32;
            let normal = [phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()];
            let position = normal.map(|n| n * radius);
            vertices.push(VertexNormal::new(position, normal));
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((slices * stacks * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * ring + slice;
            let b = a + ring;
            indices.extend_from_slice(&[a, a + 1, b, b, a + 1, b + 1]);
        }
    }

    MeshData { vertices, indices }
}

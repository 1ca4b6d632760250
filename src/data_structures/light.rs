//! Light and material records for the lit scenes, plus their GPU layouts.
//!
//! [`Light`] and [`Material`] are what the tweak bar edits. Every frame they are
//! converted by value into the `#[repr(C)]` uniform structs below, which follow
//! WGSL's 16 byte alignment for `vec3<f32>`.

use cgmath::Matrix4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: [f32; 3],
    /// Only used by spot lights.
    pub direction: [f32; 3],
    /// La
    pub ambient: [f32; 3],
    /// Ld
    pub diffuse: [f32; 3],
    /// Ls
    pub specular: [f32; 3],
    /// Constant, linear and quadratic attenuation factors.
    pub attenuation: [f32; 3],
    /// Full-intensity cone half angle in degrees.
    pub inner_angle: f32,
    /// Cut-off cone half angle in degrees.
    pub outer_angle: f32,
}

impl Default for Light {
    /// A white point light without falloff.
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            direction: [0.0, -1.0, 0.0],
            ambient: [1.0; 3],
            diffuse: [1.0; 3],
            specular: [1.0; 3],
            attenuation: [1.0, 0.0, 0.0],
            inner_angle: 90.0,
            outer_angle: 90.0,
        }
    }
}

impl Light {
    pub fn to_raw(&self) -> LightUniform {
        LightUniform {
            position: self.position,
            inner_angle: self.inner_angle.to_radians(),
            direction: self.direction,
            outer_angle: self.outer_angle.to_radians(),
            ambient: self.ambient,
            _padding: 0,
            diffuse: self.diffuse,
            _padding2: 0,
            specular: self.specular,
            _padding3: 0,
            attenuation: self.attenuation,
            _padding4: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Ka
    pub ambient: [f32; 3],
    /// Kd
    pub diffuse: [f32; 3],
    /// Ks
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [0.4; 3],
            diffuse: [1.0; 3],
            specular: [1.0; 3],
            shininess: 40.0,
        }
    }
}

impl Material {
    pub fn to_raw(&self) -> MaterialUniform {
        MaterialUniform {
            ambient: self.ambient,
            shininess: self.shininess,
            diffuse: self.diffuse,
            _padding: 0,
            specular: self.specular,
            _padding2: 0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    position: [f32; 3],
    inner_angle: f32,
    direction: [f32; 3],
    outer_angle: f32,
    ambient: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding: u32,
    diffuse: [f32; 3],
    _padding2: u32,
    specular: [f32; 3],
    _padding3: u32,
    attenuation: [f32; 3],
    _padding4: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    ambient: [f32; 3],
    shininess: f32,
    diffuse: [f32; 3],
    _padding: u32,
    specular: [f32; 3],
    _padding2: u32,
}

/// Everything the lighting shaders need besides the per-object matrices.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    light: LightUniform,
    material: MaterialUniform,
    viewpoint: [f32; 3],
    _padding: u32,
}

impl LightingUniform {
    pub fn new(light: &Light, material: &Material, viewpoint: [f32; 3]) -> Self {
        Self {
            light: light.to_raw(),
            material: material.to_raw(),
            viewpoint,
            _padding: 0,
        }
    }
}

/// Per-object matrices for the lit scenes.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    model_view_projection: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    // mat3 has awkward padding rules in WGSL, the shader takes the upper 3x3
    normal: [[f32; 4]; 4],
}

impl ObjectUniform {
    pub fn new(view_projection: Matrix4<f32>, model: Matrix4<f32>) -> Self {
        Self {
            model_view_projection: (view_projection * model).into(),
            model: model.into(),
            normal: crate::transform::normal_matrix(model).into(),
        }
    }
}

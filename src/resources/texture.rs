use crate::{
    data_structures::texture::{SamplerOptions, Texture},
    resources::load_binary,
};

/// Load an image from the asset directory into a sampled texture.
///
/// Images are stored top row first while texture coordinates start at the bottom,
/// so `flip_vertically` is what the textured demos want.
pub async fn load_texture(
    file_name: &str,
    flip_vertically: bool,
    sampler: SamplerOptions,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let data = load_binary(file_name).await?;
    Texture::from_bytes(device, queue, &data, file_name, flip_vertically, sampler)
}

use image::{Rgba, RgbaImage};

/// The 8 bit value a clear colour channel ends up as in an `Rgba8Unorm` target.
pub fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn to_pixel(colour: wgpu::Color) -> Rgba<u8> {
    Rgba([
        to_u8(colour.r),
        to_u8(colour.g),
        to_u8(colour.b),
        to_u8(colour.a),
    ])
}

/// Pixel at `[x, y]` with the origin in the lower left corner, like the demos'
/// viewports.
pub fn pixel_from_bottom(image: &RgbaImage, [x, y]: [u32; 2]) -> Rgba<u8> {
    *image.get_pixel(x, image.height() - 1 - y)
}

pub fn corners(image: &RgbaImage) -> [Rgba<u8>; 4] {
    let (w, h) = (image.width() - 1, image.height() - 1);
    [
        *image.get_pixel(0, 0),
        *image.get_pixel(w, 0),
        *image.get_pixel(0, h),
        *image.get_pixel(w, h),
    ]
}

#[cfg(feature = "integration-tests")]
#[allow(dead_code)]
mod common;

#[cfg(feature = "integration-tests")]
use common::test_utils::{corners, pixel_from_bottom, to_pixel};
#[cfg(feature = "integration-tests")]
use flow_demos::{
    context::DEFAULT_CLEAR_COLOUR,
    demos::{PolygonalShading, ScreenPoints, SimpleTriangle, Spotlight, TextureCoordinates, Viewports},
    flow::render_offscreen,
};

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_white_triangle_on_grey() {
    let image = render_offscreen::<SimpleTriangle>(1).unwrap();
    let grey = to_pixel(DEFAULT_CLEAR_COLOUR);

    assert_eq!((image.width(), image.height()), (800, 600));
    for corner in corners(&image) {
        assert_eq!(corner, grey);
    }
    assert_eq!(pixel_from_bottom(&image, [400, 300]), image::Rgba([255; 4]));
    // just outside the right edge of the triangle
    assert_eq!(pixel_from_bottom(&image, [640, 300]), grey);
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_start_screen_points_empty() {
    let image = render_offscreen::<ScreenPoints>(2).unwrap();
    let black = to_pixel(wgpu::Color::BLACK);

    assert!(image.pixels().all(|p| *p == black));
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_draw_cube_in_both_viewports() {
    let image = render_offscreen::<Viewports>(1).unwrap();
    let grey = to_pixel(DEFAULT_CLEAR_COLOUR);

    assert_ne!(pixel_from_bottom(&image, [200, 200]), grey);
    assert_ne!(pixel_from_bottom(&image, [600, 200]), grey);
    // above the viewports only the clear colour remains
    assert_eq!(pixel_from_bottom(&image, [100, 550]), grey);
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_light_sphere_in_every_viewport() {
    let image = render_offscreen::<PolygonalShading>(1).unwrap();
    let grey = to_pixel(DEFAULT_CLEAR_COLOUR);

    // upper left quarter has no viewport
    assert_eq!(pixel_from_bottom(&image, [200, 450]), grey);
    for centre in [[600, 450], [200, 150], [600, 150]] {
        let pixel = pixel_from_bottom(&image, centre);
        assert_ne!(pixel, grey);
        // blue dominates the light and the material
        assert!(pixel[2] > pixel[0], "{pixel:?} at {centre:?}");
    }
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_paint_yellow_spot_below_the_light() {
    let image = render_offscreen::<Spotlight>(1).unwrap();
    let pixel = pixel_from_bottom(&image, [400, 300]);

    assert!(pixel[0] > 200 && pixel[1] > 200, "{pixel:?}");
    assert!(pixel[2] < 20, "{pixel:?}");
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_sample_checker_texture_without_filtering() {
    let image = render_offscreen::<TextureCoordinates>(1).unwrap();
    let grey = to_pixel(DEFAULT_CLEAR_COLOUR);

    // left of the quad
    assert_eq!(pixel_from_bottom(&image, [100, 400]), grey);
    for x in (340..660).step_by(16) {
        let pixel = pixel_from_bottom(&image, [x, 400]);
        assert!(pixel[0] == 0 || pixel[0] == 255, "{pixel:?}");
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}

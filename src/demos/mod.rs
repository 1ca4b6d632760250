//! The demo scenes, one module per window.

pub mod arm;
pub mod coordinates;
pub mod draw_circle;
pub mod orbit;
pub mod polygonal_shading;
pub mod primitives;
pub mod screen_points;
pub mod simple_triangle;
pub mod spotlight;
pub mod texture_coordinates;
pub mod transformation_2d;
pub mod vertex_colors;
pub mod viewports;

pub use arm::Arm;
pub use coordinates::Coordinates;
pub use draw_circle::DrawCircle;
pub use orbit::Orbit;
pub use polygonal_shading::PolygonalShading;
pub use primitives::Primitives;
pub use screen_points::ScreenPoints;
pub use simple_triangle::SimpleTriangle;
pub use spotlight::Spotlight;
pub use texture_coordinates::TextureCoordinates;
pub use transformation_2d::Transformation2d;
pub use vertex_colors::VertexColors;
pub use viewports::Viewports;

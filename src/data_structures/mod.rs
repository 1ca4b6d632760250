//! GPU facing data types shared by the demos.
//!
//! - `vertex` holds the vertex formats and their buffer layouts
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `uniform` is a uniform buffer with one dynamically offset slot per draw
//! - `light` holds the light and material records of the lit scenes

pub mod light;
pub mod texture;
pub mod uniform;
pub mod vertex;

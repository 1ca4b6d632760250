//! flow-demos
//!
//! Small, independent graphics teaching demos on top of wgpu, winit and egui.
//! Every demo is one type implementing [`flow::Demo`] and one binary under
//! `src/bin` that hands it to [`flow::run`]. The library holds the little that
//! the demos share.
//!
//! High-level modules
//! - `context`: window, GPU device and per-window state built from a [`context::DemoConfig`]
//! - `data_structures`: vertex formats, textures, uniform arrays, lights and materials
//! - `demos`: the demo scenes
//! - `flow`: the [`flow::Demo`] trait and the event loop
//! - `geometry`: vertex data generators
//! - `input`: keyboard and mouse state
//! - `pipelines`: render pipeline construction
//! - `render`: viewports, meshes and growable buffers
//! - `resources`: asset loading
//! - `transform`: projections and the articulated arm
//! - `ui`: the egui tweak bar
//!

pub mod context;
pub mod data_structures;
pub mod demos;
pub mod flow;
pub mod geometry;
pub mod input;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod transform;
pub mod ui;

pub use winit::event::WindowEvent;

//! WebGPU rendering module
//!
//! Flat-color quads: the scene builder flattens a state snapshot into a
//! vertex list and the pipeline draws it in one pass.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::Renderer;
pub use vertex::Vertex;

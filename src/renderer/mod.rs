//! WebGPU rendering module
//!
//! Scenes are built as flat-colored triangle lists in game coordinates and
//! mapped to NDC on upload.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod stars;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use stars::{STAR_COUNT, Star, generate_stars};
pub use vertex::Vertex;

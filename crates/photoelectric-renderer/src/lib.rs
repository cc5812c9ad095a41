//! # Photoelectric Renderer
//!
//! Draws the animator's photons and electrons over the metal surface.

pub mod camera;
pub mod error;
pub mod renderer;
pub mod scene;

pub use camera::*;
pub use error::*;
pub use renderer::*;
pub use scene::*;

//! # Particle Field Renderer
//!
//! Draws the particle field as instanced, anti-aliased circles.

pub mod instance;
pub mod renderer;

pub use instance::*;
pub use renderer::*;

//! # Particle Field Physics
//!
//! Per-particle math for the interactive particle field: pointer repulsion,
//! spring return to the lattice anchor, damping, and displacement-driven
//! opacity.

pub mod color;
pub mod constants;
pub mod forces;
pub mod particle;

pub use color::*;
pub use constants::*;
pub use forces::*;
pub use particle::*;

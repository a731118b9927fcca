//! # Particle Field Simulation
//!
//! CPU simulation of a pointer-reactive particle lattice, plus the
//! mount/frame/unmount lifecycle that ties it to a host window.

pub mod debounce;
pub mod field;
pub mod frame_loop;
pub mod host;
pub mod lattice;
pub mod params;
pub mod pointer;
pub mod view;

pub use debounce::*;
pub use field::*;
pub use frame_loop::*;
pub use host::*;
pub use lattice::*;
pub use params::*;
pub use pointer::*;
pub use view::*;

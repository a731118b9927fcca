//! Default constants for the particle field
//!
//! All distances are in logical pixels; velocities are pixels per frame.

/// Lattice spacing on regular viewports
pub const SPACING: f32 = 35.0;

/// Coarser lattice spacing used on small viewports to keep particle counts down
pub const SMALL_VIEWPORT_SPACING: f32 = 50.0;

/// Viewports narrower than this use [`SMALL_VIEWPORT_SPACING`]
pub const SMALL_VIEWPORT_BREAKPOINT: f32 = 768.0;

/// Radius of pointer influence
pub const REPULSION_RADIUS: f32 = 120.0;

/// Impulse applied at zero pointer distance
pub const PUSH_FORCE: f32 = 5.0;

/// Hooke's law constant pulling particles back to their anchor
pub const SPRING_STIFFNESS: f32 = 0.08;

/// Per-frame velocity attenuation (friction)
pub const DAMPING: f32 = 0.90;

/// Opacity of a particle at rest
pub const BASE_OPACITY: f32 = 0.15;

/// Displacement at which a particle reaches full opacity
pub const SATURATION_DISPLACEMENT: f32 = 50.0;

/// Smallest render radius
pub const MIN_PARTICLE_SIZE: f32 = 1.5;

/// Largest render radius (exclusive)
pub const MAX_PARTICLE_SIZE: f32 = 3.5;

/// Pointer position used while the cursor is outside the window
pub const POINTER_SENTINEL: [f32; 2] = [-1000.0, -1000.0];

/// Pointer x-coordinates at or below this are treated as off-screen
pub const OFFSCREEN_THRESHOLD: f32 = -100.0;

/// Delay before a viewport resize rebuilds the lattice
pub const RESIZE_DEBOUNCE_MS: u64 = 100;

/// Opacity of the whole particle layer over the page background
pub const LAYER_OPACITY: f32 = 0.8;

//! Lattice-anchored particles and their per-frame update

use crate::color::{palette_color, Color};
use crate::constants::*;
use crate::forces::{opacity_for_displacement, repulsion_impulse, spring_force};
use glam::Vec2;

/// Constants governing a single particle step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDynamics {
    pub repulsion_radius: f32,
    pub push_force: f32,
    pub spring_stiffness: f32,
    pub damping: f32,
    pub base_opacity: f32,
    pub saturation_displacement: f32,
}

impl Default for ParticleDynamics {
    fn default() -> Self {
        Self {
            repulsion_radius: REPULSION_RADIUS,
            push_force: PUSH_FORCE,
            spring_stiffness: SPRING_STIFFNESS,
            damping: DAMPING,
            base_opacity: BASE_OPACITY,
            saturation_displacement: SATURATION_DISPLACEMENT,
        }
    }
}

/// A point mass anchored to a lattice cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Rest position, fixed at construction
    pub origin: Vec2,
    pub position: Vec2,
    /// Velocity in pixels per frame
    pub velocity: Vec2,
    /// Render radius
    pub size: f32,
    /// Index into [`crate::PALETTE`]
    pub color: u32,
    /// Derived from displacement on every step
    pub opacity: f32,
}

impl Particle {
    /// Create a particle at rest on its anchor
    pub fn new(origin: Vec2, size: f32, color: u32) -> Self {
        Self {
            origin,
            position: origin,
            velocity: Vec2::ZERO,
            size,
            color,
            opacity: BASE_OPACITY,
        }
    }

    /// Distance between the current position and the anchor
    pub fn displacement(&self) -> f32 {
        self.position.distance(self.origin)
    }

    pub fn get_color(&self) -> Color {
        palette_color(self.color)
    }

    /// Advance one frame: pointer push, spring pull, Euler step, damping,
    /// then opacity from the new displacement.
    pub fn step(&mut self, pointer: Vec2, dynamics: &ParticleDynamics) {
        self.velocity += repulsion_impulse(
            self.position,
            pointer,
            dynamics.repulsion_radius,
            dynamics.push_force,
        );
        self.velocity += spring_force(self.position, self.origin, dynamics.spring_stiffness);

        self.position += self.velocity;
        self.velocity *= dynamics.damping;

        self.opacity = opacity_for_displacement(
            self.displacement(),
            dynamics.base_opacity,
            dynamics.saturation_displacement,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinel() -> Vec2 {
        Vec2::from_array(POINTER_SENTINEL)
    }

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = Particle::new(Vec2::new(4.5, 16.5), 2.0, 1);
        assert_eq!(p.position, p.origin);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.displacement(), 0.0);
        assert_eq!(p.opacity, BASE_OPACITY);
    }

    #[test]
    fn test_rest_particle_stays_put_without_pointer() {
        let dynamics = ParticleDynamics::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), 2.0, 0);
        for _ in 0..50 {
            p.step(sentinel(), &dynamics);
        }
        assert_eq!(p.position, p.origin);
        assert_eq!(p.opacity, BASE_OPACITY);
    }

    #[test]
    fn test_pointer_pushes_particle_away() {
        let dynamics = ParticleDynamics::default();
        let mut p = Particle::new(Vec2::new(100.0, 100.0), 2.0, 0);
        let pointer = Vec2::new(140.0, 100.0);
        p.step(pointer, &dynamics);
        assert!(p.position.x < p.origin.x);
        assert!(p.opacity > BASE_OPACITY);
    }

    #[test]
    fn test_displaced_particle_converges_to_origin() {
        let dynamics = ParticleDynamics::default();
        let mut p = Particle::new(Vec2::ZERO, 2.0, 0);
        p.position = Vec2::new(30.0, 0.0);

        // The spring is underdamped, so compare peaks over windows longer
        // than one oscillation rather than frame by frame.
        const WINDOW: usize = 25;
        let mut previous_peak = f32::INFINITY;
        for _ in 0..10 {
            let mut peak: f32 = 0.0;
            for _ in 0..WINDOW {
                p.step(sentinel(), &dynamics);
                peak = peak.max(p.displacement());
            }
            assert!(peak < previous_peak, "{peak} >= {previous_peak}");
            previous_peak = peak;
        }

        for _ in 0..100 {
            p.step(sentinel(), &dynamics);
        }
        assert!(p.displacement() < 1e-2);
        assert!(p.velocity.length() < 1e-2);
    }

    #[test]
    fn test_opacity_saturates_for_large_displacement() {
        let dynamics = ParticleDynamics::default();
        let mut p = Particle::new(Vec2::ZERO, 2.0, 0);
        p.position = Vec2::new(0.0, 200.0);
        p.step(sentinel(), &dynamics);
        assert_eq!(p.opacity, 1.0);
    }
}

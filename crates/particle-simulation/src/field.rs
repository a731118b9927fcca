//! CPU particle field: lattice construction and per-frame stepping

use crate::lattice::Lattice;
use crate::params::FieldParams;
use crate::pointer::PointerState;
use particle_physics::{Particle, ParticleDynamics, PALETTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct ParticleField {
    params: FieldParams,
    dynamics: ParticleDynamics,
    particles: Vec<Particle>,
    lattice: Lattice,
    viewport: (f32, f32),
    rng: StdRng,
}

impl ParticleField {
    /// Create an empty field; call [`ParticleField::rebuild`] to populate it
    pub fn new(params: FieldParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            dynamics: params.dynamics(),
            params,
            particles: Vec::new(),
            lattice: Lattice::for_viewport(0.0, 0.0, 1.0),
            viewport: (0.0, 0.0),
            rng,
        }
    }

    /// Replace every particle with a fresh lattice for the given viewport.
    ///
    /// Positions, velocities and displacement from the previous lattice are
    /// discarded.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        let spacing = self.params.spacing_for_width(width);
        let lattice = Lattice::for_viewport(width, height, spacing);

        let (min_size, max_size) = (self.params.min_particle_size, self.params.max_particle_size);
        let rng = &mut self.rng;
        let particles: Vec<Particle> = lattice
            .origins()
            .map(|origin| {
                let size = if max_size > min_size {
                    rng.random_range(min_size..max_size)
                } else {
                    min_size
                };
                let color = rng.random_range(0..PALETTE.len() as u32);
                Particle::new(origin, size, color)
            })
            .collect();

        log::debug!(
            "Rebuilt lattice {}x{} (spacing {}) for {}x{} viewport: {} particles",
            lattice.cols,
            lattice.rows,
            spacing,
            width,
            height,
            particles.len()
        );

        self.particles = particles;
        self.lattice = lattice;
        self.viewport = (width, height);
    }

    /// Advance every particle by one frame
    pub fn step(&mut self, pointer: &PointerState) {
        let pointer = pointer.position();
        for particle in &mut self.particles {
            particle.step(pointer, &self.dynamics);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}

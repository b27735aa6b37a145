//! Snowfall particle field.

use crate::constants::*;
use crate::surface::Surface;
use glam::DVec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
}

pub struct ParticleField {
    bounds: DVec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(bounds: DVec2, seed: u64) -> Self {
        Self {
            bounds,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the field with `count` particles scattered over the canvas.
    pub fn spawn(&mut self, count: usize) {
        let bounds = self.bounds;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| {
                let y = rng.gen_range(0.0..bounds.y);
                fresh_particle(rng, bounds, y)
            })
            .collect();
    }

    /// Paint every particle, then move it. Particles that fall below the
    /// canvas are replaced by new ones entering at the top.
    pub fn advance_and_render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for i in 0..self.particles.len() {
            let fell_out = {
                let p = &mut self.particles[i];
                surface.fill_circle(p.pos, p.size, SNOW_COLOR);
                p.pos += p.vel;
                p.pos.y > self.bounds.y
            };
            if fell_out {
                self.particles[i] = fresh_particle(&mut self.rng, self.bounds, 0.0);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Test hook for placing particles at known positions.
    #[doc(hidden)]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }
}

fn fresh_particle(rng: &mut StdRng, bounds: DVec2, y: f64) -> Particle {
    Particle {
        pos: DVec2::new(rng.gen_range(0.0..bounds.x), y),
        vel: DVec2::new(
            rng.gen_range(-SNOW_DRIFT_X..SNOW_DRIFT_X),
            rng.gen_range(SNOW_SPEED_Y_MIN..SNOW_SPEED_Y_MAX),
        ),
        size: rng.gen_range(SNOW_SIZE_MIN..SNOW_SIZE_MAX),
    }
}

//! The particle set: batch creation and the per-frame drift/wrap pass.

use crate::color::Rgb;
use crate::config::Config;
use glam::Vec2;
use rand::Rng;

/// Drawable area in surface-local (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Constant over the particle's lifetime.
    pub vel: Vec2,
    pub radius: f32,
    /// `Some` iff a palette is configured; chosen once at creation.
    pub color: Option<Rgb>,
}

/// Owns all particles. They are created in a batch on (re)initialization and
/// destroyed en masse on the next rebuild, never individually.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous set and create exactly `config.max_particles` new
    /// particles. Radius is the product of two independent uniform draws,
    /// which biases it toward small values on purpose.
    pub fn rebuild(&mut self, bounds: Bounds, config: &Config, rng: &mut impl Rng) {
        self.particles.clear();
        self.particles.reserve(config.max_particles);

        // A radius above half the smaller side would make the two wrap
        // branches on one axis overlap; cap it at creation.
        let radius_cap = 0.5 * bounds.width.min(bounds.height);

        for _ in 0..config.max_particles {
            let pos = Vec2::new(
                rng.gen::<f32>() * bounds.width,
                rng.gen::<f32>() * bounds.height,
            );
            let vel = Vec2::new(
                rng.gen::<f32>() * config.speed * 2.0 - config.speed,
                rng.gen::<f32>() * config.speed * 2.0 - config.speed,
            );
            let radius =
                (rng.gen::<f32>() * rng.gen::<f32>() * config.size_variations).min(radius_cap);
            let color = config.color.pick(rng);
            self.particles.push(Particle {
                pos,
                vel,
                radius,
                color,
            });
        }
        log::debug!(
            "[field] rebuilt {} particles in {:.0}x{:.0}",
            self.particles.len(),
            bounds.width,
            bounds.height
        );
    }

    /// Add velocity to position, then wrap at the edges: a particle whose
    /// leading edge crosses a bound reappears at the opposite inner edge
    /// (position reset to exactly `radius`, or `bound - radius`). Each axis
    /// is resolved independently and at most one branch fires per axis.
    pub fn advance(&mut self, bounds: Bounds) {
        for p in &mut self.particles {
            p.pos += p.vel;

            if p.pos.x + p.radius > bounds.width {
                p.pos.x = p.radius;
            } else if p.pos.x - p.radius < 0.0 {
                p.pos.x = bounds.width - p.radius;
            }

            if p.pos.y + p.radius > bounds.height {
                p.pos.y = p.radius;
            } else if p.pos.y - p.radius < 0.0 {
                p.pos.y = bounds.height - p.radius;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

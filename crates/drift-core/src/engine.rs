//! One engine instance owning all mutable state: resolver, particle set,
//! bounds and RNG. No ambient globals; multiple instances are independent.

use crate::config::{Config, ConfigError, ConfigResolver, Settings};
use crate::field::{Bounds, ParticleField};
use crate::links::{self, Edge};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::Rgb;

/// The drawing-surface seam: one frame is a sequence of these, translated
/// by the shell into canvas calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Disc { pos: Vec2, radius: f32, color: Rgb },
    Edge(Edge),
}

#[derive(Debug)]
pub struct Engine {
    resolver: ConfigResolver,
    field: ParticleField,
    bounds: Bounds,
    rng: StdRng,
    edges: Vec<Edge>,
}

impl Engine {
    /// Resolve settings, apply the breakpoint matching the initial bounds
    /// and build the particle set. Fails on configuration errors only; the
    /// caller logs and stays inert in that case.
    pub fn new(settings: &Settings, bounds: Bounds, seed: u64) -> Result<Self, ConfigError> {
        let mut resolver = ConfigResolver::new(settings)?;
        resolver.check_responsive(bounds.width as u32);
        let mut engine = Self {
            resolver,
            field: ParticleField::new(),
            bounds,
            rng: StdRng::seed_from_u64(seed),
            edges: Vec::new(),
        };
        engine.rebuild();
        Ok(engine)
    }

    fn rebuild(&mut self) {
        self.field
            .rebuild(self.bounds, self.resolver.active(), &mut self.rng);
    }

    /// New surface dimensions: re-check the responsive table and rebuild
    /// the particle set. The caller draws one frame immediately afterwards
    /// so no stale frame stays visible.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.resolver.check_responsive(bounds.width as u32);
        self.rebuild();
        log::debug!(
            "[engine] resize to {:.0}x{:.0}, breakpoint {:?}",
            bounds.width,
            bounds.height,
            self.resolver.active_breakpoint()
        );
    }

    /// Emit one frame: clear, particle discs at their current positions,
    /// advance the physics, then the proximity edges from the updated
    /// positions.
    pub fn frame(&mut self, out: &mut Vec<DrawCommand>) {
        out.clear();
        out.push(DrawCommand::Clear);

        let config = self.resolver.active();
        let show_particles = config.show_particles;
        let connect_particles = config.connect_particles;
        let min_distance = config.min_distance;
        let primary = config.color.primary();

        if show_particles {
            for p in self.field.particles() {
                out.push(DrawCommand::Disc {
                    pos: p.pos,
                    radius: p.radius,
                    color: p.color.unwrap_or(primary),
                });
            }
        }

        self.field.advance(self.bounds);

        if connect_particles {
            self.edges.clear();
            links::connect(
                self.field.particles_mut(),
                min_distance,
                primary,
                &mut self.edges,
            );
            out.extend(self.edges.iter().copied().map(DrawCommand::Edge));
        }
    }

    pub fn config(&self) -> &Config {
        self.resolver.active()
    }

    /// The target selector never changes after init, so it comes from the
    /// baseline even while a breakpoint is active.
    pub fn selector(&self) -> &str {
        &self.resolver.baseline().selector
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

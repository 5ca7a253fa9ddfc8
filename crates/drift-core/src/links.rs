//! Proximity-graph edges: which particle pairs are close enough to connect,
//! and how faded the connecting line is.

use crate::color::Rgb;
use crate::field::Particle;
use glam::Vec2;

/// One edge-draw command: both endpoints, stroke color and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
    pub color: Rgb,
    pub opacity: f32,
}

/// Collect an edge for every pair within `max_distance`, with opacity
/// falling from 1.2 at distance zero to 0.2 at the threshold (never fully
/// transparent at the cutoff; the surface clamps values above 1.0).
///
/// Particles are sorted by (x, then y) first; that ordering lets the inner
/// scan stop as soon as the x gap alone exceeds the threshold, since no
/// later candidate can be closer in x. The x-gap test is only a necessary
/// condition; the exact Euclidean distance still decides every edge, so the
/// output matches a full pairwise scan.
pub fn connect(particles: &mut [Particle], max_distance: f32, color: Rgb, out: &mut Vec<Edge>) {
    if max_distance <= 0.0 || particles.len() < 2 {
        return;
    }

    particles.sort_unstable_by(|p, q| {
        p.pos
            .x
            .total_cmp(&q.pos.x)
            .then(p.pos.y.total_cmp(&q.pos.y))
    });

    for i in 0..particles.len() - 1 {
        let a = particles[i].pos;
        for j in (i + 1)..particles.len() {
            let b = particles[j].pos;
            if b.x - a.x > max_distance {
                break;
            }
            let distance = a.distance(b);
            if distance <= max_distance {
                out.push(Edge {
                    a,
                    b,
                    color,
                    opacity: 1.2 - distance / max_distance,
                });
            }
        }
    }
}

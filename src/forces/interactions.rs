use crate::math::vec2::Vec2;
use crate::scene::{Bodies, BodyId};

use super::ForceCreator;

/// Newtonian gravitational attraction between two bodies:
/// |F| = g * m1 * m2 / r^2, equal and opposite along the line of centers.
///
/// Bodies closer than `min_distance` are treated as exactly `min_distance`
/// apart, so near-overlapping bodies cannot produce a divergent force.
/// Infinite-mass bodies are skipped entirely: their product with g is
/// unbounded and they would not move anyway.
pub struct NewtonianGravity {
    g: f64,
    min_distance: f64,
    watched: [BodyId; 2],
}

impl NewtonianGravity {
    const DEFAULT_MIN_DISTANCE: f64 = 1e-3;

    pub fn new(g: f64, body1: BodyId, body2: BodyId) -> Self {
        NewtonianGravity {
            g,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            watched: [body1, body2],
        }
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }
}

impl ForceCreator for NewtonianGravity {
    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.live_pair_mut(self.watched[0], self.watched[1]) else {
            return;
        };
        let (m1, m2) = (body1.mass(), body2.mass());
        if !m1.is_finite() || !m2.is_finite() {
            return;
        }

        let r = body2.centroid() - body1.centroid();
        let distance = r.magnitude().max(self.min_distance);
        let magnitude = self.g * m1 * m2 / (distance * distance);
        let force = r.normalize() * magnitude;

        body1.add_force(force);
        body2.add_force(-force);
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}

/// Re-applies a fixed force to one body every tick. This is how persistent
/// forces like downward gravity are modeled: accumulators are consumed by
/// every tick, so the force has to be added again each frame.
pub struct ConstantForce {
    force: Vec2,
    watched: [BodyId; 1],
}

impl ConstantForce {
    pub fn new(force: Vec2, body: BodyId) -> Self {
        ConstantForce {
            force,
            watched: [body],
        }
    }
}

impl ForceCreator for ConstantForce {
    fn apply(&mut self, bodies: &mut Bodies) {
        if let Some(body) = bodies.live_by_id_mut(self.watched[0]) {
            body.add_force(self.force);
        }
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}

/// Linear drag opposing a body's velocity: F = -gamma * v.
pub struct Drag {
    gamma: f64,
    watched: [BodyId; 1],
}

impl Drag {
    pub fn new(gamma: f64, body: BodyId) -> Self {
        assert!(gamma >= 0.0, "drag coefficient must be non-negative");
        Drag {
            gamma,
            watched: [body],
        }
    }
}

impl ForceCreator for Drag {
    fn apply(&mut self, bodies: &mut Bodies) {
        if let Some(body) = bodies.live_by_id_mut(self.watched[0]) {
            let force = -body.velocity() * self.gamma;
            body.add_force(force);
        }
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}

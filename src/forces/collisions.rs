use log::debug;

use crate::collision::detection::find_collision;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::scene::{Bodies, BodyId};

use super::ForceCreator;

/// Impulse-based collision response between two bodies.
///
/// On contact, applies equal and opposite impulses along the SAT axis of
/// least penetration: J = (1 + elasticity) * mu * dv, where mu is the
/// reduced mass m1*m2/(m1+m2) (the finite body's mass when the other is
/// immovable) and dv the relative velocity along the axis. The formula is
/// invariant under the axis's sign, so the unspecified SAT axis direction
/// does not matter.
///
/// The response latches per contact: once impulsed, a pair is left alone
/// until the shapes separate and touch again, so resting contact is not
/// re-impulsed every tick.
pub struct PhysicsCollision {
    elasticity: f64,
    watched: [BodyId; 2],
    in_contact: bool,
}

impl PhysicsCollision {
    /// `elasticity` is clamped to [0, 1]: 0 is perfectly inelastic,
    /// 1 perfectly elastic.
    pub fn new(elasticity: f64, body1: BodyId, body2: BodyId) -> Self {
        PhysicsCollision {
            elasticity: elasticity.clamp(0.0, 1.0),
            watched: [body1, body2],
            in_contact: false,
        }
    }
}

impl ForceCreator for PhysicsCollision {
    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.live_pair_mut(self.watched[0], self.watched[1]) else {
            return;
        };

        let info = find_collision(body1, body2);
        if !info.collided {
            self.in_contact = false;
            return;
        }
        if self.in_contact {
            return;
        }
        self.in_contact = true;

        let (m1, m2) = (body1.mass(), body2.mass());
        let reduced_mass = match (m1.is_finite(), m2.is_finite()) {
            (true, true) => m1 * m2 / (m1 + m2),
            (true, false) => m1,
            (false, true) => m2,
            // Two immovable bodies have nothing to exchange.
            (false, false) => return,
        };

        let relative_velocity = (body2.velocity() - body1.velocity()).dot(info.axis);
        let j = reduced_mass * (1.0 + self.elasticity) * relative_velocity;
        let impulse = info.axis * j;
        debug!(
            "collision impulse {:?} between {:?} and {:?}",
            impulse, self.watched[0], self.watched[1]
        );

        body1.add_impulse(impulse);
        body2.add_impulse(-impulse);
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}

/// Marks both bodies for removal the moment they touch. The scene prunes
/// them (and this creator with them) at the tick boundary.
pub struct DestructiveCollision {
    watched: [BodyId; 2],
}

impl DestructiveCollision {
    pub fn new(body1: BodyId, body2: BodyId) -> Self {
        DestructiveCollision {
            watched: [body1, body2],
        }
    }
}

impl ForceCreator for DestructiveCollision {
    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.live_pair_mut(self.watched[0], self.watched[1]) else {
            return;
        };
        if find_collision(body1, body2).collided {
            body1.remove();
            body2.remove();
        }
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}

/// Generic collision handler: invokes a closure with both bodies and the
/// SAT axis on each new contact. Game rules (damage, pickups, level state)
/// hang off this; the closure may mutate either body, including marking one
/// for removal.
pub struct CollisionHandler {
    watched: [BodyId; 2],
    handler: Box<dyn FnMut(&mut Body, &mut Body, Vec2)>,
    in_contact: bool,
}

impl CollisionHandler {
    pub fn new<F>(body1: BodyId, body2: BodyId, handler: F) -> Self
    where
        F: FnMut(&mut Body, &mut Body, Vec2) + 'static,
    {
        CollisionHandler {
            watched: [body1, body2],
            handler: Box::new(handler),
            in_contact: false,
        }
    }
}

impl ForceCreator for CollisionHandler {
    fn apply(&mut self, bodies: &mut Bodies) {
        let Some((body1, body2)) = bodies.live_pair_mut(self.watched[0], self.watched[1]) else {
            return;
        };
        let info = find_collision(body1, body2);
        if !info.collided {
            self.in_contact = false;
            return;
        }
        if !self.in_contact {
            self.in_contact = true;
            (self.handler)(body1, body2, info.axis);
        }
    }

    fn watched(&self) -> &[BodyId] {
        &self.watched
    }
}

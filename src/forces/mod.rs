//! Force creators: per-tick handlers layered on top of the core that apply
//! physics response and game rules to the scene's bodies.

pub mod collisions;
pub mod interactions;

use crate::scene::{Bodies, BodyId};

pub use collisions::{CollisionHandler, DestructiveCollision, PhysicsCollision};
pub use interactions::{ConstantForce, Drag, NewtonianGravity};

/// A handler the scene runs once per tick, in registration order, against
/// its body storage. Implementations accumulate forces/impulses and may
/// mark bodies for removal; actual pruning is the scene's job.
pub trait ForceCreator {
    fn apply(&mut self, bodies: &mut Bodies);

    /// The bodies this creator dereferences. When any of them is pruned,
    /// the scene drops the creator to keep its references from dangling.
    fn watched(&self) -> &[BodyId];
}

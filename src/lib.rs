pub mod math;
pub mod common;
pub mod shapes;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod forces;
pub mod scene;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use common::color::Rgb;
pub use shapes::Polygon;
pub use objects::{Body, BodyInfo, GhostKind, PowerUpKind};
pub use collision::{find_collision, CollisionInfo};
pub use forces::{
    CollisionHandler, ConstantForce, DestructiveCollision, Drag, ForceCreator, NewtonianGravity,
    PhysicsCollision,
};
pub use scene::{Bodies, BodyId, Scene};

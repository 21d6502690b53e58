use crate::math::vec2::Vec2;

/// Result of a collision query. Produced fresh per query, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Whether the two shapes overlap.
    pub collided: bool,
    /// The unit axis of least penetration when `collided` is true; its sign
    /// along the axis is unspecified. Zero when not collided.
    pub axis: Vec2,
}

impl CollisionInfo {
    pub(crate) fn none() -> Self {
        CollisionInfo {
            collided: false,
            axis: Vec2::ZERO,
        }
    }
}

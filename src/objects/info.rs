//! Game-semantic tags attached to bodies.

/// Identifies what a body means to the game layered on top of the physics
/// core. Collision handlers match on this instead of casting opaque
/// pointers; any payload a variant owns is dropped with the body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BodyInfo {
    /// No game meaning attached.
    #[default]
    None,
    /// The player-controlled body.
    User,
    /// Impassable level geometry.
    Wall,
    /// A surface the user can stand on.
    Platform,
    /// A hostile body with a movement behavior.
    Ghost(GhostKind),
    /// A collectible with an effect.
    PowerUp(PowerUpKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostKind {
    /// Moves along a fixed path.
    Patrol,
    /// Tracks the user.
    Chase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    ExtraLife,
    SpeedBoost,
    Shield,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_info_default_is_none() {
        assert_eq!(BodyInfo::default(), BodyInfo::None);
    }

    #[test]
    fn test_body_info_matching() {
        let info = BodyInfo::PowerUp(PowerUpKind::SpeedBoost);
        assert!(matches!(info, BodyInfo::PowerUp(PowerUpKind::SpeedBoost)));
        assert_ne!(info, BodyInfo::PowerUp(PowerUpKind::Shield));
    }
}

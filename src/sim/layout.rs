//! Static scene layout
//!
//! Placement data the orchestration layer feeds the rendering and physics
//! collaborators when the scene is built. The simulation never positions
//! sprites itself; this module is the single source of truth for where
//! everything starts.

use glam::Vec2;

use crate::consts::*;

/// Asset keys understood by the rendering collaborator
pub mod keys {
    pub const SKY: &str = "sky";
    pub const GROUND: &str = "ground";
    pub const STAR: &str = "star";
    pub const BOMB: &str = "bomb";
    pub const DUDE: &str = "dude";
}

/// A static platform placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Sprite center in world coordinates
    pub pos: Vec2,
    /// Sprite scale; the ground slab is a doubled platform sprite
    pub scale: f32,
}

/// The static platform set: one full-width ground slab plus three ledges.
pub const PLATFORMS: [Platform; 4] = [
    Platform {
        pos: Vec2::new(400.0, 568.0),
        scale: 2.0,
    },
    Platform {
        pos: Vec2::new(600.0, 400.0),
        scale: 1.0,
    },
    Platform {
        pos: Vec2::new(50.0, 250.0),
        scale: 1.0,
    },
    Platform {
        pos: Vec2::new(750.0, 220.0),
        scale: 1.0,
    },
];

/// Background image center
pub const SKY_CENTER: Vec2 = Vec2::new(400.0, 300.0);

/// Where the actor body spawns
pub const ACTOR_SPAWN: Vec2 = Vec2::new(ACTOR_SPAWN_X, ACTOR_SPAWN_Y);

/// Initial layout position for collectible slot `i`. The set respawns here
/// as well; gravity drops each body back onto the platforms.
pub fn collectible_home(i: usize) -> Vec2 {
    Vec2::new(
        COLLECTIBLE_ORIGIN_X + COLLECTIBLE_STEP_X * i as f32,
        COLLECTIBLE_DROP_Y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platforms_inside_world() {
        for platform in PLATFORMS {
            assert!(platform.pos.x >= 0.0 && platform.pos.x <= WORLD_WIDTH);
            assert!(platform.pos.y >= 0.0 && platform.pos.y <= WORLD_HEIGHT);
        }
    }

    #[test]
    fn test_ground_slab_is_scaled() {
        assert_eq!(PLATFORMS[0].scale, 2.0);
        assert!(PLATFORMS[1..].iter().all(|p| p.scale == 1.0));
    }

    #[test]
    fn test_collectible_line_fits() {
        let last = collectible_home(COLLECTIBLE_COUNT - 1);
        assert!(last.x < WORLD_WIDTH);
        assert_eq!(collectible_home(0).x, COLLECTIBLE_ORIGIN_X);
        assert_eq!(collectible_home(1).x - collectible_home(0).x, COLLECTIBLE_STEP_X);
    }

    #[test]
    fn test_actor_spawn_above_ground() {
        assert!(ACTOR_SPAWN.y < PLATFORMS[0].pos.y);
    }
}

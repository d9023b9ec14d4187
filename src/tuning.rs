//! Data-driven gameplay balance
//!
//! Every number the controller consumes lives here so independent game
//! instances (and tests) can run different balance without recompiling.
//! Defaults are the canonical arcade values from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal run speed (pixels/sec)
    pub run_speed: f32,
    /// Jump impulse; negative y is up
    pub jump_velocity: f32,
    /// Points per collectible pickup
    pub score_per_collectible: u32,
    /// Size of the collectible arena
    pub collectible_count: usize,
    /// X of the first collectible slot
    pub collectible_origin_x: f32,
    /// Spacing between collectible slots
    pub collectible_step_x: f32,
    /// Y the set respawns at (bodies drop from here)
    pub collectible_drop_y: f32,
    /// Bounce factor range [min, max) drawn per collectible at construction
    pub collectible_bounce_min: f32,
    pub collectible_bounce_max: f32,
    /// Y new hazards spawn at
    pub hazard_spawn_y: f32,
    /// Hazard horizontal launch speed is uniform in [-range, +range]
    pub hazard_speed_range: f32,
    /// Initial downward hazard speed
    pub hazard_drop_speed: f32,
    /// Vertical line splitting the arena into the two spawn halves
    pub arena_midline: f32,
    /// Arena width; spawn ranges are [0, midline) and [midline, width)
    pub world_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: RUN_SPEED,
            jump_velocity: JUMP_VELOCITY,
            score_per_collectible: SCORE_PER_COLLECTIBLE,
            collectible_count: COLLECTIBLE_COUNT,
            collectible_origin_x: COLLECTIBLE_ORIGIN_X,
            collectible_step_x: COLLECTIBLE_STEP_X,
            collectible_drop_y: COLLECTIBLE_DROP_Y,
            collectible_bounce_min: COLLECTIBLE_BOUNCE_MIN,
            collectible_bounce_max: COLLECTIBLE_BOUNCE_MAX,
            hazard_spawn_y: HAZARD_SPAWN_Y,
            hazard_speed_range: HAZARD_SPEED_RANGE,
            hazard_drop_speed: HAZARD_DROP_SPEED,
            arena_midline: ARENA_MIDLINE,
            world_width: WORLD_WIDTH,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults, so a
    /// balance file only needs to name what it overrides.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

//! Star Chase - platformer arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic game-state simulation (score, collectibles, hazards)
//! - `tuning`: Data-driven gameplay balance
//! - `highscores`: Score leaderboard
//!
//! Physics integration, rendering, animation playback, audio output and input
//! polling are external collaborators. The simulation consumes a per-frame
//! keyboard snapshot plus the two overlap callbacks the embedding engine wires
//! up, and answers with velocity/animation updates and [`sim::GameEvent`]s for
//! the engine to apply.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use sim::{GamePhase, GameState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Vertical line splitting the arena into the two hazard-spawn halves
    pub const ARENA_MIDLINE: f32 = 400.0;

    /// Actor defaults
    pub const RUN_SPEED: f32 = 160.0;
    /// Jump impulse (negative y is up)
    pub const JUMP_VELOCITY: f32 = -330.0;
    pub const ACTOR_SPAWN_X: f32 = 100.0;
    pub const ACTOR_SPAWN_Y: f32 = 450.0;
    /// Restitution the physics collaborator applies to the actor body
    pub const ACTOR_BOUNCE: f32 = 0.2;
    /// Tint applied to the actor sprite when a hazard ends the run (0xRRGGBB)
    pub const HIT_TINT: u32 = 0xff0000;

    /// Collectible defaults
    pub const COLLECTIBLE_COUNT: usize = 12;
    pub const SCORE_PER_COLLECTIBLE: u32 = 10;
    /// First slot of the collectible line
    pub const COLLECTIBLE_ORIGIN_X: f32 = 12.0;
    /// Spacing between slots
    pub const COLLECTIBLE_STEP_X: f32 = 70.0;
    /// Respawned collectibles drop from this height
    pub const COLLECTIBLE_DROP_Y: f32 = 0.0;
    /// Per-collectible bounce factor range, drawn once at construction
    pub const COLLECTIBLE_BOUNCE_MIN: f32 = 0.4;
    pub const COLLECTIBLE_BOUNCE_MAX: f32 = 0.8;

    /// Hazard defaults
    pub const HAZARD_SPAWN_Y: f32 = 16.0;
    /// Horizontal launch speed is uniform in [-range, +range]
    pub const HAZARD_SPEED_RANGE: f32 = 200.0;
    /// Initial downward speed
    pub const HAZARD_DROP_SPEED: f32 = 20.0;

    /// Downward gravity the physics collaborator integrates with (pixels/s²)
    pub const GRAVITY_Y: f32 = 300.0;
}

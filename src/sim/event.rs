//! Events emitted toward the engine collaborators.
//!
//! The simulation never touches audio, rendering or physics directly. It
//! buffers these events and the embedding layer drains them once per frame
//! (or once per collision callback) and translates each into engine calls.

use serde::{Deserialize, Serialize};

use super::state::{CollectibleId, HazardId};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Collectible picked up
    Collect,
}

impl SoundEffect {
    /// Asset key understood by the audio collaborator
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::Collect => "collect",
        }
    }
}

/// A command for the embedding layer. Playback is fire-and-forget; the
/// simulation never waits on any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Play a sound effect, non-blocking
    PlaySound(SoundEffect),
    /// Score changed; update the displayed score text
    ScoreChanged { score: u32 },
    /// Collectible consumed; disable and hide its physics body
    CollectiblePicked { id: CollectibleId },
    /// The whole set went inactive and was restored. Re-enable every body at
    /// its `home_x` and the drop height, and let gravity drop them again.
    CollectiblesRespawned,
    /// New hazard; register its body with the physics collaborator
    /// (world-bounds bounce plus platform colliders).
    HazardSpawned { id: HazardId },
    /// Terminal transition: pause the physics simulation and tint the actor
    GameEnded,
}

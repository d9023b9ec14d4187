//! The game-state controller: the three entry points the engine drives.
//!
//! One render loop invokes these synchronously, once per frame for the input
//! snapshot and once per overlap callback for the two collision events. The
//! controller owns score, phase and the collectible/hazard bookkeeping;
//! velocity integration, collision resolution and playback all happen in the
//! engine collaborators, which consume the returned values and the buffered
//! [`GameEvent`]s.

use glam::Vec2;
use rand::Rng;

use super::event::{GameEvent, SoundEffect};
use super::state::{
    Animation, CollectibleId, Facing, GamePhase, GameState, Hazard, HazardId,
};
use crate::consts::HIT_TINT;

/// Keyboard snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    /// Sampled for completeness; the controller ignores it
    pub down: bool,
}

/// Desired actor motion and animation for this frame.
///
/// The embedding layer applies these to the physics body and the animation
/// collaborator; the controller has already mirrored them into its own actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorUpdate {
    /// Horizontal velocity to set on the body
    pub velocity_x: f32,
    /// Upward impulse, present only when jumping off a supporting surface
    pub jump_velocity_y: Option<f32>,
    /// Animation to play, looping per [`Animation::looping`]
    pub animation: Animation,
    /// Sprite mirror state
    pub facing: Facing,
}

/// Outcome of a collectible pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionResult {
    /// Score after the pickup
    pub score: u32,
    /// Newly spawned hazard, for the caller to register with the physics
    /// collaborator. `None` only when the call violated the caller contract
    /// (stale id or post-game-over) and the controller dropped it.
    pub hazard: Option<HazardId>,
    /// Whether this pickup emptied the set and triggered a full respawn
    pub respawned: bool,
}

/// Commands accompanying the Playing → GameOver transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverTransition {
    /// True when the game was already over; nothing changed on this call
    pub already_over: bool,
    /// Pause all physics simulation
    pub freeze_physics: bool,
    /// Tint to apply to the actor sprite (0xRRGGBB)
    pub actor_tint: u32,
    /// Animation to force on the actor
    pub actor_animation: Animation,
}

impl GameState {
    /// Per-frame input handling.
    ///
    /// A pure function of the snapshot: held left/right set the run velocity
    /// and directional animation, neither held stops the actor, and `up` only
    /// jumps while `on_ground` (no mid-air re-jump). There is no hysteresis;
    /// prior frames never influence the output.
    ///
    /// After game over the simulation is frozen and this returns a
    /// zero-velocity idle update without touching the actor.
    pub fn frame(&mut self, input: &FrameInput, on_ground: bool) -> ActorUpdate {
        if self.phase == GamePhase::GameOver {
            return ActorUpdate {
                velocity_x: 0.0,
                jump_velocity_y: None,
                animation: Animation::Idle,
                facing: self.actor.facing,
            };
        }

        let (velocity_x, animation, facing) = if input.left {
            (-self.tuning.run_speed, Animation::Left, Facing::Left)
        } else if input.right {
            (self.tuning.run_speed, Animation::Right, Facing::Right)
        } else {
            (0.0, Animation::Idle, self.actor.facing)
        };

        let jump_velocity_y = (input.up && on_ground).then_some(self.tuning.jump_velocity);

        self.actor.vel.x = velocity_x;
        if let Some(vy) = jump_velocity_y {
            self.actor.vel.y = vy;
        }
        self.actor.animation = animation;
        self.actor.facing = facing;

        ActorUpdate {
            velocity_x,
            jump_velocity_y,
            animation,
            facing,
        }
    }

    /// Overlap callback: the actor touched an active collectible.
    ///
    /// In order: deactivate the collectible, queue the collection sound,
    /// add to the score, respawn the whole set if this emptied it, and
    /// unconditionally spawn one hazard on the half of the arena opposite
    /// `actor_x` (the actor's world X at the moment of contact).
    ///
    /// The physics collaborator only fires overlaps for active bodies, so a
    /// stale or unknown `id` is a caller-contract violation; it is dropped
    /// without effect.
    pub fn collect(&mut self, id: CollectibleId, actor_x: f32) -> CollectionResult {
        if self.phase == GamePhase::GameOver {
            return CollectionResult {
                score: self.score,
                hazard: None,
                respawned: false,
            };
        }

        match self.collectibles.get_mut(id) {
            Some(c) if c.active => c.active = false,
            _ => {
                log::warn!("collect: ignoring stale collectible id {id}");
                return CollectionResult {
                    score: self.score,
                    hazard: None,
                    respawned: false,
                };
            }
        }
        self.events.push(GameEvent::CollectiblePicked { id });
        self.events.push(GameEvent::PlaySound(SoundEffect::Collect));

        self.score += self.tuning.score_per_collectible;
        self.events.push(GameEvent::ScoreChanged { score: self.score });

        let respawned = self.active_collectibles() == 0;
        if respawned {
            self.respawn_collectibles();
        }

        let hazard = self.spawn_hazard(actor_x);

        CollectionResult {
            score: self.score,
            hazard: Some(hazard),
            respawned,
        }
    }

    /// Overlap callback: the actor touched a hazard.
    ///
    /// Idempotent terminal transition. The first call enters GameOver and
    /// returns the command set for the caller; repeated calls are observable
    /// only as `already_over`.
    pub fn hazard_touched(&mut self) -> GameOverTransition {
        let already_over = self.phase == GamePhase::GameOver;
        if !already_over {
            self.phase = GamePhase::GameOver;
            self.actor.vel = Vec2::ZERO;
            self.actor.animation = Animation::Idle;
            log::info!("game over with score {}", self.score);
            self.events.push(GameEvent::GameEnded);
        }

        GameOverTransition {
            already_over,
            freeze_physics: true,
            actor_tint: HIT_TINT,
            actor_animation: Animation::Idle,
        }
    }

    /// Restore every collectible and let the engine drop the set again from
    /// the initial layout.
    fn respawn_collectibles(&mut self) {
        for c in &mut self.collectibles {
            c.active = true;
        }
        log::info!(
            "collectible set exhausted, respawning {} at y={}",
            self.collectibles.len(),
            self.tuning.collectible_drop_y
        );
        self.events.push(GameEvent::CollectiblesRespawned);
    }

    /// Spawn one hazard near the top of the arena, on the half opposite the
    /// actor so it is never immediately on top of the player.
    fn spawn_hazard(&mut self, actor_x: f32) -> HazardId {
        let midline = self.tuning.arena_midline;
        let x = if actor_x < midline {
            self.rng.random_range(midline..self.tuning.world_width)
        } else {
            self.rng.random_range(0.0..midline)
        };
        let vx = self
            .rng
            .random_range(-self.tuning.hazard_speed_range..=self.tuning.hazard_speed_range);

        let id = self.next_entity_id();
        log::debug!("hazard {id} spawned at x={x:.1} (actor at x={actor_x:.1})");
        self.hazards.push(Hazard {
            id,
            pos: Vec2::new(x, self.tuning.hazard_spawn_y),
            vel: Vec2::new(vx, self.tuning.hazard_drop_speed),
        });
        self.events.push(GameEvent::HazardSpawned { id });
        id
    }
}

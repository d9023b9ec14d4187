//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//! - Driven synchronously by one external render loop
//!
//! The engine collaborators (arcade physics, animation playback, audio,
//! keyboard polling) sit on the other side of [`GameEvent`] and the values
//! returned by the controller entry points in [`controller`].

pub mod controller;
pub mod event;
pub mod layout;
pub mod state;

pub use controller::{ActorUpdate, CollectionResult, FrameInput, GameOverTransition};
pub use event::{GameEvent, SoundEffect};
pub use state::{
    Actor, Animation, Collectible, CollectibleId, Facing, GamePhase, GameState, Hazard, HazardId,
};

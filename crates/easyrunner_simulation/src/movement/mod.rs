//! Movement domain: граница с motion applier'ом (host engine)
//!
//! Содержит:
//! - PendingMovementInput (накопленный за frame movement input + jump)
//! - apply_jump_intents (JumpIntent → jump_requested)
//!
//! Интеграцию в velocity/position делает host engine, здесь только
//! accumulate + consume (семантика AddMovementInput / ConsumeMovementInputVector).

use bevy::prelude::*;

pub mod components;
pub mod systems;

pub use components::*;
pub use systems::*;

use crate::input::JumpIntent;
use crate::SimulationSet;

/// Movement Plugin: jump input до stamina (порядок в SimulationSet)
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpIntent>()
            .add_systems(Update, apply_jump_intents.in_set(SimulationSet::Movement));
    }
}

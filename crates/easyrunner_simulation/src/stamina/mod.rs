//! Stamina domain: stamina-gated ускорение/торможение runner'а
//!
//! Содержит:
//! - StaminaGatedMover (два latched pool'а + apply_movement_intent)
//! - ExhaustionListeners (синхронные подписчики, порядок регистрации)
//! - RunnerExhausted (ECS event)
//! - apply_movement_intents (система)
//!
//! Регенерации нет: закрытый gate открывает только владелец через reset().

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod listeners;
pub mod systems;

#[cfg(test)]
mod mover_tests;

pub use components::*;
pub use events::*;
pub use listeners::*;
pub use systems::*;

use crate::config::RunnerConfig;
use crate::input::MovementIntent;
use crate::SimulationSet;

/// Stamina Plugin
///
/// Регистрирует RunnerExhausted и apply_movement_intents в Update
/// (input sample приходит per frame, не в FixedUpdate).
pub struct StaminaPlugin;

impl Plugin for StaminaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerConfig>()
            .add_event::<MovementIntent>()
            .add_event::<RunnerExhausted>()
            .add_systems(Update, apply_movement_intents.in_set(SimulationSet::Stamina));
    }
}

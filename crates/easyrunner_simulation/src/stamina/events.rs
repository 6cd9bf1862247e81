//! Stamina events

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Направление движения (знак intent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
pub enum MoveDirection {
    /// intent > 0, тратит speed-up stamina
    Forward,
    /// intent < 0, тратит slow-down stamina
    Backward,
}

/// Payload для подписчиков StaminaGatedMover (только направление)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustionEvent {
    pub direction: MoveDirection,
}

/// Event: у runner'а закончилась stamina в одном из направлений
///
/// Генерируется:
/// - apply_movement_intents, ровно один раз на направление
///
/// Обрабатывается:
/// - signal_game_over_on_exhaustion (hud)
/// - любые внешние системы (звук, аналитика)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerExhausted {
    pub entity: Entity,
    pub direction: MoveDirection,
}

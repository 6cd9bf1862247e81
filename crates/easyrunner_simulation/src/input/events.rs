//! Runner input events
//!
//! Пишутся input source'ом (один sample на frame), читаются ECS системами.

use bevy::prelude::*;

/// Одномерный movement intent sample
///
/// # Fields
/// - `value`: > 0 вперёд (speed up), < 0 назад (slow down), 0 нет input
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MovementIntent {
    pub entity: Entity,
    pub value: f32,
}

/// Pause action (клавиша паузы)
///
/// Превращается в HudSignal::PauseGame в hud::forward_pause_requests.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseRequested {
    pub entity: Entity,
}

/// Event: jump action (нажатие / отпускание)
///
/// Генерируется:
/// - input source: `pressed = true` на нажатие, `false` на отпускание
///
/// Обрабатывается:
/// - movement::apply_jump_intents → PendingMovementInput::jump_requested
///
/// Сам прыжок (вертикальная скорость, проверка земли) делает host engine.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpIntent {
    pub entity: Entity,
    pub pressed: bool,
}

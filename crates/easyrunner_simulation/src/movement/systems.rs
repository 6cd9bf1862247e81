//! Movement systems

use bevy::prelude::*;

use super::components::PendingMovementInput;
use crate::input::JumpIntent;
use crate::logger::log_warning;

/// Система: JumpIntent → PendingMovementInput::jump_requested
///
/// Нажатие держит флаг (как Jump), отпускание снимает (как StopJumping).
/// Stamina на прыжок не тратится.
pub fn apply_jump_intents(
    mut intents: EventReader<JumpIntent>,
    mut pending: Query<&mut PendingMovementInput>,
) {
    for intent in intents.read() {
        let Ok(mut input) = pending.get_mut(intent.entity) else {
            log_warning(&format!(
                "JumpIntent for {:?} ignored: entity has no PendingMovementInput",
                intent.entity
            ));
            continue;
        };

        input.jump_requested = intent.pressed;
    }
}

//! Stamina systems (ECS обвязка вокруг StaminaGatedMover)

use bevy::prelude::*;

use super::components::{StaminaGatedMover, StaminaReadout};
use super::events::{MoveDirection, RunnerExhausted};
use crate::config::RunnerConfig;
use crate::input::{ControlRotation, MovementIntent};
use crate::logger::{log, log_info, log_warning};
use crate::movement::PendingMovementInput;

/// Система: MovementIntent → StaminaGatedMover → movement input
///
/// # Архитектура
/// - Читает: MovementIntent (input source, один sample на frame)
/// - Пишет: PendingMovementInput (motion applier), StaminaReadout (HUD),
///   RunnerExhausted (один раз на направление)
///
/// Forward direction берётся из ControlRotation. Без контроллера (нет
/// ControlRotation) intent пропускается целиком: stamina не тратится.
/// Intent для entity без mover'а пропускается с warning.
pub fn apply_movement_intents(
    mut intents: EventReader<MovementIntent>,
    mut exhausted_events: EventWriter<RunnerExhausted>,
    mut movers: Query<(
        &mut StaminaGatedMover,
        Option<&ControlRotation>,
        Option<&mut PendingMovementInput>,
        Option<&mut StaminaReadout>,
    )>,
    config: Res<RunnerConfig>,
) {
    for intent in intents.read() {
        let Ok((mut mover, rotation, pending, readout)) = movers.get_mut(intent.entity) else {
            log_warning(&format!(
                "MovementIntent for {:?} ignored: entity has no StaminaGatedMover",
                intent.entity
            ));
            continue;
        };

        let Some(rotation) = rotation else {
            log(&format!(
                "MovementIntent for {:?} ignored: no controller (ControlRotation)",
                intent.entity
            ));
            continue;
        };

        let outcome = mover.apply_movement_intent(intent.value);

        if let Some(contribution) = outcome.contribution {
            let forward = rotation.forward();
            if let Some(mut pending) = pending {
                pending.add(forward, contribution.scale);
            }

            if config.log_stamina_readouts {
                let (label, value) = match contribution.direction {
                    MoveDirection::Forward => ("Speed Up", outcome.speed_up_stamina),
                    MoveDirection::Backward => ("Slow Down", outcome.slow_down_stamina),
                };
                log(&format!("Current {} Stamina: {:.6}", label, value));
            }
        }

        if let Some(direction) = outcome.exhausted {
            log_info(&format!("Runner {:?} exhausted ({:?})", intent.entity, direction));
            exhausted_events.write(RunnerExhausted {
                entity: intent.entity,
                direction,
            });
        }

        if let Some(mut readout) = readout {
            readout.last = Some(outcome);
        }
    }
}

//! Stamina-gated movement: компоненты и сама механика.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::events::{ExhaustionEvent, MoveDirection};
use super::listeners::{ExhaustionListeners, ListenerId};
use crate::config::MoverConfig;

/// Один stamina pool с latched gate
///
/// Инвариант: после закрытия gate `current` больше не меняется (до reset).
/// `current` может уйти ниже нуля максимум на один шаг depletion:
/// gate закрывается по `< 0`, не по `<= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaminaPool {
    pub(crate) current: f32,
    pub(crate) max: f32,
    pub(crate) available: bool,
}

impl StaminaPool {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            available: true,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Тратит `amount`, возвращает true если ЭТОТ вызов закрыл gate
    fn deplete(&mut self, amount: f32) -> bool {
        self.current -= amount;
        if self.current < 0.0 {
            self.available = false;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.current = self.max;
        self.available = true;
    }
}

/// Вклад в движение от одного принятого sample
///
/// `scale` передаётся motion applier'у вместе с forward direction
/// (как AddMovementInput(direction, scale)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationContribution {
    pub direction: MoveDirection,
    pub scale: f32,
}

/// Результат apply_movement_intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementOutcome {
    /// None: zero intent или направление уже exhausted
    pub contribution: Option<AccelerationContribution>,
    pub speed_up_stamina: f32,
    pub slow_down_stamina: f32,
    /// Some только на вызове, который закрыл gate
    pub exhausted: Option<MoveDirection>,
}

/// Stamina-gated mover: ускорение вперёд / торможение назад за stamina
///
/// Два независимых pool'а:
/// - speed_up: тратится при intent > 0
/// - slow_down: тратится при intent < 0
///
/// Gate каждого направления latched: Available → Exhausted, обратно только
/// через `reset()` владельцем. Регенерации нет.
#[derive(Component, Debug)]
pub struct StaminaGatedMover {
    pub forward_acceleration: f32,
    pub backward_acceleration: f32,
    depletion_per_sample: f32,
    speed_up: StaminaPool,
    slow_down: StaminaPool,
    listeners: ExhaustionListeners,
}

impl Default for StaminaGatedMover {
    fn default() -> Self {
        Self::new(&MoverConfig::default())
    }
}

impl StaminaGatedMover {
    pub fn new(config: &MoverConfig) -> Self {
        Self {
            forward_acceleration: config.forward_acceleration,
            backward_acceleration: config.backward_acceleration,
            depletion_per_sample: config.depletion_per_sample,
            speed_up: StaminaPool::new(config.speed_up_stamina_max),
            slow_down: StaminaPool::new(config.slow_down_stamina_max),
            listeners: ExhaustionListeners::default(),
        }
    }

    pub fn speed_up(&self) -> &StaminaPool {
        &self.speed_up
    }

    pub fn slow_down(&self) -> &StaminaPool {
        &self.slow_down
    }

    pub fn speed_up_stamina(&self) -> f32 {
        self.speed_up.current
    }

    pub fn slow_down_stamina(&self) -> f32 {
        self.slow_down.current
    }

    pub fn can_speed_up(&self) -> bool {
        self.speed_up.available
    }

    pub fn can_slow_down(&self) -> bool {
        self.slow_down.available
    }

    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&ExhaustionEvent) + Send + Sync + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Обрабатывает один movement intent sample
    ///
    /// 1. intent > 0 и speed_up открыт → forward contribution, speed_up -= depletion
    /// 2. intent < 0 и slow_down открыт → backward contribution, slow_down -= depletion
    /// 3. иначе ничего не меняется (zero, NaN, закрытое направление)
    ///
    /// Если pool ушёл ниже нуля, gate закрывается и подписчики получают
    /// ExhaustionEvent синхронно, до возврата из функции.
    pub fn apply_movement_intent(&mut self, intent: f32) -> MovementOutcome {
        let contribution = if intent > 0.0 && self.speed_up.available {
            AccelerationContribution {
                direction: MoveDirection::Forward,
                scale: self.forward_acceleration,
            }
        } else if intent < 0.0 && self.slow_down.available {
            AccelerationContribution {
                direction: MoveDirection::Backward,
                scale: self.backward_acceleration,
            }
        } else {
            return self.outcome(None, None);
        };

        let depletion = self.depletion_per_sample;
        let pool = match contribution.direction {
            MoveDirection::Forward => &mut self.speed_up,
            MoveDirection::Backward => &mut self.slow_down,
        };

        let exhausted = pool.deplete(depletion).then_some(contribution.direction);
        if let Some(direction) = exhausted {
            self.listeners.notify(&ExhaustionEvent { direction });
        }

        self.outcome(Some(contribution), exhausted)
    }

    /// Полный reset обоих pool'ов (ответственность владельца, механика сама не вызывает)
    pub fn reset(&mut self) {
        self.speed_up.reset();
        self.slow_down.reset();
    }

    fn outcome(
        &self,
        contribution: Option<AccelerationContribution>,
        exhausted: Option<MoveDirection>,
    ) -> MovementOutcome {
        MovementOutcome {
            contribution,
            speed_up_stamina: self.speed_up.current,
            slow_down_stamina: self.slow_down.current,
            exhausted,
        }
    }
}

/// Последний MovementOutcome runner'а (для HUD / debug overlay)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StaminaReadout {
    pub last: Option<MovementOutcome>,
}

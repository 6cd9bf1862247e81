//! Movement компоненты

use bevy::prelude::*;

/// Movement input, накопленный за текущий frame
///
/// - apply_movement_intents добавляет `forward * scale` за каждый принятый sample
/// - apply_jump_intents держит `jump_requested`, пока jump зажат
/// - host engine забирает вектор через `consume()` и интегрирует в физику,
///   `jump_requested` читает сам (consume его не трогает)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PendingMovementInput {
    pub vector: Vec3,
    pub jump_requested: bool,
}

impl PendingMovementInput {
    pub fn add(&mut self, direction: Vec3, scale: f32) {
        self.vector += direction * scale;
    }

    /// Возвращает накопленный вектор и обнуляет его
    pub fn consume(&mut self) -> Vec3 {
        std::mem::take(&mut self.vector)
    }

    pub fn is_zero(&self) -> bool {
        self.vector == Vec3::ZERO
    }
}

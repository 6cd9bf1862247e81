//! Input компоненты

use bevy::prelude::*;

/// Control rotation контроллера (камеры), радианы
///
/// Для движения используется только yaw: pitch/roll не должны наклонять
/// forward direction в пол/небо.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ControlRotation {
    pub yaw: f32,
    /// Только для камеры, на forward direction не влияет
    pub pitch: f32,
}

impl ControlRotation {
    pub fn from_yaw(yaw: f32) -> Self {
        Self { yaw, pitch: 0.0 }
    }

    /// Unit forward на плоскости XZ (Bevy forward = -Z при yaw = 0)
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::NEG_Z
    }
}

//! Runner configuration
//!
//! Все tunable параметры персонажа в одном Resource:
//! - mover: ускорение/торможение + stamina pools
//! - HUD: превращать ли exhaustion в game over
//! - game mode: default pawn class
//!
//! Defaults совпадают с исходным персонажем (0.25 / -0.74 / 100 / 0.1).
//! Загрузка из JSON: отсутствующие поля берутся из defaults.

use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ускорение вперёд за один принятый sample (scale для movement input)
pub const DEFAULT_FORWARD_ACCELERATION: f32 = 0.25;
/// Торможение назад за один принятый sample (отрицательный scale)
pub const DEFAULT_BACKWARD_ACCELERATION: f32 = -0.74;
/// Максимум speed-up и slow-down stamina
pub const DEFAULT_STAMINA_MAX: f32 = 100.0;
/// Сколько stamina съедает один принятый sample
pub const STAMINA_DEPLETION_PER_SAMPLE: f32 = 0.1;
/// Blueprint персонажа, который game mode спавнит по умолчанию
pub const DEFAULT_PAWN_CLASS: &str = "/Game/ThirdPerson/Blueprints/BP_ThirdPersonCharacter";

/// Ошибки загрузки конфига
///
/// Сама механика ошибок не имеет, fallible только чтение/валидация.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read runner config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse runner config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid runner config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Параметры StaminaGatedMover
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    pub forward_acceleration: f32,
    pub backward_acceleration: f32,
    pub speed_up_stamina_max: f32,
    pub slow_down_stamina_max: f32,
    pub depletion_per_sample: f32,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            forward_acceleration: DEFAULT_FORWARD_ACCELERATION,
            backward_acceleration: DEFAULT_BACKWARD_ACCELERATION,
            speed_up_stamina_max: DEFAULT_STAMINA_MAX,
            slow_down_stamina_max: DEFAULT_STAMINA_MAX,
            depletion_per_sample: STAMINA_DEPLETION_PER_SAMPLE,
        }
    }
}

impl MoverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("mover.speed_up_stamina_max", self.speed_up_stamina_max)?;
        ensure_positive("mover.slow_down_stamina_max", self.slow_down_stamina_max)?;
        ensure_positive("mover.depletion_per_sample", self.depletion_per_sample)?;

        if !self.forward_acceleration.is_finite() || self.forward_acceleration < 0.0 {
            return Err(ConfigError::Invalid {
                field: "mover.forward_acceleration",
                reason: format!("expected finite value >= 0, got {}", self.forward_acceleration),
            });
        }
        if !self.backward_acceleration.is_finite() || self.backward_acceleration > 0.0 {
            return Err(ConfigError::Invalid {
                field: "mover.backward_acceleration",
                reason: format!("expected finite value <= 0, got {}", self.backward_acceleration),
            });
        }

        Ok(())
    }
}

/// Главный конфиг симуляции (Resource)
///
/// SimulationPlugin делает `init_resource`, так что вставленный заранее
/// конфиг (например из файла) не перезаписывается.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub mover: MoverConfig,
    /// Exhaustion → HudSignal::DisplayGameOverScreen
    pub game_over_on_exhaustion: bool,
    /// Debug-лог stamina после каждого принятого sample (вместо on-screen print)
    pub log_stamina_readouts: bool,
    pub default_pawn: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            mover: MoverConfig::default(),
            game_over_on_exhaustion: true,
            log_stamina_readouts: true,
            default_pawn: DEFAULT_PAWN_CLASS.to_string(),
        }
    }
}

impl RunnerConfig {
    /// Парсит JSON и валидирует результат
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Читает JSON конфиг с диска
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mover.validate()?;

        if self.default_pawn.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_pawn",
                reason: "pawn class path must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected finite value > 0, got {}", value),
        })
    }
}

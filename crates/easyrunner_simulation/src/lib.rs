//! EasyRunner Simulation Core
//!
//! ECS-симуляция на Bevy 0.16 для third-person runner'а.
//!
//! Ответственность ECS:
//! - stamina-gated ускорение/торможение (StaminaGatedMover)
//! - exhaustion → pause/game over сигналы для HUD
//! - выбор и спавн default pawn
//!
//! Host engine (вне crate): физика, камера, рендер, анимации, UI.
//! Граница: MovementIntent на входе, PendingMovementInput + HudSignal на выходе.

use bevy::prelude::*;

// Публичные модули
pub mod config;
pub mod game_mode;
pub mod hud;
pub mod input;
pub mod logger;
pub mod movement;
pub mod stamina;

// Re-export базовых типов для удобства
pub use config::{ConfigError, MoverConfig, RunnerConfig};
pub use game_mode::{spawn_runner, GameMode, GameModePlugin, PawnClass, RunnerCharacter};
pub use hud::{HudBridge, HudPlugin, HudSignal, WorldToHud};
pub use input::{ControlRotation, JumpIntent, MovementIntent, PauseRequested, RunnerInputPlugin};
pub use movement::{MovementPlugin, PendingMovementInput};
pub use stamina::{
    AccelerationContribution, ExhaustionEvent, ListenerId, MoveDirection, MovementOutcome,
    RunnerExhausted, StaminaGatedMover, StaminaPlugin, StaminaReadout,
};

/// Порядок в Update: jump input, stamina (читает movement input), потом HUD (читает exhaustion)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Movement,
    Stamina,
    Hud,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// RunnerConfig вставляется через `init_resource`: если конфиг уже вставлен
/// (например загружен из файла), он сохраняется.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerConfig>()
            .configure_sets(
                Update,
                (SimulationSet::Movement, SimulationSet::Stamina, SimulationSet::Hud).chain(),
            )
            .add_plugins((
                RunnerInputPlugin,
                MovementPlugin,
                StaminaPlugin,
                HudPlugin,
                GameModePlugin,
            ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins);

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Компоненты сортируются по Entity index и сериализуются через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

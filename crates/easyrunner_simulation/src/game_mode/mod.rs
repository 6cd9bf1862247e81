//! Game mode: выбор default pawn и его спавн
//!
//! Чистая конфигурация: game mode знает только путь к pawn class,
//! визуал/коллизию по этому пути поднимает host engine.

use bevy::prelude::*;

use crate::config::{MoverConfig, RunnerConfig};
use crate::input::ControlRotation;
use crate::logger::log_info;
use crate::movement::PendingMovementInput;
use crate::stamina::{StaminaGatedMover, StaminaReadout};

/// Путь к pawn class (например Blueprint asset)
#[derive(Component, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PawnClass(pub String);

impl PawnClass {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Marker component для player-controlled runner'а
///
/// Required Components: mover + input/readout компоненты добавляются автоматически.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(StaminaGatedMover, ControlRotation, PendingMovementInput, StaminaReadout)]
pub struct RunnerCharacter;

/// Resource: какой pawn спавнить по умолчанию
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameMode {
    pub default_pawn: PawnClass,
}

impl GameMode {
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self {
            default_pawn: PawnClass::new(config.default_pawn.clone()),
        }
    }
}

/// Spawn helper для runner'а
///
/// Mover строится из `mover` (а не из Default), остальное через Required Components.
pub fn spawn_runner(commands: &mut Commands, pawn_class: PawnClass, mover: &MoverConfig) -> Entity {
    commands
        .spawn((RunnerCharacter, pawn_class, StaminaGatedMover::new(mover)))
        .id()
}

/// Startup система: спавнит default pawn, если runner'а ещё нет
pub fn spawn_default_pawn(
    mut commands: Commands,
    game_mode: Res<GameMode>,
    config: Res<RunnerConfig>,
    existing: Query<(), With<RunnerCharacter>>,
) {
    if !existing.is_empty() {
        return;
    }

    let entity = spawn_runner(&mut commands, game_mode.default_pawn.clone(), &config.mover);
    log_info(&format!(
        "Spawned default pawn {:?} as {}",
        entity,
        game_mode.default_pawn.path()
    ));
}

pub struct GameModePlugin;

impl Plugin for GameModePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerConfig>();

        if !app.world().contains_resource::<GameMode>() {
            let game_mode = GameMode::from_config(app.world().resource::<RunnerConfig>());
            app.insert_resource(game_mode);
        }

        app.add_systems(Startup, spawn_default_pawn);
    }
}

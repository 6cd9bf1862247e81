//! HUD signaling: граница world → HUD (pause / game over)
//!
//! Presentation layer (host engine UI) реализует `WorldToHud`, симуляция
//! только вызывает два hook'а через HudBridge. Рендер UI вне этого crate.
//!
//! ```text
//! PauseRequested ──► forward_pause_requests ──┐
//!                                             ├─► HudSignal ─► dispatch_hud_signals ─► WorldToHud
//! RunnerExhausted ─► signal_game_over ────────┘
//! ```

use bevy::prelude::*;

use crate::config::RunnerConfig;
use crate::input::PauseRequested;
use crate::logger::{log, log_info};
use crate::stamina::RunnerExhausted;
use crate::SimulationSet;

/// Контракт presentation layer'а: два hook'а без аргументов
pub trait WorldToHud: Send + Sync {
    fn pause_game(&mut self);
    fn display_game_over_screen(&mut self);
}

/// Сигнал для HUD
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudSignal {
    PauseGame,
    DisplayGameOverScreen,
}

/// Resource: подключённый HUD (или никакого, в headless)
#[derive(Resource, Default)]
pub struct HudBridge {
    hud: Option<Box<dyn WorldToHud>>,
}

impl HudBridge {
    pub fn new(hud: impl WorldToHud + 'static) -> Self {
        Self {
            hud: Some(Box::new(hud)),
        }
    }

    pub fn attach(&mut self, hud: impl WorldToHud + 'static) {
        self.hud = Some(Box::new(hud));
    }

    pub fn detach(&mut self) {
        self.hud = None;
    }

    pub fn is_attached(&self) -> bool {
        self.hud.is_some()
    }

    /// false если HUD не подключён (сигнал теряется)
    pub fn dispatch(&mut self, signal: HudSignal) -> bool {
        let Some(hud) = self.hud.as_mut() else {
            return false;
        };

        match signal {
            HudSignal::PauseGame => hud.pause_game(),
            HudSignal::DisplayGameOverScreen => hud.display_game_over_screen(),
        }
        true
    }
}

/// Система: PauseRequested → HudSignal::PauseGame
pub fn forward_pause_requests(
    mut requests: EventReader<PauseRequested>,
    mut signals: EventWriter<HudSignal>,
) {
    for _ in requests.read() {
        signals.write(HudSignal::PauseGame);
    }
}

/// Система: RunnerExhausted → HudSignal::DisplayGameOverScreen
///
/// Выключается через RunnerConfig::game_over_on_exhaustion.
pub fn signal_game_over_on_exhaustion(
    mut exhausted: EventReader<RunnerExhausted>,
    mut signals: EventWriter<HudSignal>,
    config: Res<RunnerConfig>,
) {
    for event in exhausted.read() {
        if !config.game_over_on_exhaustion {
            continue;
        }

        log_info(&format!(
            "Game over: {:?} ran out of {:?} stamina",
            event.entity, event.direction
        ));
        signals.write(HudSignal::DisplayGameOverScreen);
    }
}

/// Система: HudSignal → WorldToHud hooks
pub fn dispatch_hud_signals(mut signals: EventReader<HudSignal>, mut bridge: ResMut<HudBridge>) {
    for signal in signals.read() {
        if !bridge.dispatch(*signal) {
            log(&format!("{:?} dropped: no HUD attached", signal));
        }
    }
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunnerConfig>()
            .init_resource::<HudBridge>()
            .add_event::<HudSignal>()
            .add_event::<PauseRequested>()
            .add_event::<RunnerExhausted>()
            .add_systems(
                Update,
                (
                    forward_pause_requests,
                    signal_game_over_on_exhaustion,
                    dispatch_hud_signals,
                )
                    .chain()
                    .in_set(SimulationSet::Hud),
            );
    }
}

//! Headless симуляция EasyRunner
//!
//! Спавнит default pawn и жмёт "вперёд" каждый frame, пока не кончится
//! speed-up stamina. Опционально: путь к JSON конфигу первым аргументом.

use std::process::ExitCode;

use bevy::prelude::*;
use easyrunner_simulation::logger::{log_error, log_info, set_log_level, LogLevel};
use easyrunner_simulation::{
    create_headless_app, MovementIntent, RunnerCharacter, RunnerConfig, SimulationPlugin,
    StaminaGatedMover, StaminaReadout,
};

const MAX_FRAMES: usize = 5000;

fn main() -> ExitCode {
    let mut app = create_headless_app();
    set_log_level(LogLevel::Info);

    let mut config = match std::env::args().nth(1) {
        Some(path) => match RunnerConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&format!("Cannot load config {}: {}", path, err));
                return ExitCode::FAILURE;
            }
        },
        None => RunnerConfig::default(),
    };
    config.log_stamina_readouts = false; // Печатаем сами, раз в 100 frames

    log_info(&format!("Starting EasyRunner headless simulation ({:?})", config.mover));

    app.insert_resource(config).add_plugins(SimulationPlugin);
    app.update(); // Startup: spawn default pawn

    let Some(runner) = app
        .world_mut()
        .query_filtered::<Entity, With<RunnerCharacter>>()
        .iter(app.world())
        .next()
    else {
        log_error("Default pawn was not spawned");
        return ExitCode::FAILURE;
    };

    for frame in 0..MAX_FRAMES {
        app.world_mut().send_event(MovementIntent {
            entity: runner,
            value: 1.0,
        });
        app.update();

        let world = app.world();
        let Some(mover) = world.get::<StaminaGatedMover>(runner) else {
            break;
        };

        if frame % 100 == 0 {
            if let Some(outcome) = world.get::<StaminaReadout>(runner).and_then(|r| r.last) {
                log_info(&format!(
                    "Frame {}: speed up {:.3}, slow down {:.3}",
                    frame, outcome.speed_up_stamina, outcome.slow_down_stamina
                ));
            }
        }

        if !mover.can_speed_up() {
            log_info(&format!("Runner exhausted after {} forward samples", frame + 1));
            break;
        }
    }

    log_info("Simulation complete!");
    ExitCode::SUCCESS
}

//! Runner input module (граница с input source)
//!
//! # Архитектура
//!
//! ```text
//! Platform input mapping (host engine)
//!     ↓
//! MovementIntent / JumpIntent / PauseRequested (ECS events) - events.rs
//!     ↓
//! stamina::apply_movement_intents / movement::apply_jump_intents / hud::forward_pause_requests
//! ```
//!
//! Forward direction считается из ControlRotation (components.rs), только yaw.

use bevy::prelude::*;

pub mod components;
pub mod events;

pub use components::*;
pub use events::*;

/// Регистрирует input events
pub struct RunnerInputPlugin;

impl Plugin for RunnerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MovementIntent>()
            .add_event::<JumpIntent>()
            .add_event::<PauseRequested>();
    }
}

//! Переработка: машины, уничтожающие и расчленяющие entity в приёмнике
//!
//! Порядок выполнения (FixedUpdate, последовательно):
//! 1. detect_intake_contacts — новые пересечения с приёмным объёмом
//! 2. handle_intake_contacts — реакция на вход: переработка/расчленение
//! 3. process_suicides — out-of-band действие игрока, без гейтов
//! 4. sweep_recyclers — ревизия working set + протяжка груза
//!
//! Все системы — до интеграции velocity, чтобы nudge применялся в тот же тик.

use bevy::prelude::*;

pub mod systems;


pub use systems::{
    can_move, can_run, detect_intake_contacts, handle_intake_contacts, process_suicides,
    sweep_recyclers, IntakeContact,
};

use crate::chat::{SuicideCompleted, SuicideIntent};

pub struct RecyclingPlugin;

impl Plugin for RecyclingPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<IntakeContact>()
            .add_event::<SuicideIntent>()
            .add_event::<SuicideCompleted>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (
                detect_intake_contacts,
                handle_intake_contacts,
                process_suicides,
                sweep_recyclers,
            )
                .chain() // Последовательное выполнение
                .before(crate::physics::integrate_velocity_to_transform),
        );
    }
}

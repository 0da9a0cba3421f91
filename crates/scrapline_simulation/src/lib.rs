//! SCRAPLINE Simulation Core
//!
//! ECS-симуляция станции на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (game state, машины, правила переработки)
//! - Tactical layer (рендер, полный physics step) живёт снаружи и
//!   синхронизируется по компонентам (Collider/Velocity как данные)

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod chat;
pub mod components;
pub mod conveyor;
pub mod logger;
pub mod physics;
pub mod power;
pub mod recycling;

// Re-export базовых компонентов для удобства
pub use chat::{ChatPlugin, Popup, PopupScope, SuicideCompleted, SuicideIntent, SuicideKind};
pub use components::*;
pub use conveyor::{convey, conveyed_target, Conveyor, BELT_SPEED, CENTERING_RATE};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};
pub use physics::PhysicsPlugin;
pub use power::{is_powered, PowerReceiver};
pub use recycling::{IntakeContact, RecyclingPlugin};

/// Частота simulation tick (FixedUpdate)
pub const SIMULATION_TICK_HZ: f64 = 64.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 64Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_TICK_HZ))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            // Подсистемы (ECS strategic layer)
            .add_plugins((ChatPlugin, PhysicsPlugin, RecyclingPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_TICK_HZ));

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Упрощённый формат: Entity index + Debug-представление компонента,
/// отсортировано по Entity ID.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

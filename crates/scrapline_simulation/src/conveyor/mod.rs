//! Conveyed motion: машины и ленты тянут груз через себя
//!
//! Архитектура:
//! - Velocity (rapier-компонент) как хранилище скорости
//! - Custom velocity integration (см. physics), не Rapier forces
//! - Груз прижимается к центру машины: drive вдоль направления ленты
//!   минус centering по offset от центра

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

/// Маркер: entity сама является конвейером
///
/// Конвейеры не возят друг друга.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Conveyor;

/// Скорость ленты (м/с)
pub const BELT_SPEED: f32 = 2.0;

/// Насколько сильно груз стягивается к центру машины (1/с)
pub const CENTERING_RATE: f32 = 4.0;

/// Скорость выхода на целевую скорость (1/с); blend = dt * rate, clamp 1.0
pub const APPROACH_RATE: f32 = 16.0;

/// Целевая скорость груза: вдоль ленты, с коррекцией на offset от центра
///
/// Равновесие по оси движения — чуть впереди центра, по остальным осям —
/// в центре: груз остаётся прижатым к машине, физика его не выталкивает.
pub fn conveyed_target(direction: Vec3, offset: Vec3) -> Vec3 {
    direction * BELT_SPEED - offset * CENTERING_RATE
}

/// Непрерывный nudge: подводит скорость груза к целевой
///
/// Величина шага масштабируется elapsed tick time.
pub fn convey(velocity: &mut Velocity, direction: Vec3, frame_time: f32, offset: Vec3) {
    let target = conveyed_target(direction, offset);
    let blend = (frame_time * APPROACH_RATE).min(1.0);
    velocity.linvel = velocity.linvel.lerp(target, blend);
}

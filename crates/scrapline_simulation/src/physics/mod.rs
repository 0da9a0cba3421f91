//! Упрощённая физика strategic layer
//!
//! Rapier-компоненты (RigidBody, Velocity, Collider) — данные, авторитетный
//! physics step — на tactical layer. Здесь только прямая интеграция
//! velocity → Transform, чтобы headless-симуляция двигала entity сама.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{RigidBody, Velocity};

/// Система интеграции velocity → Transform (headless режим, без Rapier step)
///
/// Fixed-тела не двигаются, какая бы velocity на них ни лежала.
pub fn integrate_velocity_to_transform(
    mut query: Query<(&RigidBody, &Velocity, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (rigid_body, velocity, mut transform) in query.iter_mut() {
        if matches!(rigid_body, RigidBody::Fixed) {
            continue;
        }
        transform.translation += velocity.linvel * delta;
    }
}

/// Plugin headless-физики
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, integrate_velocity_to_transform);
    }
}

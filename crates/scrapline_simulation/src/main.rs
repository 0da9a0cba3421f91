//! Headless симуляция SCRAPLINE
//!
//! Запускает Bevy App без рендера: одна машина переработки и россыпь
//! мусора, протягиваемого через приёмник.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody, Sensor, Velocity};
use rand::Rng;
use scrapline_simulation::{
    create_headless_app, Body, DeterministicRng, IntakeVolume, MachineAppearance, PowerReceiver,
    Recycler, SimulationPlugin,
};

fn main() {
    let seed = 42;
    println!("Starting SCRAPLINE headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    spawn_scrapyard(&mut app);

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let entity_count = app.world().entities().len();
            println!("Tick {}: {} entities", tick, entity_count);
        }
    }

    println!("Simulation complete!");
}

fn spawn_scrapyard(app: &mut App) {
    let world = app.world_mut();

    let intake = IntakeVolume::default();
    world.spawn((
        Name::new("recycler"),
        Recycler::default(),
        intake,
        MachineAppearance::default(),
        PowerReceiver::default(),
        Transform::from_translation(Vec3::ZERO),
        RigidBody::Fixed,
        Collider::cuboid(
            intake.half_extents.x,
            intake.half_extents.y,
            intake.half_extents.z,
        ),
        Sensor,
    ));

    // Мусор разбрасываем детерминированно (seeded RNG)
    let positions: Vec<Vec3> = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        (0..8)
            .map(|_| {
                Vec3::new(
                    rng.rng.gen_range(-0.5..0.5),
                    0.0,
                    rng.rng.gen_range(-0.5..0.5),
                )
            })
            .collect()
    };

    for (i, position) in positions.into_iter().enumerate() {
        world.spawn((
            Name::new(format!("scrap-{}", i)),
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Velocity::default(),
            Collider::cuboid(0.2, 0.2, 0.2),
        ));
    }

    // Один живой в приёмнике: safe-режим по умолчанию его не тронет
    world.spawn((
        Name::new("drifter"),
        Body::humanoid(),
        Transform::from_translation(Vec3::new(0.3, 0.0, 0.0)),
        RigidBody::Dynamic,
        Velocity::default(),
        Collider::capsule_y(0.5, 0.4),
    ));
}

//! Recycler integration test
//!
//! Полный headless App: контакт, переработка, протяжка груза и потеря
//! питания проверяются через настоящие тики (manual time advance, 64Hz).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::{Collider, RigidBody, Sensor, Velocity};
use scrapline_simulation::*;
use std::time::Duration;

/// Helper: headless App с фиксированным шагом времени — каждый
/// `app.update()` продвигает часы ровно на один simulation tick
fn create_recycler_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / SIMULATION_TICK_HZ,
    )));
    app
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.update();
    }
}

fn spawn_recycler(world: &mut World, powered: bool, safe: bool) -> Entity {
    let intake = IntakeVolume::default();
    world
        .spawn((
            Name::new("recycler"),
            Recycler {
                safe,
                ..Default::default()
            },
            intake,
            MachineAppearance::default(),
            PowerReceiver { powered },
            Transform::from_translation(Vec3::ZERO),
            RigidBody::Fixed,
            Collider::cuboid(
                intake.half_extents.x,
                intake.half_extents.y,
                intake.half_extents.z,
            ),
            Sensor,
        ))
        .id()
}

fn spawn_scrap(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((
            Name::new("scrap"),
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Velocity::default(),
            Collider::cuboid(0.2, 0.2, 0.2),
        ))
        .id()
}

fn spawn_character(world: &mut World, position: Vec3) -> Entity {
    world
        .spawn((
            Name::new("Urist"),
            Body::humanoid(),
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Velocity::default(),
            Collider::capsule_y(0.5, 0.4),
        ))
        .id()
}

fn working_set(app: &App, machine: Entity) -> Vec<Entity> {
    app.world()
        .get::<Recycler>(machine)
        .unwrap()
        .intersecting
        .clone()
}

/// Test: end-to-end сценарий из геймплея
///
/// Запитанная safe-машина: ящик в приёмнике исчезает сразу, живой
/// персонаж остаётся, отслеживается и протягивается через машину;
/// потеря питания очищает working set.
#[test]
fn test_end_to_end_powered_safe_machine() {
    let mut app = create_recycler_app();
    let machine = spawn_recycler(app.world_mut(), true, true);
    let scrap = spawn_scrap(app.world_mut(), Vec3::new(0.2, 0.0, 0.0));
    let character = spawn_character(app.world_mut(), Vec3::new(-0.4, 0.0, 0.0));

    run_ticks(&mut app, 3);

    // Неживой мусор переработан сразу же
    assert!(!app.world().entities().contains(scrap));

    // Живой персонаж цел, не расчленён (safe) и отслеживается
    assert!(app.world().entities().contains(character));
    assert_eq!(app.world().get::<Body>(character).unwrap().parts.len(), 6);
    assert_eq!(working_set(&app, machine), vec![character]);

    // Протяжка: за секунду персонаж смещается вдоль ленты (+X), оставаясь в приёмнике
    let before = app.world().get::<Transform>(character).unwrap().translation;
    run_ticks(&mut app, 64);
    let after = app.world().get::<Transform>(character).unwrap().translation;

    assert!(
        after.x > before.x + 0.05,
        "conveyed motion must pull the character along +X: {} -> {}",
        before.x,
        after.x
    );
    assert!(after.x < 0.75, "character must stay pressed inside the intake");
    assert_eq!(working_set(&app, machine), vec![character]);

    // Питание пропало — на следующем тике working set пуст, nudge не применяется
    app.world_mut()
        .entity_mut(machine)
        .insert(PowerReceiver { powered: false });
    run_ticks(&mut app, 2);

    assert!(working_set(&app, machine).is_empty());
    assert!(app.world().entities().contains(character));
}

/// Test: не-safe запитанная машина расчленяет вошедшего
#[test]
fn test_unsafe_machine_gibs_on_contact() {
    let mut app = create_recycler_app();
    let machine = spawn_recycler(app.world_mut(), true, false);
    let character = spawn_character(app.world_mut(), Vec3::new(0.2, 0.0, 0.0));

    run_ticks(&mut app, 2);

    assert!(app.world().entities().contains(character));
    let body = app.world().get::<Body>(character).unwrap();
    assert_eq!(body.parts.len(), 1, "only the torso stays attached");
    assert!(app.world().get::<MachineAppearance>(machine).unwrap().bloody);

    // Останки — физические entity, их затянет и переработает следом
    run_ticks(&mut app, 4);
    let mut dropped = app.world_mut().query::<&DroppedPart>();
    assert_eq!(dropped.iter(app.world()).count(), 0);
}

/// Test: suicide обходит все гейты — работает на обесточенной safe-машине
#[test]
fn test_suicide_bypasses_power_and_safety() {
    let mut app = create_recycler_app();
    let machine = spawn_recycler(app.world_mut(), false, true);
    let victim = spawn_character(app.world_mut(), Vec3::new(0.2, 0.0, 0.0));

    // Прогрев: машина уже видела персонажа, но не трогает его
    run_ticks(&mut app, 2);
    assert_eq!(app.world().get::<Body>(victim).unwrap().parts.len(), 6);

    app.world_mut().send_event(SuicideIntent { victim, machine });
    app.update();

    let body = app.world().get::<Body>(victim).unwrap();
    assert_eq!(body.parts.len(), 1);
    assert!(app.world().get::<MachineAppearance>(machine).unwrap().bloody);

    let completions = app.world().resource::<Events<SuicideCompleted>>();
    let mut cursor = completions.get_cursor();
    let completed: Vec<_> = cursor.read(completions).collect();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].kind, SuicideKind::Bloodloss);
    assert_eq!(completed[0].victim, victim);
    assert_eq!(completed[0].machine, machine);
}

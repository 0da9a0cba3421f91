//! Системы переработки
//!
//! Все обращения к опциональным capability — тотальные (`Option`/query miss),
//! отказ не ошибка: entity без нужного компонента просто идёт по другой ветке.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody, Velocity};

use crate::chat::{Popup, PopupScope, SuicideCompleted, SuicideIntent, SuicideKind};
use crate::components::{
    Body, DroppedPart, IntakeVolume, MachineAppearance, MapGrid, Portable, Recycler, Stored,
};
use crate::conveyor::{convey, Conveyor};
use crate::power::{is_powered, PowerReceiver};

/// Entity начала пересекать приёмный объём машины
#[derive(Event, Debug, Clone, Copy)]
pub struct IntakeContact {
    pub machine: Entity,
    pub other: Entity,
}

/// Система: детект новых пересечений с приёмником
///
/// Collision-enter эмитится один раз: entity, уже сидящие в working set
/// машины, повторно не репортятся. Кандидаты — физические тела, не
/// прибитые к полу и не лежащие в контейнере.
// TODO: использовать Rapier narrow-phase вместо перебора AABB, когда подключим полный Rapier plugin
pub fn detect_intake_contacts(
    machines: Query<(Entity, &Transform, &IntakeVolume, &Recycler)>,
    candidates: Query<(Entity, &Transform, &RigidBody), Without<Stored>>,
    mut contacts: EventWriter<IntakeContact>,
) {
    for (machine, machine_transform, intake, recycler) in machines.iter() {
        for (other, transform, rigid_body) in candidates.iter() {
            if other == machine || matches!(rigid_body, RigidBody::Fixed) {
                continue;
            }
            if recycler.intersecting.contains(&other) {
                continue;
            }
            if intake.contains(machine_transform.translation, transform.translation) {
                contacts.write(IntakeContact { machine, other });
            }
        }
    }
}

/// Система: реакция машины на вошедшую entity
///
/// Живое (с Body) — расчленяется только при `!safe` и питании, иначе
/// остаётся нетронутым (но отслеживается). Неживое — удаляется, пока
/// машина под питанием.
pub fn handle_intake_contacts(
    mut commands: Commands,
    mut contacts: EventReader<IntakeContact>,
    mut machines: Query<(
        &mut Recycler,
        Option<&PowerReceiver>,
        Option<&mut MachineAppearance>,
    )>,
    mut bodies: Query<(&Transform, &mut Body)>,
) {
    for contact in contacts.read() {
        let Ok((mut recycler, receiver, appearance)) = machines.get_mut(contact.machine) else {
            continue;
        };

        // Идемпотентно: повторный контакт не дублирует entity в working set
        recycler.track(contact.other);

        let powered = is_powered(receiver);

        if let Ok((transform, mut body)) = bodies.get_mut(contact.other) {
            if recycler.can_gib(powered) {
                gib_into_remains(&mut commands, transform.translation, &mut body);
                if let Some(mut appearance) = appearance {
                    appearance.bloody = true;
                }
                crate::log(&format!(
                    "recycler {:?}: gibbed {:?}",
                    contact.machine, contact.other
                ));
            }
        } else if recycler.can_recycle(powered) {
            commands.entity(contact.other).despawn();
            crate::log(&format!(
                "recycler {:?}: recycled {:?}",
                contact.machine, contact.other
            ));
        }
    }
}

/// Расчленение: отсоединяем все части, какие получится, останки падают
/// на место жертвы как отдельные физические entity
fn gib_into_remains(commands: &mut Commands, position: Vec3, body: &mut Body) {
    for part in body.detach_all() {
        commands.spawn((
            DroppedPart { part },
            Transform::from_translation(position),
            RigidBody::Dynamic,
            Velocity::default(),
            Collider::ball(0.15),
        ));
    }
}

/// Система: suicide в машине
///
/// Обходит все гейты (`safe`, питание) — всегда успешен: сообщения,
/// безусловное расчленение с немедленным уничтожением останков, кровь
/// на машине, исход Bloodloss.
pub fn process_suicides(
    mut intents: EventReader<SuicideIntent>,
    mut completions: EventWriter<SuicideCompleted>,
    mut popups: EventWriter<Popup>,
    mut victims: Query<(Option<&Name>, Option<&mut Body>)>,
    mut machines: Query<&mut MachineAppearance, With<Recycler>>,
) {
    for intent in intents.read() {
        let Ok((name, body)) = victims.get_mut(intent.victim) else {
            continue; // victim уже удалён другой системой
        };

        let victim_name = name
            .map(|n| n.as_str().to_owned())
            .unwrap_or_else(|| "Someone".to_owned());

        popups.write(Popup {
            source: intent.victim,
            scope: PopupScope::Observers,
            text: format!("{} tries to recycle themself!", victim_name),
        });
        popups.write(Popup {
            source: intent.victim,
            scope: PopupScope::Source,
            text: "You recycle yourself!".to_owned(),
        });

        if let Some(mut body) = body {
            // Останки уничтожаются сразу, DroppedPart не спавним;
            // неотсоединяемые части молча пропускаются
            let destroyed = body.detach_all();
            crate::log(&format!(
                "recycler {:?}: suicide of {:?} consumed {} parts",
                intent.machine,
                intent.victim,
                destroyed.len()
            ));
        }

        if let Ok(mut appearance) = machines.get_mut(intent.machine) {
            appearance.bloody = true;
        }

        completions.write(SuicideCompleted {
            victim: intent.victim,
            machine: intent.machine,
            kind: SuicideKind::Bloodloss,
        });
    }
}

/// Машина вообще может работать?
///
/// Нет питания или машину несут в руках — стоп.
pub fn can_run(receiver: Option<&PowerReceiver>, portable: bool) -> bool {
    if receiver.map_or(false, |r| !r.powered) {
        return false;
    }
    !portable
}

/// Entity можно протягивать через машину?
///
/// Исключены: сама машина, прибитые к полу (Fixed), конвейеры,
/// гриды карты, содержимое контейнеров.
pub fn can_move(
    owner: Entity,
    entity: Entity,
    rigid_body: &RigidBody,
    is_conveyor: bool,
    is_grid: bool,
    is_stored: bool,
) -> bool {
    if entity == owner {
        return false;
    }
    if matches!(rigid_body, RigidBody::Fixed) {
        return false;
    }
    if is_conveyor || is_grid || is_stored {
        return false;
    }
    true
}

/// Система: per-tick ревизия working set + протяжка груза
///
/// Без питания (или машина в руках) — set очищается, движение не
/// применяется. Иначе обход с хвоста: выбывшие (despawn, немовимые,
/// вышедшие из приёмника) удаляются в тот же тик, остальные получают
/// conveyed nudge к центру машины.
pub fn sweep_recyclers(
    time: Res<Time<Fixed>>,
    mut machines: Query<(
        Entity,
        &Transform,
        &IntakeVolume,
        &mut Recycler,
        Option<&PowerReceiver>,
        Has<Portable>,
    )>,
    mut cargo: Query<
        (
            &Transform,
            &RigidBody,
            &mut Velocity,
            Has<Conveyor>,
            Has<MapGrid>,
            Has<Stored>,
        ),
        Without<Recycler>,
    >,
) {
    let frame_time = time.delta_secs();
    // Лента тянет вдоль +X машины
    let direction = Vec3::X;

    for (owner, owner_transform, intake, mut recycler, receiver, portable) in machines.iter_mut() {
        if !can_run(receiver, portable) {
            recycler.intersecting.clear();
            continue;
        }

        // Обход с хвоста: удаление по индексу безопасно
        for i in (0..recycler.intersecting.len()).rev() {
            let entity = recycler.intersecting[i];

            let Ok((transform, rigid_body, mut velocity, is_conveyor, is_grid, is_stored)) =
                cargo.get_mut(entity)
            else {
                // despawn или нет движимой физики
                recycler.intersecting.remove(i);
                continue;
            };

            if !can_move(owner, entity, rigid_body, is_conveyor, is_grid, is_stored)
                || !intake.contains(owner_transform.translation, transform.translation)
            {
                recycler.intersecting.remove(i);
                continue;
            }

            let offset = transform.translation - owner_transform.translation;
            convey(&mut velocity, direction, frame_time, offset);
        }
    }
}

//! Компоненты машин переработки: Recycler, IntakeVolume, MachineAppearance

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

fn default_safe() -> bool {
    true
}

fn default_efficiency() -> u32 {
    25
}

/// Машина-переработчик: уничтожает и расчленяет entity в приёмном объёме
///
/// `safe`/`efficiency` — персистентная конфигурация (serde), `intersecting` —
/// runtime working set, в save не попадает.
#[derive(Component, Debug, Clone, Serialize, Deserialize, Reflect)]
#[reflect(Component)]
pub struct Recycler {
    /// Расчленять ли живых (с Body) entity. true = только неживой мусор
    #[serde(default = "default_safe")]
    pub safe: bool,
    /// Процент материала, возвращаемого при переработке
    // TODO: начислять материалы с учётом efficiency, когда появится склад ресурсов
    #[serde(default = "default_efficiency")]
    pub efficiency: u32,
    /// Entity, пересекающие машину прямо сейчас (без дубликатов)
    ///
    /// Weak-ссылки: despawn проверяется в момент использования, каждый тик.
    #[serde(skip)]
    pub intersecting: Vec<Entity>,
}

impl Default for Recycler {
    fn default() -> Self {
        Self {
            safe: default_safe(),
            efficiency: default_efficiency(),
            intersecting: Vec::new(),
        }
    }
}

impl Recycler {
    /// Добавляет entity в working set (идемпотентно)
    pub fn track(&mut self, entity: Entity) {
        if !self.intersecting.contains(&entity) {
            self.intersecting.push(entity);
        }
    }

    /// Можно ли расчленить живую entity: только не-safe режим и питание
    pub fn can_gib(&self, powered: bool) -> bool {
        !self.safe && powered
    }

    /// Можно ли переработать неживую entity
    ///
    /// Пока без ограничений по construction-прототипам: любая неживая entity
    /// перерабатываема, если машина под питанием.
    // TODO CONSTRUCTION: исключать непереработываемые прототипы
    pub fn can_recycle(&self, powered: bool) -> bool {
        powered
    }
}

/// Приёмный объём машины (AABB half-extents вокруг Transform)
///
/// Используется для overlap-проверок strategic layer.
// TODO: использовать Rapier narrow-phase вместо AABB, когда подключим полный Rapier plugin
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct IntakeVolume {
    pub half_extents: Vec3,
}

impl Default for IntakeVolume {
    fn default() -> Self {
        Self {
            // Корпус машины ~1.5м в ширину, приёмник чуть ниже роста
            half_extents: Vec3::new(0.75, 1.0, 0.75),
        }
    }
}

impl IntakeVolume {
    /// Точка внутри приёмного объёма машины?
    pub fn contains(&self, machine_position: Vec3, point: Vec3) -> bool {
        let d = (point - machine_position).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}

/// Данные внешнего вида машины (читает tactical layer)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MachineAppearance {
    /// Машина испачкана кровью (после расчленения)
    pub bloody: bool,
}

//! Положение entity в мире: MapGrid, Stored, Portable

use bevy::prelude::*;

/// Маркер: entity — грид карты (геометрия уровня)
///
/// Гриды никогда не двигаются машинами и конвейерами.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MapGrid;

/// Entity находится внутри контейнера (сумка, ящик, инвентарь)
///
/// Контейнерные entity исключены из физического взаимодействия с миром.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Stored {
    /// Entity-контейнер, внутри которого мы лежим
    pub container: Entity,
}

impl Default for Stored {
    fn default() -> Self {
        Self {
            container: Entity::PLACEHOLDER,
        }
    }
}

/// Маркер: entity сейчас носимый предмет (кто-то поднял машину)
///
/// Машина в руках не обрабатывает мусор.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Portable;

//! Тела и расчленение: Body, BodyPart, DroppedPart
//!
//! Минимальная поверхность body-подсистемы, достаточная для машин:
//! части тела отсоединяются по одной, отказ отсоединения — ожидаемый
//! исход (не ошибка), отсоединённая часть становится отдельной entity.

use bevy::prelude::*;

/// Часть тела (данные, не entity, пока прикреплена)
#[derive(Debug, Clone, PartialEq, Eq, Reflect)]
pub struct BodyPart {
    /// Название слота ("head", "left arm", ...)
    pub slot: String,
    /// Можно ли отсоединить (торс, например, нельзя)
    pub detachable: bool,
}

impl BodyPart {
    pub fn new(slot: impl Into<String>, detachable: bool) -> Self {
        Self {
            slot: slot.into(),
            detachable,
        }
    }
}

/// Тело живой entity: упорядоченный список частей
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Body {
    pub parts: Vec<BodyPart>,
}

impl Body {
    pub fn new(parts: Vec<BodyPart>) -> Self {
        Self { parts }
    }

    /// Стандартный гуманоид: торс не отсоединяется
    pub fn humanoid() -> Self {
        Self::new(vec![
            BodyPart::new("head", true),
            BodyPart::new("torso", false),
            BodyPart::new("left arm", true),
            BodyPart::new("right arm", true),
            BodyPart::new("left leg", true),
            BodyPart::new("right leg", true),
        ])
    }

    /// Пытается отсоединить часть по индексу
    ///
    /// None — индекс вне диапазона или часть не отсоединяется.
    pub fn try_detach(&mut self, index: usize) -> Option<BodyPart> {
        if !self.parts.get(index)?.detachable {
            return None;
        }
        Some(self.parts.remove(index))
    }

    /// Отсоединяет все части, какие возможно; отказы молча пропускаются
    ///
    /// Обход с хвоста, чтобы удаление по индексу было безопасным.
    pub fn detach_all(&mut self) -> Vec<BodyPart> {
        let mut detached = Vec::new();
        for i in (0..self.parts.len()).rev() {
            if let Some(part) = self.try_detach(i) {
                detached.push(part);
            }
        }
        detached
    }
}

/// Останки: отсоединённая часть тела как самостоятельная entity
#[derive(Component, Debug, Clone)]
pub struct DroppedPart {
    pub part: BodyPart,
}

//! Popup-сообщения и suicide-взаимодействия
//!
//! Доставка до клиентов — забота внешнего chat-слоя; симуляция только
//! публикует события. Relay-система дублирует их в глобальный logger,
//! чтобы headless-прогоны были читаемы.

use bevy::prelude::*;

/// Кому показывать popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupScope {
    /// Только самой entity-источнику
    Source,
    /// Всем наблюдателям рядом, кроме источника
    Observers,
}

/// Короткое сообщение над entity
#[derive(Event, Debug, Clone)]
pub struct Popup {
    pub source: Entity,
    pub scope: PopupScope,
    pub text: String,
}

/// Каким исходом закончился suicide (для ленты смертей)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuicideKind {
    Blunt,
    Piercing,
    Heat,
    Bloodloss,
}

/// Игрок сознательно завершает персонажа в машине
#[derive(Event, Debug, Clone, Copy)]
pub struct SuicideIntent {
    pub victim: Entity,
    pub machine: Entity,
}

/// Результат обработанного suicide
#[derive(Event, Debug, Clone, Copy)]
pub struct SuicideCompleted {
    pub victim: Entity,
    pub machine: Entity,
    pub kind: SuicideKind,
}

pub struct ChatPlugin;

impl Plugin for ChatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Popup>()
            .add_systems(FixedUpdate, relay_popups);
    }
}

/// Система: дублирует popup-события в logger
pub fn relay_popups(mut popups: EventReader<Popup>) {
    for popup in popups.read() {
        crate::log_info(&format!(
            "popup [{:?}] {:?}: {}",
            popup.scope, popup.source, popup.text
        ));
    }
}

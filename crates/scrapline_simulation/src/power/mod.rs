//! Power receiver: точка подключения машины к энергосети
//!
//! Сама сеть (APC, распределение нагрузки) живёт снаружи и выставляет
//! `powered` на receiver; здесь только capability-поверхность.

use bevy::prelude::*;

/// Потребитель энергии
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PowerReceiver {
    /// Есть ли питание от сети прямо сейчас
    pub powered: bool,
}

impl Default for PowerReceiver {
    fn default() -> Self {
        Self { powered: true }
    }
}

/// Правило питания: entity без receiver всегда считается запитанной
/// (машины, работающие без сети by design)
pub fn is_powered(receiver: Option<&PowerReceiver>) -> bool {
    receiver.map_or(true, |r| r.powered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_receiver_is_always_powered() {
        assert!(is_powered(None));
    }

    #[test]
    fn test_receiver_reports_power_state() {
        assert!(is_powered(Some(&PowerReceiver { powered: true })));
        assert!(!is_powered(Some(&PowerReceiver { powered: false })));
    }
}

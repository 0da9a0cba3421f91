//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - machine: машины переработки (Recycler, IntakeVolume, MachineAppearance)
//! - body: тела и расчленение (Body, BodyPart, DroppedPart)
//! - world: положение entity в мире (MapGrid, Stored, Portable)

pub mod body;
pub mod machine;
pub mod world;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod body_tests;

// Re-exports для удобного импорта
pub use body::*;
pub use machine::*;
pub use world::*;

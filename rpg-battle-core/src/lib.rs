//! Core turn-based battle loop for a small two-combatant RPG.
//!
//! The main entry point for host-driven battles is
//! [`sim::controller::BattleController`]: construct it with two combatants
//! and a [`presentation::Presentation`] implementation, call `start()` once,
//! then feed it [`presentation::InputEvent`]s from the host's input loop.

pub mod battle_log;
pub mod content;
pub mod data;
pub mod presentation;
pub mod sim;

pub use content::ContentPack;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::battle_log::BattleLog;
    pub use crate::content::{CharacterTemplate, ContentPack, MoveDefinition};
    pub use crate::presentation::{InputEvent, Presentation, Side, SilentPresentation};
    pub use crate::sim::combatant::{Combatant, Stats};
    pub use crate::sim::controller::{BattleController, BattleOutcome, BattlePhase};
    pub use crate::sim::damage::{resolve, DamageOutcome};
    pub use crate::sim::moves::MoveInstance;
}

pub mod combatant;
pub mod controller;
pub mod damage;
pub mod moves;

pub use combatant::{Combatant, Stats};
pub use controller::{BattleController, BattleOutcome, BattlePhase};
pub use damage::{resolve, DamageOutcome};
pub use moves::MoveInstance;

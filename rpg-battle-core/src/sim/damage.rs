use crate::content::MoveDefinition;
use crate::sim::combatant::Combatant;
use rand::Rng;

/// Critical hits land with this probability on any successful hit.
pub const CRIT_CHANCE: f64 = 1.0 / 16.0;
/// Damage multiplier applied on a critical hit.
pub const CRIT_MULTIPLIER: u32 = 2;

/// Value result of one move execution. Produced fresh per execution and
/// consumed immediately by the controller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DamageOutcome {
    pub damage: u16,
    pub critical: bool,
    pub missed: bool,
    pub target_fainted: bool,
}

/// Deterministic damage for a landed hit.
///
/// Zero only when the move has no power; any hit with power > 0 deals at
/// least 1 damage.
pub fn compute_damage(level: u8, attack: u16, defense: u16, power: u16, critical: bool) -> u16 {
    if power == 0 {
        return 0;
    }
    let level = level as u32;
    let attack = attack as u32;
    let defense = defense.max(1) as u32;
    let mut damage = 2 * level / 5 + 2;
    damage = damage.saturating_mul(power as u32);
    damage = damage.saturating_mul(attack);
    damage /= defense;
    damage /= 50;
    damage = damage.saturating_add(2);
    if critical {
        damage = damage.saturating_mul(CRIT_MULTIPLIER);
    }
    damage.min(u16::MAX as u32) as u16
}

/// Accuracy check: uniform draw in [0, 100) against the move's accuracy.
/// Accuracy 100 always hits; accuracy 0 never does.
pub fn passes_accuracy(accuracy: u8, rng: &mut impl Rng) -> bool {
    rng.gen_range(0u8..100) < accuracy
}

pub fn roll_critical(rng: &mut impl Rng) -> bool {
    rng.gen_bool(CRIT_CHANCE)
}

/// Resolve one move execution against `defender`.
///
/// Applies the clamped damage to the defender and reports the outcome. The
/// attacker is never mutated; PP deduction is a separate caller step.
pub fn resolve(
    move_def: &MoveDefinition,
    attacker: &Combatant,
    defender: &mut Combatant,
    rng: &mut impl Rng,
) -> DamageOutcome {
    if !passes_accuracy(move_def.accuracy, rng) {
        return DamageOutcome {
            missed: true,
            ..DamageOutcome::default()
        };
    }
    let critical = roll_critical(rng);
    let damage = compute_damage(
        attacker.level,
        attacker.stats.attack,
        defender.stats.defense,
        move_def.power,
        critical,
    );
    defender.take_damage(damage);
    DamageOutcome {
        damage,
        critical,
        missed: false,
        target_fainted: defender.is_fainted(),
    }
}

use crate::content::{CharacterTemplate, ContentPack, MAX_MOVES};
use crate::sim::moves::MoveInstance;
use anyhow::{anyhow, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stats {
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
}

/// One side's runtime battle state.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub name: String,
    pub level: u8,
    pub stats: Stats,
    pub current_hp: u16,
    pub moves: Vec<MoveInstance>,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        level: u8,
        stats: Stats,
        moves: Vec<MoveInstance>,
    ) -> Result<Self> {
        let name = name.into();
        if stats.max_hp == 0 {
            return Err(anyhow!("combatant '{}' must have max_hp > 0", name));
        }
        if moves.is_empty() || moves.len() > MAX_MOVES {
            return Err(anyhow!(
                "combatant '{}' must know between 1 and {} moves",
                name,
                MAX_MOVES
            ));
        }
        Ok(Self {
            name,
            level,
            current_hp: stats.max_hp,
            stats,
            moves,
        })
    }

    pub fn from_template(template: &CharacterTemplate, content: &ContentPack) -> Result<Self> {
        let moves = template
            .moves
            .iter()
            .map(|name| {
                content
                    .move_def(name)
                    .map(|def| MoveInstance::new(def.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(
            template.name.clone(),
            template.level,
            Stats {
                max_hp: template.max_hp,
                attack: template.attack,
                defense: template.defense,
            },
            moves,
        )
    }

    pub fn take_damage(&mut self, damage: u16) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Indices of move slots with PP remaining.
    pub fn usable_move_indices(&self) -> Vec<usize> {
        self.moves
            .iter()
            .enumerate()
            .filter(|(_, instance)| instance.has_pp())
            .map(|(idx, _)| idx)
            .collect()
    }
}

use crate::content::MoveDefinition;
use anyhow::{anyhow, Result};

/// A move slot bound to its remaining PP for one combatant.
#[derive(Clone, Debug)]
pub struct MoveInstance {
    definition: MoveDefinition,
    remaining_pp: u8,
}

impl MoveInstance {
    pub fn new(definition: MoveDefinition) -> Self {
        let remaining_pp = definition.max_pp;
        Self {
            definition,
            remaining_pp,
        }
    }

    pub fn definition(&self) -> &MoveDefinition {
        &self.definition
    }

    pub fn remaining_pp(&self) -> u8 {
        self.remaining_pp
    }

    pub fn has_pp(&self) -> bool {
        self.remaining_pp > 0
    }

    /// Consume one PP. Fails without side effects when the slot is empty.
    pub fn try_use(&mut self) -> Result<()> {
        if self.remaining_pp == 0 {
            return Err(anyhow!("no PP left for {}", self.definition.name));
        }
        self.remaining_pp -= 1;
        Ok(())
    }
}

//! Content loading: immutable move and character definitions.
//!
//! A [`ContentPack`] is assembled once, before any battle session starts.
//! The built-in pack merges the static move library with the embedded
//! default characters; [`ContentPack::from_json`] layers a user-supplied
//! content file on top of it.

use crate::data::moves::{normalize_move_name, MoveData, MOVE_LIBRARY};
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

/// Maximum number of move slots per combatant.
pub const MAX_MOVES: usize = 4;

const DEFAULT_CHARACTERS: &str = r#"{
    "characters": [
        {
            "name": "Rogue",
            "level": 12,
            "max_hp": 120,
            "attack": 58,
            "defense": 44,
            "moves": ["Slash", "Ice Shard", "Focus Strike", "Fireball"]
        },
        {
            "name": "Cave Troll",
            "level": 12,
            "max_hp": 140,
            "attack": 52,
            "defense": 50,
            "moves": ["Headbutt", "Mud Toss", "Wild Swing"]
        }
    ]
}"#;

/// Immutable definition of one battle move.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MoveDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub power: u16,
    pub accuracy: u8,
    pub max_pp: u8,
}

impl MoveDefinition {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("move definition has an empty name"));
        }
        if self.accuracy > 100 {
            return Err(anyhow!(
                "move '{}' has accuracy {} (must be 0-100)",
                self.name,
                self.accuracy
            ));
        }
        if self.max_pp == 0 {
            return Err(anyhow!("move '{}' must have max_pp > 0", self.name));
        }
        Ok(())
    }
}

impl From<&MoveData> for MoveDefinition {
    fn from(data: &MoveData) -> Self {
        Self {
            name: data.name.to_string(),
            description: data.description.to_string(),
            power: data.power,
            accuracy: data.accuracy,
            max_pp: data.pp,
        }
    }
}

/// Template a combatant is built from at battle setup.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CharacterTemplate {
    pub name: String,
    pub level: u8,
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub moves: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ContentFile {
    #[serde(default)]
    moves: Vec<MoveDefinition>,
    #[serde(default)]
    characters: Vec<CharacterTemplate>,
}

/// Read-only move and character definitions for one or more battles.
#[derive(Clone, Debug, Default)]
pub struct ContentPack {
    moves: HashMap<String, MoveDefinition>,
    characters: HashMap<String, CharacterTemplate>,
}

static BUILTIN: Lazy<ContentPack> = Lazy::new(|| {
    let mut pack = ContentPack::default();
    for (id, data) in MOVE_LIBRARY.entries() {
        pack.moves.insert((*id).to_string(), MoveDefinition::from(data));
    }
    let defaults: ContentFile =
        serde_json::from_str(DEFAULT_CHARACTERS).expect("embedded default characters are valid JSON");
    pack.extend(defaults)
        .expect("embedded default characters reference known moves");
    pack
});

impl ContentPack {
    /// Built-in content: the static move library plus the default characters.
    pub fn builtin() -> &'static ContentPack {
        &BUILTIN
    }

    /// Load a content file, layered over the built-in pack.
    pub fn from_json(json: &str) -> Result<ContentPack> {
        let file: ContentFile =
            serde_json::from_str(json).context("failed to parse content JSON")?;
        let mut pack = Self::builtin().clone();
        pack.extend(file)?;
        Ok(pack)
    }

    fn extend(&mut self, file: ContentFile) -> Result<()> {
        for def in file.moves {
            def.validate()?;
            self.moves.insert(normalize_move_name(&def.name), def);
        }
        for template in file.characters {
            self.validate_template(&template)?;
            self.characters
                .insert(normalize_move_name(&template.name), template);
        }
        Ok(())
    }

    fn validate_template(&self, template: &CharacterTemplate) -> Result<()> {
        if template.max_hp == 0 {
            return Err(anyhow!("character '{}' must have max_hp > 0", template.name));
        }
        if template.moves.is_empty() || template.moves.len() > MAX_MOVES {
            return Err(anyhow!(
                "character '{}' must know between 1 and {} moves",
                template.name,
                MAX_MOVES
            ));
        }
        for name in &template.moves {
            self.move_def(name)
                .with_context(|| format!("character '{}' has an unknown move", template.name))?;
        }
        Ok(())
    }

    pub fn move_def(&self, name: &str) -> Result<&MoveDefinition> {
        self.moves
            .get(normalize_move_name(name).as_str())
            .ok_or_else(|| anyhow!("move '{}' not found", name))
    }

    pub fn character(&self, name: &str) -> Result<&CharacterTemplate> {
        self.characters
            .get(normalize_move_name(name).as_str())
            .ok_or_else(|| anyhow!("character '{}' not found", name))
    }

    pub fn character_names(&self) -> impl Iterator<Item = &str> {
        self.characters.values().map(|t| t.name.as_str())
    }
}

use serde::{Deserialize, Serialize};

use super::ids::CatalogId;

/// A type tag plus the color the presentation paints it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
    /// CSS-style hex color, e.g. `#EE8130`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front: String,
    pub back: String,
    pub front_shiny: String,
    pub back_shiny: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Sum of all six stats, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        [
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .into_iter()
        .fold(self.hp, u32::saturating_add)
    }
}

/// A learned move. Status moves have no power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub move_type: PokemonType,
}

/// A full catalog record. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub id: CatalogId,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub sprites: Sprites,
    pub stats: Stats,
    pub moves: Vec<Move>,
    pub description: String,
}

impl CatalogEntity {
    /// Type names joined with `/`, e.g. `GRASS/POISON`.
    pub fn type_line(&self) -> String {
        self.types
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

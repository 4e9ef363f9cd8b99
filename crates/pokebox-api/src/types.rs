// Wire types for the Pokebox HTTP API.
//
// Field names mirror the JSON exactly. Catalog records use a mix of
// snake_case (sprites) and camelCase (stats), so renames are per-field
// rather than a blanket `rename_all`. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Catalog ──────────────────────────────────────────────────────────

/// A type tag with its display color (e.g. `{"name": "FIRE", "color": "#EE8130"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeResponse {
    pub name: String,
    pub color: String,
}

/// A learned move. `power` is absent for status moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub move_type: PokemonTypeResponse,
}

/// The four sprite image URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesResponse {
    pub front_default: String,
    pub back_default: String,
    pub front_shiny: String,
    pub back_shiny: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub hp: u32,
    pub speed: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
}

/// Full catalog record from `GET pokemon/` or `GET pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeResponse>,
    #[serde(default)]
    pub moves: Vec<MoveResponse>,
    pub sprites: SpritesResponse,
    pub stats: StatsResponse,
}

// ── Box ──────────────────────────────────────────────────────────────

/// A stored Box entry from `GET box/{id}`, `POST box/` or `PUT box/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxEntryResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub level: u8,
    pub location: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub pokemon_id: u32,
}

/// Body for `POST box/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBoxEntry {
    pub pokemon_id: u32,
    pub location: String,
    pub level: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `PUT box/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBoxEntry {
    pub location: String,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ── API-to-domain type conversions ──
//
// Bridges raw `pokebox_api` response types into the `model` types.

use pokebox_api::types::{
    BoxEntryResponse, MoveResponse, PokemonResponse, PokemonTypeResponse, SpritesResponse,
    StatsResponse,
};

use crate::model::{
    CatalogEntity, CatalogId, CollectionEntry, EntryId, Move, PokemonType, Sprites, Stats,
};

impl From<PokemonTypeResponse> for PokemonType {
    fn from(t: PokemonTypeResponse) -> Self {
        Self {
            name: t.name,
            color: t.color,
        }
    }
}

impl From<MoveResponse> for Move {
    fn from(m: MoveResponse) -> Self {
        Self {
            name: m.name,
            power: m.power,
            move_type: m.move_type.into(),
        }
    }
}

impl From<SpritesResponse> for Sprites {
    fn from(s: SpritesResponse) -> Self {
        Self {
            front: s.front_default,
            back: s.back_default,
            front_shiny: s.front_shiny,
            back_shiny: s.back_shiny,
        }
    }
}

impl From<StatsResponse> for Stats {
    fn from(s: StatsResponse) -> Self {
        Self {
            hp: s.hp,
            attack: s.attack,
            defense: s.defense,
            special_attack: s.special_attack,
            special_defense: s.special_defense,
            speed: s.speed,
        }
    }
}

impl From<PokemonResponse> for CatalogEntity {
    fn from(p: PokemonResponse) -> Self {
        Self {
            id: CatalogId::new(p.id),
            name: p.name,
            types: p.types.into_iter().map(Into::into).collect(),
            sprites: p.sprites.into(),
            stats: p.stats.into(),
            moves: p.moves.into_iter().map(Into::into).collect(),
            description: p.description,
        }
    }
}

impl From<BoxEntryResponse> for CollectionEntry {
    fn from(e: BoxEntryResponse) -> Self {
        Self {
            id: EntryId::from(e.id),
            pokemon_id: CatalogId::new(e.pokemon_id),
            level: e.level,
            location: e.location,
            created_at: e.created_at,
            notes: e.notes.filter(|n| !n.is_empty()),
        }
    }
}

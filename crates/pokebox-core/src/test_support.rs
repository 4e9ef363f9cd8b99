// Fixtures shared by unit tests.

use crate::model::{CatalogEntity, CatalogId, CollectionEntry, EntryId, PokemonType, Sprites, Stats};

pub(crate) fn entity(id: u32, name: &str) -> CatalogEntity {
    CatalogEntity {
        id: CatalogId::new(id),
        name: name.into(),
        types: vec![PokemonType {
            name: "NORMAL".into(),
            color: "#A8A77A".into(),
        }],
        sprites: Sprites {
            front: format!("{id}.png"),
            back: format!("back/{id}.png"),
            front_shiny: format!("shiny/{id}.png"),
            back_shiny: format!("back/shiny/{id}.png"),
        },
        stats: Stats {
            hp: 10,
            attack: 10,
            defense: 10,
            special_attack: 10,
            special_defense: 10,
            speed: 10,
        },
        moves: Vec::new(),
        description: String::new(),
    }
}

pub(crate) fn entry(id: &str, pokemon_id: u32) -> CollectionEntry {
    CollectionEntry {
        id: EntryId::from(id),
        pokemon_id: CatalogId::new(pokemon_id),
        level: 5,
        location: "Route 1".into(),
        created_at: chrono::DateTime::UNIX_EPOCH,
        notes: None,
    }
}

// ── Domain model ──
//
// Canonical types consumers see. API wire types never leak past
// `convert`.

pub mod catalog;
pub mod collection;
pub mod ids;

pub use catalog::{CatalogEntity, Move, PokemonType, Sprites, Stats};
pub use collection::CollectionEntry;
pub use ids::{CatalogId, EntryId};

use crate::model::{CatalogId, EntryId};
use crate::pagination::FetchWindow;
use crate::validation::ValidEntry;

/// I/O the session must perform on behalf of the reducer.
///
/// Each effect resolves to exactly one result [`Action`](crate::Action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(FetchWindow),
    FetchDetails(String),
    SyncCollection,
    CreateEntry {
        pokemon_id: CatalogId,
        entry: ValidEntry,
    },
    UpdateEntry {
        id: EntryId,
        entry: ValidEntry,
    },
    DeleteEntry(EntryId),
}

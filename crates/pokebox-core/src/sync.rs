// ── Collection synchronizer ──
//
// Full sync: list Box ids, resolve every entry, then backfill catalog
// records the cache does not have yet. Each fan-out is all-or-nothing on
// its own: a failed backfill still yields the resolved entries.

use chrono::{DateTime, Utc};
use pokebox_api::PokeboxClient;
use pokebox_api::types::PokemonResponse;
use tracing::debug;

use crate::error::CoreError;
use crate::fanout::all_or_nothing;
use crate::model::{CatalogEntity, CatalogId, CollectionEntry, EntryId};
use crate::store::CatalogCache;
use crate::validation::ValidEntry;

/// Result of a sync whose entries resolved, applied to state in one step.
#[derive(Debug, Clone, Default)]
pub struct SyncOutcome {
    /// Every Box entry, in the order the service listed their ids.
    pub entries: Vec<CollectionEntry>,
    /// Catalog records that were referenced but not cached. Empty when the
    /// backfill failed.
    pub backfilled: Vec<CatalogEntity>,
    pub backfill_error: Option<CoreError>,
}

pub async fn sync_collection(
    client: &PokeboxClient,
    cache: &CatalogCache,
) -> Result<SyncOutcome, CoreError> {
    let ids = client.list_box_ids().await?;

    let entries: Vec<CollectionEntry> =
        all_or_nothing(ids.iter().map(|id| client.get_box_entry(id)))
            .await?
            .into_iter()
            .map(CollectionEntry::from)
            .collect();

    let missing = cache.missing(entries.iter().map(|e| e.pokemon_id));
    let (backfilled, backfill_error) =
        match all_or_nothing(missing.iter().map(|id| fetch_by_id(client, *id))).await {
            Ok(pages) => (
                pages
                    .into_iter()
                    .flatten()
                    .map(CatalogEntity::from)
                    .collect::<Vec<_>>(),
                None,
            ),
            Err(e) => (Vec::new(), Some(CoreError::from(e))),
        };

    debug!(
        entries = entries.len(),
        missing = missing.len(),
        backfilled = backfilled.len(),
        backfill_failed = backfill_error.is_some(),
        "collection synced"
    );

    Ok(SyncOutcome {
        entries,
        backfilled,
        backfill_error,
    })
}

/// Single-record catalog page at `offset = id - 1`.
async fn fetch_by_id(
    client: &PokeboxClient,
    id: CatalogId,
) -> Result<Vec<PokemonResponse>, pokebox_api::Error> {
    client.list_pokemon(1, id.get().saturating_sub(1)).await
}

// ── Mutations ────────────────────────────────────────────────────────

pub async fn create_entry(
    client: &PokeboxClient,
    pokemon_id: CatalogId,
    entry: ValidEntry,
    created_at: DateTime<Utc>,
) -> Result<CollectionEntry, CoreError> {
    let body = entry.into_insert(pokemon_id, created_at);
    let created = client.create_box_entry(&body).await?;
    Ok(created.into())
}

pub async fn update_entry(
    client: &PokeboxClient,
    id: &EntryId,
    entry: ValidEntry,
) -> Result<CollectionEntry, CoreError> {
    let updated = client
        .update_box_entry(id.as_str(), &entry.into_update())
        .await?;
    Ok(updated.into())
}

pub async fn delete_entry(client: &PokeboxClient, id: &EntryId) -> Result<(), CoreError> {
    client.delete_box_entry(id.as_str()).await?;
    Ok(())
}

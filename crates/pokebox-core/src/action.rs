// ── Actions ──
//
// Everything that can move the session forward: user intents from the
// presentation layer, and results of effects the session executed.

use crate::error::CoreError;
use crate::model::{CatalogEntity, CollectionEntry, EntryId};
use crate::pagination::Direction;
use crate::state::View;
use crate::sync::SyncOutcome;
use crate::validation::EntryDraft;

#[derive(Debug, Clone)]
pub enum Action {
    // ===== Intents =====
    /// Initial load of the active view.
    Start,
    /// Open the details modal for a catalog record (fetched by name).
    SelectEntity(String),
    /// "Add to Box" from the details modal.
    RequestCatch,
    RequestEdit(EntryId),
    RequestDelete(EntryId),
    ConfirmDelete,
    /// Close the active modal (also cancels a pending delete confirmation).
    Cancel,
    SubmitForm(EntryDraft),
    ChangePage(Direction),
    GoToPage(u32),
    SwitchView(View),

    // ===== Results =====
    PageLoaded(Vec<CatalogEntity>),
    PageFailed(CoreError),
    DetailsLoaded(CatalogEntity),
    DetailsFailed(CoreError),
    CollectionSynced(SyncOutcome),
    CollectionFailed(CoreError),
    EntryCreated(CollectionEntry),
    CreateFailed(CoreError),
    EntryUpdated(CollectionEntry),
    UpdateFailed(CoreError),
    EntryDeleted(EntryId),
    DeleteFailed { id: EntryId, error: CoreError },
}

impl Action {
    /// The error carried by a failed result, if this is one.
    pub fn failure(&self) -> Option<&CoreError> {
        match self {
            Self::PageFailed(e)
            | Self::DetailsFailed(e)
            | Self::CollectionFailed(e)
            | Self::CreateFailed(e)
            | Self::UpdateFailed(e)
            | Self::DeleteFailed { error: e, .. } => Some(e),
            Self::CollectionSynced(outcome) => outcome.backfill_error.as_ref(),
            _ => None,
        }
    }
}

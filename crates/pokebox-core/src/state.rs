// ── Session state ──
//
// The single value the reducer transitions. Presentation receives it as
// an immutable snapshot and never mutates it directly.

use std::sync::Arc;

use serde::Serialize;

use crate::model::{CatalogEntity, CollectionEntry, EntryId};
use crate::pagination::Pagination;
use crate::store::CatalogCache;
use crate::validation::ValidationErrors;

/// Top-level view. Exactly one is active.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    #[default]
    Catalog,
    Collection,
}

/// Overlay on top of the active view. At most one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Details(Arc<CatalogEntity>),
    Creating {
        entity: Arc<CatalogEntity>,
        pending: bool,
    },
    Editing {
        entry: CollectionEntry,
        pending: bool,
    },
    ConfirmingDelete {
        id: EntryId,
        pending: bool,
    },
}

impl Modal {
    /// Whether a mutating call for this modal is in flight.
    pub fn is_pending(&self) -> bool {
        match self {
            Self::Details(_) => false,
            Self::Creating { pending, .. }
            | Self::Editing { pending, .. }
            | Self::ConfirmingDelete { pending, .. } => *pending,
        }
    }
}

/// In-flight fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Loading {
    pub page: bool,
    pub details: bool,
    pub collection: bool,
}

impl Loading {
    pub fn any(&self) -> bool {
        self.page || self.details || self.collection
    }
}

/// How the current error should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Nothing else to show: the error replaces the catalog grid.
    FullScreen,
    /// Prior data stays visible with the error alongside it.
    Banner,
}

/// A Box entry with its catalog record, if already cached.
#[derive(Debug, Clone, Copy)]
pub struct CollectionRow<'a> {
    pub entry: &'a CollectionEntry,
    pub entity: Option<&'a Arc<CatalogEntity>>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub view: View,
    pub modal: Option<Modal>,
    pub pagination: Pagination,
    /// Records on the current catalog page, in server order.
    pub catalog_page: Vec<Arc<CatalogEntity>>,
    pub cache: CatalogCache,
    pub entries: Vec<CollectionEntry>,
    pub loading: Loading,
    /// Most recent failure, shared by every operation.
    pub error: Option<String>,
    /// Field messages from the last rejected form submission.
    pub form_errors: Option<ValidationErrors>,
}

impl SessionState {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            ..Self::default()
        }
    }

    pub fn error_display(&self) -> Option<ErrorDisplay> {
        self.error.as_ref()?;
        if self.view == View::Catalog && self.catalog_page.is_empty() {
            Some(ErrorDisplay::FullScreen)
        } else {
            Some(ErrorDisplay::Banner)
        }
    }

    /// Top-level view switching is blocked while anything is loading.
    pub fn can_switch_view(&self) -> bool {
        !self.loading.any()
    }

    pub fn is_pending(&self) -> bool {
        self.modal.as_ref().is_some_and(Modal::is_pending)
    }

    /// Pair every Box entry with its cached catalog record.
    ///
    /// `entity` is `None` for entries whose record has not arrived yet.
    pub fn collection_rows(&self) -> Vec<CollectionRow<'_>> {
        self.entries
            .iter()
            .map(|entry| CollectionRow {
                entry,
                entity: self.cache.get(entry.pokemon_id),
            })
            .collect()
    }

    pub fn entry(&self, id: &EntryId) -> Option<&CollectionEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }
}

// pokebox-core: Catalog cache, pagination, collection sync and the
// session state machine between pokebox-api and presentation.

pub mod action;
pub mod config;
pub mod convert;
pub mod effect;
pub mod error;
pub mod fanout;
pub mod model;
pub mod pagination;
pub mod reducer;
pub mod session;
pub mod state;
pub mod store;
pub mod sync;
pub mod validation;

#[cfg(test)]
mod test_support;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::Action;
pub use config::{SessionConfig, TlsVerification};
pub use effect::Effect;
pub use error::CoreError;
pub use pagination::{Direction, FetchWindow, Pagination};
pub use reducer::reduce;
pub use session::Session;
pub use state::{CollectionRow, ErrorDisplay, Loading, Modal, SessionState, View};
pub use store::CatalogCache;
pub use sync::SyncOutcome;
pub use validation::{EntryDraft, ValidEntry, ValidationErrors};

pub use model::{
    CatalogEntity, CatalogId, CollectionEntry, EntryId, Move, PokemonType, Sprites, Stats,
};

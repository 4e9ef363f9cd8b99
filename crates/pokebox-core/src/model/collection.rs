use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CatalogId, EntryId};

/// A caught Pokemon stored in the Box.
///
/// `pokemon_id` is a lazy reference: the matching catalog record may not
/// be cached yet when the entry arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: EntryId,
    pub pokemon_id: CatalogId,
    pub level: u8,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub notes: Option<String>,
}

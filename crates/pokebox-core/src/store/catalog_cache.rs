// ── Catalog cache ──
//
// Identifier-keyed map of every catalog record fetched this session.
// Grows monotonically: pages, details and backfill all merge into it and
// nothing is ever evicted. It never fetches on its own.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::model::{CatalogEntity, CatalogId};

#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    entries: HashMap<CatalogId, Arc<CatalogEntity>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union a batch into the cache, overwriting on key collision.
    ///
    /// Returns how many identifiers were not present before.
    pub fn merge<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Arc<CatalogEntity>>,
    {
        let mut added = 0;
        for entity in batch {
            let entity: Arc<CatalogEntity> = entity.into();
            if self.entries.insert(entity.id, entity).is_none() {
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, id: CatalogId) -> Option<&Arc<CatalogEntity>> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: CatalogId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Identifiers from `ids` that are not cached yet, sorted and de-duplicated.
    pub fn missing<I>(&self, ids: I) -> Vec<CatalogId>
    where
        I: IntoIterator<Item = CatalogId>,
    {
        ids.into_iter()
            .filter(|id| !self.contains(*id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<CatalogEntity>> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::entity;

    #[test]
    fn merge_counts_new_keys() {
        let mut cache = CatalogCache::new();
        assert_eq!(cache.merge([entity(1, "BULBASAUR"), entity(2, "IVYSAUR")]), 2);
        assert_eq!(cache.merge([entity(2, "IVYSAUR"), entity(3, "VENUSAUR")]), 1);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn merging_same_batch_twice_is_idempotent() {
        let batch = vec![entity(4, "CHARMANDER"), entity(5, "CHARMELEON")];
        let mut once = CatalogCache::new();
        once.merge(batch.clone());
        let mut twice = CatalogCache::new();
        twice.merge(batch.clone());
        assert_eq!(twice.merge(batch), 0);

        let mut a: Vec<_> = once.iter().map(|e| (**e).clone()).collect();
        let mut b: Vec<_> = twice.iter().map(|e| (**e).clone()).collect();
        a.sort_by_key(|e| e.id);
        b.sort_by_key(|e| e.id);
        assert_eq!(a, b);
    }

    #[test]
    fn collision_overwrites() {
        let mut cache = CatalogCache::new();
        cache.merge([entity(7, "old")]);
        cache.merge([entity(7, "SQUIRTLE")]);
        assert_eq!(cache.get(CatalogId::new(7)).map(|e| e.name.as_str()), Some("SQUIRTLE"));
    }

    #[test]
    fn missing_is_sorted_and_unique() {
        let mut cache = CatalogCache::new();
        cache.merge([entity(2, "IVYSAUR")]);
        let ids = [9, 2, 3, 9, 1].map(CatalogId::new);
        assert_eq!(cache.missing(ids), [1, 3, 9].map(CatalogId::new).to_vec());
        assert!(cache.get(CatalogId::new(9)).is_none());
    }
}

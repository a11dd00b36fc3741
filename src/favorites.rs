//! Favorites Store
//!
//! Ordered, de-duplicated list of at most four favorite counter ids,
//! persisted as a JSON array under the `favs` key.

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const FAVORITES_KEY: &str = "favs";
pub const MAX_FAVORITES: usize = 4;

/// Result of toggling a counter's favorite status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Not added because the list is already full
    Full,
}

/// Drop duplicates (first occurrence wins), keep the first four
pub fn normalize(ids: &[u32]) -> Vec<u32> {
    let mut result = Vec::with_capacity(MAX_FAVORITES);
    for &id in ids {
        if result.len() == MAX_FAVORITES {
            break;
        }
        if !result.contains(&id) {
            result.push(id);
        }
    }
    result
}

/// Parse a persisted value. Anything that is not a JSON array of ids
/// counts as no favorites.
pub fn decode(raw: Option<&str>) -> Vec<u32> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<u32>>(raw) {
        Ok(ids) => normalize(&ids),
        Err(err) => {
            log::warn!("Ignoring malformed favorites entry: {}", err);
            Vec::new()
        }
    }
}

/// Read favorites from the backend, failing soft
pub fn load_ids(backend: &impl KeyValueStore) -> Vec<u32> {
    decode(backend.get(FAVORITES_KEY).as_deref())
}

/// Move `source` to the index `target` occupies, then truncate.
/// Unchanged (apart from truncation) when source equals target or
/// either id is missing.
pub fn reorder(ids: &[u32], source: u32, target: u32) -> Vec<u32> {
    let mut moved = ids.to_vec();
    let from = ids.iter().position(|&id| id == source);
    let to = ids.iter().position(|&id| id == target);
    if let (Some(from), Some(to)) = (from, to) {
        if from != to {
            let id = moved.remove(from);
            moved.insert(to, id);
        }
    }
    moved.truncate(MAX_FAVORITES);
    moved
}

/// Favorites held in memory and mirrored to a key-value backend.
/// Every mutation goes through `save`, so both copies stay equal.
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    backend: S,
    ids: Vec<u32>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn load(backend: S) -> Self {
        let ids = load_ids(&backend);
        Self { backend, ids }
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_FAVORITES
    }

    /// Replace the list. Memory is updated even if the write fails.
    pub fn save(&mut self, ids: &[u32]) -> Result<(), StorageError> {
        self.ids = normalize(ids);
        let encoded = serde_json::to_string(&self.ids).map_err(|err| StorageError::Encode(err.to_string()))?;
        self.backend
            .set(FAVORITES_KEY, &encoded)
            .inspect_err(|err| log::warn!("Failed to persist favorites: {}", err))
    }

    pub fn reorder(&mut self, source: u32, target: u32) -> Result<(), StorageError> {
        let reordered = reorder(&self.ids, source, target);
        self.save(&reordered)
    }

    pub fn toggle(&mut self, id: u32) -> Result<ToggleOutcome, StorageError> {
        if self.contains(id) {
            let remaining: Vec<u32> = self.ids.iter().copied().filter(|&fav| fav != id).collect();
            self.save(&remaining)?;
            return Ok(ToggleOutcome::Removed);
        }
        if self.is_full() {
            return Ok(ToggleOutcome::Full);
        }
        let mut extended = self.ids.clone();
        extended.push(id);
        self.save(&extended)?;
        Ok(ToggleOutcome::Added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    #[test]
    fn test_load_absent() {
        let store = FavoritesStore::load(MemoryStorage::default());
        assert!(store.ids().is_empty());
    }

    #[test]
    fn test_load_malformed() {
        for raw in ["not json", "{\"a\":1}", "[1,\"x\"]", "[-3]", ""] {
            let store = FavoritesStore::load(MemoryStorage::with_entry(FAVORITES_KEY, raw));
            assert!(store.ids().is_empty(), "{raw:?} should load as empty");
        }
    }

    #[test]
    fn test_load_normalizes() {
        let store = FavoritesStore::load(MemoryStorage::with_entry(FAVORITES_KEY, "[3,3,1,2,5,6]"));
        assert_eq!(store.ids(), &[3, 1, 2, 5]);
    }

    #[test]
    fn test_save_persists_truncated() {
        let backend = MemoryStorage::default();
        let mut store = FavoritesStore::load(backend.clone());
        store.save(&[9, 8, 7, 6, 5]).unwrap();
        assert_eq!(store.ids(), &[9, 8, 7, 6]);
        assert_eq!(backend.get(FAVORITES_KEY).as_deref(), Some("[9,8,7,6]"));
    }

    #[test]
    fn test_save_failure_keeps_memory() {
        let mut store = FavoritesStore::load(MemoryStorage::read_only());
        assert!(store.save(&[1, 2]).is_err());
        assert_eq!(store.ids(), &[1, 2]);
    }

    #[test]
    fn test_reorder_moves_to_target_index() {
        assert_eq!(reorder(&[1, 2, 3, 4], 1, 3), vec![2, 3, 1, 4]);
        assert_eq!(reorder(&[1, 2, 3, 4], 4, 2), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_reorder_noop() {
        assert_eq!(reorder(&[1, 2, 3], 2, 2), vec![1, 2, 3]);
        assert_eq!(reorder(&[1, 2, 3], 2, 9), vec![1, 2, 3]);
        assert_eq!(reorder(&[1, 2, 3], 9, 2), vec![1, 2, 3]);
    }

    #[test]
    fn test_reorder_truncates() {
        assert_eq!(reorder(&[1, 2, 3, 4, 5, 6], 6, 1), vec![6, 1, 2, 3]);
        assert_eq!(reorder(&[1, 2, 3, 4, 5, 6], 1, 1).len(), MAX_FAVORITES);
    }

    #[test]
    fn test_store_reorder_persists() {
        let backend = MemoryStorage::with_entry(FAVORITES_KEY, "[1,2,3]");
        let mut store = FavoritesStore::load(backend.clone());
        store.reorder(3, 1).unwrap();
        assert_eq!(store.ids(), &[3, 1, 2]);
        assert_eq!(load_ids(&backend), vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle() {
        let mut store = FavoritesStore::load(MemoryStorage::default());
        assert_eq!(store.toggle(5).unwrap(), ToggleOutcome::Added);
        assert_eq!(store.toggle(6).unwrap(), ToggleOutcome::Added);
        assert_eq!(store.toggle(5).unwrap(), ToggleOutcome::Removed);
        assert_eq!(store.ids(), &[6]);
    }

    #[test]
    fn test_toggle_when_full() {
        let mut store = FavoritesStore::load(MemoryStorage::with_entry(FAVORITES_KEY, "[1,2,3,4]"));
        assert_eq!(store.toggle(5).unwrap(), ToggleOutcome::Full);
        assert_eq!(store.ids(), &[1, 2, 3, 4]);
        assert_eq!(store.toggle(2).unwrap(), ToggleOutcome::Removed);
        assert_eq!(store.toggle(5).unwrap(), ToggleOutcome::Added);
        assert_eq!(store.ids(), &[1, 3, 4, 5]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Save(Vec<u32>),
        Reorder(u32, u32),
        Toggle(u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            prop::collection::vec(0u32..10, 0..10).prop_map(Op::Save),
            (0u32..10, 0u32..10).prop_map(|(a, b)| Op::Reorder(a, b)),
            (0u32..10).prop_map(Op::Toggle),
        ]
    }

    proptest! {
        #[test]
        fn save_then_load_round_trips(ids in prop::collection::hash_set(any::<u32>(), 0..=MAX_FAVORITES)) {
            let ids: Vec<u32> = ids.into_iter().collect();
            let backend = MemoryStorage::default();
            let mut store = FavoritesStore::load(backend.clone());
            store.save(&ids).unwrap();
            let loaded = FavoritesStore::load(backend);
            prop_assert_eq!(loaded.ids(), ids.as_slice());
        }

        #[test]
        fn adjacent_reorder_is_undone_by_swapped_reorder(
            ids in prop::collection::hash_set(any::<u32>(), 2..=MAX_FAVORITES),
            pick in any::<prop::sample::Index>(),
        ) {
            let ids: Vec<u32> = ids.into_iter().collect();
            let i = pick.index(ids.len() - 1);
            let (a, b) = (ids[i], ids[i + 1]);
            let once = reorder(&ids, a, b);
            prop_assert_eq!(reorder(&once, b, a), ids.clone());
            let once = reorder(&ids, b, a);
            prop_assert_eq!(reorder(&once, a, b), ids);
        }

        #[test]
        fn never_more_than_four_or_duplicated(
            initial in prop::collection::vec(0u32..10, 0..10),
            ops in prop::collection::vec(op(), 0..20),
        ) {
            let mut store = FavoritesStore::load(MemoryStorage::default());
            store.save(&initial).unwrap();
            for op in ops {
                match op {
                    Op::Save(ids) => store.save(&ids).unwrap(),
                    Op::Reorder(a, b) => store.reorder(a, b).unwrap(),
                    Op::Toggle(id) => { store.toggle(id).unwrap(); }
                }
                let ids = store.ids();
                prop_assert!(ids.len() <= MAX_FAVORITES);
                prop_assert_eq!(normalize(ids), ids.to_vec());
            }
        }

        #[test]
        fn pure_reorder_never_exceeds_four(
            ids in prop::collection::vec(any::<u32>(), 0..12),
            a in any::<u32>(),
            b in any::<u32>(),
        ) {
            prop_assert!(reorder(&ids, a, b).len() <= MAX_FAVORITES);
        }
    }
}

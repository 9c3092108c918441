//! # Memory Storage Adapters
//!
//! In-memory implementations of the three store ports.
//! Fast, but volatile (data lost on shutdown).
//!
//! Good for:
//! - Testing
//! - Single-process deployments
//! - Small fleets
//!
//! Collections are guarded by `parking_lot::RwLock`, so the adapters satisfy
//! the `&self` port contracts and are freely shareable across threads. Ids
//! are minted from a per-store atomic counter, starting at 1.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::core::{
    EntryId, Item, ItemId, LedgerEntry, Mover, MoverId, NewEntry, NewItem, NewMover,
};
use crate::ports::{ItemStore, LedgerStore, MoverStore, StoreResult};

/// In-memory item store.
#[derive(Default)]
pub struct MemoryItems {
    items: RwLock<HashMap<ItemId, Item>>,
    next_id: AtomicU64,
}

impl MemoryItems {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_id(&self) -> ItemId {
        ItemId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl ItemStore for MemoryItems {
    fn create(&self, draft: NewItem) -> StoreResult<Item> {
        let item = draft.into_item(self.mint_id());
        self.items.write().insert(item.id, item.clone());
        Ok(item)
    }

    fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        Ok(self.items.read().get(&id).cloned())
    }

    fn all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.read().values().cloned().collect())
    }
}

/// In-memory mover registry.
///
/// Backed by a `Vec` rather than a map: `all()` must return registry
/// insertion order because the ranking tie-break is defined on it. Linear
/// scans are fine at fleet scale.
#[derive(Default)]
pub struct MemoryMovers {
    movers: RwLock<Vec<Mover>>,
    next_id: AtomicU64,
}

impl MemoryMovers {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_id(&self) -> MoverId {
        MoverId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl MoverStore for MemoryMovers {
    fn create(&self, draft: NewMover) -> StoreResult<Mover> {
        let mover = draft.into_mover(self.mint_id());
        self.movers.write().push(mover.clone());
        Ok(mover)
    }

    fn get(&self, id: MoverId) -> StoreResult<Option<Mover>> {
        Ok(self.movers.read().iter().find(|m| m.id == id).cloned())
    }

    fn save(&self, mover: &Mover) -> StoreResult<()> {
        let mut movers = self.movers.write();
        match movers.iter_mut().find(|m| m.id == mover.id) {
            Some(slot) => *slot = mover.clone(),
            None => movers.push(mover.clone()),
        }
        Ok(())
    }

    fn all(&self) -> StoreResult<Vec<Mover>> {
        Ok(self.movers.read().clone())
    }
}

/// In-memory append-only mission ledger.
#[derive(Default)]
pub struct MemoryLedger {
    entries: RwLock<Vec<LedgerEntry>>,
    next_id: AtomicU64,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_id(&self) -> EntryId {
        EntryId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl LedgerStore for MemoryLedger {
    fn append(&self, draft: NewEntry) -> StoreResult<LedgerEntry> {
        let entry = draft.into_entry(self.mint_id());
        self.entries.write().push(entry.clone());
        Ok(entry)
    }

    fn all(&self) -> StoreResult<Vec<LedgerEntry>> {
        Ok(self.entries.read().clone())
    }

    fn for_mover(&self, id: MoverId) -> StoreResult<Vec<LedgerEntry>> {
        Ok(self
            .entries
            .read()
            .iter()
            .filter(|e| e.mover_id == id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LedgerState, MoverState};

    #[test]
    fn test_memory_items_create_and_get() {
        let store = MemoryItems::new();

        let item = store.create(NewItem::new("anvil", 12.0).unwrap()).unwrap();

        assert_eq!(item.id, ItemId(1));
        let fetched = store.get(item.id).unwrap().unwrap();
        assert_eq!(fetched.name, "anvil");
        assert_eq!(fetched.weight, 12.0);
    }

    #[test]
    fn test_memory_items_missing_is_none() {
        let store = MemoryItems::new();
        assert!(store.get(ItemId(99)).unwrap().is_none());
    }

    #[test]
    fn test_memory_items_ids_are_sequential() {
        let store = MemoryItems::new();
        let a = store.create(NewItem::new("a", 1.0).unwrap()).unwrap();
        let b = store.create(NewItem::new("b", 1.0).unwrap()).unwrap();
        assert_eq!(a.id, ItemId(1));
        assert_eq!(b.id, ItemId(2));
    }

    #[test]
    fn test_memory_movers_all_keeps_insertion_order() {
        let store = MemoryMovers::new();
        for limit in [10.0, 20.0, 30.0] {
            store.create(NewMover::new(limit).unwrap()).unwrap();
        }

        let limits: Vec<f64> = store.all().unwrap().iter().map(|m| m.weight_limit).collect();
        assert_eq!(limits, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_memory_movers_save_upserts_in_place() {
        let store = MemoryMovers::new();
        let mut mover = store.create(NewMover::new(10.0).unwrap()).unwrap();
        store.create(NewMover::new(20.0).unwrap()).unwrap();

        mover.state = MoverState::Loading;
        mover.cargo.push(ItemId(1));
        store.save(&mover).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        // Updated in place; registry order unchanged
        assert_eq!(all[0].id, mover.id);
        assert_eq!(all[0].state, MoverState::Loading);
        assert_eq!(all[0].cargo, vec![ItemId(1)]);
    }

    #[test]
    fn test_memory_ledger_appends_in_order() {
        let store = MemoryLedger::new();
        store
            .append(NewEntry::load(MoverId(1), vec![ItemId(1)]))
            .unwrap();
        store.append(NewEntry::start(MoverId(1))).unwrap();
        store
            .append(NewEntry::load(MoverId(2), vec![ItemId(2)]))
            .unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].state, LedgerState::LoadBeforeMissionStart);
        assert_eq!(all[1].state, LedgerState::MissionStarted);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_memory_ledger_for_mover_filters() {
        let store = MemoryLedger::new();
        store.append(NewEntry::start(MoverId(1))).unwrap();
        store.append(NewEntry::start(MoverId(2))).unwrap();
        store
            .append(NewEntry::end(MoverId(1), vec![ItemId(3)]))
            .unwrap();

        let entries = store.for_mover(MoverId(1)).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.mover_id == MoverId(1)));
    }
}

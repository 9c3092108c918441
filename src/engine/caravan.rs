//! # Caravan Engine
//!
//! The mission engine: mover lifecycle state machine, load-weight admission
//! control, and ledger recording.
//!
//! This struct wires together:
//! - Item store (weight lookups)
//! - Mover registry (lifecycle state)
//! - Mission ledger (append-only transition log)
//!
//! And exposes the plain operations a thin API layer calls.
//!
//! ## Concurrency
//!
//! Operations on different movers may run concurrently; operations on the
//! same mover are serialized through a per-mover lock held for the whole
//! read-modify-write-append span. Without that span, two concurrent loads
//! could each pass admission against a stale carried-weight snapshot and
//! jointly exceed the limit.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::adapters::storage::{MemoryItems, MemoryLedger, MemoryMovers};
use crate::core::{
    Item, ItemId, LedgerEntry, Mover, MoverId, MoverState, NewEntry, NewItem, NewMover,
};
use crate::engine::report::{self, MissionTally};
use crate::error::{Error, Result};
use crate::ports::{ItemStore, LedgerStore, MoverStore, StoreError};

/// Per-mover lock registry.
///
/// Lock objects are created lazily on first use and kept for the life of the
/// engine (movers are never deleted, so the map only grows with the fleet).
#[derive(Default)]
struct MoverLocks {
    inner: Mutex<HashMap<MoverId, Arc<Mutex<()>>>>,
}

impl MoverLocks {
    fn for_mover(&self, id: MoverId) -> Arc<Mutex<()>> {
        self.inner.lock().entry(id).or_default().clone()
    }
}

/// The mission engine.
///
/// Holds no domain state of its own, only references to the injected stores.
pub struct Caravan {
    items: Box<dyn ItemStore>,
    movers: Box<dyn MoverStore>,
    ledger: Box<dyn LedgerStore>,
    locks: MoverLocks,
}

impl Caravan {
    /// Create an engine backed by the in-memory adapters.
    ///
    /// For production, use [`Caravan::with_stores`] with persistent backends.
    pub fn in_memory() -> Self {
        Self::with_stores(
            Box::new(MemoryItems::new()),
            Box::new(MemoryMovers::new()),
            Box::new(MemoryLedger::new()),
        )
    }

    /// Create an engine over injected store adapters.
    pub fn with_stores(
        items: Box<dyn ItemStore>,
        movers: Box<dyn MoverStore>,
        ledger: Box<dyn LedgerStore>,
    ) -> Self {
        Self {
            items,
            movers,
            ledger,
            locks: MoverLocks::default(),
        }
    }

    // ========================================================================
    // CREATION
    // ========================================================================

    /// Register a new mover. It starts `resting` with empty cargo.
    ///
    /// Fails with [`Error::Validation`] for a non-finite or non-positive
    /// weight limit; nothing is persisted in that case.
    pub fn create_mover(&self, weight_limit: f64) -> Result<Mover> {
        let draft = NewMover::new(weight_limit)?;
        let mover = self
            .movers
            .create(draft)
            .map_err(|e| self.store_failure("mover create", e))?;
        log::debug!("registered mover {} (limit {})", mover.id, mover.weight_limit);
        Ok(mover)
    }

    /// Register a new item.
    ///
    /// Fails with [`Error::Validation`] for an empty name or a non-positive
    /// weight; nothing is persisted in that case.
    pub fn create_item(&self, name: impl Into<String>, weight: f64) -> Result<Item> {
        let draft = NewItem::new(name, weight)?;
        let item = self
            .items
            .create(draft)
            .map_err(|e| self.store_failure("item create", e))?;
        log::debug!("registered item {} ({}, {})", item.id, item.name, item.weight);
        Ok(item)
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Load items onto a mover.
    ///
    /// Allowed from `resting` or `loading`; repeated loads accumulate. The
    /// admission check runs strictly before any mutation: if the carried
    /// total plus the requested total exceeds the limit, the mover is left
    /// byte-for-byte unchanged. A single missing item id fails the whole
    /// call.
    pub fn load(&self, mover_id: MoverId, item_ids: &[ItemId]) -> Result<LedgerEntry> {
        let lock = self.locks.for_mover(mover_id);
        let _guard = lock.lock();

        let mut mover = self.fetch_mover(mover_id)?;
        if mover.is_on_mission() {
            return Err(Error::Conflict("cannot load more"));
        }

        // Resolve every requested item before touching anything.
        let mut requested_weight = 0.0;
        for &id in item_ids {
            requested_weight += self.fetch_item(id)?.weight;
        }

        let attempted = self.carried_weight(&mover)? + requested_weight;
        if attempted > mover.weight_limit {
            return Err(Error::CapacityExceeded {
                limit: mover.weight_limit,
                attempted,
            });
        }

        let before = mover.clone();
        mover.cargo.extend_from_slice(item_ids);
        mover.state = MoverState::Loading;
        self.movers
            .save(&mover)
            .map_err(|e| self.store_failure("mover save", e))?;

        let entry =
            self.append_or_rollback(NewEntry::load(mover_id, item_ids.to_vec()), &before)?;
        log::debug!(
            "mover {} loaded {} item(s), carrying {:.1}/{:.1}",
            mover_id,
            item_ids.len(),
            attempted,
            mover.weight_limit
        );
        Ok(entry)
    }

    /// Start a mission. Allowed only from `loading`.
    pub fn start_mission(&self, mover_id: MoverId) -> Result<LedgerEntry> {
        let lock = self.locks.for_mover(mover_id);
        let _guard = lock.lock();

        let mut mover = self.fetch_mover(mover_id)?;
        if mover.state != MoverState::Loading {
            return Err(Error::InvalidTransition {
                state: mover.state,
                action: "start a mission",
            });
        }

        let before = mover.clone();
        mover.state = MoverState::OnMission;
        self.movers
            .save(&mover)
            .map_err(|e| self.store_failure("mover save", e))?;

        let entry = self.append_or_rollback(NewEntry::start(mover_id), &before)?;
        log::debug!("mover {} started a mission", mover_id);
        Ok(entry)
    }

    /// End a mission. Allowed only from `on-mission`.
    ///
    /// The ledger entry lists exactly the items carried immediately before
    /// the call; the cargo is then cleared and the mover rests.
    pub fn end_mission(&self, mover_id: MoverId) -> Result<LedgerEntry> {
        let lock = self.locks.for_mover(mover_id);
        let _guard = lock.lock();

        let mut mover = self.fetch_mover(mover_id)?;
        if mover.state != MoverState::OnMission {
            return Err(Error::InvalidTransition {
                state: mover.state,
                action: "end a mission",
            });
        }

        let before = mover.clone();
        let unloaded = std::mem::take(&mut mover.cargo);
        mover.state = MoverState::Resting;
        self.movers
            .save(&mover)
            .map_err(|e| self.store_failure("mover save", e))?;

        let entry =
            self.append_or_rollback(NewEntry::end(mover_id, unloaded), &before)?;
        log::debug!(
            "mover {} ended a mission, unloaded {} item(s)",
            mover_id,
            entry.items_unloaded.len()
        );
        Ok(entry)
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Fetch a mover by id.
    pub fn mover(&self, id: MoverId) -> Result<Mover> {
        self.fetch_mover(id)
    }

    /// Fetch an item by id.
    pub fn item(&self, id: ItemId) -> Result<Item> {
        self.fetch_item(id)
    }

    /// All movers, in registry order.
    pub fn fleet(&self) -> Result<Vec<Mover>> {
        self.movers
            .all()
            .map_err(|e| self.store_failure("mover scan", e))
    }

    /// All items.
    pub fn inventory(&self) -> Result<Vec<Item>> {
        self.items
            .all()
            .map_err(|e| self.store_failure("item scan", e))
    }

    /// One mover's transition history, in append order.
    pub fn history(&self, mover_id: MoverId) -> Result<Vec<LedgerEntry>> {
        self.ledger
            .for_mover(mover_id)
            .map_err(|e| self.store_failure("ledger scan", e))
    }

    /// Movers ranked by completed missions, descending. See
    /// [`report::rank_by_completed_missions`] for the tie-break rule.
    pub fn rank_by_completed_missions(&self) -> Result<Vec<MissionTally>> {
        report::rank_by_completed_missions(self.movers.as_ref(), self.ledger.as_ref())
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn fetch_mover(&self, id: MoverId) -> Result<Mover> {
        self.movers
            .get(id)
            .map_err(|e| self.store_failure("mover lookup", e))?
            .ok_or(Error::MoverNotFound(id))
    }

    fn fetch_item(&self, id: ItemId) -> Result<Item> {
        self.items
            .get(id)
            .map_err(|e| self.store_failure("item lookup", e))?
            .ok_or(Error::ItemNotFound(id))
    }

    /// Sum of the weights of everything the mover currently carries.
    fn carried_weight(&self, mover: &Mover) -> Result<f64> {
        let mut total = 0.0;
        for &id in &mover.cargo {
            total += self.fetch_item(id)?.weight;
        }
        Ok(total)
    }

    /// Append a ledger entry, or restore the pre-transition mover snapshot
    /// if the append fails, so registry and ledger never diverge.
    fn append_or_rollback(&self, draft: NewEntry, before: &Mover) -> Result<LedgerEntry> {
        match self.ledger.append(draft) {
            Ok(entry) => Ok(entry),
            Err(err) => {
                if let Err(undo) = self.movers.save(before) {
                    log::error!("rollback of mover {} failed: {}", before.id, undo);
                }
                Err(self.store_failure("ledger append", err))
            }
        }
    }

    fn store_failure(&self, op: &str, err: StoreError) -> Error {
        log::error!("{op} failed: {err}");
        Error::Store(err)
    }
}

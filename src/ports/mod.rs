//! # Ports
//!
//! Trait contracts the engine consumes for persistence.
//!
//! The engine never touches a concrete backend; it holds these traits behind
//! `Box<dyn _>` and any adapter that satisfies them can be swapped in. The
//! contracts are deliberately narrow: by-id lookup and upsert for movers and
//! items, append and scan for the ledger.
//!
//! All methods take `&self`; adapters are responsible for their own interior
//! consistency. Cross-call atomicity (the read-modify-write span of a
//! transition) is the engine's job, via its per-mover locks.

use thiserror::Error;

use crate::core::{
    Item, ItemId, LedgerEntry, Mover, MoverId, NewEntry, NewItem, NewMover,
};

/// Opaque persistence failure.
///
/// Adapters fold whatever their backend throws into this; the engine treats
/// it as unexpected infrastructure trouble, logs it, and surfaces it as-is.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias for port operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence contract for items.
pub trait ItemStore: Send + Sync {
    /// Persist a validated draft, minting its id and creation timestamp.
    fn create(&self, draft: NewItem) -> StoreResult<Item>;

    /// Fetch by id. `Ok(None)` means "no such item", not a failure.
    fn get(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// All items. Order is adapter-defined and not relied upon.
    fn all(&self) -> StoreResult<Vec<Item>>;
}

/// Persistence contract for the mover registry.
pub trait MoverStore: Send + Sync {
    /// Persist a validated draft, minting its id and creation timestamp.
    fn create(&self, draft: NewMover) -> StoreResult<Mover>;

    /// Fetch by id. `Ok(None)` means "no such mover", not a failure.
    fn get(&self, id: MoverId) -> StoreResult<Option<Mover>>;

    /// Upsert by id. The engine calls this after every transition.
    fn save(&self, mover: &Mover) -> StoreResult<()>;

    /// All movers in registry order. Ranking tie-breaks depend on this
    /// order, so adapters must keep it stable (the memory adapter uses
    /// insertion order).
    fn all(&self) -> StoreResult<Vec<Mover>>;
}

/// Persistence contract for the append-only mission ledger.
pub trait LedgerStore: Send + Sync {
    /// Append one entry, minting its id and timestamp. Entries are never
    /// mutated or deleted afterwards.
    fn append(&self, draft: NewEntry) -> StoreResult<LedgerEntry>;

    /// All entries, in append order.
    fn all(&self) -> StoreResult<Vec<LedgerEntry>>;

    /// Entries for one mover, in append order.
    fn for_mover(&self, id: MoverId) -> StoreResult<Vec<LedgerEntry>>;
}

//! # Core Domain
//!
//! Pure entities, no I/O.
//!
//! Everything here is constructed through validated drafts (`NewItem`,
//! `NewMover`, `NewEntry`), so malformed data cannot enter a store. Stores
//! mint ids; the engine owns all mutation.

mod id;
mod item;
mod ledger;
mod mover;

pub use id::{EntryId, ItemId, MoverId};
pub use item::{Item, NewItem};
pub use ledger::{LedgerEntry, LedgerState, NewEntry};
pub use mover::{Mover, MoverState, NewMover};

//! # Caravan - Mission Dispatch Core
//!
//! Caravan manages a fleet of carrier agents ("movers") that transport
//! weighted items through a cycle of rest, loading, and mission phases,
//! recording an auditable mission history along the way.
//!
//! ## Philosophy
//!
//! - **The state machine is the product** - everything else is plumbing
//! - **Admission before mutation** - a load is all-or-nothing
//! - **The ledger only grows** - transitions are recorded, never rewritten
//! - **Pure core, swappable adapters** - hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CARAVAN                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure domain, no I/O)                                 │
//! │    Item, Mover, MoverState, LedgerEntry, ids                │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    ItemStore, MoverStore, LedgerStore                       │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Storage: Memory                                           │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Caravan - transitions, admission control, ranking        │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use caravan::Caravan;
//!
//! let caravan = Caravan::in_memory();
//!
//! let mover = caravan.create_mover(10.0)?;
//! let anvil = caravan.create_item("anvil", 6.0)?;
//!
//! caravan.load(mover.id, &[anvil.id])?;
//! caravan.start_mission(mover.id)?;
//! caravan.end_mission(mover.id)?;
//!
//! let ranking = caravan.rank_by_completed_missions()?;
//! ```
//!
//! The crate is transport-agnostic: an HTTP layer maps [`Error`] variants to
//! status codes and envelopes the returned entities however it likes.

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure entities, no I/O
/// Contains: Item, Mover, LedgerEntry, validated drafts, id newtypes
pub mod core;

/// Error taxonomy - one typed enum for every engine failure
pub mod error;

/// Port definitions - trait contracts for persistence adapters
/// Contains: ItemStore, MoverStore, LedgerStore, StoreError
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: in-memory storage
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Caravan main struct, mission ranking
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{
    EntryId, Item, ItemId, LedgerEntry, LedgerState, Mover, MoverId, MoverState, NewEntry,
    NewItem, NewMover,
};

// Errors
pub use crate::error::{Error, Result};

// Port traits
pub use crate::ports::{ItemStore, LedgerStore, MoverStore, StoreError, StoreResult};

// Adapters
pub use crate::adapters::storage::{MemoryItems, MemoryLedger, MemoryMovers};

// Engine
pub use crate::engine::{Caravan, MissionTally};

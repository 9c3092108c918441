//! Mission ledger entries: immutable records of state transitions.
//!
//! One entry is appended per transition and never mutated or deleted. Load
//! and start events record items loaded; end events record items unloaded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{EntryId, ItemId, MoverId};

/// Transition label carried by a ledger entry.
///
/// The display strings are part of the persisted format and match the
/// labels the ledger has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerState {
    /// Items were admitted onto a mover that has not yet departed.
    #[serde(rename = "load before mission start")]
    LoadBeforeMissionStart,
    #[serde(rename = "mission started")]
    MissionStarted,
    #[serde(rename = "mission ended")]
    MissionEnded,
}

impl fmt::Display for LedgerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LedgerState::LoadBeforeMissionStart => "load before mission start",
            LedgerState::MissionStarted => "mission started",
            LedgerState::MissionEnded => "mission ended",
        };
        f.write_str(label)
    }
}

/// A persisted, append-only ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub mover_id: MoverId,
    pub state: LedgerState,
    /// Items newly admitted by this transition (load events only).
    pub items_loaded: Vec<ItemId>,
    /// Items released by this transition (end events only).
    pub items_unloaded: Vec<ItemId>,
    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// A completed mission is an end entry that actually delivered cargo.
    pub fn is_completed_mission(&self) -> bool {
        self.state == LedgerState::MissionEnded && !self.items_unloaded.is_empty()
    }
}

/// A ledger entry draft; the store mints the id and timestamp on append.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub mover_id: MoverId,
    pub state: LedgerState,
    pub items_loaded: Vec<ItemId>,
    pub items_unloaded: Vec<ItemId>,
}

impl NewEntry {
    /// Record a load: `items` are the ids newly admitted by this call.
    pub fn load(mover_id: MoverId, items: Vec<ItemId>) -> Self {
        Self {
            mover_id,
            state: LedgerState::LoadBeforeMissionStart,
            items_loaded: items,
            items_unloaded: Vec::new(),
        }
    }

    /// Record a mission start. Carries no item references.
    pub fn start(mover_id: MoverId) -> Self {
        Self {
            mover_id,
            state: LedgerState::MissionStarted,
            items_loaded: Vec::new(),
            items_unloaded: Vec::new(),
        }
    }

    /// Record a mission end: `items` is the full cargo unloaded.
    pub fn end(mover_id: MoverId, items: Vec<ItemId>) -> Self {
        Self {
            mover_id,
            state: LedgerState::MissionEnded,
            items_loaded: Vec::new(),
            items_unloaded: items,
        }
    }

    /// Materialize the draft. Called by store adapters on append.
    pub fn into_entry(self, id: EntryId) -> LedgerEntry {
        LedgerEntry {
            id,
            mover_id: self.mover_id,
            state: self.state,
            items_loaded: self.items_loaded,
            items_unloaded: self.items_unloaded,
            recorded_at: Utc::now(),
        }
    }
}

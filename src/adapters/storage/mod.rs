//! # Storage Adapters
//!
//! Implementations of the store ports for different backends.
//!
//! Available adapters:
//! - `MemoryItems` / `MemoryMovers` / `MemoryLedger` - in-memory (fast, volatile)
//!
//! A database-backed adapter slots in by implementing the same three traits.

mod memory;

pub use memory::{MemoryItems, MemoryLedger, MemoryMovers};

//! # Adapters
//!
//! Swappable implementations of the port traits.
//!
//! This is where the hexagonal architecture meets reality: the engine only
//! ever sees `dyn ItemStore` / `dyn MoverStore` / `dyn LedgerStore`, and
//! adapters can be swapped without changing core logic.

pub mod storage;

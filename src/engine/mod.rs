//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Stores are connected to the port traits
//! - Lifecycle transitions and admission control are enforced
//! - The mission ledger gets its entries

mod caravan;
pub mod report;

pub use caravan::Caravan;
pub use report::MissionTally;

//! # Error Taxonomy
//!
//! Every engine operation returns a typed failure from this single enum so
//! callers branch on the variant, never on message shape.
//!
//! All variants except [`Error::Store`] are expected, user-facing outcomes
//! and carry the specific reason. `Store` wraps an opaque persistence
//! failure; it is the only kind the engine logs before surfacing.

use crate::core::{ItemId, MoverId, MoverState};
use crate::ports::StoreError;
use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures an engine operation can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-range input, rejected before touching any store.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced mover does not exist.
    #[error("mover {0} not found")]
    MoverNotFound(MoverId),

    /// A referenced item does not exist. Aborts the entire operation.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// The mover is busy and cannot accept the operation.
    #[error("conflict: {0}")]
    Conflict(&'static str),

    /// Load admission failed: the prospective carried total exceeds capacity.
    #[error("capacity exceeded: attempted load of {attempted} against limit {limit}")]
    CapacityExceeded { limit: f64, attempted: f64 },

    /// The state machine precondition for the operation was not met.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: MoverState,
        action: &'static str,
    },

    /// Persistence failure, opaque to the engine. No automatic retries;
    /// retry policy belongs to the caller.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl Error {
    /// Convenience constructor for validation failures.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_specifics() {
        let err = Error::CapacityExceeded {
            limit: 10.0,
            attempted: 11.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("11"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_invalid_transition_names_state_and_action() {
        let err = Error::InvalidTransition {
            state: MoverState::Resting,
            action: "end mission",
        };
        assert_eq!(err.to_string(), "cannot end mission while resting");
    }

    #[test]
    fn test_store_error_converts() {
        let store_err = StoreError::backend("disk on fire");
        let err: Error = store_err.into();
        assert!(matches!(err, Error::Store(_)));
    }
}

//! Movers: carrier agents with a weight capacity and a lifecycle state.
//!
//! The lifecycle is a three-state cycle with no terminal state:
//!
//! ```text
//!   resting ──load──▶ loading ──start──▶ on-mission
//!      ▲                │  ▲                  │
//!      │               load (accumulates)     │
//!      └───────────────── end ◀───────────────┘
//! ```
//!
//! Invariant: the summed weight of `cargo` never exceeds `weight_limit`.
//! Only the engine's transition operations mutate a mover.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{ItemId, MoverId};
use crate::error::{Error, Result};

/// Lifecycle state of a mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoverState {
    /// Initial state; re-entered whenever a mission ends.
    Resting,
    /// At least one load has been admitted since the last mission.
    Loading,
    /// Mission underway; no further loading allowed.
    OnMission,
}

impl fmt::Display for MoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MoverState::Resting => "resting",
            MoverState::Loading => "loading",
            MoverState::OnMission => "on-mission",
        };
        f.write_str(label)
    }
}

/// A persisted mover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub id: MoverId,
    /// Strictly positive, finite. Enforced by [`NewMover::new`].
    pub weight_limit: f64,
    pub state: MoverState,
    /// Currently carried items, in load order.
    pub cargo: Vec<ItemId>,
    pub created_at: DateTime<Utc>,
}

impl Mover {
    pub fn is_on_mission(&self) -> bool {
        self.state == MoverState::OnMission
    }
}

/// A validated mover draft, not yet persisted.
#[derive(Debug, Clone)]
pub struct NewMover {
    weight_limit: f64,
}

impl NewMover {
    /// Validate the weight limit.
    ///
    /// Fails with [`Error::Validation`] unless the limit is a finite number
    /// strictly greater than zero.
    pub fn new(weight_limit: f64) -> Result<Self> {
        if !weight_limit.is_finite() || weight_limit <= 0.0 {
            return Err(Error::validation(
                "mover weight limit must be a number greater than zero",
            ));
        }
        Ok(Self { weight_limit })
    }

    pub fn weight_limit(&self) -> f64 {
        self.weight_limit
    }

    /// Materialize the draft. New movers always start resting with no cargo.
    pub fn into_mover(self, id: MoverId) -> Mover {
        Mover {
            id,
            weight_limit: self.weight_limit,
            state: MoverState::Resting,
            cargo: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mover_rejects_non_positive_limits() {
        for limit in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(
                matches!(NewMover::new(limit), Err(Error::Validation(_))),
                "limit {limit} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_mover_starts_resting_and_empty() {
        let draft = NewMover::new(40.0).unwrap();
        assert_eq!(draft.weight_limit(), 40.0);

        let mover = draft.into_mover(MoverId(1));
        assert_eq!(mover.state, MoverState::Resting);
        assert!(mover.cargo.is_empty());
        assert_eq!(mover.weight_limit, 40.0);
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(MoverState::Resting.to_string(), "resting");
        assert_eq!(MoverState::Loading.to_string(), "loading");
        assert_eq!(MoverState::OnMission.to_string(), "on-mission");
    }

    #[test]
    fn test_state_serializes_kebab_case() {
        let json = serde_json::to_string(&MoverState::OnMission).unwrap();
        assert_eq!(json, "\"on-mission\"");
    }
}

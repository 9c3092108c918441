//! Completed-mission ranking.
//!
//! Read-only aggregation over the registry and the ledger; no business logic
//! of its own beyond the counting rule.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::MoverId;
use crate::error::{Error, Result};
use crate::ports::{LedgerStore, MoverStore};

/// One row of the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionTally {
    pub mover_id: MoverId,
    pub completed: u64,
}

/// Rank all movers by completed missions, descending.
///
/// A completed mission is a `mission ended` ledger entry whose unloaded-items
/// list is non-empty. Movers with zero completions are included. Ties keep
/// registry order (the sort is stable); with the memory adapter that is
/// insertion order.
pub fn rank_by_completed_missions(
    movers: &dyn MoverStore,
    ledger: &dyn LedgerStore,
) -> Result<Vec<MissionTally>> {
    let mut counts: HashMap<MoverId, u64> = HashMap::new();
    for entry in ledger.all().map_err(Error::Store)? {
        if entry.is_completed_mission() {
            *counts.entry(entry.mover_id).or_default() += 1;
        }
    }

    let mut tallies: Vec<MissionTally> = movers
        .all()
        .map_err(Error::Store)?
        .iter()
        .map(|mover| MissionTally {
            mover_id: mover.id,
            completed: counts.get(&mover.id).copied().unwrap_or(0),
        })
        .collect();

    tallies.sort_by(|a, b| b.completed.cmp(&a.completed));
    Ok(tallies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{MemoryLedger, MemoryMovers};
    use crate::core::{ItemId, NewEntry, NewMover};

    fn fleet_of(n: usize) -> MemoryMovers {
        let movers = MemoryMovers::new();
        for _ in 0..n {
            movers.create(NewMover::new(50.0).unwrap()).unwrap();
        }
        movers
    }

    fn complete_missions(ledger: &MemoryLedger, mover: MoverId, times: u64) {
        for _ in 0..times {
            ledger.append(NewEntry::start(mover)).unwrap();
            ledger.append(NewEntry::end(mover, vec![ItemId(1)])).unwrap();
        }
    }

    #[test]
    fn test_ranking_sorts_descending() {
        let movers = fleet_of(3);
        let ledger = MemoryLedger::new();
        complete_missions(&ledger, MoverId(1), 1);
        complete_missions(&ledger, MoverId(2), 3);
        complete_missions(&ledger, MoverId(3), 2);

        let ranking = rank_by_completed_missions(&movers, &ledger).unwrap();
        let ids: Vec<MoverId> = ranking.iter().map(|t| t.mover_id).collect();
        assert_eq!(ids, vec![MoverId(2), MoverId(3), MoverId(1)]);
        assert_eq!(ranking[0].completed, 3);
    }

    #[test]
    fn test_empty_unload_does_not_count() {
        let movers = fleet_of(1);
        let ledger = MemoryLedger::new();
        // Ended with nothing unloaded: not a completed mission.
        ledger.append(NewEntry::end(MoverId(1), vec![])).unwrap();

        let ranking = rank_by_completed_missions(&movers, &ledger).unwrap();
        assert_eq!(ranking[0].completed, 0);
    }

    #[test]
    fn test_movers_without_missions_still_appear() {
        let movers = fleet_of(2);
        let ledger = MemoryLedger::new();
        complete_missions(&ledger, MoverId(2), 1);

        let ranking = rank_by_completed_missions(&movers, &ledger).unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].mover_id, MoverId(2));
        assert_eq!(ranking[1].completed, 0);
    }

    #[test]
    fn test_ties_keep_registry_order() {
        let movers = fleet_of(4);
        let ledger = MemoryLedger::new();
        for id in 1..=4 {
            complete_missions(&ledger, MoverId(id), 1);
        }

        let ranking = rank_by_completed_missions(&movers, &ledger).unwrap();
        let ids: Vec<MoverId> = ranking.iter().map(|t| t.mover_id).collect();
        assert_eq!(
            ids,
            vec![MoverId(1), MoverId(2), MoverId(3), MoverId(4)],
            "stable sort must preserve insertion order on ties"
        );
    }

    #[test]
    fn test_tally_serializes_for_api_envelopes() {
        let tally = MissionTally {
            mover_id: MoverId(5),
            completed: 2,
        };
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json["mover_id"], 5);
        assert_eq!(json["completed"], 2);
    }
}

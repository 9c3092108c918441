//! Items: named, weighted cargo units.
//!
//! An item is immutable after creation. Movers and ledger entries hold
//! [`ItemId`] references; they never own the item itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ItemId;
use crate::error::{Error, Result};

/// A persisted item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Strictly positive, finite. Enforced by [`NewItem::new`].
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// A validated item draft, not yet persisted.
///
/// Constructing one is the only way to get item fields past the boundary, so
/// every `Item` in a store has a non-empty name and a positive weight.
#[derive(Debug, Clone)]
pub struct NewItem {
    name: String,
    weight: f64,
}

impl NewItem {
    /// Validate item fields.
    ///
    /// Fails with [`Error::Validation`] if the name is empty (after trimming)
    /// or the weight is not a finite number greater than zero.
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::validation("item name must not be empty"));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::validation(
                "item weight must be a number greater than zero",
            ));
        }
        Ok(Self { name, weight })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Materialize the draft into a persisted item. Called by store adapters
    /// once they have minted an id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            weight: self.weight,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_accepts_positive_weight() {
        let draft = NewItem::new("anvil", 12.5).unwrap();
        assert_eq!(draft.name(), "anvil");
        assert_eq!(draft.weight(), 12.5);
    }

    #[test]
    fn test_new_item_rejects_empty_name() {
        assert!(matches!(NewItem::new("", 1.0), Err(Error::Validation(_))));
        assert!(matches!(NewItem::new("   ", 1.0), Err(Error::Validation(_))));
    }

    #[test]
    fn test_new_item_rejects_bad_weights() {
        for w in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(NewItem::new("anvil", w), Err(Error::Validation(_))),
                "weight {w} should be rejected"
            );
        }
    }

    #[test]
    fn test_into_item_keeps_fields() {
        let item = NewItem::new("rope", 2.0).unwrap().into_item(ItemId(9));
        assert_eq!(item.id, ItemId(9));
        assert_eq!(item.name, "rope");
        assert_eq!(item.weight, 2.0);
    }
}

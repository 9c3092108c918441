//! Opaque identifiers for the three entity kinds.
//!
//! Ids are minted by whichever store adapter persists the entity; the core
//! never invents them. Newtypes keep a mover id from ever being handed to an
//! item lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id!(
    /// Identifier of a mover in the registry.
    MoverId
);
entity_id!(
    /// Identifier of an item in the item store.
    ItemId
);
entity_id!(
    /// Identifier of a ledger entry.
    EntryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_as_raw_number() {
        assert_eq!(MoverId(7).to_string(), "7");
        assert_eq!(ItemId(42).to_string(), "42");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property really; this just pins the From impl.
        let id: ItemId = 3u64.into();
        assert_eq!(id, ItemId(3));
    }
}

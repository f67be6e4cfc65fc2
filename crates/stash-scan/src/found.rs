use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use stash_core::Item;

/// Where the root of a found item's containment chain lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Carried in the player's inventory or worn as equipment.
    Inventory,
    /// Anywhere else: locations, buildings, characters, stockpiles.
    World,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inventory => write!(f, "inventory"),
            Self::World => write!(f, "world"),
        }
    }
}

/// An owned item found by a scan.
///
/// Items that exist in the world are borrowed from it; items synthesized
/// from a stockpile count are owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundItem<'w> {
    /// The item itself.
    pub item: Cow<'w, Item>,
    /// Origin of the root this item was reached from.
    pub origin: Origin,
}

impl<'w> FoundItem<'w> {
    /// Tag an item with its origin.
    pub fn new(item: Cow<'w, Item>, origin: Origin) -> Self {
        Self { item, origin }
    }

    /// Returns true if the item was reached from the player's inventory or equipment.
    pub fn is_from_inventory(&self) -> bool {
        self.origin == Origin::Inventory
    }

    /// Detach from the world borrow by cloning the item if needed.
    pub fn into_owned(self) -> FoundItem<'static> {
        FoundItem {
            item: Cow::Owned(self.item.into_owned()),
            origin: self.origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_flag_matches_tag() {
        let parsnip = Item::object("Parsnip");
        assert!(FoundItem::new(Cow::Borrowed(&parsnip), Origin::Inventory).is_from_inventory());
        assert!(!FoundItem::new(Cow::Borrowed(&parsnip), Origin::World).is_from_inventory());
    }

    #[test]
    fn into_owned_detaches_from_world() {
        let owned = {
            let parsnip = Item::object("Parsnip");
            FoundItem::new(Cow::Borrowed(&parsnip), Origin::World).into_owned()
        };
        assert_eq!(owned.item.name, "Parsnip");
        assert!(matches!(owned.item, Cow::Owned(_)));
    }

    #[test]
    fn serializes_with_snake_case_origin() {
        let found = FoundItem::new(Cow::Owned(Item::object("Hay").with_stack(20)), Origin::World);
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["origin"], "world");
        assert_eq!(json["item"]["stack"], 20);
    }
}

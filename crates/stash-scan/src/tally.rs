use std::collections::BTreeMap;

use serde::Serialize;

use crate::found::{FoundItem, Origin};

/// Totals for every found item sharing one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    /// The item name.
    pub name: String,
    /// Number of found entries.
    pub entries: usize,
    /// Units reached from the player's inventory or equipment.
    pub inventory_units: u64,
    /// Units reached from anywhere else.
    pub world_units: u64,
}

impl TallyEntry {
    /// Units across both origins.
    pub fn total_units(&self) -> u64 {
        self.inventory_units + self.world_units
    }
}

/// Found items grouped by name, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    entries: Vec<TallyEntry>,
}

impl Tally {
    /// Group found items by name.
    pub fn from_items<'a, 'w: 'a>(items: impl IntoIterator<Item = &'a FoundItem<'w>>) -> Self {
        let mut by_name: BTreeMap<&str, TallyEntry> = BTreeMap::new();
        for found in items {
            let entry = by_name
                .entry(found.item.name.as_str())
                .or_insert_with(|| TallyEntry {
                    name: found.item.name.clone(),
                    ..TallyEntry::default()
                });
            entry.entries += 1;
            let units = u64::from(found.item.stack);
            match found.origin {
                Origin::Inventory => entry.inventory_units += units,
                Origin::World => entry.world_units += units,
            }
        }
        Self {
            entries: by_name.into_values().collect(),
        }
    }

    /// All entries in name order.
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Look up the entry for an item name.
    pub fn get(&self, name: &str) -> Option<&TallyEntry> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Units across every entry.
    pub fn total_units(&self) -> u64 {
        self.entries.iter().map(TallyEntry::total_units).sum()
    }

    /// Returns true if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

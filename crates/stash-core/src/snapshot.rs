use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StashError, StashResult};
use crate::farm::Farm;
use crate::item::Item;
use crate::location::Location;
use crate::player::Player;
use crate::provider::{FarmProvider, LocationProvider, PlayerProvider};

/// Metadata about a captured world snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// Name of the save the snapshot was taken from.
    pub name: String,
    /// When the snapshot was captured.
    #[serde(default = "Utc::now")]
    pub captured_at: DateTime<Utc>,
}

impl SnapshotMeta {
    /// Create metadata stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            captured_at: Utc::now(),
        }
    }
}

/// An in-memory copy of the simulation state a scan reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot metadata.
    pub meta: SnapshotMeta,
    /// All active locations.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// The current player.
    pub player: Player,
    /// The active farm, if any.
    #[serde(default)]
    pub farm: Option<Farm>,
}

impl Snapshot {
    /// Create an empty snapshot: no locations, no farm.
    pub fn new(meta: SnapshotMeta, player: Player) -> Self {
        Self {
            meta,
            locations: Vec::new(),
            player,
            farm: None,
        }
    }

    /// Parse and validate a snapshot from JSON.
    pub fn from_json(json: &str) -> StashResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse, and validate a snapshot file.
    pub fn load(path: &Path) -> StashResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| StashError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> StashResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that no two items anywhere in the world share an ID.
    pub fn validate(&self) -> StashResult<()> {
        let mut seen = HashSet::new();
        for item in self.all_items() {
            if !seen.insert(item.id) {
                return Err(StashError::DuplicateItem(item.id));
            }
        }
        Ok(())
    }

    /// Find a location by name (case-insensitive).
    pub fn find_location(&self, name: &str) -> Option<&Location> {
        let name_lower = name.to_lowercase();
        self.locations
            .iter()
            .find(|l| l.name.to_lowercase() == name_lower)
    }

    /// Count every item in the world, nested ones included.
    pub fn item_count(&self) -> usize {
        self.all_items().count()
    }

    /// Every item in the world, nested ones included, in no particular order.
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        let mut pending: Vec<&Item> = self
            .locations
            .iter()
            .flat_map(Location::items)
            .chain(self.player.inventory.iter().flatten())
            .chain(self.player.equipment.slots().into_iter().flatten())
            .collect();
        std::iter::from_fn(move || {
            let item = pending.pop()?;
            pending.extend(item.held_items());
            Some(item)
        })
    }
}

impl LocationProvider for Snapshot {
    fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }
}

impl PlayerProvider for Snapshot {
    fn player(&self) -> &Player {
        &self.player
    }
}

impl FarmProvider for Snapshot {
    fn farm(&self) -> Option<&Farm> {
        self.farm.as_ref()
    }
}

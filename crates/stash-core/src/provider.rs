//! Read-only views of the simulation state a scan walks.
//!
//! The scanner never reaches for global state; it is handed one value per
//! concern. [`Snapshot`](crate::snapshot::Snapshot) implements all three.

use crate::farm::Farm;
use crate::location::Location;
use crate::player::Player;

/// Supplies every active world location.
pub trait LocationProvider {
    /// Iterate all active locations.
    fn locations(&self) -> impl Iterator<Item = &Location>;
}

/// Supplies the current player.
pub trait PlayerProvider {
    /// The player whose items are being scanned.
    fn player(&self) -> &Player;
}

/// Supplies the active farm, if one exists.
pub trait FarmProvider {
    /// The active farm, or `None` when no farm is loaded.
    fn farm(&self) -> Option<&Farm>;
}

impl LocationProvider for [Location] {
    fn locations(&self) -> impl Iterator<Item = &Location> {
        self.iter()
    }
}

impl LocationProvider for Vec<Location> {
    fn locations(&self) -> impl Iterator<Item = &Location> {
        self.iter()
    }
}

impl PlayerProvider for Player {
    fn player(&self) -> &Player {
        self
    }
}

impl FarmProvider for Farm {
    fn farm(&self) -> Option<&Farm> {
        Some(self)
    }
}

impl FarmProvider for Option<Farm> {
    fn farm(&self) -> Option<&Farm> {
        self.as_ref()
    }
}

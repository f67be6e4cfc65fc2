use stash_core::{FarmProvider, LocationProvider, PlayerProvider, Snapshot};
use tracing::debug;

use crate::config::ScanConfig;
use crate::expand::Expansion;
use crate::found::{FoundItem, Origin};
use crate::harvest::{inventory_roots, location_roots};
use crate::stockpile::stockpile_stacks;

/// Enumerates every item the player owns.
///
/// A scanner holds only borrowed providers and its configuration. Each call
/// to [`scan`](Self::scan) walks the world from scratch and never touches it
/// mutably.
#[derive(Debug)]
pub struct Scanner<'w, L: ?Sized, P: ?Sized, F: ?Sized> {
    locations: &'w L,
    player: &'w P,
    farm: &'w F,
    config: ScanConfig,
}

impl<'w> Scanner<'w, Snapshot, Snapshot, Snapshot> {
    /// Scan a snapshot with the default configuration.
    pub fn over(snapshot: &'w Snapshot) -> Self {
        Self::new(snapshot, snapshot, snapshot)
    }
}

impl<'w, L, P, F> Scanner<'w, L, P, F>
where
    L: LocationProvider + ?Sized,
    P: PlayerProvider + ?Sized,
    F: FarmProvider + ?Sized,
{
    /// Create a scanner over the given providers with the default configuration.
    pub fn new(locations: &'w L, player: &'w P, farm: &'w F) -> Self {
        Self {
            locations,
            player,
            farm,
            config: ScanConfig::default(),
        }
    }

    /// Replace the scan configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Lazily enumerate every owned item: location contents first, then
    /// inventory and equipment, then stockpile stacks.
    pub fn scan(&self) -> impl Iterator<Item = FoundItem<'w>> {
        let locations: &'w L = self.locations;
        let player: &'w P = self.player;
        let farm: &'w F = self.farm;
        let config = self.config.clone();

        let world = self
            .config
            .include_locations
            .then(|| locations.locations())
            .into_iter()
            .flatten()
            .filter(move |location| config.matches_location(&location.name))
            .inspect(|location| debug!(location = %location.name, "harvesting location"))
            .flat_map(location_roots)
            .flat_map(|root| Expansion::new(root, Origin::World));

        let inventory = self
            .config
            .include_inventory
            .then(|| player.player())
            .into_iter()
            .inspect(|player| debug!(player = %player.name, "harvesting inventory"))
            .flat_map(inventory_roots)
            .flat_map(|root| Expansion::new(root, Origin::Inventory));

        let stockpile = self
            .config
            .include_stockpile
            .then(|| farm.farm())
            .flatten()
            .inspect(|farm| {
                debug!(farm = %farm.name, count = farm.stockpile.count, "synthesizing stockpile")
            })
            .into_iter()
            .flat_map(|farm| stockpile_stacks(Some(farm)))
            .flat_map(|stack| Expansion::owned(Some(stack), Origin::World));

        world.chain(inventory).chain(stockpile)
    }

    /// Run a scan to completion.
    pub fn collect(&self) -> Vec<FoundItem<'w>> {
        self.scan().collect()
    }
}

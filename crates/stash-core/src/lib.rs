//! Core types for Stash: items, locations, player state, and world snapshots.
//!
//! This crate models the simulation state an owned-item scan reads. It is
//! independent of the scanner: build a [`Snapshot`] programmatically or
//! deserialize one from JSON, then hand it to `stash-scan`.

/// Error types used throughout the crate.
pub mod error;
/// The active farm and its stockpiled resources.
pub mod farm;
/// Items and the closed set of item kinds.
pub mod item;
/// Locations, characters, and buildings.
pub mod location;
/// Player inventory and equipment.
pub mod player;
/// Read-only provider traits the scanner consumes.
pub mod provider;
/// Serializable world snapshot implementing every provider.
pub mod snapshot;

/// Re-export error types.
pub use error::{StashError, StashResult};
/// Re-export farm types.
pub use farm::{Farm, ResourceTemplate, Stockpile};
/// Re-export item types.
pub use item::{
    Chest, Furniture, Item, ItemId, ItemKind, Machine, MachineKind, ObjectKind, WearableSlot,
    WorldObject,
};
/// Re-export location types.
pub use location::{Building, BuildingKind, Character, CharacterKind, Location, LocationKind, Tile};
/// Re-export player types.
pub use player::{Equipment, Player};
/// Re-export provider traits.
pub use provider::{FarmProvider, LocationProvider, PlayerProvider};
/// Re-export snapshot types.
pub use snapshot::{Snapshot, SnapshotMeta};

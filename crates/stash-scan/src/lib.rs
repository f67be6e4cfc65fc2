//! Owned-item scanner for Stash.
//!
//! Walks every world location, the player's inventory and equipment, and the
//! farm's stockpile, recursively expanding containers into a flat, lazily
//! produced sequence of [`FoundItem`]s. The scan only reads the world through
//! the provider traits of [`stash_core`]; it never mutates it.

/// Configuration types for scan runs.
pub mod config;
/// Direct-contents resolution for a single item.
pub mod contents;
/// Recursive container expansion.
pub mod expand;
/// Found-item output type and origin tag.
pub mod found;
/// Location and inventory root harvesting.
pub mod harvest;
/// Spawned-object classification.
pub mod heuristic;
/// Top-level scan orchestrator.
pub mod scanner;
/// Stockpile-to-stack synthesis.
pub mod stockpile;
/// Per-name totals over found items.
pub mod tally;

/// Re-export of [`config::ScanConfig`].
pub use config::ScanConfig;
/// Re-export of [`contents::direct_contents`].
pub use contents::direct_contents;
/// Re-exports of [`expand::Expansion`] and [`expand::expand`].
pub use expand::{Expansion, expand};
/// Re-exports of [`found::FoundItem`] and [`found::Origin`].
pub use found::{FoundItem, Origin};
/// Re-export of [`heuristic::is_spawned_world_item`].
pub use heuristic::is_spawned_world_item;
/// Re-export of [`scanner::Scanner`].
pub use scanner::Scanner;
/// Re-exports of [`tally::Tally`] and [`tally::TallyEntry`].
pub use tally::{Tally, TallyEntry};

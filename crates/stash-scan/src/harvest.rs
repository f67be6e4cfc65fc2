use std::iter;

use stash_core::{Character, Item, Location, Player};
use tracing::trace;

use crate::heuristic::is_spawned_world_item;

/// Candidate roots held at a location.
///
/// Yields furniture, the fridge, hats worn by children and horses, mill and
/// Junimo hut output, and placed objects. Placed objects classified as
/// spawned are dropped unless they are chests. Features the location lacks
/// contribute nothing.
pub fn location_roots(location: &Location) -> impl Iterator<Item = Option<&Item>> {
    let furniture = location.furniture().unwrap_or_default().iter().map(Some);
    let fridge = iter::once(location.fridge());
    let hats = location.characters.iter().map(Character::hat);
    let output = location
        .buildings
        .iter()
        .flat_map(|b| b.output().iter().map(Option::as_ref));
    let objects = location
        .objects
        .iter()
        .filter(move |(tile, item)| {
            let keep = item.is_chest() || !is_spawned_world_item(item);
            if !keep {
                trace!(location = %location.name, %tile, item = %item.name, "skipping spawned object");
            }
            keep
        })
        .map(|(_, item)| Some(item));

    furniture.chain(fridge).chain(hats).chain(output).chain(objects)
}

/// Candidate roots carried by the player: every inventory slot, then the six
/// equipment slots.
pub fn inventory_roots(player: &Player) -> impl Iterator<Item = Option<&Item>> {
    player
        .inventory
        .iter()
        .map(Option::as_ref)
        .chain(player.equipment.slots())
}

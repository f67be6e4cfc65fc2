use stash_core::Item;

/// Names of incidental world clutter that never counts as owned.
pub const CLUTTER_NAMES: [&str; 3] = ["Weeds", "Stone", "Twig"];

/// Returns true if the item is an automatically spawned world object that
/// the player does not own.
///
/// Only world objects can match. An object is spawned when the simulation
/// flagged it so, when it is forage, or when it carries a clutter name and
/// is not a chest. Chests placed on a map are kept by the location harvester
/// regardless of this result.
pub fn is_spawned_world_item(item: &Item) -> bool {
    let Some(obj) = item.as_object() else {
        return false;
    };

    // No location is passed, so "everything here is forage" never applies.
    obj.spawned
        || obj.is_forage(None)
        || (!obj.is_chest() && CLUTTER_NAMES.contains(&item.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stash_core::{Chest, Furniture, ItemKind, Location, WearableSlot};

    fn spawned(mut item: Item) -> Item {
        if let Some(obj) = item.as_object_mut() {
            obj.spawned = true;
        }
        item
    }

    #[test]
    fn simulation_spawned_object_is_excluded() {
        assert!(is_spawned_world_item(&spawned(Item::object("Daffodil"))));
    }

    #[test]
    fn placed_object_is_kept() {
        assert!(!is_spawned_world_item(&Item::object("Sprinkler")));
    }

    #[test]
    fn clutter_names_are_excluded() {
        for name in CLUTTER_NAMES {
            assert!(is_spawned_world_item(&Item::object(name)), "{name}");
        }
    }

    #[test]
    fn clutter_name_match_is_exact() {
        assert!(!is_spawned_world_item(&Item::object("weeds")));
        assert!(!is_spawned_world_item(&Item::object("Stone Fence")));
    }

    #[test]
    fn chest_named_like_clutter_is_not_excluded_by_name() {
        let chest = Item::chest("Weeds", Chest::player([]));
        assert!(!is_spawned_world_item(&chest));
    }

    #[test]
    fn spawned_chest_still_classifies_as_spawned() {
        let chest = spawned(Item::chest("Chest", Chest::player([])));
        assert!(is_spawned_world_item(&chest));
    }

    #[test]
    fn forage_object_is_excluded() {
        let mut leek = Item::object("Leek");
        if let Some(obj) = leek.as_object_mut() {
            obj.forage = true;
        }
        assert!(is_spawned_world_item(&leek));
    }

    #[test]
    fn location_wide_forage_does_not_apply() {
        let mut beach = Location::outdoor("Beach");
        beach.everything_is_forage = true;
        let shell = Item::object("Rainbow Shell");
        assert!(shell.as_object().is_some_and(|obj| obj.is_forage(Some(&beach))));
        assert!(!is_spawned_world_item(&shell));
    }

    #[test]
    fn non_objects_are_never_spawned() {
        let weeds_chair = Item::furniture("Weeds", Furniture::Decor);
        assert!(!is_spawned_world_item(&weeds_chair));
        assert!(!is_spawned_world_item(&Item::wearable("Twig", WearableSlot::Hat)));
        assert!(!is_spawned_world_item(&Item::new("Stone", ItemKind::Tool)));
    }
}

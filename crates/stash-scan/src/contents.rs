use stash_core::{Furniture, Item, ItemKind, ObjectKind};

/// The items a player can take directly out of `item`, one level deep.
///
/// Entries may be `None` for empty slots.
///
/// - Machines give up their held output once it is ready, or at any time for
///   machines that allow early withdrawal.
/// - Dressers give up every held item.
/// - Player chests give up every item; map fixture chests give up nothing.
pub fn direct_contents(item: &Item) -> Vec<Option<&Item>> {
    match &item.kind {
        ItemKind::Object(obj) => match &obj.kind {
            ObjectKind::Machine(machine)
                if machine.is_ready() || machine.kind.allows_early_withdrawal() =>
            {
                vec![machine.held.as_deref()]
            }
            ObjectKind::Chest(chest) if chest.player_chest => {
                chest.items.iter().map(Option::as_ref).collect()
            }
            ObjectKind::Plain | ObjectKind::Machine(_) | ObjectKind::Chest(_) => Vec::new(),
        },
        ItemKind::Furniture(Furniture::Dresser { held_items }) => {
            held_items.iter().map(Option::as_ref).collect()
        }
        ItemKind::Furniture(Furniture::Decor) | ItemKind::Wearable { .. } | ItemKind::Tool => {
            Vec::new()
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The current player: carried inventory plus worn equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Inventory slots in toolbar order. Empty slots are `None`.
    #[serde(default)]
    pub inventory: Vec<Option<Item>>,
    /// Worn equipment.
    #[serde(default)]
    pub equipment: Equipment,
}

impl Player {
    /// Create a player with an empty inventory and no equipment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Put an item into the first empty inventory slot, or append a new slot.
    pub fn carry(&mut self, item: Item) {
        match self.inventory.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => *slot = Some(item),
            None => self.inventory.push(Some(item)),
        }
    }
}

/// The six equipment slots. Each may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    /// Shirt slot.
    pub shirt: Option<Item>,
    /// Pants slot.
    pub pants: Option<Item>,
    /// Boots slot.
    pub boots: Option<Item>,
    /// Hat slot.
    pub hat: Option<Item>,
    /// Left ring slot.
    pub left_ring: Option<Item>,
    /// Right ring slot.
    pub right_ring: Option<Item>,
}

impl Equipment {
    /// All six slots, in shirt, pants, boots, hat, left ring, right ring order.
    pub fn slots(&self) -> [Option<&Item>; 6] {
        [
            self.shirt.as_ref(),
            self.pants.as_ref(),
            self.boots.as_ref(),
            self.hat.as_ref(),
            self.left_ring.as_ref(),
            self.right_ring.as_ref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::WearableSlot;

    #[test]
    fn carry_fills_empty_slot_first() {
        let mut player = Player::new("Farmer");
        player.inventory = vec![Some(Item::object("Parsnip")), None];
        player.carry(Item::object("Potato"));
        assert_eq!(player.inventory.len(), 2);
        player.carry(Item::object("Melon"));
        assert_eq!(player.inventory.len(), 3);
    }

    #[test]
    fn slots_report_every_equipment_slot() {
        let equipment = Equipment {
            hat: Some(Item::wearable("Straw Hat", WearableSlot::Hat)),
            right_ring: Some(Item::wearable("Iridium Band", WearableSlot::Ring)),
            ..Equipment::default()
        };
        let slots = equipment.slots();
        assert_eq!(slots.len(), 6);
        assert_eq!(slots.iter().flatten().count(), 2);
        assert_eq!(slots[3].map(|i| i.name.as_str()), Some("Straw Hat"));
    }
}

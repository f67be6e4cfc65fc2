use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::location::Location;

/// Unique identifier for every item in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A single item instance: anything that can be placed, worn, carried, or stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    #[serde(default)]
    pub id: ItemId,
    /// Display name of the item.
    pub name: String,
    /// Number of units in this stack.
    #[serde(default = "default_stack")]
    pub stack: u32,
    /// What kind of item this is.
    #[serde(default)]
    pub kind: ItemKind,
}

fn default_stack() -> u32 {
    1
}

impl Item {
    /// Create a single-unit item with a random ID.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self::with_id(ItemId::new(), name, kind)
    }

    /// Create a single-unit item with a pre-assigned ID.
    pub fn with_id(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            stack: 1,
            kind,
        }
    }

    /// Create a plain world object (no machine, no storage).
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Object(WorldObject::default()))
    }

    /// Create a chest holding the given items.
    pub fn chest(name: impl Into<String>, chest: Chest) -> Self {
        Self::new(name, ItemKind::Object(WorldObject::new(ObjectKind::Chest(chest))))
    }

    /// Create a production machine.
    pub fn machine(name: impl Into<String>, machine: Machine) -> Self {
        Self::new(
            name,
            ItemKind::Object(WorldObject::new(ObjectKind::Machine(machine))),
        )
    }

    /// Create a piece of furniture.
    pub fn furniture(name: impl Into<String>, furniture: Furniture) -> Self {
        Self::new(name, ItemKind::Furniture(furniture))
    }

    /// Create a wearable item for the given equipment slot.
    pub fn wearable(name: impl Into<String>, slot: WearableSlot) -> Self {
        Self::new(name, ItemKind::Wearable { slot })
    }

    /// Set the stack size.
    pub fn with_stack(mut self, stack: u32) -> Self {
        self.stack = stack;
        self
    }

    /// Returns the world-object data if this item is a world object.
    pub fn as_object(&self) -> Option<&WorldObject> {
        match &self.kind {
            ItemKind::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Mutable access to the world-object data, if any.
    pub fn as_object_mut(&mut self) -> Option<&mut WorldObject> {
        match &mut self.kind {
            ItemKind::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns true if this item is a chest of any kind.
    pub fn is_chest(&self) -> bool {
        self.as_object().is_some_and(WorldObject::is_chest)
    }

    /// Every item structurally held by this one, one level deep.
    ///
    /// This ignores readiness and chest ownership: it describes what the
    /// item physically holds, not what a player can take out of it.
    pub fn held_items(&self) -> Vec<&Item> {
        match &self.kind {
            ItemKind::Object(obj) => match &obj.kind {
                ObjectKind::Plain => Vec::new(),
                ObjectKind::Machine(machine) => machine.held.as_deref().into_iter().collect(),
                ObjectKind::Chest(chest) => chest.items.iter().flatten().collect(),
            },
            ItemKind::Furniture(Furniture::Dresser { held_items }) => {
                held_items.iter().flatten().collect()
            }
            ItemKind::Furniture(Furniture::Decor)
            | ItemKind::Wearable { .. }
            | ItemKind::Tool => Vec::new(),
        }
    }
}

/// The kind of an item. Closed set: every scan rule dispatches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// An object that can be placed in the world (crops, machines, chests, debris).
    Object(WorldObject),
    /// Furniture, optionally with storage.
    Furniture(Furniture),
    /// Clothing, hats, boots, and rings.
    Wearable {
        /// The equipment slot this item fits.
        slot: WearableSlot,
    },
    /// A tool or weapon.
    Tool,
}

impl Default for ItemKind {
    fn default() -> Self {
        Self::Object(WorldObject::default())
    }
}

/// The equipment slot a wearable occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WearableSlot {
    /// Shirt.
    Shirt,
    /// Pants.
    Pants,
    /// Boots.
    Boots,
    /// Hat (also worn by children and horses).
    Hat,
    /// Ring (either hand).
    Ring,
}

// ---------------------------------------------------------------------------
// World objects
// ---------------------------------------------------------------------------

/// Simulation facts about an object that can sit on a map tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldObject {
    /// Set by the simulation when the object was spawned automatically.
    #[serde(default)]
    pub spawned: bool,
    /// Set when the object's category makes it forage wherever it is.
    #[serde(default)]
    pub forage: bool,
    /// What the object does.
    #[serde(default)]
    pub kind: ObjectKind,
}

impl WorldObject {
    /// Create an object of the given kind with no simulation flags set.
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            spawned: false,
            forage: false,
            kind,
        }
    }

    /// Returns true if this object counts as forage.
    ///
    /// With a location, objects lying in a location where everything is
    /// forage also count.
    pub fn is_forage(&self, location: Option<&Location>) -> bool {
        self.forage || location.is_some_and(|l| l.everything_is_forage)
    }

    /// Returns true if this object is a chest of any kind.
    pub fn is_chest(&self) -> bool {
        matches!(self.kind, ObjectKind::Chest(_))
    }
}

/// The behavior of a world object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// An object with no behavior of its own.
    #[default]
    Plain,
    /// A production machine with a held output slot.
    Machine(Machine),
    /// A storage chest.
    Chest(Chest),
}

/// A production machine and its output slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Which machine this is.
    pub kind: MachineKind,
    /// In-game minutes until the held output is ready. Zero or below means done.
    #[serde(default)]
    pub minutes_until_ready: i32,
    /// The item being produced, if any.
    #[serde(default)]
    pub held: Option<Box<Item>>,
}

impl Machine {
    /// Create an idle machine of the given kind.
    pub fn new(kind: MachineKind) -> Self {
        Self {
            kind,
            minutes_until_ready: 0,
            held: None,
        }
    }

    /// Set the held output and its remaining production time.
    pub fn producing(mut self, item: Item, minutes_until_ready: i32) -> Self {
        self.held = Some(Box::new(item));
        self.minutes_until_ready = minutes_until_ready;
        self
    }

    /// Returns true if production has finished.
    pub fn is_ready(&self) -> bool {
        self.minutes_until_ready <= 0
    }
}

/// The kind of a production machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    /// Ages its contents; the contents can be taken out at any time.
    Cask,
    /// Brews drinks.
    Keg,
    /// Pickles and preserves.
    PreservesJar,
    /// Smelts ore.
    Furnace,
    /// A machine type not covered by built-in kinds.
    Custom(String),
}

impl MachineKind {
    /// Returns true if the held item can be withdrawn before it is ready.
    pub fn allows_early_withdrawal(&self) -> bool {
        matches!(self, Self::Cask)
    }
}

/// A storage chest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chest {
    /// True for chests the player placed and can open like any other
    /// storage; false for fixed map fixtures.
    #[serde(default)]
    pub player_chest: bool,
    /// The chest's slots. Empty slots are `None`.
    #[serde(default)]
    pub items: Vec<Option<Item>>,
}

impl Chest {
    /// A player-placed chest holding the given items.
    pub fn player(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            player_chest: true,
            items: items.into_iter().map(Some).collect(),
        }
    }

    /// A fixed map chest holding the given items.
    pub fn fixture(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            player_chest: false,
            items: items.into_iter().map(Some).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Furniture
// ---------------------------------------------------------------------------

/// Furniture, with or without storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Furniture {
    /// Decorative furniture that holds nothing.
    #[default]
    Decor,
    /// A dresser or similar storage furniture.
    Dresser {
        /// Items stored in the furniture. Empty slots are `None`.
        #[serde(default)]
        held_items: Vec<Option<Item>>,
    },
}

impl Furniture {
    /// A dresser holding the given items.
    pub fn dresser(items: impl IntoIterator<Item = Item>) -> Self {
        Self::Dresser {
            held_items: items.into_iter().map(Some).collect(),
        }
    }
}

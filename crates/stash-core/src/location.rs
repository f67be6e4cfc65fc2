use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StashError;
use crate::item::Item;

/// A tile coordinate on a location's map.
///
/// Serialized as `"x,y"` so it can key a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Tile {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Tile {
    /// Create a tile coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Tile {
    type Err = StashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StashError::InvalidTile(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self { x, y })
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

impl TryFrom<String> for Tile {
    type Error = StashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// An active world location: a map with objects, characters, and buildings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name of the location.
    pub name: String,
    /// Which location-level features this location supports.
    #[serde(default)]
    pub kind: LocationKind,
    /// Characters currently present.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Buildings standing on this location.
    #[serde(default)]
    pub buildings: Vec<Building>,
    /// Objects placed on map tiles.
    #[serde(default)]
    pub objects: BTreeMap<Tile, Item>,
    /// Whether every object lying here counts as forage.
    #[serde(default)]
    pub everything_is_forage: bool,
}

impl Location {
    /// Create a location of the given kind with nothing in it.
    pub fn new(name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            characters: Vec::new(),
            buildings: Vec::new(),
            objects: BTreeMap::new(),
            everything_is_forage: false,
        }
    }

    /// Create an outdoor location with no decoration support.
    pub fn outdoor(name: impl Into<String>) -> Self {
        Self::new(name, LocationKind::Outdoor)
    }

    /// Place an object on a tile, replacing whatever was there.
    pub fn place(&mut self, tile: Tile, item: Item) -> Option<Item> {
        self.objects.insert(tile, item)
    }

    /// The furniture collection, if this location supports decoration.
    pub fn furniture(&self) -> Option<&[Item]> {
        match &self.kind {
            LocationKind::Outdoor => None,
            LocationKind::Decoratable { furniture } | LocationKind::House { furniture, .. } => {
                Some(furniture)
            }
        }
    }

    /// The fridge, if this is a house that has one.
    pub fn fridge(&self) -> Option<&Item> {
        match &self.kind {
            LocationKind::House { fridge, .. } => fridge.as_ref(),
            _ => None,
        }
    }

    /// Every item held directly at this location, before any filtering.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.furniture()
            .unwrap_or_default()
            .iter()
            .chain(self.fridge())
            .chain(self.characters.iter().filter_map(Character::hat))
            .chain(self.buildings.iter().flat_map(|b| b.output().iter().flatten()))
            .chain(self.objects.values())
    }
}

/// The location-level features a location supports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// A plain map: no furniture.
    #[default]
    Outdoor,
    /// An interior that can hold furniture.
    Decoratable {
        /// Placed furniture.
        #[serde(default)]
        furniture: Vec<Item>,
    },
    /// The player's house: furniture plus a built-in fridge.
    House {
        /// Placed furniture.
        #[serde(default)]
        furniture: Vec<Item>,
        /// The kitchen fridge, once the kitchen is built.
        #[serde(default)]
        fridge: Option<Item>,
    },
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// A character present in a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// What kind of character this is.
    pub kind: CharacterKind,
}

impl Character {
    /// Create a character.
    pub fn new(name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The hat this character wears, for characters that can wear one.
    pub fn hat(&self) -> Option<&Item> {
        match &self.kind {
            CharacterKind::Child { hat } | CharacterKind::Horse { hat } => hat.as_ref(),
            CharacterKind::Villager | CharacterKind::Pet => None,
        }
    }
}

/// The kind of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    /// A villager; owns nothing the player does.
    Villager,
    /// The player's child.
    Child {
        /// Hat given to the child, if any.
        #[serde(default)]
        hat: Option<Item>,
    },
    /// The player's horse.
    Horse {
        /// Hat given to the horse, if any.
        #[serde(default)]
        hat: Option<Item>,
    },
    /// The player's cat or dog.
    Pet,
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

/// A farm building standing on a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Display name.
    pub name: String,
    /// What kind of building this is.
    pub kind: BuildingKind,
}

impl Building {
    /// Create a building.
    pub fn new(name: impl Into<String>, kind: BuildingKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The building's output storage. Empty for buildings without one.
    pub fn output(&self) -> &[Option<Item>] {
        match &self.kind {
            BuildingKind::Mill { output } | BuildingKind::JunimoHut { output } => output,
            BuildingKind::Other => &[],
        }
    }
}

/// The kind of a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    /// Mills grain into flour, sugar, and rice.
    Mill {
        /// Milled products waiting to be collected.
        #[serde(default)]
        output: Vec<Option<Item>>,
    },
    /// Junimos harvest crops into the hut.
    JunimoHut {
        /// Harvested crops waiting to be collected.
        #[serde(default)]
        output: Vec<Option<Item>>,
    },
    /// Any building without output storage.
    Other,
}

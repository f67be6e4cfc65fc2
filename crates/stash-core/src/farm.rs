use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// The active farm and its farm-wide resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    /// Display name of the farm.
    pub name: String,
    /// Bulk resource stored as a count rather than as items.
    pub stockpile: Stockpile,
}

impl Farm {
    /// Create a farm with the given stockpile.
    pub fn new(name: impl Into<String>, stockpile: Stockpile) -> Self {
        Self {
            name: name.into(),
            stockpile,
        }
    }
}

/// A bulk resource held as a scalar count (e.g. hay in silos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stockpile {
    /// What the stockpile holds.
    pub resource: ResourceTemplate,
    /// How many units are stored.
    #[serde(default)]
    pub count: u32,
}

impl Stockpile {
    /// Create a stockpile of `count` units of `resource`.
    pub fn new(resource: ResourceTemplate, count: u32) -> Self {
        Self { resource, count }
    }
}

/// The item a stockpile is made of, as far as stacking is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTemplate {
    /// Item name given to each synthesized stack.
    pub name: String,
    /// Maximum units per stack.
    pub max_stack: NonZeroU32,
}

impl ResourceTemplate {
    /// Create a resource template.
    pub fn new(name: impl Into<String>, max_stack: NonZeroU32) -> Self {
        Self {
            name: name.into(),
            max_stack,
        }
    }
}

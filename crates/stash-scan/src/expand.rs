use std::borrow::Cow;

use stash_core::Item;

use crate::contents::direct_contents;
use crate::found::{FoundItem, Origin};

/// Lazily walk an item and everything it contains, depth-first.
///
/// The root comes first, then each direct content's own expansion in slot
/// order. Every result carries the origin the expansion was started with.
/// An absent root, or an empty slot anywhere below it, yields nothing.
#[derive(Debug, Clone)]
pub struct Expansion<'w> {
    stack: Vec<Cow<'w, Item>>,
    origin: Origin,
}

impl<'w> Expansion<'w> {
    /// Expand an item that lives in the world.
    pub fn new(root: Option<&'w Item>, origin: Origin) -> Self {
        Self {
            stack: root.map(Cow::Borrowed).into_iter().collect(),
            origin,
        }
    }

    /// Expand an item that exists only for this scan.
    pub fn owned(root: Option<Item>, origin: Origin) -> Self {
        Self {
            stack: root.map(Cow::Owned).into_iter().collect(),
            origin,
        }
    }
}

impl<'w> Iterator for Expansion<'w> {
    type Item = FoundItem<'w>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;

        // Children are pushed in reverse so the first slot is visited next.
        match &item {
            Cow::Borrowed(held_by) => {
                let children = direct_contents(*held_by);
                self.stack
                    .extend(children.into_iter().rev().flatten().map(Cow::Borrowed));
            }
            Cow::Owned(held_by) => {
                let children: Vec<Item> = direct_contents(held_by)
                    .into_iter()
                    .rev()
                    .flatten()
                    .cloned()
                    .collect();
                self.stack.extend(children.into_iter().map(Cow::Owned));
            }
        }

        Some(FoundItem::new(item, self.origin))
    }
}

/// Shorthand for [`Expansion::new`].
pub fn expand(root: Option<&Item>, origin: Origin) -> Expansion<'_> {
    Expansion::new(root, origin)
}

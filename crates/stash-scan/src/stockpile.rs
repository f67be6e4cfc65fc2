use stash_core::{Farm, Item, ItemId, ItemKind, ResourceTemplate};
use uuid::Uuid;

/// Splits a stockpile count into stacks no larger than the resource's
/// stack capacity.
///
/// Stacks are full except possibly the last, and their sizes sum to the
/// stockpile count. Each stack's ID is derived from the farm, the resource,
/// and the stack's position, so two passes over the same stockpile yield
/// equal items.
#[derive(Debug, Clone)]
pub struct StockpileStacks {
    source: Option<(String, ResourceTemplate)>,
    remaining: u32,
    index: u32,
}

impl StockpileStacks {
    /// Stacks for the farm's stockpile. No farm means no stacks.
    pub fn new(farm: Option<&Farm>) -> Self {
        Self {
            source: farm.map(|f| (f.name.clone(), f.stockpile.resource.clone())),
            remaining: farm.map_or(0, |f| f.stockpile.count),
            index: 0,
        }
    }
}

impl Iterator for StockpileStacks {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (farm, resource) = self.source.as_ref()?;
        if self.remaining == 0 {
            return None;
        }

        let size = self.remaining.min(resource.max_stack.get());
        let key = format!("stash:stockpile/{farm}/{}/{}", resource.name, self.index);
        let id = ItemId(Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes()));
        let stack = Item::with_id(id, resource.name.clone(), ItemKind::default()).with_stack(size);

        self.remaining -= size;
        self.index += 1;
        Some(stack)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .source
            .as_ref()
            .map_or(0, |(_, r)| self.remaining.div_ceil(r.max_stack.get()) as usize);
        (n, Some(n))
    }
}

/// Shorthand for [`StockpileStacks::new`].
pub fn stockpile_stacks(farm: Option<&Farm>) -> StockpileStacks {
    StockpileStacks::new(farm)
}

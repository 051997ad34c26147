use crate::content::{ContentId, ContentItem};
use crate::seed::seed_items;
use std::collections::HashSet;

/// Ordered in-memory collection of content items.
///
/// Ids are unique at all times. The only mutation is [`ContentStore::remove`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    items: Vec<ContentItem>,
}

impl ContentStore {
    /// Builds a store, keeping only the first item for any repeated id.
    pub fn new(items: Vec<ContentItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    tracing::warn!("Dropping duplicate content id {}", item.id);
                }
                fresh
            })
            .collect();
        Self { items }
    }

    pub fn seeded() -> Self {
        Self::new(seed_items())
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Removes the item with `id`. A missing id is a silent no-op.
    pub fn remove(&mut self, id: &ContentId) -> Option<ContentItem> {
        let position = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(position))
    }
}

use super::content_filter::{CategorySelection, ContentFilter};
use crate::content::ContentItem;
use crate::store::ContentStore;

/// Session-only filter selection. Starts at [`CategorySelection::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: CategorySelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> CategorySelection {
        self.selected
    }

    /// Replaces the selection unconditionally.
    pub fn set_selected(&mut self, selection: CategorySelection) {
        self.selected = selection;
    }

    /// Items matching the selection, in store order.
    pub fn visible_items<'a>(&self, store: &'a ContentStore) -> Vec<&'a ContentItem> {
        store
            .iter()
            .filter(|item| self.selected.matches(item))
            .collect()
    }

    pub fn listing<'a>(&self, store: &'a ContentStore) -> Listing<'a> {
        Listing {
            heading: self.selected.heading(),
            items: self.visible_items(store),
        }
    }
}

/// The visible subset together with its heading.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub heading: &'static str,
    pub items: Vec<&'a ContentItem>,
}

impl Listing<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The empty-state view is shown exactly when this is true.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_label(&self) -> String {
        let noun = if self.items.len() == 1 { "item" } else { "items" };
        format!("{} {} saved", self.items.len(), noun)
    }
}

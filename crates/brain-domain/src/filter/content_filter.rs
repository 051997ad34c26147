use crate::content::{ContentItem, ContentType};
use brain_core::BrainError;
use std::fmt;
use std::str::FromStr;

/// Trait for filtering content items.
pub trait ContentFilter {
    /// Returns true if the item should be visible.
    fn matches(&self, item: &ContentItem) -> bool;
}

/// The active category: one content type or the `All` wildcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Only(ContentType),
}

impl CategorySelection {
    /// Entries in sidebar order: `All` first, then every content type.
    pub fn sidebar_entries() -> Vec<CategorySelection> {
        std::iter::once(CategorySelection::All)
            .chain(ContentType::ALL.into_iter().map(CategorySelection::Only))
            .collect()
    }

    pub fn sidebar_label(self) -> &'static str {
        match self {
            CategorySelection::All => "All Content",
            CategorySelection::Only(kind) => kind.plural_label(),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            CategorySelection::All => "All Content",
            CategorySelection::Only(kind) => kind.label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategorySelection::All => ContentType::Bookmark.icon(),
            CategorySelection::Only(kind) => kind.icon(),
        }
    }
}

impl ContentFilter for CategorySelection {
    fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(kind) => item.kind == *kind,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelection::All => f.write_str("all"),
            CategorySelection::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = BrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategorySelection::All)
        } else {
            s.parse().map(CategorySelection::Only)
        }
    }
}

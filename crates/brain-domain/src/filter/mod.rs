//! Content filtering.
//!
//! A single category selection derives the visible subset of the store.

pub mod content_filter;
pub mod filter_state;

pub use content_filter::{CategorySelection, ContentFilter};
pub use filter_state::{FilterState, Listing};

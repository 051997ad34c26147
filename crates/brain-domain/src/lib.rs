pub mod content;
pub mod filter;
pub mod seed;
pub mod share;
pub mod store;

pub use content::{ContentId, ContentItem, ContentType, ContentTypeInfo, CONTENT_TYPES};
pub use filter::{CategorySelection, ContentFilter, FilterState, Listing};
pub use share::{item_share_text, store_share_text, ShareRequest, ShareSubject};
pub use store::ContentStore;

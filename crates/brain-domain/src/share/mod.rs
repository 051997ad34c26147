//! Plain-text rendering of content for sharing.

pub mod request;
pub mod text;

pub use request::{ShareRequest, ShareSubject};
pub use text::{item_share_text, store_share_text};

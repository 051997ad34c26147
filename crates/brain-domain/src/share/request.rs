use super::text::{item_share_text, store_share_text};
use crate::content::ContentItem;
use crate::store::ContentStore;

const STORE_SHARE_TITLE: &str = "My Second Brain";

/// What is being shared; selects the clipboard confirmation wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareSubject {
    Item,
    Store,
}

impl ShareSubject {
    pub fn clipboard_notice(self) -> &'static str {
        match self {
            ShareSubject::Item => "Content copied to clipboard!",
            ShareSubject::Store => "Brain content copied to clipboard!",
        }
    }
}

/// Everything a share target needs: structured fields for a native share
/// capability and the flattened `plain_text` for the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub subject: ShareSubject,
    pub title: String,
    pub text: String,
    pub url: Option<String>,
    pub plain_text: String,
}

impl ShareRequest {
    pub fn for_item(item: &ContentItem) -> Self {
        Self {
            subject: ShareSubject::Item,
            title: item.title.clone(),
            text: item.content.clone(),
            url: item.url.clone(),
            plain_text: item_share_text(item),
        }
    }

    pub fn for_store(store: &ContentStore) -> Self {
        let text = store_share_text(store.iter());
        Self {
            subject: ShareSubject::Store,
            title: STORE_SHARE_TITLE.to_string(),
            text: text.clone(),
            url: None,
            plain_text: text,
        }
    }
}

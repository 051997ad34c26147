use crate::content::ContentItem;

const ITEM_DELIMITER: &str = "\n---\n\n";

/// Title, body and url separated by blank lines. A missing url leaves an
/// empty trailing line.
pub fn item_share_text(item: &ContentItem) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        item.title,
        item.content,
        item.url.as_deref().unwrap_or("")
    )
}

fn store_entry(item: &ContentItem) -> String {
    format!(
        "{}: {}\n{}\nTags: {}\n",
        item.kind.label(),
        item.title,
        item.content,
        item.tags.join(", ")
    )
}

/// Every item as a labelled block, blocks separated by a `---` line.
pub fn store_share_text<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    items
        .into_iter()
        .map(store_entry)
        .collect::<Vec<_>>()
        .join(ITEM_DELIMITER)
}

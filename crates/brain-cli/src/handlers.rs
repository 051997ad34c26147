use crate::output::{output_error, output_success, ListResponse};
use brain_core::AppConfig;
use brain_domain::{CategorySelection, ContentId, ContentStore, FilterState, ShareRequest};
use brain_tui::{ShareDispatcher, ShareOutcome};

pub fn handle_list(store: &ContentStore, kind: CategorySelection) -> anyhow::Result<()> {
    let mut filter = FilterState::new();
    filter.set_selected(kind);
    let listing = filter.listing(store);

    output_success(ListResponse {
        heading: listing.heading,
        label: listing.count_label(),
        count: listing.len(),
        items: listing.items,
    })
}

pub fn handle_share(
    store: &ContentStore,
    config: &AppConfig,
    id: Option<String>,
    print: bool,
) -> anyhow::Result<()> {
    let request = match id {
        Some(id) => {
            let id = ContentId::new(id);
            match store.get(&id) {
                Some(item) => ShareRequest::for_item(item),
                None => output_error(&format!("Content item not found: {}", id)),
            }
        }
        None => ShareRequest::for_store(store),
    };

    if print {
        print!("{}", request.plain_text);
        return Ok(());
    }

    let sharer = ShareDispatcher::from_config(config);
    if sharer.dispatch(&request) == ShareOutcome::Clipboard {
        eprintln!("{}", request.subject.clipboard_notice());
    }
    Ok(())
}

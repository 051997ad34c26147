use brain_core::{AppConfig, BrainResult};
use brain_domain::{CategorySelection, ContentStore, ContentType, ShareRequest};
use brain_tui::{App, AppMode, Focus, ShareDispatcher, ShareOutcome, ShareTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<ShareRequest>>>;

struct RecordingTarget {
    available: bool,
    log: Log,
}

impl ShareTarget for RecordingTarget {
    fn name(&self) -> &str {
        "recording"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn share(&self, request: &ShareRequest) -> BrainResult<()> {
        self.log.borrow_mut().push(request.clone());
        Ok(())
    }
}

fn target(available: bool) -> (Box<dyn ShareTarget>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let target = RecordingTarget {
        available,
        log: Rc::clone(&log),
    };
    (Box::new(target), log)
}

/// App over the seed data whose shares land in the returned clipboard log.
fn clipboard_app() -> (App, Log) {
    let (fallback, log) = target(true);
    let sharer = ShareDispatcher::new(None, fallback);
    (
        App::with_parts(ContentStore::seeded(), AppConfig::default(), sharer),
        log,
    )
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn visible_ids(app: &App) -> Vec<String> {
    app.visible_items().iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn test_starts_with_all_content_and_first_card_selected() {
    let (app, _) = clipboard_app();
    assert_eq!(app.filter.selected(), CategorySelection::All);
    assert_eq!(app.visible_items().len(), 6);
    assert_eq!(app.card_selection.get(), Some(0));
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_sidebar_navigation_sets_filter() {
    let (mut app, _) = clipboard_app();
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.focus, Focus::Sidebar);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.filter.selected(), CategorySelection::Only(ContentType::Tweet));

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.filter.selected(), CategorySelection::Only(ContentType::Article));
    assert_eq!(visible_ids(&app), vec!["1", "6"]);
    assert_eq!(app.card_selection.get(), Some(0));

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.filter.selected(), CategorySelection::All);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Cards);
}

#[test]
fn test_delete_selected_card() {
    let (mut app, _) = clipboard_app();
    app.card_selection.set(Some(2));

    press(&mut app, KeyCode::Char('d'));

    assert_eq!(app.store.len(), 5);
    assert_eq!(visible_ids(&app), vec!["1", "2", "4", "5", "6"]);
    assert_eq!(app.card_selection.get(), Some(2));
}

#[test]
fn test_delete_last_visible_card_clears_selection() {
    let (mut app, _) = clipboard_app();
    app.select_category(CategorySelection::Only(ContentType::Video));

    press(&mut app, KeyCode::Char('d'));

    assert!(app.listing().is_empty());
    assert!(app.card_selection.get().is_none());
    assert_eq!(app.store.len(), 5);

    // Nothing selected, nothing deleted
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.store.len(), 5);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let (mut app, _) = clipboard_app();
    app.delete_item(&"missing".into());
    assert_eq!(visible_ids(&app), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_share_item_via_clipboard_shows_notice() {
    let (mut app, log) = clipboard_app();
    app.card_selection.set(Some(1));

    press(&mut app, KeyCode::Char('s'));

    assert_eq!(log.borrow().len(), 1);
    assert_eq!(
        log.borrow()[0].plain_text,
        "React 19 Features\n\n🚀 React 19 is here! New features include: • Server Components • Concurrent Features • Automatic Batching • New Hooks The future of React looks amazing! #React19 #WebDev\n\n"
    );
    assert_eq!(app.notice(), Some("Content copied to clipboard!"));
}

#[test]
fn test_share_brain_uses_whole_store_despite_filter() {
    let (mut app, log) = clipboard_app();
    app.select_category(CategorySelection::Only(ContentType::Audio));

    press(&mut app, KeyCode::Char('S'));

    let shared = &log.borrow()[0];
    assert_eq!(shared.title, "My Second Brain");
    assert!(shared.plain_text.starts_with("Article: The Future of AI in Web Development\n"));
    assert_eq!(shared.plain_text.matches("\n---\n\n").count(), 5);
    assert_eq!(app.notice(), Some("Brain content copied to clipboard!"));
}

#[test]
fn test_share_brain_with_empty_store() {
    let (fallback, log) = target(true);
    let mut app = App::with_parts(
        ContentStore::default(),
        AppConfig::default(),
        ShareDispatcher::new(None, fallback),
    );

    assert_eq!(app.share_store(), ShareOutcome::Clipboard);
    assert_eq!(log.borrow()[0].plain_text, "");
}

#[test]
fn test_native_share_skips_notice() {
    let (native, native_log) = target(true);
    let (fallback, fallback_log) = target(true);
    let mut app = App::with_parts(
        ContentStore::seeded(),
        AppConfig::default(),
        ShareDispatcher::new(Some(native), fallback),
    );

    assert_eq!(app.share_selected(), Some(ShareOutcome::Native));
    assert_eq!(native_log.borrow()[0].url.as_deref(), Some("https://example.com/ai-web-dev"));
    assert!(fallback_log.borrow().is_empty());
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_notice_blocks_other_keys_until_dismissed() {
    let (mut app, _) = clipboard_app();

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(
        app.notice(),
        Some("Add content functionality would be implemented here!")
    );
    assert_eq!(app.store.len(), 6);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.store.len(), 6);
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, AppMode::Normal);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_grid_movement_uses_column_count() {
    let (mut app, _) = clipboard_app();
    app.grid_columns = 3;

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.card_selection.get(), Some(3));

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.card_selection.get(), Some(4));

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.card_selection.get(), Some(5));

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.card_selection.get(), Some(2));

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.card_selection.get(), Some(1));
}

#[test]
fn test_left_from_first_card_focuses_sidebar() {
    let (mut app, _) = clipboard_app();
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.focus, Focus::Sidebar);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Cards);
}

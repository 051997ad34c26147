use crate::events::{Event, EventHandler};
use crate::layout;
use crate::opener::open_url;
use crate::share::{ShareDispatcher, ShareOutcome};
use crate::ui;
use brain_core::{AppConfig, BrainResult, SelectionState};
use brain_domain::{
    CategorySelection, ContentId, ContentItem, ContentStore, FilterState, Listing, ShareRequest,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

const ADD_CONTENT_NOTICE: &str = "Add content functionality would be implemented here!";

/// Top-level coordinator. Owns the content store and the filter selection;
/// views borrow both read-only and report actions back through `App` methods.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub store: ContentStore,
    pub filter: FilterState,
    pub card_selection: SelectionState,
    /// Columns of the card grid at the last render; drives vertical movement.
    pub grid_columns: usize,
    pub config: AppConfig,
    sharer: ShareDispatcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Cards,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Blocking message; every key is swallowed until it is dismissed.
    Notice(String),
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let sharer = ShareDispatcher::from_config(&config);
        Self::with_parts(ContentStore::seeded(), config, sharer)
    }

    pub fn with_parts(store: ContentStore, config: AppConfig, sharer: ShareDispatcher) -> Self {
        let mut card_selection = SelectionState::new();
        card_selection.auto_select_first_if_empty(!store.is_empty());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Cards,
            store,
            filter: FilterState::new(),
            card_selection,
            grid_columns: 1,
            config,
            sharer,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn listing(&self) -> Listing<'_> {
        self.filter.listing(&self.store)
    }

    pub fn visible_items(&self) -> Vec<&ContentItem> {
        self.filter.visible_items(&self.store)
    }

    pub fn selected_item(&self) -> Option<&ContentItem> {
        let idx = self.card_selection.get()?;
        self.visible_items().get(idx).copied()
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.mode {
            AppMode::Notice(message) => Some(message.as_str()),
            AppMode::Normal => None,
        }
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.mode = AppMode::Notice(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Cards,
            Focus::Cards => Focus::Sidebar,
        };
    }

    /// Replaces the filter selection and moves the card cursor to the top.
    pub fn select_category(&mut self, selection: CategorySelection) {
        self.filter.set_selected(selection);
        tracing::debug!("Filter set to {}", selection);

        self.card_selection.clear();
        let has_items = !self.visible_items().is_empty();
        self.card_selection.auto_select_first_if_empty(has_items);
    }

    /// Index of the active selection within the sidebar entries.
    pub fn sidebar_index(&self) -> usize {
        CategorySelection::sidebar_entries()
            .iter()
            .position(|entry| *entry == self.filter.selected())
            .unwrap_or(0)
    }

    pub fn select_next_category(&mut self) {
        let entries = CategorySelection::sidebar_entries();
        let next = (self.sidebar_index() + 1).min(entries.len() - 1);
        self.select_category(entries[next]);
    }

    pub fn select_prev_category(&mut self) {
        let entries = CategorySelection::sidebar_entries();
        let prev = self.sidebar_index().saturating_sub(1);
        self.select_category(entries[prev]);
    }

    /// Removes the item with `id`. Unknown ids are ignored.
    pub fn delete_item(&mut self, id: &ContentId) {
        if let Some(removed) = self.store.remove(id) {
            tracing::info!("Deleted content item: {} (id: {})", removed.title, removed.id);
        }
        let visible = self.visible_items().len();
        self.card_selection.clamp(visible);
        self.card_selection.auto_select_first_if_empty(visible > 0);
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id.clone()) {
            self.delete_item(&id);
        }
    }

    fn dispatch_share(&mut self, request: ShareRequest) -> ShareOutcome {
        let outcome = self.sharer.dispatch(&request);
        if outcome == ShareOutcome::Clipboard {
            self.show_notice(request.subject.clipboard_notice());
        }
        outcome
    }

    pub fn share_item(&mut self, id: &ContentId) -> Option<ShareOutcome> {
        let request = self.store.get(id).map(ShareRequest::for_item)?;
        Some(self.dispatch_share(request))
    }

    pub fn share_selected(&mut self) -> Option<ShareOutcome> {
        let id = self.selected_item().map(|item| item.id.clone())?;
        self.share_item(&id)
    }

    /// Shares the whole store regardless of the active filter.
    pub fn share_store(&mut self) -> ShareOutcome {
        let request = ShareRequest::for_store(&self.store);
        self.dispatch_share(request)
    }

    /// Placeholder for content creation; the store is left untouched.
    pub fn add_content(&mut self) {
        tracing::debug!("Add content requested");
        self.show_notice(ADD_CONTENT_NOTICE);
    }

    pub fn open_selected_url(&self) {
        let Some(url) = self.selected_item().and_then(|item| item.url.clone()) else {
            return;
        };
        if let Err(e) = open_url(&url, &self.config) {
            tracing::warn!("Failed to open {}: {}", url, e);
        }
    }

    pub fn move_card_selection(&mut self, direction: CardMove) {
        let count = self.visible_items().len();
        let columns = self.grid_columns.max(1);
        match direction {
            CardMove::Left => self.card_selection.prev(),
            CardMove::Right => self.card_selection.next(count),
            CardMove::Up => self.card_selection.retreat(columns),
            CardMove::Down => self.card_selection.advance(columns, count),
        }
        self.card_selection.clamp(count);
    }

    pub(crate) fn update_grid_columns(&mut self, width: u16) {
        self.grid_columns = layout::grid_columns(width);
    }

    pub async fn run(&mut self) -> BrainResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> BrainResult<()> {
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Resize(_, _)) | Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMove {
    Left,
    Right,
    Up,
    Down,
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

use super::content_grid::ContentGridProvider;
use super::notice::NoticeProvider;
use super::sidebar::SidebarProvider;
use super::{KeybindingContext, KeybindingProvider};
use crate::app::{App, AppMode, Focus};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_context(app: &App) -> KeybindingContext {
        match (&app.mode, app.focus) {
            (AppMode::Notice(_), _) => NoticeProvider.get_context(),
            (AppMode::Normal, Focus::Sidebar) => SidebarProvider.get_context(),
            (AppMode::Normal, Focus::Cards) => ContentGridProvider.get_context(),
        }
    }
}

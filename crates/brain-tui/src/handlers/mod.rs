mod content_handlers;
mod notice_handlers;
mod sidebar_handlers;

use crate::app::{App, AppMode, Focus};
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if matches!(self.mode, AppMode::Notice(_)) {
            self.handle_notice_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('1') => self.set_focus(Focus::Sidebar),
            KeyCode::Char('2') => self.set_focus(Focus::Cards),
            KeyCode::Char('S') => {
                self.share_store();
            }
            KeyCode::Char('a') => self.add_content(),
            code => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(code),
                Focus::Cards => self.handle_content_key(code),
            },
        }
    }
}

use crate::app::{App, Focus};
use crossterm::event::KeyCode;

impl App {
    pub(super) fn handle_sidebar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('j') | KeyCode::Down => self.select_next_category(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev_category(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
                self.set_focus(Focus::Cards)
            }
            _ => {}
        }
    }
}

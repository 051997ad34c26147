use crate::app::App;
use crossterm::event::KeyCode;

impl App {
    pub(super) fn handle_notice_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.dismiss_notice();
        }
    }
}

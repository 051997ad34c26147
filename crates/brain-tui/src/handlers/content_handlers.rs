use crate::app::{App, CardMove, Focus};
use crossterm::event::KeyCode;

impl App {
    pub(super) fn handle_content_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('h') | KeyCode::Left => {
                if self.card_selection.get() == Some(0) || self.card_selection.get().is_none() {
                    self.set_focus(Focus::Sidebar);
                } else {
                    self.move_card_selection(CardMove::Left);
                }
            }
            KeyCode::Char('l') | KeyCode::Right => self.move_card_selection(CardMove::Right),
            KeyCode::Char('k') | KeyCode::Up => self.move_card_selection(CardMove::Up),
            KeyCode::Char('j') | KeyCode::Down => self.move_card_selection(CardMove::Down),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('s') => {
                self.share_selected();
            }
            KeyCode::Char('o') => self.open_selected_url(),
            _ => {}
        }
    }
}

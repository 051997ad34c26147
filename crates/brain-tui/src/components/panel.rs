use crate::theme::{focused_border, unfocused_border};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered panel whose title gains a `[n]` hotkey hint while focused.
pub struct PanelConfig {
    title: String,
    hotkey: Option<char>,
    is_focused: bool,
}

impl PanelConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hotkey: None,
            is_focused: false,
        }
    }

    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title_text(&self) -> String {
        match self.hotkey {
            Some(key) if self.is_focused => format!("{} [{}]", self.title, key),
            _ => self.title.clone(),
        }
    }

    pub fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title_text())
    }
}

pub fn render_panel(frame: &mut Frame, area: Rect, config: &PanelConfig, content: Paragraph) {
    frame.render_widget(content.block(config.block()), area);
}

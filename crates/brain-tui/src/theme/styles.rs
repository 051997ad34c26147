use super::colors::*;
use brain_domain::ContentType;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn active_item() -> Style {
    Style::default()
        .fg(ACTIVE_ITEM)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn title_text() -> Style {
    Style::default()
        .fg(NORMAL_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn link_text() -> Style {
    Style::default()
        .fg(LINK_TEXT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn danger_text() -> Style {
    Style::default().fg(DANGER_TEXT)
}

pub fn tag_badge() -> Style {
    Style::default().fg(TAG_FG).bg(TAG_BG)
}

pub fn content_type_style(kind: ContentType) -> Style {
    Style::default().fg(TYPE_COLORS[kind as usize])
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}

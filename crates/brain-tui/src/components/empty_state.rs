use crate::theme::{bold_highlight, label_text, title_text};
use brain_domain::ContentType;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn empty_state_lines() -> Vec<Line<'static>> {
    vec![
        Line::styled(ContentType::Bookmark.icon(), label_text()),
        Line::from(""),
        Line::styled("No content found", title_text()),
        Line::styled(
            "Start building your second brain by adding some content!",
            label_text(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[a] ", bold_highlight()),
            Span::styled("Add Your First Item", bold_highlight()),
        ]),
    ]
}

pub fn render_empty_state(frame: &mut Frame, area: Rect) {
    let lines = empty_state_lines();
    let top_padding = area.height.saturating_sub(lines.len() as u16) / 2;
    let area = Rect {
        y: area.y + top_padding,
        height: area.height - top_padding,
        ..area
    };

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

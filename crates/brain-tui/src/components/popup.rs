use crate::theme::{focused_border, label_text, normal_text, popup_bg};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const NOTICE_HINT: &str = "Press Enter to dismiss";
const NOTICE_MIN_WIDTH: u16 = 30;

/// A `width` x `height` rect centered in `area`, shrunk to fit if needed.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Size of the notice box for `message`: text plus padding and borders.
pub fn notice_size(message: &str) -> (u16, u16) {
    let text_width = message.width().max(NOTICE_HINT.width()) as u16;
    let width = (text_width + 6).max(NOTICE_MIN_WIDTH);
    (width, 7)
}

/// Modal confirmation drawn over everything until dismissed.
pub fn render_notice_popup(frame: &mut Frame, message: &str) {
    let (width, height) = notice_size(message);
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), normal_text()),
        Line::from(""),
        Line::styled(NOTICE_HINT, label_text()),
    ];

    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 20, 4);
        assert_eq!(centered_rect(40, 10, area), area);
    }

    #[test]
    fn test_notice_size() {
        assert_eq!(notice_size("ok"), (30, 7));
        let (width, _) = notice_size("Add content functionality would be implemented here!");
        assert_eq!(width, 58);
    }
}

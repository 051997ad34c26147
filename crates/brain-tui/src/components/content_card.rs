use crate::text::{clamp_lines, truncate};
use crate::theme::*;
use brain_core::MAX_CONTENT_LINES;
use brain_domain::ContentItem;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct ContentCardConfig<'a> {
    pub item: &'a ContentItem,
    pub is_selected: bool,
    pub is_focused: bool,
    pub content_lines: usize,
    pub date_format: &'a str,
}

/// Tag badges that fit in `width` columns. Tags that do not fit are
/// summarised by a trailing `+N` badge.
fn tag_badges(tags: &[String], width: usize) -> Line<'static> {
    let badges: Vec<String> = tags.iter().map(|tag| format!(" {} ", tag)).collect();
    let total = badges.iter().map(|b| b.width()).sum::<usize>() + badges.len().saturating_sub(1);
    let reserve = if total > width {
        format!(" +{} ", badges.len()).width() + 1
    } else {
        0
    };

    let mut spans = Vec::new();
    let mut used = 0;

    for (i, badge) in badges.into_iter().enumerate() {
        let gap = usize::from(!spans.is_empty());
        let is_last = i + 1 == tags.len();
        let needed = badge.width() + if is_last { 0 } else { reserve };

        if used + gap + needed > width {
            let more = format!(" +{} ", tags.len() - i);
            if used + gap + more.width() <= width {
                if gap == 1 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(more, label_text()));
            }
            break;
        }

        if gap == 1 {
            spans.push(Span::raw(" "));
        }
        used += gap + badge.width();
        spans.push(Span::styled(badge, tag_badge()));
    }

    Line::from(spans)
}

/// The rows of a card body for an inner width of `width` columns.
///
/// Optional rows (author, link) stay as blank lines so cards in one grid row
/// line up.
pub fn content_card_lines(config: &ContentCardConfig, width: usize) -> Vec<Line<'static>> {
    let item = config.item;
    let icon = item.kind.icon();
    let title_width = width.saturating_sub(icon.width() + 1);

    let mut lines = vec![Line::from(vec![
        Span::styled(icon.to_string(), content_type_style(item.kind)),
        Span::raw(" "),
        Span::styled(truncate(&item.title, title_width), title_text()),
    ])];

    let body_lines = config.content_lines.min(MAX_CONTENT_LINES);
    let mut body = clamp_lines(&item.content, width, body_lines);
    body.resize(body_lines, String::new());
    lines.extend(body.into_iter().map(|line| Line::styled(line, label_text())));

    lines.push(match &item.author {
        Some(author) => Line::styled(truncate(&format!("by {}", author), width), label_text()),
        None => Line::from(""),
    });

    lines.push(match item.url {
        Some(_) => Line::styled("↗ View Source", link_text()),
        None => Line::from(""),
    });

    lines.push(tag_badges(&item.tags, width));
    lines.push(Line::styled("─".repeat(width), label_text()));
    lines.push(Line::styled(
        format!("Added on {}", item.formatted_date(config.date_format)),
        label_text(),
    ));

    lines
}

pub fn render_content_card(frame: &mut Frame, area: Rect, config: &ContentCardConfig) {
    let highlighted = config.is_selected && config.is_focused;
    let border_style = if highlighted {
        focused_border()
    } else {
        unfocused_border()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", config.item.kind.label()),
            content_type_style(config.item.kind),
        ));

    if config.is_selected {
        block = block.title_bottom(
            Line::from(vec![
                Span::styled(" s share ", highlight_text()),
                Span::styled("d delete ", danger_text()),
            ])
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    let lines = content_card_lines(config, inner.width as usize);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

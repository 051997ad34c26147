use crate::app::{App, Focus};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::layout::{card_height, first_visible_row, SIDEBAR_WIDTH};
use crate::theme::*;
use brain_domain::CategorySelection;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(app, frame, body[0]);
    render_main(app, frame, body[1]);
    render_footer(app, frame, chunks[2]);

    if let Some(message) = app.notice() {
        render_notice_popup(frame, message);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let title = Paragraph::new(Line::styled("Second Brain", bold_highlight()));
    frame.render_widget(title, halves[0]);

    let actions = Paragraph::new(Line::from(vec![
        Span::styled("[S] ", highlight_text()),
        Span::styled("Share Brain", normal_text()),
        Span::raw("  "),
        Span::styled("[a] ", highlight_text()),
        Span::styled("Add Content", normal_text()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(actions, halves[1]);
}

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let active = app.filter.selected();

    let lines: Vec<Line> = CategorySelection::sidebar_entries()
        .into_iter()
        .map(|entry| {
            let is_active = entry == active;
            let marker = if is_active { "▌" } else { " " };
            let mut label_style = if is_active {
                active_item()
            } else {
                normal_text()
            };
            if is_active {
                label_style = label_style.patch(selected_item(focused));
            }
            let icon_style = match entry {
                CategorySelection::All => normal_text(),
                CategorySelection::Only(kind) => content_type_style(kind),
            };

            Line::from(vec![
                Span::styled(marker, active_item()),
                Span::styled(format!("{} ", entry.icon()), icon_style),
                Span::styled(entry.sidebar_label().to_string(), label_style),
            ])
        })
        .collect();

    let panel_config = PanelConfig::new("Content Types")
        .with_hotkey('1')
        .focused(focused);

    render_panel(frame, area, &panel_config, Paragraph::new(lines));
}

fn render_main(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Cards;
    let block = PanelConfig::new(app.listing().heading)
        .with_hotkey('2')
        .focused(focused)
        .block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let count_label = app.listing().count_label();
    frame.render_widget(
        Paragraph::new(Line::styled(count_label, label_text())),
        sections[0],
    );

    app.update_grid_columns(sections[1].width);

    if app.listing().is_empty() {
        render_empty_state(frame, sections[1]);
    } else {
        render_card_grid(app, frame, sections[1]);
    }
}

fn render_card_grid(app: &App, frame: &mut Frame, area: Rect) {
    let columns = app.grid_columns.max(1);
    let content_lines = app.config.effective_content_lines();
    let row_height = card_height(content_lines);
    let rows_that_fit = (area.height / row_height).max(1) as usize;

    let items = app.visible_items();
    let selected = app.card_selection.get();
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = first_visible_row(selected_row, rows_that_fit);

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (row_offset, row_items) in items
        .chunks(columns)
        .skip(first_row)
        .take(rows_that_fit)
        .enumerate()
    {
        let y = area.y + row_offset as u16 * row_height;
        let height = row_height.min(area.bottom().saturating_sub(y));
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(row_area);

        for (col, item) in row_items.iter().enumerate() {
            let index = (first_row + row_offset) * columns + col;
            let config = ContentCardConfig {
                item: *item,
                is_selected: app.card_selection.is_selected(index),
                is_focused: app.focus == Focus::Cards,
                content_lines,
                date_format: app.config.effective_date_format(),
            };
            render_content_card(frame, cells[col], &config);
        }
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let context = KeybindingRegistry::get_context(app);
    let footer = Paragraph::new(Line::styled(context.footer_text(), label_text()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(unfocused_border()),
        );
    frame.render_widget(footer, area);
}

//! Card grid geometry.

pub const MIN_CARD_WIDTH: u16 = 36;
pub const MAX_GRID_COLUMNS: usize = 4;
pub const SIDEBAR_WIDTH: u16 = 24;

/// Rows inside a card besides the content body: title, author, link, tags,
/// separator and date, plus the two border rows.
const CARD_CHROME_ROWS: u16 = 8;

pub fn grid_columns(width: u16) -> usize {
    ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_GRID_COLUMNS)
}

pub fn card_height(content_lines: usize) -> u16 {
    let body = u16::try_from(content_lines).unwrap_or(u16::MAX);
    CARD_CHROME_ROWS.saturating_add(body)
}

/// First grid row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, rows_that_fit: usize) -> usize {
    let rows_that_fit = rows_that_fit.max(1);
    selected_row.saturating_sub(rows_that_fit - 1)
}

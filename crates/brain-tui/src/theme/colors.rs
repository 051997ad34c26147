use brain_domain::CONTENT_TYPES;
use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const ACTIVE_ITEM: Color = Color::Green;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const LINK_TEXT: Color = Color::LightBlue;
pub const DANGER_TEXT: Color = Color::Red;

pub const TAG_FG: Color = Color::White;
pub const TAG_BG: Color = Color::DarkGray;

/// Accent per content type, in `CONTENT_TYPES` order.
pub const TYPE_COLORS: [Color; CONTENT_TYPES.len()] = [
    Color::Cyan,
    Color::Yellow,
    Color::LightRed,
    Color::LightMagenta,
    Color::Green,
];

pub const POPUP_BG: Color = Color::Black;

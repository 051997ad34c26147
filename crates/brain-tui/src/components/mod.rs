pub mod content_card;
pub mod empty_state;
pub mod panel;
pub mod popup;

pub use content_card::*;
pub use empty_state::*;
pub use panel::*;
pub use popup::*;

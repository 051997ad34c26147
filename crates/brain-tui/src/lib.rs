pub mod app;
pub mod clipboard;
pub mod components;
pub mod events;
pub mod handlers;
pub mod keybindings;
pub mod layout;
pub mod opener;
pub mod share;
pub mod text;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode, CardMove, Focus};
pub use share::{ClipboardShare, CommandShare, ShareDispatcher, ShareOutcome, ShareTarget};

pub mod config;
pub mod error;
pub mod result;
pub mod selection;

pub use config::{is_valid_date_format, AppConfig, ShareConfig, MAX_CONTENT_LINES};
pub use error::BrainError;
pub use result::BrainResult;
pub use selection::SelectionState;

use brain_core::{BrainError, BrainResult};

pub fn copy_to_clipboard(text: &str) -> BrainResult<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|e| BrainError::Clipboard(e.to_string()))
}

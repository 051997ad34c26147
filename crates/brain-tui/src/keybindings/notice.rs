use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct NoticeProvider;

impl KeybindingProvider for NoticeProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Notice",
            vec![Keybinding::new(
                "Enter/Esc",
                "dismiss",
                KeybindingAction::Dismiss,
            )],
        )
    }
}

use super::{global_bindings, Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct ContentGridProvider;

impl KeybindingProvider for ContentGridProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("hjkl", "move", KeybindingAction::Navigate),
            Keybinding::new("s", "share", KeybindingAction::ShareItem),
            Keybinding::new("d", "delete", KeybindingAction::DeleteItem),
            Keybinding::new("o", "open", KeybindingAction::OpenUrl),
        ];
        bindings.extend(global_bindings());
        KeybindingContext::new("Content", bindings)
    }
}

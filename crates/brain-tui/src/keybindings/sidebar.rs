use super::{global_bindings, Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct SidebarProvider;

impl KeybindingProvider for SidebarProvider {
    fn get_context(&self) -> KeybindingContext {
        let mut bindings = vec![
            Keybinding::new("j/k", "filter", KeybindingAction::Navigate),
            Keybinding::new("Enter", "cards", KeybindingAction::FocusPanel(1)),
        ];
        bindings.extend(global_bindings());
        KeybindingContext::new("Content Types", bindings)
    }
}

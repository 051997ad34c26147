pub mod content_grid;
pub mod notice;
pub mod registry;
pub mod sidebar;

pub use registry::KeybindingRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    Navigate,
    FocusPanel(usize),
    ToggleFocus,
    DeleteItem,
    ShareItem,
    ShareBrain,
    AddContent,
    OpenUrl,
    Dismiss,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    pub action: KeybindingAction,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        action: KeybindingAction,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            action,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// One-line hint such as `j/k: filter | Tab: focus`.
    pub fn footer_text(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{}: {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn has_action(&self, action: KeybindingAction) -> bool {
        self.bindings.iter().any(|b| b.action == action)
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

/// Bindings available outside of popups regardless of focus.
pub(crate) fn global_bindings() -> Vec<Keybinding> {
    vec![
        Keybinding::new("Tab", "focus", KeybindingAction::ToggleFocus),
        Keybinding::new("S", "share brain", KeybindingAction::ShareBrain),
        Keybinding::new("a", "add", KeybindingAction::AddContent),
        Keybinding::new("q", "quit", KeybindingAction::Quit),
    ]
}

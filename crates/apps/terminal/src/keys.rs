//! Keyboard bindings for the live prompt.

use terminal_core::PromptAction;

/// Prompt action bound to a key press, plus whether the browser default must be suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Action to dispatch.
    pub action: PromptAction,
    /// Whether to call `preventDefault` on the event.
    pub prevent_default: bool,
}

impl KeyBinding {
    fn new(action: PromptAction, prevent_default: bool) -> Self {
        Self {
            action,
            prevent_default,
        }
    }
}

/// Maps a `KeyboardEvent.key` value and the Ctrl modifier to a prompt action.
pub fn prompt_binding_for_key(key: &str, ctrl: bool) -> Option<KeyBinding> {
    match key {
        "Enter" => Some(KeyBinding::new(PromptAction::Confirm, false)),
        "ArrowUp" => Some(KeyBinding::new(PromptAction::RecallPrevious, true)),
        "ArrowDown" => Some(KeyBinding::new(PromptAction::RecallNext, true)),
        "Tab" => Some(KeyBinding::new(PromptAction::Autocomplete, true)),
        "c" | "C" if ctrl => Some(KeyBinding::new(PromptAction::Cancel, true)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn navigation_keys_suppress_browser_defaults() {
        for (key, action) in [
            ("ArrowUp", PromptAction::RecallPrevious),
            ("ArrowDown", PromptAction::RecallNext),
            ("Tab", PromptAction::Autocomplete),
        ] {
            assert_eq!(
                prompt_binding_for_key(key, false),
                Some(KeyBinding::new(action, true))
            );
        }
    }

    #[test]
    fn enter_confirms() {
        assert_eq!(
            prompt_binding_for_key("Enter", false),
            Some(KeyBinding::new(PromptAction::Confirm, false))
        );
    }

    #[test]
    fn ctrl_c_cancels_only_with_modifier() {
        assert_eq!(
            prompt_binding_for_key("c", true).map(|binding| binding.action),
            Some(PromptAction::Cancel)
        );
        assert_eq!(prompt_binding_for_key("c", false), None);
        assert_eq!(prompt_binding_for_key("x", true), None);
    }
}

//! Selects the output view rendered beneath each history entry.

use terminal_contract::{CommandEntry, OutputView};

use crate::i18n::Translator;

/// Outcome of resolving an entry's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView<'a> {
    /// The entry carries a view bound at parse time.
    Bound(OutputView),
    /// No view is bound; show the "unknown command" indicator for `cmd_name`.
    Unknown {
        /// Raw command name as typed.
        cmd_name: &'a str,
    },
}

/// Resolves the view for `entry` from the binding attached by the parser.
pub fn resolve_view(entry: &CommandEntry) -> ResolvedView<'_> {
    match entry.view {
        Some(view) => ResolvedView::Bound(view),
        None => ResolvedView::Unknown {
            cmd_name: &entry.cmd_name,
        },
    }
}

/// Render functions for every view, supplied by the UI layer.
pub trait ViewRenderer {
    /// Rendered output type.
    type Output;

    /// Renders a bound view for `entry`.
    fn render_bound(
        &self,
        view: OutputView,
        entry: &CommandEntry,
        t: &dyn Translator,
    ) -> Self::Output;

    /// Renders the "unknown command" indicator.
    fn render_unknown(&self, cmd_name: &str, t: &dyn Translator) -> Self::Output;
}

/// Renders the output for `entry` through `renderer`.
pub fn render_entry<R: ViewRenderer>(
    entry: &CommandEntry,
    t: &dyn Translator,
    renderer: &R,
) -> R::Output {
    match resolve_view(entry) {
        ResolvedView::Bound(view) => renderer.render_bound(view, entry, t),
        ResolvedView::Unknown { cmd_name } => renderer.render_unknown(cmd_name, t),
    }
}

/// Formats the text of the "unknown command" indicator.
pub fn unknown_command_message(cmd_name: &str, t: &dyn Translator) -> String {
    format!("{}: {cmd_name}", t.t("unknownCmdErr"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use terminal_contract::EntryTimestamp;

    use super::*;
    use crate::{parser::parse_entry_at, registry::CommandRegistry};

    struct TextRenderer;

    impl ViewRenderer for TextRenderer {
        type Output = String;

        fn render_bound(
            &self,
            view: OutputView,
            entry: &CommandEntry,
            t: &dyn Translator,
        ) -> String {
            format!("{view:?}:{}:{}", entry.cmd_name, t.t("title"))
        }

        fn render_unknown(&self, cmd_name: &str, t: &dyn Translator) -> String {
            unknown_command_message(cmd_name, t)
        }
    }

    fn t(key: &str) -> String {
        match key {
            "unknownCmdErr" => "command not found".to_string(),
            other => other.to_string(),
        }
    }

    #[test]
    fn bound_entries_render_their_view() {
        let entry = parse_entry_at(&CommandRegistry::portfolio(), "help", EntryTimestamp(1));
        assert_eq!(resolve_view(&entry), ResolvedView::Bound(OutputView::Help));
        assert_eq!(render_entry(&entry, &t, &TextRenderer), "Help:help:title");
    }

    #[test]
    fn unbound_entries_render_unknown_indicator() {
        let entry = parse_entry_at(&CommandRegistry::portfolio(), "sudo su", EntryTimestamp(1));
        assert_eq!(
            render_entry(&entry, &t, &TextRenderer),
            "command not found: sudo"
        );
    }
}

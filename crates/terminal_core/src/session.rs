//! Per-view terminal session: history ownership, submission handling, and prompt dispatch.

use std::rc::Rc;

use terminal_contract::{CommandEntry, EntryTimestamp, Lang};

use crate::{
    config::TerminalConfig,
    history::CommandHistory,
    parser::parse_entry,
    prompt::{reduce_prompt, PromptAction, PromptContext, PromptEffect, PromptState},
    registry::{CommandRegistry, CLEAR_COMMAND, SET_LANG_COMMAND},
};

/// Result of handing a committed line to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The line was empty and nothing happened.
    Ignored,
    /// `clear` emptied the history.
    Cleared,
    /// A parsed entry was appended.
    Appended(EntryTimestamp),
}

/// Notifications produced by [`TerminalSession::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A line was committed by the user or by scripted typing.
    Submitted {
        /// Committed text.
        raw: String,
        /// What the session did with it.
        outcome: SubmitOutcome,
    },
    /// `set-lang` named a supported language.
    LanguageRequested(Lang),
    /// Host work requested by the prompt.
    Effect(PromptEffect),
}

/// Explicit session state shared by the live prompt and the output views.
///
/// History has a single writer (this session) and the live prompt state has a single writer
/// ([`reduce_prompt`], driven through [`dispatch`](Self::dispatch)).
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSession {
    registry: Rc<CommandRegistry>,
    config: TerminalConfig,
    history: CommandHistory,
    prompt: PromptState,
    has_introduced: bool,
}

impl TerminalSession {
    /// Creates a session with empty history and a live prompt.
    pub fn new(registry: Rc<CommandRegistry>, config: TerminalConfig) -> Self {
        Self {
            registry,
            config,
            history: CommandHistory::new(),
            prompt: PromptState::live(),
            has_introduced: false,
        }
    }

    /// Returns the command table.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Returns the submitted entries, oldest first.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Returns the live prompt state for rendering.
    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    /// Applies `action` to the live prompt and handles any resulting submission.
    pub fn dispatch(&mut self, action: PromptAction) -> Vec<SessionEvent> {
        let ctx = PromptContext {
            history: &self.history,
            registry: &self.registry,
            typing_delay_ms: self.config.typing_delay_ms,
        };
        let effects = reduce_prompt(&mut self.prompt, ctx, action);

        let mut events = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                PromptEffect::Submit(raw) => self.submit_into(raw, &mut events),
                other => events.push(SessionEvent::Effect(other)),
            }
        }
        events
    }

    /// Handles a committed line without going through the prompt.
    ///
    /// `clear` empties the history and is never recorded. An empty line is ignored. Anything else is
    /// parsed and appended.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if raw.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if raw == CLEAR_COMMAND {
            self.history.clear();
            return SubmitOutcome::Cleared;
        }

        let entry = parse_entry(&self.registry, raw);
        let timestamp = entry.timestamp;
        self.history.append(entry);
        SubmitOutcome::Appended(timestamp)
    }

    fn submit_into(&mut self, raw: String, events: &mut Vec<SessionEvent>) {
        let outcome = self.submit(&raw);
        let language = match outcome {
            SubmitOutcome::Appended(_) => self.history.last().and_then(requested_language),
            _ => None,
        };
        events.push(SessionEvent::Submitted { raw, outcome });
        if let Some(lang) = language {
            events.push(SessionEvent::LanguageRequested(lang));
        }
        if outcome != SubmitOutcome::Ignored {
            events.push(SessionEvent::Effect(PromptEffect::ScrollIntoView));
        }
    }

    /// Starts typing the configured welcome command the first time it is called.
    pub fn begin_welcome(&mut self) -> Vec<SessionEvent> {
        if self.has_introduced {
            return Vec::new();
        }
        self.has_introduced = true;
        match self.config.welcome_command.clone() {
            Some(text) => self.simulate(text),
            None => Vec::new(),
        }
    }

    /// Returns whether the welcome sequence has been started.
    pub fn has_introduced(&self) -> bool {
        self.has_introduced
    }

    /// Focuses the live prompt.
    pub fn focus(&mut self) -> Vec<SessionEvent> {
        self.dispatch(PromptAction::Focus)
    }

    /// Types `text` into the live prompt and submits it.
    pub fn simulate(&mut self, text: impl Into<String>) -> Vec<SessionEvent> {
        self.dispatch(PromptAction::Simulate { text: text.into() })
    }

    /// Replaces the live prompt's input.
    pub fn set_input(&mut self, value: impl Into<String>) -> Vec<SessionEvent> {
        self.dispatch(PromptAction::SetInput {
            value: value.into(),
        })
    }

    /// Scrolls the live prompt into view.
    pub fn scroll_into_view(&mut self) -> Vec<SessionEvent> {
        self.dispatch(PromptAction::ScrollIntoView)
    }
}

fn requested_language(entry: &CommandEntry) -> Option<Lang> {
    if entry.cmd_name != SET_LANG_COMMAND {
        return None;
    }
    entry.option.as_deref().and_then(Lang::from_code)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session() -> TerminalSession {
        TerminalSession::new(Rc::new(CommandRegistry::portfolio()), TerminalConfig::default())
    }

    fn type_and_confirm(session: &mut TerminalSession, line: &str) -> Vec<SessionEvent> {
        session.dispatch(PromptAction::Edit {
            value: line.to_string(),
        });
        session.dispatch(PromptAction::Confirm)
    }

    #[test]
    fn confirm_appends_parsed_entry() {
        let mut session = session();
        let events = type_and_confirm(&mut session, "set-lang fr");

        assert_eq!(session.history().len(), 1);
        let entry = &session.history().all()[0];
        assert_eq!(entry.cmd_name, "set-lang");
        assert_eq!(entry.option.as_deref(), Some("fr"));
        assert!(matches!(
            events[0],
            SessionEvent::Submitted { ref raw, outcome: SubmitOutcome::Appended(_) } if raw == "set-lang fr"
        ));
        assert_eq!(events[1], SessionEvent::LanguageRequested(Lang::Fr));
        assert_eq!(events[2], SessionEvent::Effect(PromptEffect::ScrollIntoView));
        assert_eq!(session.prompt().buffer, "");
    }

    #[test]
    fn unsupported_language_is_recorded_without_request() {
        let mut session = session();
        let events = type_and_confirm(&mut session, "set-lang de");
        assert_eq!(session.history().len(), 1);
        assert!(!events
            .iter()
            .any(|event| matches!(event, SessionEvent::LanguageRequested(_))));
    }

    #[test]
    fn clear_empties_history_without_recording() {
        let mut session = session();
        type_and_confirm(&mut session, "help");
        type_and_confirm(&mut session, "whoami");
        let events = type_and_confirm(&mut session, "clear");

        assert!(session.history().is_empty());
        assert!(matches!(
            events[0],
            SessionEvent::Submitted { outcome: SubmitOutcome::Cleared, .. }
        ));
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut session = session();
        let events = session.dispatch(PromptAction::Confirm);
        assert_eq!(
            events,
            vec![SessionEvent::Submitted {
                raw: String::new(),
                outcome: SubmitOutcome::Ignored
            }]
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn blank_submission_is_recorded_as_unknown() {
        let mut session = session();
        type_and_confirm(&mut session, "  ");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().all()[0].cmd_name, "");
        assert_eq!(session.history().all()[0].view, None);
    }

    #[test]
    fn repeated_commands_get_distinct_timestamps() {
        let mut session = session();
        type_and_confirm(&mut session, "help");
        type_and_confirm(&mut session, "help");
        let entries = session.history().all();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].timestamp < entries[1].timestamp);
    }

    #[test]
    fn welcome_runs_once() {
        let mut session = session();
        let events = session.begin_welcome();
        assert!(session.prompt().is_simulating());
        assert!(events.contains(&SessionEvent::Effect(PromptEffect::FocusInput)));
        assert!(session.has_introduced());
        assert!(session.begin_welcome().is_empty());
    }

    #[test]
    fn welcome_can_be_disabled() {
        let config = TerminalConfig {
            welcome_command: None,
            ..TerminalConfig::default()
        };
        let mut session = TerminalSession::new(Rc::new(CommandRegistry::portfolio()), config);
        assert!(session.begin_welcome().is_empty());
        assert!(!session.prompt().is_simulating());
    }

    #[test]
    fn recall_reads_session_history() {
        let mut session = session();
        type_and_confirm(&mut session, "contact --email=test@example.com");
        session.dispatch(PromptAction::RecallPrevious);
        assert_eq!(session.prompt().buffer, "contact --email=test@example.com");
        assert_eq!(session.prompt().history_cursor, Some(0));
    }
}

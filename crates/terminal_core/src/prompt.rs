//! Prompt actions, host effect intents, and transition logic for the terminal input line.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use terminal_contract::CommandEntry;

use crate::{
    history::{reconstruct_input, CommandHistory},
    registry::CommandRegistry,
};

/// Identifies one scripted typing run so stale timer ticks can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimulationId(pub u64);

/// Whether the prompt accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PromptMode {
    /// The single active prompt of a session.
    #[default]
    Live,
    /// A prompt echoing a past entry. Ignores every action.
    ReadOnly,
}

/// In-flight scripted typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSimulation {
    /// Run identifier carried by every scheduled tick.
    pub id: SimulationId,
    /// Characters not typed yet.
    pub remaining: VecDeque<char>,
}

/// Edit buffer plus recall, autocomplete, and simulation state of one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptState {
    /// Live or read-only.
    pub mode: PromptMode,
    /// Current input text.
    pub buffer: String,
    /// History index being recalled. `None` while editing live input.
    pub history_cursor: Option<usize>,
    /// Candidates shown after an ambiguous or failed completion. Empty means "no match".
    pub autocomplete: Option<Vec<String>>,
    /// Scripted typing in progress.
    pub simulation: Option<TypingSimulation>,
    next_simulation_id: u64,
}

impl PromptState {
    /// Creates an empty live prompt.
    pub fn live() -> Self {
        Self::default()
    }

    /// Creates an inert prompt showing the input that produced `entry`.
    pub fn read_only(entry: &CommandEntry) -> Self {
        Self {
            mode: PromptMode::ReadOnly,
            buffer: reconstruct_input(entry),
            ..Self::default()
        }
    }

    /// Returns whether the buffer mirrors a history entry.
    pub fn is_recalling(&self) -> bool {
        self.history_cursor.is_some()
    }

    /// Returns whether scripted typing is in progress.
    pub fn is_simulating(&self) -> bool {
        self.simulation.is_some()
    }

    /// Returns whether autocomplete candidates are displayed.
    pub fn is_autocompleting(&self) -> bool {
        self.autocomplete.is_some()
    }
}

/// Read-only collaborators consulted by [`reduce_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    /// Submitted entries available for recall.
    pub history: &'a CommandHistory,
    /// Command names available for completion.
    pub registry: &'a CommandRegistry,
    /// Pause between simulated keystrokes.
    pub typing_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_prompt`].
pub enum PromptAction {
    /// The user typed, deleted, or pasted; `value` is the new buffer.
    Edit {
        /// Complete new input text.
        value: String,
    },
    /// Enter.
    Confirm,
    /// Ctrl+C.
    Cancel,
    /// Arrow-up.
    RecallPrevious,
    /// Arrow-down.
    RecallNext,
    /// Tab.
    Autocomplete,
    /// Host request to replace the buffer, such as a clicked command suggestion.
    SetInput {
        /// Text to place in the prompt.
        value: String,
    },
    /// Host request to type `text` one character at a time and submit it.
    Simulate {
        /// Command line to type.
        text: String,
    },
    /// Timer callback for a scheduled simulated keystroke.
    TypingTick {
        /// Run the tick was scheduled for.
        simulation: SimulationId,
    },
    /// Host request to focus the input.
    Focus,
    /// Host request to scroll the input into view.
    ScrollIntoView,
    /// The prompt is being torn down.
    Detach,
}

impl PromptAction {
    fn is_user_key(&self) -> bool {
        matches!(
            self,
            Self::Edit { .. }
                | Self::Confirm
                | Self::Cancel
                | Self::RecallPrevious
                | Self::RecallNext
                | Self::Autocomplete
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_prompt`] for the host to execute.
pub enum PromptEffect {
    /// Hand the committed line to the session.
    Submit(String),
    /// Dispatch [`PromptAction::TypingTick`] after `delay_ms`.
    ScheduleTypingTick {
        /// Run to tick.
        simulation: SimulationId,
        /// Delay before the tick.
        delay_ms: u64,
    },
    /// Drop any pending tick for the run.
    AbortTyping(SimulationId),
    /// Focus the input element.
    FocusInput,
    /// Place the caret after the last character.
    MoveCursorToEnd,
    /// Scroll the input into view.
    ScrollIntoView,
}

/// Applies a [`PromptAction`] to `state` and collects the resulting side effects.
///
/// Transitions never fail: actions that make no sense in the current state, such as recalling
/// forward while editing live input, leave the state untouched. Read-only prompts ignore every
/// action. User key actions abort scripted typing before taking effect.
pub fn reduce_prompt(
    state: &mut PromptState,
    ctx: PromptContext<'_>,
    action: PromptAction,
) -> Vec<PromptEffect> {
    let mut effects = Vec::new();
    if state.mode == PromptMode::ReadOnly {
        return effects;
    }

    if action.is_user_key() {
        abort_simulation(state, &mut effects);
    }

    match action {
        PromptAction::Edit { value } => edit(state, value),
        PromptAction::Confirm => submit(state, &mut effects),
        PromptAction::Cancel => reset_live(state),
        PromptAction::RecallPrevious => {
            let len = ctx.history.len();
            let next_index = match state.history_cursor {
                _ if len == 0 => None,
                None => Some(len - 1),
                Some(0) => None,
                Some(index) => Some(index.min(len) - 1),
            };
            if let Some(index) = next_index {
                recall(state, ctx.history, index, &mut effects);
            }
        }
        PromptAction::RecallNext => match state.history_cursor {
            None => {}
            Some(index) if index + 1 >= ctx.history.len() => reset_live(state),
            Some(index) => recall(state, ctx.history, index + 1, &mut effects),
        },
        PromptAction::Autocomplete => {
            let mut matches = ctx.registry.complete(&state.buffer);
            if matches.len() == 1 {
                edit(state, matches.remove(0));
            } else {
                state.autocomplete = Some(matches);
            }
        }
        PromptAction::SetInput { value } => {
            abort_simulation(state, &mut effects);
            edit(state, value);
            effects.push(PromptEffect::FocusInput);
            effects.push(PromptEffect::MoveCursorToEnd);
        }
        PromptAction::Simulate { text } => {
            abort_simulation(state, &mut effects);
            reset_live(state);
            state.next_simulation_id += 1;
            let id = SimulationId(state.next_simulation_id);
            state.simulation = Some(TypingSimulation {
                id,
                remaining: text.chars().collect(),
            });
            effects.push(PromptEffect::FocusInput);
            effects.push(PromptEffect::ScheduleTypingTick {
                simulation: id,
                delay_ms: 0,
            });
        }
        PromptAction::TypingTick { simulation } => {
            let Some(active) = state.simulation.as_mut().filter(|active| active.id == simulation)
            else {
                return effects;
            };
            match active.remaining.pop_front() {
                Some(ch) => {
                    state.buffer.push(ch);
                    effects.push(PromptEffect::ScheduleTypingTick {
                        simulation,
                        delay_ms: ctx.typing_delay_ms,
                    });
                }
                None => {
                    state.simulation = None;
                    submit(state, &mut effects);
                }
            }
        }
        PromptAction::Focus => effects.push(PromptEffect::FocusInput),
        PromptAction::ScrollIntoView => effects.push(PromptEffect::ScrollIntoView),
        PromptAction::Detach => abort_simulation(state, &mut effects),
    }

    effects
}

fn edit(state: &mut PromptState, value: String) {
    state.buffer = value;
    state.history_cursor = None;
    state.autocomplete = None;
}

fn reset_live(state: &mut PromptState) {
    edit(state, String::new());
}

fn submit(state: &mut PromptState, effects: &mut Vec<PromptEffect>) {
    let line = std::mem::take(&mut state.buffer);
    reset_live(state);
    effects.push(PromptEffect::Submit(line));
}

fn recall(
    state: &mut PromptState,
    history: &CommandHistory,
    index: usize,
    effects: &mut Vec<PromptEffect>,
) {
    let Some(entry) = history.get(index) else {
        return;
    };
    state.buffer = reconstruct_input(entry);
    state.history_cursor = Some(index);
    state.autocomplete = None;
    effects.push(PromptEffect::MoveCursorToEnd);
}

fn abort_simulation(state: &mut PromptState, effects: &mut Vec<PromptEffect>) {
    if let Some(active) = state.simulation.take() {
        effects.push(PromptEffect::AbortTyping(active.id));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use terminal_contract::{CommandSpec, EntryTimestamp};

    use super::*;
    use crate::parser::parse_entry_at;

    struct Fixture {
        registry: CommandRegistry,
        history: CommandHistory,
        state: PromptState,
    }

    impl Fixture {
        fn new(lines: &[&str]) -> Self {
            let registry = CommandRegistry::portfolio();
            let mut history = CommandHistory::new();
            for (idx, line) in lines.iter().enumerate() {
                history.append(parse_entry_at(&registry, line, EntryTimestamp(idx as u64 + 1)));
            }
            Self {
                registry,
                history,
                state: PromptState::live(),
            }
        }

        fn apply(&mut self, action: PromptAction) -> Vec<PromptEffect> {
            let ctx = PromptContext {
                history: &self.history,
                registry: &self.registry,
                typing_delay_ms: 50,
            };
            reduce_prompt(&mut self.state, ctx, action)
        }

        fn type_text(&mut self, value: &str) {
            self.apply(PromptAction::Edit {
                value: value.to_string(),
            });
        }
    }

    #[test]
    fn confirm_submits_buffer_and_resets() {
        let mut fx = Fixture::new(&["help"]);
        fx.apply(PromptAction::RecallPrevious);
        let effects = fx.apply(PromptAction::Confirm);

        assert_eq!(effects, vec![PromptEffect::Submit("help".to_string())]);
        assert_eq!(fx.state.buffer, "");
        assert_eq!(fx.state.history_cursor, None);
    }

    #[test]
    fn cancel_clears_without_submitting() {
        let mut fx = Fixture::new(&[]);
        fx.type_text("whoa");
        let effects = fx.apply(PromptAction::Cancel);
        assert!(effects.is_empty());
        assert_eq!(fx.state.buffer, "");
    }

    #[test]
    fn recall_walks_back_and_stops_at_oldest() {
        let mut fx = Fixture::new(&["help", "set-lang fr", "contact --email=a@b.c"]);

        let effects = fx.apply(PromptAction::RecallPrevious);
        assert_eq!(fx.state.buffer, "contact --email=a@b.c");
        assert_eq!(fx.state.history_cursor, Some(2));
        assert_eq!(effects, vec![PromptEffect::MoveCursorToEnd]);

        fx.apply(PromptAction::RecallPrevious);
        assert_eq!(fx.state.buffer, "set-lang fr");
        fx.apply(PromptAction::RecallPrevious);
        assert_eq!(fx.state.buffer, "help");
        assert_eq!(fx.state.history_cursor, Some(0));

        let effects = fx.apply(PromptAction::RecallPrevious);
        assert!(effects.is_empty());
        assert_eq!(fx.state.history_cursor, Some(0));
        assert_eq!(fx.state.buffer, "help");
    }

    #[test]
    fn recall_next_returns_to_live_after_newest() {
        let mut fx = Fixture::new(&["help", "whoami"]);
        fx.apply(PromptAction::RecallPrevious);
        fx.apply(PromptAction::RecallPrevious);

        fx.apply(PromptAction::RecallNext);
        assert_eq!(fx.state.buffer, "whoami");
        assert_eq!(fx.state.history_cursor, Some(1));

        fx.apply(PromptAction::RecallNext);
        assert_eq!(fx.state.buffer, "");
        assert_eq!(fx.state.history_cursor, None);
    }

    #[test]
    fn recall_next_while_live_is_noop() {
        let mut fx = Fixture::new(&["help"]);
        fx.type_text("who");
        let before = fx.state.clone();
        let effects = fx.apply(PromptAction::RecallNext);
        assert!(effects.is_empty());
        assert_eq!(fx.state, before);
    }

    #[test]
    fn recall_on_empty_history_is_noop() {
        let mut fx = Fixture::new(&[]);
        fx.apply(PromptAction::RecallPrevious);
        assert_eq!(fx.state, PromptState::live());
    }

    #[test]
    fn editing_exits_recall_and_autocomplete() {
        let mut fx = Fixture::new(&["help"]);
        fx.apply(PromptAction::RecallPrevious);
        fx.apply(PromptAction::Autocomplete);
        fx.type_text("help!");

        assert_eq!(fx.state.history_cursor, None);
        assert_eq!(fx.state.autocomplete, None);
        assert_eq!(fx.state.buffer, "help!");
    }

    #[test]
    fn autocomplete_single_match_replaces_buffer() {
        let mut fx = Fixture::new(&[]);
        fx.type_text("h");
        fx.apply(PromptAction::Autocomplete);
        assert_eq!(fx.state.buffer, "help");
        assert_eq!(fx.state.autocomplete, None);
    }

    #[test]
    fn autocomplete_multiple_matches_lists_candidates() {
        let mut fx = Fixture::new(&[]);
        fx.type_text("web");
        fx.apply(PromptAction::Autocomplete);
        assert_eq!(fx.state.buffer, "web");
        assert_eq!(
            fx.state.autocomplete,
            Some(vec!["web2work".to_string(), "web3work".to_string()])
        );
    }

    #[test]
    fn autocomplete_without_match_shows_empty_list() {
        let mut fx = Fixture::new(&[]);
        fx.type_text("xyz");
        fx.apply(PromptAction::Autocomplete);
        assert_eq!(fx.state.autocomplete, Some(Vec::new()));
        assert!(fx.state.is_autocompleting());
    }

    #[test]
    fn autocomplete_uses_supplied_registry() {
        let mut fx = Fixture::new(&[]);
        fx.registry = CommandRegistry::new(vec![CommandSpec::new("hello"), CommandSpec::new("help")])
            .expect("registry");
        fx.type_text("hel");
        fx.apply(PromptAction::Autocomplete);
        assert_eq!(
            fx.state.autocomplete,
            Some(vec!["hello".to_string(), "help".to_string()])
        );
    }

    #[test]
    fn set_input_replaces_buffer_and_focuses() {
        let mut fx = Fixture::new(&["help"]);
        fx.apply(PromptAction::RecallPrevious);
        let effects = fx.apply(PromptAction::SetInput {
            value: "set-lang ".to_string(),
        });
        assert_eq!(fx.state.buffer, "set-lang ");
        assert_eq!(fx.state.history_cursor, None);
        assert_eq!(
            effects,
            vec![PromptEffect::FocusInput, PromptEffect::MoveCursorToEnd]
        );
    }

    #[test]
    fn simulation_types_each_character_then_submits() {
        let mut fx = Fixture::new(&[]);
        fx.type_text("leftover");
        let effects = fx.apply(PromptAction::Simulate {
            text: "hi".to_string(),
        });
        assert_eq!(fx.state.buffer, "");
        let id = fx.state.simulation.as_ref().expect("simulating").id;
        assert_eq!(
            effects,
            vec![
                PromptEffect::FocusInput,
                PromptEffect::ScheduleTypingTick {
                    simulation: id,
                    delay_ms: 0
                }
            ]
        );

        let tick = PromptAction::TypingTick { simulation: id };
        fx.apply(tick.clone());
        assert_eq!(fx.state.buffer, "h");
        let effects = fx.apply(tick.clone());
        assert_eq!(fx.state.buffer, "hi");
        assert_eq!(
            effects,
            vec![PromptEffect::ScheduleTypingTick {
                simulation: id,
                delay_ms: 50
            }]
        );

        let effects = fx.apply(tick.clone());
        assert_eq!(effects, vec![PromptEffect::Submit("hi".to_string())]);
        assert!(!fx.state.is_simulating());
        assert!(fx.apply(tick).is_empty());
    }

    #[test]
    fn new_simulation_aborts_previous_run() {
        let mut fx = Fixture::new(&[]);
        fx.apply(PromptAction::Simulate {
            text: "help".to_string(),
        });
        let first = fx.state.simulation.as_ref().expect("first").id;
        fx.apply(PromptAction::TypingTick { simulation: first });

        let effects = fx.apply(PromptAction::Simulate {
            text: "whoami".to_string(),
        });
        let second = fx.state.simulation.as_ref().expect("second").id;
        assert_ne!(first, second);
        assert_eq!(effects[0], PromptEffect::AbortTyping(first));
        assert_eq!(fx.state.buffer, "");

        assert!(fx.apply(PromptAction::TypingTick { simulation: first }).is_empty());
        assert_eq!(fx.state.buffer, "");
    }

    #[test]
    fn user_keys_abort_simulation() {
        let mut fx = Fixture::new(&[]);
        fx.apply(PromptAction::Simulate {
            text: "intro".to_string(),
        });
        let id = fx.state.simulation.as_ref().expect("simulating").id;
        fx.apply(PromptAction::TypingTick { simulation: id });

        let effects = fx.apply(PromptAction::Cancel);
        assert_eq!(effects, vec![PromptEffect::AbortTyping(id)]);
        assert_eq!(fx.state.buffer, "");
        assert!(fx.apply(PromptAction::TypingTick { simulation: id }).is_empty());
    }

    #[test]
    fn detach_aborts_simulation() {
        let mut fx = Fixture::new(&[]);
        fx.apply(PromptAction::Simulate {
            text: "intro".to_string(),
        });
        let id = fx.state.simulation.as_ref().expect("simulating").id;
        assert_eq!(
            fx.apply(PromptAction::Detach),
            vec![PromptEffect::AbortTyping(id)]
        );
        assert!(!fx.state.is_simulating());
    }

    #[test]
    fn read_only_prompt_ignores_everything() {
        let registry = CommandRegistry::portfolio();
        let history = CommandHistory::new();
        let entry = parse_entry_at(&registry, "set-lang fr", EntryTimestamp(1));
        let mut state = PromptState::read_only(&entry);
        let ctx = PromptContext {
            history: &history,
            registry: &registry,
            typing_delay_ms: 50,
        };

        for action in [
            PromptAction::Edit {
                value: "x".to_string(),
            },
            PromptAction::Confirm,
            PromptAction::Cancel,
            PromptAction::Autocomplete,
            PromptAction::Simulate {
                text: "help".to_string(),
            },
            PromptAction::Focus,
        ] {
            assert!(reduce_prompt(&mut state, ctx, action).is_empty());
        }
        assert_eq!(state.buffer, "set-lang fr");
        assert_eq!(state.mode, PromptMode::ReadOnly);
    }
}

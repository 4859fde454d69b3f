//! Session provider and context wiring for the terminal view.
//!
//! This module owns the long-lived [`TerminalSession`] signal, the session-event queue, and the
//! imperative entry points (`focus`, `simulate`, `set_input`, `scroll_into_view`) other components
//! use to drive the live prompt.

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use terminal_contract::Lang;
use terminal_core::{PromptAction, SessionEvent, TerminalSession};

use crate::{effects, timers::PendingTimers};

#[derive(Clone, Copy)]
/// Leptos context for reading terminal session state and dispatching [`PromptAction`] values.
pub struct TerminalSessionContext {
    /// Reactive session state: history plus live prompt.
    pub session: RwSignal<TerminalSession>,
    /// Active interface language.
    pub lang: RwSignal<Lang>,
    /// Queue of session events awaiting execution.
    pub events: RwSignal<Vec<SessionEvent>>,
    /// Prompt dispatch callback.
    pub dispatch: Callback<PromptAction>,
    /// Live prompt input element.
    pub input_ref: NodeRef<html::Input>,
    /// Typing and scroll timers not fired yet.
    pub timers: StoredValue<PendingTimers<TimeoutHandle>>,
}

impl TerminalSessionContext {
    /// Dispatches a prompt action through the context callback.
    pub fn dispatch_action(&self, action: PromptAction) {
        self.dispatch.call(action);
    }

    /// Runs `op` against the session and queues the events it returns.
    pub fn run(&self, op: impl FnOnce(&mut TerminalSession) -> Vec<SessionEvent>) {
        let mut produced = Vec::new();
        self.session.update(|session| produced = op(session));
        queue_events(self.events, produced);
    }

    /// Focuses the live prompt.
    pub fn focus(&self) {
        self.run(TerminalSession::focus);
    }

    /// Types `text` into the live prompt and submits it.
    pub fn simulate(&self, text: impl Into<String>) {
        let text = text.into();
        self.run(move |session| session.simulate(text));
    }

    /// Replaces the live prompt's input.
    pub fn set_input(&self, value: impl Into<String>) {
        let value = value.into();
        self.run(move |session| session.set_input(value));
    }

    /// Scrolls the live prompt into view.
    pub fn scroll_into_view(&self) {
        self.run(TerminalSession::scroll_into_view);
    }
}

fn queue_events(events: RwSignal<Vec<SessionEvent>>, produced: Vec<SessionEvent>) {
    if produced.is_empty() {
        return;
    }
    events.update(|queue| queue.extend(produced));
}

#[component]
/// Provides [`TerminalSessionContext`] to descendant components.
pub fn TerminalSessionProvider(
    /// Session built from the host's registry and configuration.
    session: TerminalSession,
    children: Children,
) -> impl IntoView {
    let lang = create_rw_signal(session.config().default_lang);
    let session = create_rw_signal(session);
    let events = create_rw_signal(Vec::<SessionEvent>::new());
    let timers = store_value(PendingTimers::<TimeoutHandle>::default());

    let dispatch = Callback::new(move |action: PromptAction| {
        let mut produced = Vec::new();
        session.update(|session| produced = session.dispatch(action));
        queue_events(events, produced);
    });

    let ctx = TerminalSessionContext {
        session,
        lang,
        events,
        dispatch,
        input_ref: create_node_ref::<html::Input>(),
        timers,
    };

    provide_context(ctx);
    effects::install(ctx);
    on_cleanup(move || effects::teardown(ctx));

    children().into_view()
}

/// Returns the current [`TerminalSessionContext`].
///
/// # Panics
///
/// Panics if called outside [`TerminalSessionProvider`].
pub fn use_terminal_session() -> TerminalSessionContext {
    use_context::<TerminalSessionContext>().expect("TerminalSessionContext not provided")
}

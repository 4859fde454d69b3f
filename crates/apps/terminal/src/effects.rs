//! Session-event executor for the terminal view.

use std::time::Duration;

use leptos::*;
use terminal_core::{PromptAction, PromptEffect, SessionEvent, SimulationId, SubmitOutcome};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{context::TerminalSessionContext, timers::PendingTimers};

const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Installs the executor that drains queued session events in order.
pub fn install(ctx: TerminalSessionContext) {
    // Take the batch before running it so events queued by nested dispatches land in a fresh one.
    create_effect(move |_| {
        let queued = ctx.events.get();
        if queued.is_empty() {
            return;
        }

        ctx.events.set(Vec::new());

        for event in queued {
            run_session_event(ctx, event);
        }
    });
}

/// Detaches the live prompt and cancels every pending timer when the terminal unmounts.
pub fn teardown(ctx: TerminalSessionContext) {
    ctx.session.try_update(|session| session.dispatch(PromptAction::Detach));
    ctx.timers.try_update_value(PendingTimers::clear_all);
}

fn run_session_event(ctx: TerminalSessionContext, event: SessionEvent) {
    match event {
        SessionEvent::Submitted { outcome, .. } => {
            if outcome == SubmitOutcome::Cleared {
                logging::log!("terminal history cleared");
            }
        }
        SessionEvent::LanguageRequested(lang) => ctx.lang.set(lang),
        SessionEvent::Effect(effect) => run_prompt_effect(ctx, effect),
    }
}

fn run_prompt_effect(ctx: TerminalSessionContext, effect: PromptEffect) {
    match effect {
        PromptEffect::ScheduleTypingTick {
            simulation,
            delay_ms,
        } => schedule_typing_tick(ctx, simulation, Duration::from_millis(delay_ms)),
        PromptEffect::AbortTyping(simulation) => {
            ctx.timers.try_update_value(|timers| timers.abort_typing(simulation));
        }
        PromptEffect::FocusInput => {
            if let Some(input) = ctx.input_ref.get_untracked() {
                let _ = input.focus();
            }
        }
        PromptEffect::MoveCursorToEnd => {
            if let Some(input) = ctx.input_ref.get_untracked() {
                let end = input.value().encode_utf16().count() as u32;
                if let Err(err) = input.set_selection_range(end, end) {
                    logging::warn!("terminal caret move failed: {err:?}");
                }
            }
        }
        PromptEffect::ScrollIntoView => schedule_scroll(ctx),
        PromptEffect::Submit(raw) => {
            logging::warn!("terminal submit effect reached the view unhandled: `{raw}`");
        }
    }
}

fn schedule_typing_tick(ctx: TerminalSessionContext, simulation: SimulationId, delay: Duration) {
    let scheduled = set_timeout_with_handle(
        move || {
            ctx.timers.try_update_value(|timers| timers.typing_fired(simulation));
            ctx.dispatch_action(PromptAction::TypingTick { simulation });
        },
        delay,
    );
    match scheduled {
        Ok(handle) => ctx
            .timers
            .update_value(|timers| timers.track_typing(simulation, handle)),
        Err(err) => logging::warn!("terminal typing tick scheduling failed: {err:?}"),
    }
}

fn schedule_scroll(ctx: TerminalSessionContext) {
    let scheduled = set_timeout_with_handle(
        move || {
            ctx.timers.try_update_value(PendingTimers::scroll_fired);
            if let Some(input) = ctx.input_ref.get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                input.scroll_into_view_with_scroll_into_view_options(&options);
            }
        },
        SCROLL_SETTLE_DELAY,
    );
    match scheduled {
        Ok(handle) => ctx.timers.update_value(|timers| timers.track_scroll(handle)),
        Err(err) => logging::warn!("terminal scroll scheduling failed: {err:?}"),
    }
}

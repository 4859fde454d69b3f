//! Timer-driven scripted typing for hosts that can await a sleep future.

use std::{cell::RefCell, future::Future, rc::Rc, time::Duration};

use futures::future::{abortable, AbortHandle, Abortable};

use crate::{
    prompt::{PromptAction, PromptEffect, SimulationId},
    session::{SessionEvent, TerminalSession},
};

/// Builds a task that types `text` into `session`'s live prompt and submits it.
///
/// `sleep` supplies the delay between keystrokes. Every event produced along the way is passed to
/// `observe` as it happens and returned when the task finishes. The task ends early when the run
/// is superseded by another simulation or aborted by a user key, and can be cancelled outright
/// through the returned [`AbortHandle`].
pub fn run_simulation<S, Fut, O>(
    session: Rc<RefCell<TerminalSession>>,
    text: impl Into<String>,
    sleep: S,
    mut observe: O,
) -> (
    Abortable<impl Future<Output = Vec<SessionEvent>>>,
    AbortHandle,
)
where
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
    O: FnMut(&SessionEvent),
{
    let text = text.into();
    abortable(async move {
        let mut collected = Vec::new();
        let mut pending = session.borrow_mut().simulate(text);
        loop {
            let next_tick = scheduled_tick(&pending);
            for event in pending.drain(..) {
                observe(&event);
                collected.push(event);
            }
            let Some((simulation, delay_ms)) = next_tick else {
                break;
            };
            sleep(Duration::from_millis(delay_ms)).await;
            pending = session
                .borrow_mut()
                .dispatch(PromptAction::TypingTick { simulation });
        }
        collected
    })
}

fn scheduled_tick(events: &[SessionEvent]) -> Option<(SimulationId, u64)> {
    events.iter().find_map(|event| match event {
        SessionEvent::Effect(PromptEffect::ScheduleTypingTick {
            simulation,
            delay_ms,
        }) => Some((*simulation, *delay_ms)),
        _ => None,
    })
}

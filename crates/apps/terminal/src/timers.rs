//! Bookkeeping for browser timers the terminal may still have pending at unmount.

use std::collections::BTreeMap;

use leptos::leptos_dom::helpers::TimeoutHandle;
use terminal_core::SimulationId;

/// A scheduled callback that can be cancelled.
pub trait ClearTimer {
    /// Cancels the callback if it has not fired yet.
    fn clear(&self);
}

impl ClearTimer for TimeoutHandle {
    fn clear(&self) {
        TimeoutHandle::clear(self);
    }
}

/// Pending typing ticks, keyed by run, plus the pending delayed scroll.
#[derive(Debug)]
pub struct PendingTimers<H> {
    typing: BTreeMap<SimulationId, H>,
    scroll: Option<H>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self {
            typing: BTreeMap::new(),
            scroll: None,
        }
    }
}

impl<H: ClearTimer> PendingTimers<H> {
    /// Records the tick scheduled for `simulation`, cancelling any tick it replaces.
    pub fn track_typing(&mut self, simulation: SimulationId, handle: H) {
        if let Some(previous) = self.typing.insert(simulation, handle) {
            previous.clear();
        }
    }

    /// Forgets the tick for `simulation` after it fired.
    pub fn typing_fired(&mut self, simulation: SimulationId) {
        self.typing.remove(&simulation);
    }

    /// Cancels the pending tick for `simulation`.
    pub fn abort_typing(&mut self, simulation: SimulationId) {
        if let Some(handle) = self.typing.remove(&simulation) {
            handle.clear();
        }
    }

    /// Records the delayed scroll, cancelling an earlier one still waiting.
    pub fn track_scroll(&mut self, handle: H) {
        if let Some(previous) = self.scroll.replace(handle) {
            previous.clear();
        }
    }

    /// Forgets the delayed scroll after it fired.
    pub fn scroll_fired(&mut self) {
        self.scroll = None;
    }

    /// Cancels every pending timer.
    pub fn clear_all(&mut self) {
        for handle in std::mem::take(&mut self.typing).into_values() {
            handle.clear();
        }
        if let Some(handle) = self.scroll.take() {
            handle.clear();
        }
    }

    /// Returns whether no timer is pending.
    pub fn is_idle(&self) -> bool {
        self.typing.is_empty() && self.scroll.is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct FakeHandle {
        name: &'static str,
        cleared: Rc<RefCell<Vec<&'static str>>>,
    }

    impl ClearTimer for FakeHandle {
        fn clear(&self) {
            self.cleared.borrow_mut().push(self.name);
        }
    }

    fn handle(name: &'static str, cleared: &Rc<RefCell<Vec<&'static str>>>) -> FakeHandle {
        FakeHandle {
            name,
            cleared: cleared.clone(),
        }
    }

    #[test]
    fn clear_all_cancels_pending_scroll_and_typing() {
        let cleared = Rc::new(RefCell::new(Vec::new()));
        let mut timers = PendingTimers::default();
        timers.track_typing(SimulationId(1), handle("tick", &cleared));
        timers.track_scroll(handle("scroll", &cleared));
        assert!(!timers.is_idle());

        timers.clear_all();

        assert!(timers.is_idle());
        assert_eq!(*cleared.borrow(), vec!["tick", "scroll"]);
    }

    #[test]
    fn scroll_pending_at_unmount_is_cancelled() {
        let cleared = Rc::new(RefCell::new(Vec::new()));
        let mut timers = PendingTimers::default();
        timers.track_scroll(handle("scroll", &cleared));

        timers.clear_all();

        assert!(timers.is_idle());
        assert_eq!(*cleared.borrow(), vec!["scroll"]);
    }

    #[test]
    fn fired_timers_are_not_cancelled_again() {
        let cleared = Rc::new(RefCell::new(Vec::new()));
        let mut timers = PendingTimers::default();
        timers.track_typing(SimulationId(1), handle("tick", &cleared));
        timers.track_scroll(handle("scroll", &cleared));
        timers.typing_fired(SimulationId(1));
        timers.scroll_fired();

        timers.clear_all();

        assert!(timers.is_idle());
        assert!(cleared.borrow().is_empty());
    }

    #[test]
    fn replacing_a_timer_cancels_the_older_one() {
        let cleared = Rc::new(RefCell::new(Vec::new()));
        let mut timers = PendingTimers::default();
        timers.track_scroll(handle("first", &cleared));
        timers.track_scroll(handle("second", &cleared));
        timers.track_typing(SimulationId(2), handle("old-tick", &cleared));
        timers.track_typing(SimulationId(2), handle("new-tick", &cleared));
        assert_eq!(*cleared.borrow(), vec!["first", "old-tick"]);

        timers.abort_typing(SimulationId(2));
        assert_eq!(*cleared.borrow(), vec!["first", "old-tick", "new-tick"]);
    }
}

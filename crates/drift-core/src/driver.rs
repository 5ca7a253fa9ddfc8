//! Scheduling bookkeeping for the frame loop and the resize debounce.
//!
//! The actual scheduler (requestAnimationFrame, setTimeout) lives in the
//! host shell; these types only track the one outstanding registration so
//! pause/resume and debounce transitions stay correct and testable. `H` is
//! the host's opaque handle type.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Run/pause state machine. Invariant: at most one scheduler registration
/// is outstanding, and `pause` cancels exactly the registration made by the
/// last `start`/`resume`/`rearm`, never a stale one.
#[derive(Debug)]
pub struct TickDriver<H> {
    state: RunState,
    pending: Option<H>,
}

impl<H> Default for TickDriver<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TickDriver<H> {
    pub fn new() -> Self {
        Self {
            state: RunState::Paused,
            pending: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Enter running and schedule the first tick. No-op if already running.
    pub fn start(&mut self, schedule: impl FnOnce() -> H) {
        if self.state == RunState::Running {
            return;
        }
        self.state = RunState::Running;
        self.pending = Some(schedule());
    }

    /// Called at the top of a scheduled tick: the registration that fired
    /// is spent. Returns whether the tick's work should run.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        self.state == RunState::Running
    }

    /// Schedule the next tick. Only acts while running with nothing
    /// pending, so a redraw outside the normal cadence can never
    /// double-schedule.
    pub fn rearm(&mut self, schedule: impl FnOnce() -> H) {
        if self.state == RunState::Running && self.pending.is_none() {
            self.pending = Some(schedule());
        }
    }

    /// Cancel the pending registration and enter paused. No-op (not an
    /// error) if already paused.
    pub fn pause(&mut self, cancel: impl FnOnce(H)) {
        if self.state == RunState::Paused {
            return;
        }
        self.state = RunState::Paused;
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
    }

    /// Re-enter running and reschedule. No-op if already running.
    pub fn resume(&mut self, schedule: impl FnOnce() -> H) {
        self.start(schedule);
    }
}

/// Coalesces bursts of events into one callback after a quiet period.
/// Cancel-then-reschedule is the only transition: a new event always
/// supersedes the pending timer.
#[derive(Debug)]
pub struct DebounceTimer<H> {
    pending: Option<H>,
}

impl<H> Default for DebounceTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> DebounceTimer<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn restart(&mut self, cancel: impl FnOnce(H), schedule: impl FnOnce() -> H) {
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
        self.pending = Some(schedule());
    }

    /// Consume the pending handle when the timer fires. Returns false for a
    /// stale callback whose registration was already cancelled.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn cancel(&mut self, cancel: impl FnOnce(H)) {
        if let Some(handle) = self.pending.take() {
            cancel(handle);
        }
    }
}

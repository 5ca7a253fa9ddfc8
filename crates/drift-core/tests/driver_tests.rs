// The scheduler itself lives in the host shell; these tests drive the
// bookkeeping with counters standing in for rAF/timeout handles.

use drift_core::driver::{DebounceTimer, RunState, TickDriver};
use std::cell::Cell;

struct MockScheduler {
    next_handle: Cell<i32>,
    scheduled: Cell<u32>,
    cancelled: Cell<Option<i32>>,
}

impl MockScheduler {
    fn new() -> Self {
        Self {
            next_handle: Cell::new(0),
            scheduled: Cell::new(0),
            cancelled: Cell::new(None),
        }
    }

    fn schedule(&self) -> i32 {
        self.scheduled.set(self.scheduled.get() + 1);
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        handle
    }

    fn cancel(&self, handle: i32) {
        self.cancelled.set(Some(handle));
    }
}

#[test]
fn start_schedules_once_and_is_idempotent() {
    let sched = MockScheduler::new();
    let mut driver: TickDriver<i32> = TickDriver::new();
    assert_eq!(driver.state(), RunState::Paused);

    driver.start(|| sched.schedule());
    assert!(driver.is_running());
    assert!(driver.has_pending());
    assert_eq!(sched.scheduled.get(), 1);

    // second start is a no-op, no double registration
    driver.start(|| sched.schedule());
    assert_eq!(sched.scheduled.get(), 1);
}

#[test]
fn tick_consumes_the_registration_and_rearm_makes_the_next() {
    let sched = MockScheduler::new();
    let mut driver: TickDriver<i32> = TickDriver::new();
    driver.start(|| sched.schedule());

    assert!(driver.begin_tick(), "running driver must do tick work");
    assert!(!driver.has_pending());
    driver.rearm(|| sched.schedule());
    assert!(driver.has_pending());
    assert_eq!(sched.scheduled.get(), 2);

    // rearm with a registration already pending is a no-op
    driver.rearm(|| sched.schedule());
    assert_eq!(sched.scheduled.get(), 2);
}

#[test]
fn pause_cancels_exactly_the_last_registration() {
    let sched = MockScheduler::new();
    let mut driver: TickDriver<i32> = TickDriver::new();
    driver.start(|| sched.schedule());
    assert!(driver.begin_tick());
    driver.rearm(|| sched.schedule());
    let last = sched.next_handle.get();

    driver.pause(|h| sched.cancel(h));
    assert_eq!(driver.state(), RunState::Paused);
    assert_eq!(sched.cancelled.get(), Some(last), "cancelled a stale handle");
    assert!(!driver.has_pending());
}

#[test]
fn double_pause_is_a_no_op_not_an_error() {
    let sched = MockScheduler::new();
    let mut driver: TickDriver<i32> = TickDriver::new();
    driver.start(|| sched.schedule());
    driver.pause(|h| sched.cancel(h));
    sched.cancelled.set(None);

    driver.pause(|h| sched.cancel(h));
    assert_eq!(sched.cancelled.get(), None, "second pause must cancel nothing");
}

#[test]
fn tick_after_pause_does_no_work() {
    let sched = MockScheduler::new();
    let mut driver: TickDriver<i32> = TickDriver::new();
    driver.start(|| sched.schedule());
    driver.pause(|h| sched.cancel(h));

    // a callback that still fires after cancellation must be ignored
    assert!(!driver.begin_tick());
    driver.rearm(|| sched.schedule());
    assert_eq!(sched.scheduled.get(), 1, "paused driver must not reschedule");
}

#[test]
fn pause_resume_keeps_exactly_one_registration() {
    let sched = MockScheduler::new();
    let mut driver: TickDriver<i32> = TickDriver::new();
    driver.start(|| sched.schedule());

    for _ in 0..3 {
        driver.pause(|h| sched.cancel(h));
        driver.resume(|| sched.schedule());
        driver.resume(|| sched.schedule()); // no-op while running
    }
    // every registration was either cancelled or is the single pending one
    assert_eq!(sched.scheduled.get(), 4);
    assert!(driver.has_pending());
    assert_eq!(sched.cancelled.get(), Some(3));
}

#[test]
fn debounce_restart_cancels_before_rescheduling() {
    let sched = MockScheduler::new();
    let mut timer: DebounceTimer<i32> = DebounceTimer::new();
    assert!(!timer.is_pending());

    timer.restart(|h| sched.cancel(h), || sched.schedule());
    assert!(timer.is_pending());
    assert_eq!(sched.cancelled.get(), None, "nothing to cancel the first time");

    timer.restart(|h| sched.cancel(h), || sched.schedule());
    assert_eq!(sched.cancelled.get(), Some(1), "burst must cancel the pending timer");
    assert_eq!(sched.scheduled.get(), 2);
}

#[test]
fn debounce_fires_once_per_registration() {
    let sched = MockScheduler::new();
    let mut timer: DebounceTimer<i32> = DebounceTimer::new();
    timer.restart(|h| sched.cancel(h), || sched.schedule());

    assert!(timer.fire());
    assert!(!timer.fire(), "stale callback must be ignored");
    assert!(!timer.is_pending());

    timer.restart(|h| sched.cancel(h), || sched.schedule());
    timer.cancel(|h| sched.cancel(h));
    assert!(!timer.fire(), "cancelled timer must not fire");
}

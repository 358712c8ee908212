//! Trailing debounce over a pluggable timer.
//!
//! In the browser timers are `gloo_timers` timeouts, which are cancelled by
//! dropping their handle. Tests drive time by hand through
//! [`testing::ManualTimers`].

use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;

/// Search debounce used by list screens
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Schedules one-shot callbacks. Dropping the returned handle cancels the callback.
pub trait TimerScheduler: 'static {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerScheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Runs `callback` with the last value passed to [`Debouncer::call`] once
/// `delay_ms` have passed without another call.
pub struct Debouncer<T: 'static, S: TimerScheduler = BrowserTimers> {
    delay_ms: u32,
    scheduler: S,
    callback: Rc<dyn Fn(T)>,
    generation: u64,
    // generation of the call that is still waiting, shared with the timer closure
    pending: Rc<Cell<Option<u64>>>,
    handle: Option<S::Handle>,
}

impl<T: 'static, S: TimerScheduler> Debouncer<T, S> {
    pub fn new(delay_ms: u32, scheduler: S, callback: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            scheduler,
            callback: Rc::new(callback),
            generation: 0,
            pending: Rc::new(Cell::new(None)),
            handle: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Cancels the waiting call, if any, and restarts the delay with `value`
    pub fn call(&mut self, value: T) {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        self.pending.set(Some(generation));

        let pending = Rc::clone(&self.pending);
        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                // a timer that outlived its cancellation must not fire
                if pending.get() != Some(generation) {
                    return;
                }
                pending.set(None);
                callback(value);
            }),
        );
        self.handle = Some(handle);
    }

    /// Drops the waiting call without running it
    pub fn cancel(&mut self) {
        self.pending.set(None);
        self.handle = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::TimerScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Task {
        due_ms: u64,
        alive: Rc<RefCell<bool>>,
        callback: Option<Box<dyn FnOnce()>>,
    }

    /// Virtual clock: callbacks run only from [`ManualTimers::advance`]
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        now_ms: Rc<RefCell<u64>>,
        tasks: Rc<RefCell<Vec<Task>>>,
    }

    /// Cancels its task when dropped
    pub struct ManualHandle(Rc<RefCell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            *self.0.borrow_mut() = false;
        }
    }

    impl ManualTimers {
        pub fn new() -> Self {
            Self::default()
        }

        /// Moves the clock forward, running every live task that falls due
        pub fn advance(&self, ms: u64) {
            let target = *self.now_ms.borrow() + ms;
            loop {
                let next = {
                    let mut tasks = self.tasks.borrow_mut();
                    tasks.retain(|t| *t.alive.borrow() && t.callback.is_some());
                    let idx = tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due_ms <= target)
                        .min_by_key(|(_, t)| t.due_ms)
                        .map(|(i, _)| i);
                    idx.map(|i| tasks.remove(i))
                };
                let Some(mut task) = next else { break };
                *self.now_ms.borrow_mut() = task.due_ms;
                if let Some(callback) = task.callback.take() {
                    callback();
                }
            }
            *self.now_ms.borrow_mut() = target;
        }

        pub fn live_tasks(&self) -> usize {
            self.tasks
                .borrow()
                .iter()
                .filter(|t| *t.alive.borrow())
                .count()
        }
    }

    impl TimerScheduler for ManualTimers {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let alive = Rc::new(RefCell::new(true));
            self.tasks.borrow_mut().push(Task {
                due_ms: *self.now_ms.borrow() + u64::from(delay_ms),
                alive: Rc::clone(&alive),
                callback: Some(callback),
            });
            ManualHandle(alive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualTimers;
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |v: String| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let timers = ManualTimers::new();
        let (calls, cb) = recorder();
        let mut debouncer = Debouncer::new(500, timers.clone(), cb);

        debouncer.call("a".to_string());
        timers.advance(40);
        debouncer.call("ab".to_string());
        timers.advance(40);
        debouncer.call("abc".to_string());

        timers.advance(499);
        assert!(calls.borrow().is_empty());
        assert!(debouncer.is_pending());

        timers.advance(1);
        assert_eq!(*calls.borrow(), vec!["abc".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_at_most_one_live_timer() {
        let timers = ManualTimers::new();
        let (_calls, cb) = recorder();
        let mut debouncer = Debouncer::new(500, timers.clone(), cb);

        for i in 0..5 {
            debouncer.call(i.to_string());
        }
        assert_eq!(timers.live_tasks(), 1);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let timers = ManualTimers::new();
        let (calls, cb) = recorder();
        let mut debouncer = Debouncer::new(500, timers.clone(), cb);

        debouncer.call("x".to_string());
        debouncer.cancel();
        timers.advance(1_000);
        assert!(calls.borrow().is_empty());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_separate_windows_fire_separately() {
        let timers = ManualTimers::new();
        let (calls, cb) = recorder();
        let mut debouncer = Debouncer::new(500, timers.clone(), cb);

        debouncer.call("first".to_string());
        timers.advance(600);
        debouncer.call("second".to_string());
        timers.advance(600);
        assert_eq!(
            *calls.borrow(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}

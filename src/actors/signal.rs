//! Cross-thread signals shared by the session and its actors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// Cooperative stop request. Sleeps taken through it end early once stopped.
#[derive(Debug, Default)]
pub struct Shutdown {
    stopped: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
        let _guard = self.lock.lock();
        self.wake.notify_all();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Sleeps for `duration` unless stopped first. Returns `false` when stopped.
    ///
    /// A duration too long to express as an `Instant` sleeps until stopped.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now().checked_add(duration);
        let mut guard = self.lock.lock();
        while !self.is_stopped() {
            match deadline {
                Some(deadline) => {
                    if self.wake.wait_until(&mut guard, deadline).timed_out() {
                        return !self.is_stopped();
                    }
                }
                None => self.wake.wait(&mut guard),
            }
        }
        false
    }
}

/// "Control has passed to the automated seat" flag.
///
/// Raised by whoever finishes a move that leaves the automated seat to act,
/// taken back by the automated actor once that seat is no longer current.
#[derive(Debug, Default)]
pub struct Handoff {
    raised: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

impl Handoff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
        let _guard = self.lock.lock();
        self.wake.notify_all();
    }

    /// Clears the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.raised
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }

    /// Wakes waiters without raising, so they can notice a stop request.
    pub fn interrupt(&self) {
        let _guard = self.lock.lock();
        self.wake.notify_all();
    }

    /// Waits up to `timeout` for the flag. Returns whether it is raised.
    pub fn wait(&self, timeout: Duration) -> bool {
        let mut guard = self.lock.lock();
        if !self.is_raised() {
            let _ = self.wake.wait_for(&mut guard, timeout);
        }
        self.is_raised()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn stop_cuts_a_sleep_short() {
        let shutdown = Arc::new(Shutdown::new());
        let sleeper = {
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || {
                let started = Instant::now();
                let completed = shutdown.sleep(Duration::from_secs(30));
                (completed, started.elapsed())
            })
        };
        thread::sleep(Duration::from_millis(20));
        shutdown.stop();
        let (completed, elapsed) = sleeper.join().expect("sleeper thread");
        assert!(!completed);
        assert!(elapsed < Duration::from_secs(30));
        assert!(!shutdown.sleep(Duration::from_millis(1)));
    }

    #[test]
    fn unbounded_sleep_waits_for_stop() {
        let shutdown = Arc::new(Shutdown::new());
        let sleeper = {
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || shutdown.sleep(Duration::MAX))
        };
        thread::sleep(Duration::from_millis(20));
        shutdown.stop();
        assert!(!sleeper.join().expect("sleeper thread"));
    }

    #[test]
    fn sleep_runs_to_completion_without_stop() {
        let shutdown = Shutdown::new();
        assert!(shutdown.sleep(Duration::from_millis(5)));
    }

    #[test]
    fn handoff_is_taken_once() {
        let handoff = Arc::new(Handoff::new());
        assert!(!handoff.wait(Duration::from_millis(1)));
        let waiter = {
            let handoff = Arc::clone(&handoff);
            thread::spawn(move || handoff.wait(Duration::from_secs(30)))
        };
        thread::sleep(Duration::from_millis(10));
        handoff.raise();
        assert!(waiter.join().expect("waiter thread"));
        assert!(handoff.take());
        assert!(!handoff.take());
        assert!(!handoff.is_raised());
    }
}

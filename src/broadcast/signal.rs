//! One-shot broadcast signal
//!
//! A [`Signal`] is raised at most once, carrying a value, and releases every
//! waiter: those already suspended and those that arrive later.

use std::sync::OnceLock;

use tokio::sync::Notify;

/// Set-once cell that wakes all waiters when it is raised
///
/// The value is written before waiters are notified, so a waiter that
/// observes the signal always observes the complete value.
#[derive(Debug)]
pub struct Signal<V> {
    value: OnceLock<V>,
    notify: Notify,
}

impl<V> Signal<V> {
    /// Create an unraised signal
    pub fn new() -> Self {
        Self {
            value: OnceLock::new(),
            notify: Notify::new(),
        }
    }

    /// Raise the signal with `value`
    ///
    /// Returns `false` and drops `value` if the signal was already raised.
    pub fn raise(&self, value: V) -> bool {
        if self.value.set(value).is_err() {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    /// Value of a raised signal, without waiting
    pub fn get(&self) -> Option<&V> {
        self.value.get()
    }

    /// Whether the signal has been raised
    pub fn is_raised(&self) -> bool {
        self.value.get().is_some()
    }

    /// Wait until the signal is raised
    ///
    /// Returns immediately when already raised.
    pub async fn wait(&self) -> &V {
        loop {
            // `notified()` registers for `notify_waiters` on creation, so a
            // raise between the check below and the await is not lost.
            let notified = self.notify.notified();
            if let Some(value) = self.value.get() {
                return value;
            }
            notified.await;
        }
    }

    /// Take the value out of an exclusively owned signal
    pub(crate) fn take(&mut self) -> Option<V> {
        self.value.take()
    }
}

impl<V> Default for Signal<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_test::{assert_pending, assert_ready_eq, task};

    use super::*;

    #[test]
    fn test_raise_once() {
        let signal = Signal::new();
        assert!(!signal.is_raised());
        assert!(signal.raise(1));
        assert!(!signal.raise(2));
        assert_eq!(signal.get(), Some(&1));
    }

    #[test]
    fn test_waiter_released_by_raise() {
        let signal = Signal::new();
        let mut wait = task::spawn(signal.wait());
        assert_pending!(wait.poll());

        signal.raise("ready");
        assert!(wait.is_woken());
        assert_ready_eq!(wait.poll(), &"ready");
    }

    #[test]
    fn test_late_waiter_returns_immediately() {
        let signal = Signal::new();
        signal.raise(7u32);

        let mut wait = task::spawn(signal.wait());
        assert_ready_eq!(wait.poll(), &7);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_waiters() {
        let signal = Arc::new(Signal::new());

        let waiters: Vec<_> = (0..32)
            .map(|_| {
                let signal = Arc::clone(&signal);
                tokio::spawn(async move { *signal.wait().await })
            })
            .collect();

        tokio::task::yield_now().await;
        signal.raise(42u64);

        for waiter in waiters {
            assert_eq!(waiter.await.unwrap(), 42);
        }
    }
}

//! Process shutdown trigger
//!
//! [`Shutdown`] is raised once; every [`ShutdownSignal`] cloned from it
//! resolves, including ones that start waiting afterwards.

use std::sync::Arc;

use crate::broadcast::Signal;

/// Trigger for shutdowns
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    signal: Arc<Signal<()>>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the shutdown. Returns `false` if it had already fired.
    pub fn trigger(&self) -> bool {
        self.signal.raise(())
    }

    pub fn is_triggered(&self) -> bool {
        self.signal.is_raised()
    }

    pub fn to_signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            signal: Arc::clone(&self.signal),
        }
    }
}

/// Receiver end of a shutdown trigger
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    signal: Arc<Signal<()>>,
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        self.signal.is_raised()
    }

    /// Wait for the shutdown to be triggered
    pub async fn wait(&self) {
        self.signal.wait().await;
    }
}

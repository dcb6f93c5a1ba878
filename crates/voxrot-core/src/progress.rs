//! Status reporting and cooperative cancellation.
//!
//! Each long-running operation owns one [`ProgressCtx`]: a status sink, a
//! cancellation token, and a throttle timestamp. Tasks share the context by
//! reference; there is no global progress state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Receives human-readable status messages from an operation.
pub trait StatusSink: Send + Sync {
    /// Delivers one status message.
    fn status(&self, message: &str);
}

/// A [`StatusSink`] that forwards messages to the `log` crate at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn status(&self, message: &str) {
        log::info!("{message}");
    }
}

/// A cloneable cooperative-cancellation flag.
#[derive(Debug, Default, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Tasks observe it at their next poll.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-operation progress context.
///
/// Throttled messages are emitted at most once per second across all tasks
/// sharing the context; the only lock is around the throttle timestamp.
pub struct ProgressCtx {
    sink: Box<dyn StatusSink>,
    cancel: CancelToken,
    last_emit: Mutex<Option<Instant>>,
}

impl ProgressCtx {
    const THROTTLE: Duration = Duration::from_secs(1);

    /// Creates a context with the given sink and cancellation token.
    #[must_use]
    pub fn new(sink: Box<dyn StatusSink>, cancel: CancelToken) -> Self {
        Self {
            sink,
            cancel,
            last_emit: Mutex::new(None),
        }
    }

    /// Creates a context that logs status messages and owns a fresh token.
    #[must_use]
    pub fn with_log_sink() -> Self {
        Self::new(Box::new(LogSink), CancelToken::new())
    }

    /// Emits a status message unconditionally.
    pub fn status(&self, message: &str) {
        self.sink.status(message);
    }

    /// Emits a status message unless one was emitted within the last second.
    pub fn status_throttled(&self, message: &str) {
        if let Ok(mut last) = self.last_emit.lock() {
            let due = last.map_or(true, |t| t.elapsed() >= Self::THROTTLE);
            if due {
                *last = Some(Instant::now());
                self.sink.status(message);
            }
        }
    }

    /// Returns the operation's cancellation token.
    #[must_use]
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Polls for cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

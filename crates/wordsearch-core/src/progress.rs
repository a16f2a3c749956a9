use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hooks the placement engine calls while it searches.
///
/// Every method has a no-op default, so callers implement only what they need.
pub trait PlacementObserver {
    /// Called after every commit or backtrack with the number of words currently placed
    fn on_step(&mut self, _placed: usize, _total: usize) {}

    /// Called when the grid is too small and the search restarts at `new_dim`
    fn on_grow(&mut self, _new_dim: usize) {}

    /// Polled between word-placement attempts
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl PlacementObserver for () {}

/// Shared cancellation flag.
///
/// Clone it, hand one copy to the generating thread and call
/// [`CancelToken::cancel`] from another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl PlacementObserver for CancelToken {
    fn is_cancelled(&self) -> bool {
        CancelToken::is_cancelled(self)
    }
}

/// Forwards progress to a closure; cancellation comes from an optional token
pub struct ProgressFn<F> {
    callback: F,
    cancel: Option<CancelToken>,
}

impl<F: FnMut(usize, usize)> ProgressFn<F> {
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl<F: FnMut(usize, usize)> PlacementObserver for ProgressFn<F> {
    fn on_step(&mut self, placed: usize, total: usize) {
        (self.callback)(placed, total);
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

use web_time::Duration;

/// Timer the host uses to finish a close transition.
///
/// A host keeps at most one close pending, so an implementation only needs to
/// track the latest scheduled callback.
pub trait CloseScheduler: Send + Sync + 'static {
    /// Runs `on_elapsed` after `delay`. Returns `false` if nothing was
    /// scheduled, in which case the caller completes the close itself.
    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce() + Send>) -> bool;

    /// Drops the pending callback, if any.
    fn cancel(&self);
}

#[cfg(any(feature = "hydrate", feature = "csr"))]
mod browser {
    use std::sync::Mutex;

    use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
    use web_time::Duration;

    use super::CloseScheduler;

    /// `setTimeout` backed scheduler that keeps the handle so a reopen can clear it.
    #[derive(Default)]
    pub struct BrowserTimer {
        handle: Mutex<Option<TimeoutHandle>>,
    }

    impl CloseScheduler for BrowserTimer {
        fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce() + Send>) -> bool {
            self.cancel();
            match set_timeout_with_handle(on_elapsed, delay) {
                Ok(handle) => {
                    if let Ok(mut slot) = self.handle.lock() {
                        *slot = Some(handle);
                    }
                    true
                }
                Err(e) => {
                    log::error!("Failed to schedule modal close: {e:?}");
                    false
                }
            }
        }

        fn cancel(&self) {
            let Ok(mut slot) = self.handle.lock() else {
                return;
            };
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        }
    }
}

#[cfg(any(feature = "hydrate", feature = "csr"))]
pub use browser::BrowserTimer;

/// Completes every close at once. Used where there is no browser event loop.
#[derive(Default)]
pub struct ImmediateClose;

impl CloseScheduler for ImmediateClose {
    fn schedule(&self, _delay: Duration, on_elapsed: Box<dyn FnOnce() + Send>) -> bool {
        on_elapsed();
        true
    }

    fn cancel(&self) {}
}

#[cfg(any(feature = "hydrate", feature = "csr"))]
pub(crate) fn default_scheduler() -> BrowserTimer {
    BrowserTimer::default()
}

#[cfg(not(any(feature = "hydrate", feature = "csr")))]
pub(crate) fn default_scheduler() -> ImmediateClose {
    ImmediateClose
}

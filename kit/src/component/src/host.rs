use std::sync::Arc;

use consts::CLOSE_ANIMATION_DURATION;
use leptos::prelude::*;
use state::{
    error::ModalError,
    modal_machine::{CloseTicket, ModalMachine, ModalPhase},
    options::{ConfirmOptions, InfoOptions, ModalOptions, Theme},
};

use crate::dialogs::{ConfirmDialog, ConfirmModal, InfoDialog, InfoModal};
use crate::scheduler::{default_scheduler, CloseScheduler};

/// Handle to a modal host. Cheap to copy; hand it to whatever needs to open
/// or close the modal.
#[derive(Clone, Copy)]
pub struct ModalHost {
    state: RwSignal<ModalMachine<ViewFn>>,
    content_revision: Memo<u64>,
    options: StoredValue<ModalOptions>,
    scheduler: StoredValue<Arc<dyn CloseScheduler>>,
}

impl ModalHost {
    pub fn new(options: ModalOptions) -> Self {
        Self::with_scheduler(options, default_scheduler())
    }

    pub fn with_scheduler(options: ModalOptions, scheduler: impl CloseScheduler) -> Self {
        let scheduler: Arc<dyn CloseScheduler> = Arc::new(scheduler);
        let state = RwSignal::new(ModalMachine::new());
        Self {
            state,
            content_revision: Memo::new(move |_| state.with(|m| m.revision())),
            options: StoredValue::new(options),
            scheduler: StoredValue::new(scheduler),
        }
    }

    /// Creates a host and makes it reachable through [`use_modal`] for the
    /// rest of the current owner's tree.
    pub fn register(options: ModalOptions) -> Self {
        let this = Self::new(options);
        provide_context(this);
        this
    }

    pub fn options(&self) -> ModalOptions {
        self.options.get_value()
    }

    pub fn with_options<U>(&self, f: impl FnOnce(&ModalOptions) -> U) -> U {
        self.options.with_value(f)
    }

    pub fn theme(&self) -> Theme {
        self.options.with_value(|o| o.theme)
    }

    pub fn phase(&self) -> ModalPhase {
        self.state.with(|m| m.phase())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|m| m.is_open())
    }

    pub fn is_closing(&self) -> bool {
        self.state.with(|m| m.is_closing())
    }

    /// Current content. Subscribes only to content replacement, so a
    /// caller rendering it is not rebuilt when the modal starts closing.
    pub fn content(&self) -> Option<ViewFn> {
        self.content_revision.track();
        self.state.with_untracked(|m| m.content().cloned())
    }

    /// Shows `content`, replacing whatever is on screen. A close in progress
    /// is cancelled.
    pub fn open_modal(&self, content: impl Into<ViewFn>) {
        let content = content.into();
        let interrupted = self
            .state
            .try_update(|m| m.open(content))
            .unwrap_or_default();
        if interrupted {
            self.cancel_pending_close();
            log::debug!("modal reopened while closing, pending close cancelled");
        } else {
            log::debug!("modal opened");
        }
    }

    /// Enters the closing state now and drops the content once
    /// [`CLOSE_ANIMATION_DURATION`] has passed.
    pub fn close_modal(&self) {
        let ticket = self
            .state
            .try_maybe_update(|m| {
                let ticket = m.begin_close();
                (ticket.is_some(), ticket)
            })
            .flatten();
        let Some(ticket) = ticket else {
            log::warn!("close_modal ignored, nothing to close");
            return;
        };

        let host = *self;
        let scheduled = self
            .scheduler
            .try_with_value(|s| {
                s.schedule(
                    CLOSE_ANIMATION_DURATION,
                    Box::new(move || host.complete_close(ticket)),
                )
            })
            .unwrap_or(false);
        if !scheduled {
            self.complete_close(ticket);
        }
    }

    pub fn show_confirm(
        &self,
        message: impl Into<String>,
        on_confirm: impl Fn() + Send + Sync + 'static,
        options: ConfirmOptions,
    ) -> ConfirmDialog {
        let dialog = ConfirmDialog {
            message: message.into(),
            on_confirm: Callback::new(move |_| on_confirm()),
            on_close: self.close_callback(),
            options,
        };
        let host = *self;
        let shown = dialog.clone();
        self.open_modal(move || view! { <ConfirmModal dialog=shown.clone() host /> });
        dialog
    }

    pub fn show_info(&self, message: impl Into<String>, options: InfoOptions) -> InfoDialog {
        let dialog = InfoDialog {
            message: message.into(),
            on_close: self.close_callback(),
            options,
        };
        let host = *self;
        let shown = dialog.clone();
        self.open_modal(move || view! { <InfoModal dialog=shown.clone() host /> });
        dialog
    }

    pub fn close_callback(&self) -> Callback<()> {
        let host = *self;
        Callback::new(move |_| host.close_modal())
    }

    fn complete_close(&self, ticket: CloseTicket) {
        let closed = self
            .state
            .try_maybe_update(|m| {
                let closed = m.finish_close(ticket);
                (closed, closed)
            })
            .unwrap_or(false);
        if closed {
            log::debug!("modal closed");
        }
    }

    pub(crate) fn cancel_pending_close(&self) {
        self.scheduler.try_with_value(|s| s.cancel());
    }
}

/// Host registered by the nearest enclosing [`crate::provider::ModalProvider`].
pub fn try_use_modal() -> Result<ModalHost, ModalError> {
    use_context::<ModalHost>().ok_or(ModalError::OutsideProvider)
}

/// Like [`try_use_modal`], but a missing provider is a programming error and panics.
pub fn use_modal() -> ModalHost {
    match try_use_modal() {
        Ok(host) => host,
        Err(e) => panic!("{e}"),
    }
}

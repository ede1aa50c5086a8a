//! Modal host, confirmation and info dialogs for Leptos.
//!
//! Wrap the application in [`ModalProvider`]; its children receive a
//! [`ModalHost`] to open, close and show dialogs with. Components further
//! down the tree can fetch the same host with [`use_modal`].

pub mod app;

pub use component::{
    dialogs::{ConfirmDialog, ConfirmModal, InfoDialog, InfoModal},
    host::{try_use_modal, use_modal, ModalHost},
    provider::{ModalOverlay, ModalProvider},
    scheduler::{CloseScheduler, ImmediateClose},
};
#[cfg(any(feature = "hydrate", feature = "csr"))]
pub use component::scheduler::BrowserTimer;
pub use consts::CLOSE_ANIMATION_DURATION;
pub use state::{
    error::ModalError,
    modal_machine::{CloseTicket, ModalMachine, ModalPhase},
    options::{ConfirmOptions, InfoOptions, ModalOptions, Theme},
};

#[cfg(any(feature = "hydrate", feature = "csr"))]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::App);
}

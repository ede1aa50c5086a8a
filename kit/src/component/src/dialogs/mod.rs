mod confirm;
mod info;

pub use confirm::{ConfirmDialog, ConfirmModal};
pub use info::{InfoDialog, InfoModal};

use web_time::Duration;

/// How long the overlay stays in its closing state before the content is dropped.
pub const CLOSE_ANIMATION_DURATION: Duration = Duration::from_millis(100);

pub const DEFAULT_MODAL_PADDING: &str = "20px";
pub const NO_MODAL_PADDING: &str = "0px";

pub const DEFAULT_CONFIRM_TEXT: &str = "Confirm";
pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";
pub const DEFAULT_DISMISS_TEXT: &str = "Ok";

pub const OUTSIDE_PROVIDER_MSG: &str = "use_modal called outside of a ModalProvider";

/// Stable class names emitted by the overlay and dialogs. Applications style these.
pub mod classes {
    pub const MODAL_CONTAINER: &str = "hmk-modal-container";
    pub const MODAL_CONTAINER_CLOSING: &str = "hmk-modal-container--closing";
    pub const MODAL_CONTAINER_DARK: &str = "hmk-modal-container--dark";

    pub const MODAL: &str = "hmk-modal";
    pub const MODAL_CLOSING: &str = "hmk-modal--closing";
    pub const MODAL_DARK: &str = "hmk-modal--dark";

    pub const CLOSE_BUTTON: &str = "hmk-close-button";
    pub const CLOSE_BUTTON_DARK: &str = "hmk-close-button--dark";

    pub const CONFIRM_CONTAINER: &str = "hmk-confirm";
    pub const CONFIRM_MESSAGE: &str = "hmk-confirm__message";
    pub const CONFIRM_BUTTONS: &str = "hmk-confirm__buttons";
    pub const CONFIRM_BUTTON: &str = "hmk-confirm__confirm";
    pub const CONFIRM_BUTTON_DARK: &str = "hmk-confirm__confirm--dark";
    pub const CANCEL_BUTTON: &str = "hmk-confirm__cancel";
    pub const CANCEL_BUTTON_DARK: &str = "hmk-confirm__cancel--dark";

    pub const INFO_CONTAINER: &str = "hmk-info";
    pub const DISMISS_BUTTON: &str = "hmk-info__dismiss";
    pub const DISMISS_BUTTON_DARK: &str = "hmk-info__dismiss--dark";
}

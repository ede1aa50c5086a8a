use consts::{classes, DEFAULT_CANCEL_TEXT, DEFAULT_CONFIRM_TEXT};
use leptos::prelude::*;
use state::options::{ConfirmOptions, Theme};

use crate::classes::class_list;
use crate::host::ModalHost;

/// A confirmation prompt as shown by [`ModalHost::show_confirm`].
#[derive(Clone)]
pub struct ConfirmDialog {
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    pub options: ConfirmOptions,
}

impl ConfirmDialog {
    /// Primary action. Does not close the modal on its own.
    pub fn confirm(&self) {
        self.on_confirm.run(());
    }

    pub fn cancel(&self) {
        self.on_close.run(());
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ConfirmClasses {
    container: String,
    message: String,
    buttons: String,
    confirm: String,
    cancel: String,
}

fn confirm_classes(
    theme: Theme,
    action_class: Option<&str>,
    options: &ConfirmOptions,
) -> ConfirmClasses {
    let dark = theme.is_dark();
    ConfirmClasses {
        container: class_list([
            Some(classes::CONFIRM_CONTAINER),
            options.modal_class.as_deref(),
        ]),
        message: class_list([
            Some(classes::CONFIRM_MESSAGE),
            options.message_class.as_deref(),
        ]),
        buttons: class_list([
            Some(classes::CONFIRM_BUTTONS),
            options.buttons_class.as_deref(),
        ]),
        confirm: class_list([
            Some(classes::CONFIRM_BUTTON),
            dark.then_some(classes::CONFIRM_BUTTON_DARK),
            action_class,
            options.primary_btn_class.as_deref(),
        ]),
        cancel: class_list([
            Some(classes::CANCEL_BUTTON),
            dark.then_some(classes::CANCEL_BUTTON_DARK),
            options.close_btn_class.as_deref(),
        ]),
    }
}

#[component]
pub fn ConfirmModal(dialog: ConfirmDialog, host: ModalHost) -> impl IntoView {
    let classes = host.with_options(|o| {
        confirm_classes(o.theme, o.action_class.as_deref(), &dialog.options)
    });
    let ConfirmDialog {
        message,
        on_confirm,
        on_close,
        options,
    } = dialog;
    let confirm_text = options
        .confirm_text
        .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string());
    let close_text = options
        .close_text
        .unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string());

    view! {
        <div class=classes.container>
            <p class=classes.message>{message}</p>
            <div class=classes.buttons>
                <button class=classes.confirm on:click=move |_| on_confirm.run(())>
                    {confirm_text}
                </button>
                <button class=classes.cancel on:click=move |_| on_close.run(())>
                    {close_text}
                </button>
            </div>
        </div>
    }
}

use consts::{classes, DEFAULT_DISMISS_TEXT};
use leptos::prelude::*;
use state::options::{InfoOptions, Theme};

use crate::classes::class_list;
use crate::host::ModalHost;

/// An informational message as shown by [`ModalHost::show_info`].
#[derive(Clone)]
pub struct InfoDialog {
    pub message: String,
    pub on_close: Callback<()>,
    pub options: InfoOptions,
}

impl InfoDialog {
    pub fn dismiss(&self) {
        self.on_close.run(());
    }
}

fn dismiss_class(theme: Theme, action_class: Option<&str>, options: &InfoOptions) -> String {
    class_list([
        Some(classes::DISMISS_BUTTON),
        action_class,
        theme.is_dark().then_some(classes::DISMISS_BUTTON_DARK),
        options.dismiss_class.as_deref(),
    ])
}

#[component]
pub fn InfoModal(dialog: InfoDialog, host: ModalHost) -> impl IntoView {
    let button_class =
        host.with_options(|o| dismiss_class(o.theme, o.action_class.as_deref(), &dialog.options));
    let InfoDialog {
        message,
        on_close,
        options,
    } = dialog;
    let container_class = class_list([
        Some(classes::INFO_CONTAINER),
        options.modal_class.as_deref(),
    ]);
    let message_class = options.message_class.unwrap_or_default();
    let action_text = options
        .action_text
        .unwrap_or_else(|| DEFAULT_DISMISS_TEXT.to_string());

    view! {
        <div class=container_class>
            <p class=message_class>{message}</p>
            <button class=button_class on:click=move |_| on_close.run(())>
                {action_text}
            </button>
        </div>
    }
}

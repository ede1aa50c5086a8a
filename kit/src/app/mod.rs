use component::{
    host::{use_modal, ModalHost},
    provider::ModalProvider,
};
use leptos::prelude::*;
use state::options::{ConfirmOptions, InfoOptions, ModalOptions, Theme};

/// Showcase wiring every host operation to a button.
#[component]
pub fn App() -> impl IntoView {
    let options = ModalOptions::default()
        .with_theme(Theme::Dark)
        .with_action_class("showcase-action");

    view! {
        <ModalProvider options let:modal>
            <main class="showcase">
                <h1>"hook-modal-kit"</h1>
                <DeleteItem modal />
                <button on:click=move |_| {
                    modal.show_info("Saved.", InfoOptions::default());
                }>"Show info"</button>
                <button on:click=move |_| {
                    modal.open_modal(|| view! { <CustomBody /> });
                }>"Open custom"</button>
            </main>
        </ModalProvider>
    }
}

#[component]
fn DeleteItem(modal: ModalHost) -> impl IntoView {
    let deleted = RwSignal::new(0u32);
    let on_confirm = move || {
        deleted.update(|n| *n += 1);
        log::info!("item deleted");
        modal.close_modal();
    };
    let options = ConfirmOptions {
        confirm_text: Some("Delete".into()),
        primary_btn_class: Some("danger".into()),
        ..Default::default()
    };

    view! {
        <button on:click=move |_| {
            modal.show_confirm("Delete item?", on_confirm, options.clone());
        }>"Delete item"</button>
        <span>{move || format!("deleted: {}", deleted.get())}</span>
    }
}

/// Looks the host up instead of taking it as a prop.
#[component]
fn CustomBody() -> impl IntoView {
    let modal = use_modal();

    view! {
        <div class="custom-body">
            <p>"Anything can go in here."</p>
            <button on:click=move |_| modal.close_modal()>"Done"</button>
        </div>
    }
}

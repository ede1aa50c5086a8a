use consts::{classes, DEFAULT_MODAL_PADDING, NO_MODAL_PADDING};
use leptos::{ev, html, portal::Portal, prelude::*, web_sys::EventTarget};
use leptos_icons::*;
use leptos_use::{use_document, use_event_listener};
use state::options::ModalOptions;

use crate::classes::class_list;
use crate::host::ModalHost;

/// A click closes the modal only when it lands on the backdrop itself.
fn is_backdrop_click<T: PartialEq + ?Sized>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

#[derive(Debug, PartialEq, Eq)]
struct OverlayClasses {
    backdrop: String,
    body: String,
    close: String,
}

fn overlay_classes(options: &ModalOptions, closing: bool) -> OverlayClasses {
    let dark = options.theme.is_dark();
    OverlayClasses {
        backdrop: class_list([
            Some(classes::MODAL_CONTAINER),
            closing.then_some(classes::MODAL_CONTAINER_CLOSING),
            options.bg_class.as_deref(),
            dark.then_some(classes::MODAL_CONTAINER_DARK),
        ]),
        body: class_list([
            Some(classes::MODAL),
            closing.then_some(classes::MODAL_CLOSING),
            options.modal_class.as_deref(),
            dark.then_some(classes::MODAL_DARK),
        ]),
        close: class_list([
            Some(classes::CLOSE_BUTTON),
            options.close_class.as_deref(),
            dark.then_some(classes::CLOSE_BUTTON_DARK),
        ]),
    }
}

fn body_padding(options: &ModalOptions) -> &'static str {
    if options.default_padding {
        DEFAULT_MODAL_PADDING
    } else {
        NO_MODAL_PADDING
    }
}

/// Closes `host` when a document click landed on the backdrop. Returns
/// whether it did.
fn close_on_backdrop_click<T: PartialEq + ?Sized>(
    host: ModalHost,
    target: Option<&T>,
    backdrop: Option<&T>,
) -> bool {
    let hit = is_backdrop_click(target, backdrop);
    if hit {
        host.close_modal();
    }
    hit
}

/// Backdrop, modal body and close button. Renders nothing while the host is closed.
#[component]
pub fn ModalOverlay(host: ModalHost, backdrop: NodeRef<html::Div>) -> impl IntoView {
    let close = host.close_callback();

    view! {
        <Show when=move || host.is_open()>
            <div
                node_ref=backdrop
                class=move || {
                    host.with_options(|o| overlay_classes(o, host.is_closing()).backdrop)
                }
            >
                <div
                    style:padding=move || host.with_options(body_padding)
                    class=move || host.with_options(|o| overlay_classes(o, host.is_closing()).body)
                >
                    {move || host.content().map(|content| content.run())}
                    <button
                        class=move || host.with_options(|o| overlay_classes(o, false).close)
                        on:click=move |_| close.run(())
                    >
                        {match host.with_options(|o| o.custom_close_icon.clone()) {
                            Some(icon) => icon.run(),
                            None => view! { <Icon icon=icondata::ChCross /> }.into_any(),
                        }}
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Owns a [`ModalHost`] for everything inside it and renders the overlay at
/// `document.body`. Children receive the host directly:
///
/// ```ignore
/// view! {
///     <ModalProvider let:modal>
///         <button on:click=move |_| { modal.show_info("Saved.", Default::default()); }>
///             "Save"
///         </button>
///     </ModalProvider>
/// }
/// ```
#[component]
pub fn ModalProvider<C, IV>(
    #[prop(optional)] options: ModalOptions,
    children: C,
) -> impl IntoView
where
    C: Fn(ModalHost) -> IV + Send + 'static,
    IV: IntoView + 'static,
{
    let host = ModalHost::register(options);
    let backdrop = NodeRef::<html::Div>::new();

    // Removed together with this owner.
    let _ = use_event_listener(use_document(), ev::click, move |ev| {
        let target = ev.target();
        let bg = backdrop.get_untracked();
        let bg_target = bg.as_ref().map(AsRef::<EventTarget>::as_ref);
        close_on_backdrop_click(host, target.as_ref(), bg_target);
    });

    on_cleanup(move || host.cancel_pending_close());

    view! {
        {children(host)}
        <Portal>
            <ModalOverlay host backdrop />
        </Portal>
    }
}

#[cfg(test)]
mod tests {
    use state::{modal_machine::ModalPhase, options::Theme};

    use super::*;
    use crate::test_support::{manual_host, manual_host_with};

    fn render(host: ModalHost) -> String {
        view! { <ModalOverlay host backdrop=NodeRef::new() /> }.to_html()
    }

    #[test]
    fn only_the_backdrop_itself_counts() {
        assert!(is_backdrop_click(Some(&1), Some(&1)));
        assert!(!is_backdrop_click(Some(&2), Some(&1)));
        assert!(!is_backdrop_click(None, Some(&1)));
        assert!(!is_backdrop_click(Some(&1), None));
    }

    #[test]
    fn backdrop_click_closes_once() {
        let (_owner, host, scheduler) = manual_host();
        host.open_modal(|| "body");

        assert!(close_on_backdrop_click(host, Some("bg"), Some("bg")));
        assert_eq!(host.phase(), ModalPhase::Closing);
        assert_eq!(scheduler.delays().len(), 1);

        scheduler.fire_all();
        assert_eq!(host.phase(), ModalPhase::Closed);
    }

    #[test]
    fn click_inside_body_keeps_modal_open() {
        let (_owner, host, scheduler) = manual_host();
        host.open_modal(|| "body");

        assert!(!close_on_backdrop_click(host, Some("button"), Some("bg")));
        assert!(!close_on_backdrop_click(host, None, Some("bg")));
        assert_eq!(host.phase(), ModalPhase::Open);
        assert!(scheduler.delays().is_empty());
    }

    #[test]
    fn closed_host_renders_nothing() {
        let (_owner, host, _) = manual_host();
        let html = render(host);
        assert!(!html.contains(classes::MODAL_CONTAINER));
        assert!(!html.contains(classes::CLOSE_BUTTON));
    }

    #[test]
    fn open_host_renders_content_and_close_button() {
        let (_owner, host, _) = manual_host();
        host.open_modal(|| "Modal body text");

        let html = render(host);
        assert!(html.contains(classes::MODAL_CONTAINER));
        assert!(html.contains("Modal body text"));
        assert!(html.contains(classes::CLOSE_BUTTON));
        assert!(html.contains("20px"));
        assert!(!html.contains(classes::MODAL_CLOSING));
    }

    #[test]
    fn closing_host_renders_closing_modifiers() {
        let (_owner, host, _) = manual_host();
        host.open_modal(|| "body");
        host.close_modal();

        let html = render(host);
        assert!(html.contains(classes::MODAL_CONTAINER_CLOSING));
        assert!(html.contains(classes::MODAL_CLOSING));
        assert!(html.contains("body"));
    }

    #[test]
    fn overlay_follows_options() {
        let options = ModalOptions::default()
            .with_theme(Theme::Dark)
            .with_default_padding(false)
            .with_close_class("my-close")
            .with_close_icon(|| "custom-x");
        let (_owner, host, _) = manual_host_with(options);
        host.open_modal(|| "body");

        let html = render(host);
        assert!(html.contains(classes::MODAL_CONTAINER_DARK));
        assert!(html.contains(classes::MODAL_DARK));
        assert!(html.contains("my-close"));
        assert!(html.contains("custom-x"));
        assert!(html.contains("0px"));
        assert!(!html.contains("20px"));
    }

    #[test]
    fn closing_and_dark_modifiers() {
        let options = ModalOptions::default()
            .with_theme(Theme::Dark)
            .with_bg_class("dim")
            .with_modal_class("card");

        let open = overlay_classes(&options, false);
        assert_eq!(
            open.backdrop,
            format!("{} dim {}", classes::MODAL_CONTAINER, classes::MODAL_CONTAINER_DARK)
        );
        assert_eq!(open.body, format!("{} card {}", classes::MODAL, classes::MODAL_DARK));
        assert_eq!(
            open.close,
            format!("{} {}", classes::CLOSE_BUTTON, classes::CLOSE_BUTTON_DARK)
        );

        let closing = overlay_classes(&options, true);
        assert!(closing.backdrop.contains(classes::MODAL_CONTAINER_CLOSING));
        assert!(closing.body.contains(classes::MODAL_CLOSING));
    }

    #[test]
    fn padding_can_be_disabled() {
        assert_eq!(body_padding(&ModalOptions::default()), "20px");
        let bare = ModalOptions::default().with_default_padding(false);
        assert_eq!(body_padding(&bare), "0px");
    }
}

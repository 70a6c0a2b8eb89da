use dioxus::prelude::*;

use super::Modal;

/// Asks before a destructive action such as removing a passkey.
///
/// The modal cannot be dismissed while `is_processing` is set.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    is_processing: bool,
    error: Option<String>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { class: "mb-2", "{message}" }
            if let Some(error) = error {
                p { class: "text-error text-sm", "{error}" }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-error",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}

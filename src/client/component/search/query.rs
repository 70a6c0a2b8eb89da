use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::client::constant::SEARCH_DEBOUNCE_MS;

/// Free text search box.
///
/// `on_search` fires once typing pauses, or right away when the form is submitted.
#[component]
pub fn SearchBox(placeholder: String, on_search: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    // Restarting the resource on every keystroke drops the pending timer.
    let _debounce = use_resource(move || async move {
        let value = input();
        #[cfg(feature = "web")]
        gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
        on_search.call(value);
    });

    rsx!(
        form {
            class: "w-full",
            role: "search",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_search.call(input.peek().clone());
            },
            input {
                r#type: "search",
                class: "input input-bordered w-full",
                placeholder: "{placeholder}",
                value: "{input}",
                oninput: move |evt| input.set(evt.value()),
            }
        }
    )
}

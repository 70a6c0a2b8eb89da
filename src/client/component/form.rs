use dioxus::prelude::*;

/// Labelled input bound to a signal.
#[component]
pub fn TextField(
    label: String,
    value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] autocomplete: &'static str,
    #[props(default)] required: bool,
) -> Element {
    let mut value = value;

    rsx!(
        label {
            class: "form-control w-full",
            div {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                r#type: input_type,
                class: "input input-bordered w-full",
                autocomplete,
                required,
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    )
}

/// Outcome of a submitted form.
#[derive(Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success(String),
    Failed(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

#[component]
pub fn StatusAlert(status: FormStatus) -> Element {
    match status {
        FormStatus::Success(message) => rsx! {
            div { role: "alert", class: "alert alert-success", span { "{message}" } }
        },
        FormStatus::Failed(message) => rsx! {
            div { role: "alert", class: "alert alert-error", span { "{message}" } }
        },
        FormStatus::Idle | FormStatus::Submitting => rsx! {},
    }
}

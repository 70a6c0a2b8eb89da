use dioxus::prelude::*;

use crate::client::component::{FormStatus, StatusAlert, TextField};

use super::Section;

#[cfg(feature = "web")]
use crate::client::api::user::change_password;

#[component]
pub fn PasswordForm() -> Element {
    let mut current = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut repeat = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if new_password() != repeat() {
            status.set(FormStatus::Failed("Passwords do not match".to_string()));
            return;
        }
        status.set(FormStatus::Submitting);

        #[cfg(feature = "web")]
        spawn(async move {
            match change_password(current(), new_password()).await {
                Ok(()) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    repeat.set(String::new());
                    status.set(FormStatus::Success("Password changed".to_string()));
                }
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });
    };

    rsx! {
        Section {
            title: "Password",
            StatusAlert { status: status() }
            form {
                class: "flex flex-col gap-1 max-w-md",
                onsubmit: submit,
                TextField { label: "Current password", value: current, input_type: "password", autocomplete: "current-password", required: true }
                TextField { label: "New password", value: new_password, input_type: "password", autocomplete: "new-password", required: true }
                TextField { label: "Repeat new password", value: repeat, input_type: "password", autocomplete: "new-password", required: true }
                button {
                    r#type: "submit",
                    class: "btn btn-primary mt-2 self-start",
                    disabled: status().is_submitting(),
                    "Change password"
                }
            }
        }
    }
}

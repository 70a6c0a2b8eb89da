use dioxus::prelude::*;

use crate::client::{
    component::{FormStatus, LocalLink, Page, StatusAlert, TextField},
    constant::SITE_NAME,
};

#[cfg(feature = "web")]
use crate::client::api::account::reset_password;

#[component]
pub fn ResetPassword(token: String) -> Element {
    let password = use_signal(String::new);
    let password_repeat = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if password() != password_repeat() {
            status.set(FormStatus::Failed("Passwords do not match".to_string()));
            return;
        }
        status.set(FormStatus::Submitting);

        #[cfg(feature = "web")]
        {
            let token = token.clone();
            spawn(async move {
                match reset_password(token, password()).await {
                    Ok(reply) => status.set(FormStatus::Success(reply.message)),
                    Err(err) => status.set(FormStatus::Failed(err.message)),
                }
            });
        }
    };

    let done = matches!(status(), FormStatus::Success(_));

    rsx! {
        Title { "Reset password | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body gap-4",
                    h1 { class: "card-title text-2xl", "Choose a new password" }
                    StatusAlert { status: status() }
                    if done {
                        LocalLink { to: "/login", class: "btn btn-primary", "Sign in" }
                    } else {
                        form {
                            class: "flex flex-col gap-2",
                            onsubmit: submit,
                            TextField { label: "New password", value: password, input_type: "password", autocomplete: "new-password", required: true }
                            TextField { label: "Repeat password", value: password_repeat, input_type: "password", autocomplete: "new-password", required: true }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary mt-2",
                                disabled: status().is_submitting(),
                                "Change password"
                            }
                        }
                    }
                }
            }
        }
    }
}

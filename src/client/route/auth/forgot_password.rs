use dioxus::prelude::*;

use crate::client::{
    component::{FormStatus, LocalLink, Page, StatusAlert, TextField},
    constant::SITE_NAME,
};

#[cfg(feature = "web")]
use crate::client::api::account::forgot_password;

#[component]
pub fn ForgotPassword() -> Element {
    let email = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(FormStatus::Submitting);

        #[cfg(feature = "web")]
        spawn(async move {
            match forgot_password(email()).await {
                Ok(reply) => status.set(FormStatus::Success(reply.message)),
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });
    };

    rsx! {
        Title { "Forgot password | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body gap-4",
                    h1 { class: "card-title text-2xl", "Forgot password" }
                    p { class: "text-sm opacity-70", "We will email you a link to choose a new password." }
                    StatusAlert { status: status() }
                    form {
                        class: "flex flex-col gap-2",
                        onsubmit: submit,
                        TextField { label: "Email", value: email, input_type: "email", autocomplete: "email", required: true }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary mt-2",
                            disabled: status().is_submitting(),
                            "Send reset link"
                        }
                    }
                    LocalLink { to: "/login", class: "link text-sm", "Back to sign in" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    client::{
        component::{FormStatus, LocalLink, Page, StatusAlert, TextField},
        constant::SITE_NAME,
        model::locale::use_locale,
    },
    i18n::Text,
};

#[cfg(feature = "web")]
use crate::{client::api::account::register, model::auth::RegisterDto};

fn optional(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn Register() -> Element {
    let locale = use_locale();

    let username = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let password_repeat = use_signal(String::new);
    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if password() != password_repeat() {
            status.set(FormStatus::Failed("Passwords do not match".to_string()));
            return;
        }
        status.set(FormStatus::Submitting);

        #[cfg(feature = "web")]
        spawn(async move {
            let payload = RegisterDto {
                username: username(),
                email: email(),
                password: password(),
                first_name: optional(first_name()),
                last_name: optional(last_name()),
            };

            match register(payload).await {
                Ok(reply) => status.set(FormStatus::Success(reply.message)),
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });
    };

    let registered = matches!(status(), FormStatus::Success(_));

    rsx! {
        Title { "{Text::Register.get(locale)} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body gap-4",
                    h1 { class: "card-title text-2xl", {Text::Register.get(locale)} }
                    StatusAlert { status: status() }
                    if !registered {
                        form {
                            class: "flex flex-col gap-2",
                            onsubmit: submit,
                            TextField { label: "Username", value: username, autocomplete: "username", required: true }
                            TextField { label: "Email", value: email, input_type: "email", autocomplete: "email", required: true }
                            TextField { label: "First name", value: first_name, autocomplete: "given-name" }
                            TextField { label: "Last name", value: last_name, autocomplete: "family-name" }
                            TextField { label: "Password", value: password, input_type: "password", autocomplete: "new-password", required: true }
                            TextField { label: "Repeat password", value: password_repeat, input_type: "password", autocomplete: "new-password", required: true }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary mt-2",
                                disabled: status().is_submitting(),
                                {Text::Register.get(locale)}
                            }
                        }
                    }
                    LocalLink { to: "/login", class: "link text-sm", {Text::Login.get(locale)} }
                }
            }
        }
    }
}

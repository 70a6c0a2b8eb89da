use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{
        fa_brands_icons::{FaGithub, FaGoogle},
        fa_solid_icons::FaKey,
    },
    Icon,
};

use crate::{
    client::{
        component::{FormStatus, LoadingPage, LocalLink, Page, StatusAlert, TextField},
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, AuthState},
            locale::use_locale,
        },
    },
    i18n::{self, Text},
};

#[cfg(feature = "web")]
use crate::client::api::{account::resend_confirmation, auth::login, passkey::login_with_passkey};

/// Status of a password login refused because the address is not confirmed.
const NOT_ACTIVATED: u64 = 403;

#[component]
pub fn Login() -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let locale = use_locale();
    let nav = navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);
    let mut unconfirmed = use_signal(|| false);

    // Handle redirect for authenticated users
    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(i18n::localize("/dashboard", locale));
        }
    });

    let submit_password = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(FormStatus::Submitting);
        unconfirmed.set(false);

        #[cfg(feature = "web")]
        spawn(async move {
            match login(email(), password()).await {
                Ok(user) => {
                    status.set(FormStatus::Idle);
                    auth_context.login(user);
                }
                Err(err) => {
                    unconfirmed.set(err.status == NOT_ACTIVATED);
                    status.set(FormStatus::Failed(err.message));
                }
            }
        });
    };

    let submit_passkey = move |_: MouseEvent| {
        if email().trim().is_empty() {
            status.set(FormStatus::Failed(
                "Enter your email address to use a passkey".to_string(),
            ));
            return;
        }
        status.set(FormStatus::Submitting);

        #[cfg(feature = "web")]
        spawn(async move {
            match login_with_passkey(email()).await {
                Ok(user) => {
                    status.set(FormStatus::Idle);
                    auth_context.login(user);
                }
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });
    };

    let resend = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            match resend_confirmation(email()).await {
                Ok(reply) => {
                    unconfirmed.set(false);
                    status.set(FormStatus::Success(reply.message));
                }
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });
    };

    let state = auth_context.read().clone();
    let submitting = status().is_submitting();

    rsx! {
        Title { "{Text::Login.get(locale)} | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col items-center",
                    div {
                        class: "card bg-base-200 w-full max-w-md",
                        div {
                            class: "card-body gap-4",
                            h1 { class: "card-title text-2xl", {Text::Login.get(locale)} }
                            StatusAlert { status: status() }
                            if unconfirmed() {
                                button {
                                    class: "btn btn-sm btn-outline",
                                    onclick: resend,
                                    "Send the confirmation email again"
                                }
                            }
                            form {
                                class: "flex flex-col gap-2",
                                onsubmit: submit_password,
                                TextField {
                                    label: "Email or username",
                                    value: email,
                                    autocomplete: "username webauthn",
                                    required: true,
                                }
                                TextField {
                                    label: "Password",
                                    value: password,
                                    input_type: "password",
                                    autocomplete: "current-password",
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary mt-2",
                                    disabled: submitting,
                                    {Text::Login.get(locale)}
                                }
                            }
                            button {
                                class: "btn btn-outline flex gap-2",
                                disabled: submitting,
                                onclick: submit_passkey,
                                Icon { width: 18, height: 18, icon: FaKey }
                                "Sign in with a passkey"
                            }
                            div { class: "divider", "or" }
                            a {
                                href: "/api/auth/oauth/github/login",
                                class: "btn btn-outline flex gap-2",
                                Icon { width: 20, height: 20, icon: FaGithub }
                                "Continue with GitHub"
                            }
                            a {
                                href: "/api/auth/oauth/google/login",
                                class: "btn btn-outline flex gap-2",
                                Icon { width: 20, height: 20, icon: FaGoogle }
                                "Continue with Google"
                            }
                            div {
                                class: "flex justify-between text-sm mt-2",
                                LocalLink { to: "/forgot-password", class: "link", "Forgot password?" }
                                LocalLink { to: "/register", class: "link", {Text::Register.get(locale)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

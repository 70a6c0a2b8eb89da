use dioxus::prelude::*;

use crate::client::{
    component::{FormStatus, LocalLink, Page, StatusAlert},
    constant::SITE_NAME,
};

#[cfg(feature = "web")]
use crate::client::api::account::confirm_email;

/// Landing page of the link in the confirmation email. The token is sent once on load.
#[component]
pub fn ConfirmEmail(token: String) -> Element {
    let mut status = use_signal(|| FormStatus::Submitting);

    #[cfg(feature = "web")]
    let _confirm = use_resource(use_reactive!(|token| async move {
        match confirm_email(token).await {
            Ok(reply) => status.set(FormStatus::Success(reply.message)),
            Err(err) => status.set(FormStatus::Failed(err.message)),
        }
    }));

    #[cfg(not(feature = "web"))]
    let _ = (&token, &mut status);

    rsx! {
        Title { "Confirm email | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body gap-4 items-center",
                    h1 { class: "card-title text-2xl", "Email confirmation" }
                    if status().is_submitting() {
                        span { class: "loading loading-spinner loading-lg" }
                    }
                    StatusAlert { status: status() }
                    match status() {
                        FormStatus::Success(_) => rsx! {
                            LocalLink { to: "/login", class: "btn btn-primary", "Sign in" }
                        },
                        FormStatus::Failed(_) => rsx! {
                            LocalLink { to: "/login", class: "link", "Request a new link from the sign in page" }
                        },
                        _ => rsx! {},
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        model::{
            auth::{AuthContext, AuthState},
            locale::use_locale,
        },
        router::Route,
    },
    i18n,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        LoginGuard { Outlet::<Route> {} }
    }
}

/// Renders its children for logged-in users and sends everyone else to the login page.
#[component]
pub fn LoginGuard(children: Element) -> Element {
    let auth_context = use_context::<AuthContext>();
    let locale = use_locale();
    let nav = navigator();

    let resolved = auth_context.read().is_resolved();
    let logged_in = auth_context.read().is_authenticated();

    use_effect(use_reactive!(|(resolved, logged_in)| {
        if resolved && !logged_in {
            nav.push(i18n::localize("/login", locale));
        }
    }));

    let state = auth_context.read().clone();

    rsx! {
        match state {
            AuthState::Initializing => rsx! { LoadingPage {} },
            AuthState::Authenticated(_) => rsx! { {children} },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            // Render nothing while redirecting
            AuthState::NotLoggedIn => rsx! {},
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaDatabase, Icon};

use crate::{
    client::{
        component::LocalLink,
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, AuthState},
            locale::{canonical_path, route_locale},
        },
        router::Route,
    },
    i18n::{self, Locale, Text},
};

/// Catalog sections in navigation order.
const SECTIONS: [(&str, Text); 7] = [
    ("/datasets", Text::Datasets),
    ("/tasks", Text::Tasks),
    ("/flows", Text::Flows),
    ("/runs", Text::Runs),
    ("/collections", Text::Collections),
    ("/benchmarks", Text::Benchmarks),
    ("/measures", Text::Measures),
];

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let route = use_route::<Route>();
    let nav = navigator();

    let locale = route_locale(&route);
    let canonical = canonical_path(&route);
    let state = auth_context.read().clone();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            LocalLink {
                to: "/",
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaDatabase
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
            nav {
                class: "hidden lg:flex gap-1",
                for (path, text) in SECTIONS {
                    LocalLink {
                        to: path,
                        class: "btn btn-ghost btn-sm",
                        {text.get(locale)}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            select {
                class: "select select-bordered select-sm",
                aria_label: "Language",
                value: "{locale.code()}",
                onchange: move |evt| {
                    if let Some(target) = Locale::from_code(&evt.value()) {
                        nav.push(i18n::localize(&canonical, target));
                    }
                },
                for option_locale in Locale::ALL {
                    option {
                        value: "{option_locale.code()}",
                        selected: option_locale == locale,
                        {option_locale.label()}
                    }
                }
            }
            match state {
                AuthState::Authenticated(user) => rsx! {
                    LocalLink {
                        to: "/dashboard",
                        class: "btn btn-outline",
                        "{user.username}"
                    }
                    a {
                        href: "/api/auth/logout",
                        class: "btn btn-ghost",
                        {Text::Logout.get(locale)}
                    }
                },
                AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                    LocalLink {
                        to: "/login",
                        class: "btn btn-outline",
                        {Text::Login.get(locale)}
                    }
                },
                AuthState::Initializing => rsx! {},
            }
        }
    })
}

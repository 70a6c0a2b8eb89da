use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::auth::get_user, model::auth::AuthState};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);

    // Fetch user on first load
    #[cfg(feature = "web")]
    let _fetch_user = use_resource(move || async move {
        let state = match get_user().await {
            Ok(user) => AuthState::from(user),
            Err(err) => AuthState::Error(err),
        };
        auth_context.set(state);
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: "Search and explore machine learning datasets, tasks, flows and runs"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}

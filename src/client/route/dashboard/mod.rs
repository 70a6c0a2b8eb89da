//! Account dashboard, only reachable while logged in.

pub mod avatar;
pub mod passkeys;
pub mod password;
pub mod profile;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError, locale::use_locale},
        route::catalog::detail::user::SummaryTiles,
    },
    i18n::Text,
    model::user::{ProfileDto, UserSummaryDto},
};

use avatar::AvatarSection;
use passkeys::PasskeySection;
use password::PasswordForm;
use profile::ProfileForm;

#[cfg(feature = "web")]
use crate::client::api::{catalog::get_user_summary, user::get_profile};

#[component]
pub fn Dashboard() -> Element {
    let auth_context = use_context::<AuthContext>();
    let locale = use_locale();

    let mut profile = use_signal(|| None::<Result<ProfileDto, ApiError>>);
    let mut summary = use_signal(|| None::<Result<UserSummaryDto, ApiError>>);

    let user_id = auth_context.read().user().map(|user| user.id);

    #[cfg(feature = "web")]
    let _fetch = use_resource(move || async move {
        let result = get_profile().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch profile: {}", err);
        }
        profile.set(Some(result));

        if let Some(user_id) = user_id {
            summary.set(Some(get_user_summary(&user_id.to_string()).await));
        }
    });

    #[cfg(not(feature = "web"))]
    let _ = (user_id, &mut summary);

    let title = Text::Dashboard.get(locale);

    let page = match &*profile.read() {
        None => rsx! { LoadingPage {} },
        Some(Err(err)) => rsx! { ErrorPage { status: err.status, message: err.message.clone() } },
        Some(Ok(current)) => rsx! {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-4xl flex flex-col gap-6",
                    h1 { class: "text-2xl", "{title}" }
                    SummaryTiles { summary: summary() }
                    AvatarSection {
                        profile: current.clone(),
                        on_change: move |updated: ProfileDto| profile.set(Some(Ok(updated))),
                    }
                    ProfileForm {
                        profile: current.clone(),
                        on_saved: move |updated: ProfileDto| profile.set(Some(Ok(updated))),
                    }
                    if current.external_source.is_none() {
                        PasswordForm {}
                    } else {
                        p {
                            class: "text-sm opacity-70",
                            "This account signs in through an external provider."
                        }
                    }
                    PasskeySection {}
                }
            }
        },
    };

    rsx! {
        Title { "{title} | {SITE_NAME}" }
        {page}
    }
}

/// Card wrapper shared by the dashboard sections.
#[component]
fn Section(title: String, children: Element) -> Element {
    rsx!(
        section {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "{title}" }
                {children}
            }
        }
    )
}

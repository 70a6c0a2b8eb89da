use dioxus::prelude::*;

use crate::{
    client::{
        component::{FormStatus, StatusAlert, TextField},
        model::auth::AuthContext,
    },
    model::user::{ProfileDto, UpdateProfileDto},
};

use super::Section;

#[cfg(feature = "web")]
use crate::client::api::user::update_profile;

fn optional(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn ProfileForm(profile: ProfileDto, on_saved: EventHandler<ProfileDto>) -> Element {
    let mut auth_context = use_context::<AuthContext>();

    let username = use_signal(|| profile.username.clone());
    let first_name = use_signal(|| profile.first_name.clone().unwrap_or_default());
    let last_name = use_signal(|| profile.last_name.clone().unwrap_or_default());
    let company = use_signal(|| profile.company.clone().unwrap_or_default());
    let country = use_signal(|| profile.country.clone().unwrap_or_default());
    let mut bio = use_signal(|| profile.bio.clone().unwrap_or_default());
    let mut status = use_signal(|| FormStatus::Idle);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(FormStatus::Submitting);

        let payload = UpdateProfileDto {
            username: username(),
            first_name: optional(first_name()),
            last_name: optional(last_name()),
            company: optional(company()),
            country: optional(country()),
            bio: optional(bio()),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            match update_profile(payload).await {
                Ok(updated) => {
                    auth_context.login(updated.to_user());
                    on_saved.call(updated);
                    status.set(FormStatus::Success("Profile saved".to_string()));
                }
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = (payload, &mut auth_context, on_saved);
    };

    rsx! {
        Section {
            title: "Profile",
            p { class: "text-sm opacity-70", "Email: {profile.email}" }
            StatusAlert { status: status() }
            form {
                class: "grid grid-cols-1 md:grid-cols-2 gap-x-4 gap-y-1",
                onsubmit: submit,
                TextField { label: "Username", value: username, autocomplete: "username", required: true }
                TextField { label: "Country", value: country, autocomplete: "country-name" }
                TextField { label: "First name", value: first_name, autocomplete: "given-name" }
                TextField { label: "Last name", value: last_name, autocomplete: "family-name" }
                TextField { label: "Affiliation", value: company, autocomplete: "organization" }
                label {
                    class: "form-control w-full md:col-span-2",
                    div { class: "label", span { class: "label-text", "Bio" } }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 4,
                        value: "{bio}",
                        oninput: move |evt| bio.set(evt.value()),
                    }
                }
                div {
                    class: "md:col-span-2",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary mt-2",
                        disabled: status().is_submitting(),
                        "Save profile"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, FormStatus, StatusAlert},
        constant::AVATAR_INPUT_ID,
        model::auth::AuthContext,
    },
    model::user::ProfileDto,
};

use super::Section;

#[cfg(feature = "web")]
use crate::client::api::user::{delete_avatar, upload_avatar};

#[component]
pub fn AvatarSection(profile: ProfileDto, on_change: EventHandler<ProfileDto>) -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let mut status = use_signal(|| FormStatus::Idle);
    let mut show_remove_modal = use_signal(|| false);
    let mut is_removing = use_signal(|| false);
    let mut remove_error = use_signal(|| None::<String>);

    let upload = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(FormStatus::Submitting);

        #[cfg(feature = "web")]
        spawn(async move {
            match upload_avatar(AVATAR_INPUT_ID).await {
                Ok(updated) => {
                    auth_context.login(updated.to_user());
                    on_change.call(updated);
                    status.set(FormStatus::Success("Avatar updated".to_string()));
                }
                Err(err) => status.set(FormStatus::Failed(err.message)),
            }
        });
    };

    let remove = {
        let profile = profile.clone();
        move |_: ()| {
            is_removing.set(true);
            remove_error.set(None);

            let mut updated = profile.clone();
            updated.image = None;

            #[cfg(feature = "web")]
            spawn(async move {
                match delete_avatar().await {
                    Ok(()) => {
                        auth_context.login(updated.to_user());
                        on_change.call(updated);
                        show_remove_modal.set(false);
                    }
                    Err(err) => remove_error.set(Some(err.message)),
                }
                is_removing.set(false);
            });

            #[cfg(not(feature = "web"))]
            let _ = (updated, &mut auth_context, on_change);
        }
    };

    rsx! {
        Section {
            title: "Avatar",
            div {
                class: "flex flex-col sm:flex-row items-start sm:items-center gap-4",
                if let Some(image) = &profile.image {
                    img {
                        class: "w-24 h-24 rounded-full object-cover",
                        src: "{image}",
                        alt: "Avatar",
                    }
                } else {
                    div {
                        class: "w-24 h-24 rounded-full bg-base-300 flex items-center justify-center text-3xl",
                        {profile.username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                    }
                }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: upload,
                    input {
                        id: AVATAR_INPUT_ID,
                        r#type: "file",
                        accept: "image/png,image/jpeg,image/gif,image/webp",
                        class: "file-input file-input-bordered file-input-sm",
                    }
                    p { class: "text-xs opacity-70", "PNG, JPEG, GIF or WebP, at most 2 MB." }
                    div {
                        class: "flex gap-2",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-sm",
                            disabled: status().is_submitting(),
                            "Upload"
                        }
                        if profile.image.is_some() {
                            button {
                                r#type: "button",
                                class: "btn btn-ghost btn-sm",
                                onclick: move |_| show_remove_modal.set(true),
                                "Remove"
                            }
                        }
                    }
                }
            }
            StatusAlert { status: status() }
        }
        ConfirmationModal {
            show: show_remove_modal,
            title: "Remove avatar",
            message: "Your profile will show your initial instead.",
            confirm_text: "Remove",
            is_processing: is_removing(),
            error: remove_error(),
            on_confirm: remove,
        }
    }
}

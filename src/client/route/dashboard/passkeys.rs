use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, FormStatus, StatusAlert},
        model::error::ApiError,
    },
    model::passkey::PasskeyDto,
};

use super::Section;

#[cfg(feature = "web")]
use crate::client::api::passkey::{delete_passkey, get_passkeys, register_passkey, rename_passkey};

fn display_name(passkey: &PasskeyDto) -> String {
    passkey
        .device_name
        .clone()
        .unwrap_or_else(|| format!("Passkey {}", passkey.id))
}

#[component]
pub fn PasskeySection() -> Element {
    let mut passkeys = use_signal(|| None::<Result<Vec<PasskeyDto>, ApiError>>);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut device_name = use_signal(String::new);
    let mut status = use_signal(|| FormStatus::Idle);

    let mut show_delete_modal = use_signal(|| false);
    let mut passkey_to_delete = use_signal(|| None::<PasskeyDto>);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    // Resource re-runs when refetch_trigger changes
    #[cfg(feature = "web")]
    let _fetch = use_resource(move || async move {
        let _ = refetch_trigger();
        let result = get_passkeys().await;
        if let Err(err) = &result {
            tracing::error!("Failed to fetch passkeys: {}", err);
        }
        passkeys.set(Some(result));
    });

    #[cfg(not(feature = "web"))]
    let _ = (&mut passkeys, refetch_trigger);

    let mut refetch = move || refetch_trigger += 1;

    let add = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(FormStatus::Submitting);

        let name = device_name().trim().to_string();
        let name = (!name.is_empty()).then_some(name);

        #[cfg(feature = "web")]
        spawn(async move {
            match register_passkey(name).await {
                Ok(created) => {
                    device_name.set(String::new());
                    status.set(FormStatus::Success(format!(
                        "{} added",
                        display_name(&created)
                    )));
                    refetch();
                }
                Err(err) => {
                    tracing::warn!("Passkey registration failed: {}", err);
                    status.set(FormStatus::Failed(err.message));
                }
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = name;
    };

    let confirm_delete = move |_: ()| {
        let Some(target) = passkey_to_delete() else {
            return;
        };
        is_deleting.set(true);
        delete_error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_passkey(target.id).await {
                Ok(()) => {
                    show_delete_modal.set(false);
                    passkey_to_delete.set(None);
                    refetch();
                }
                Err(err) => delete_error.set(Some(err.message)),
            }
            is_deleting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = target;
    };

    let delete_message = passkey_to_delete()
        .map(|passkey| format!("{} can no longer be used to sign in.", display_name(&passkey)))
        .unwrap_or_default();

    rsx! {
        Section {
            title: "Passkeys",
            match passkeys() {
                None => rsx! { span { class: "loading loading-spinner" } },
                Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "opacity-70", "No passkeys yet." }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "flex flex-col divide-y divide-base-300",
                        for passkey in list {
                            PasskeyRow {
                                key: "{passkey.id}",
                                passkey: passkey.clone(),
                                on_renamed: move |_| refetch(),
                                on_delete: move |target: PasskeyDto| {
                                    passkey_to_delete.set(Some(target));
                                    show_delete_modal.set(true);
                                },
                            }
                        }
                    }
                },
            }
            StatusAlert { status: status() }
            form {
                class: "flex flex-col sm:flex-row gap-2",
                onsubmit: add,
                input {
                    class: "input input-bordered input-sm grow",
                    placeholder: "Device name (optional)",
                    value: "{device_name}",
                    oninput: move |evt| device_name.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary btn-sm",
                    disabled: status().is_submitting(),
                    "Add passkey"
                }
            }
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Remove passkey",
            message: delete_message,
            confirm_text: "Remove",
            is_processing: is_deleting(),
            error: delete_error(),
            on_confirm: confirm_delete,
        }
    }
}

#[component]
fn PasskeyRow(
    passkey: PasskeyDto,
    on_renamed: EventHandler<PasskeyDto>,
    on_delete: EventHandler<PasskeyDto>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut name = use_signal(|| passkey.device_name.clone().unwrap_or_default());
    let mut error = use_signal(|| None::<String>);

    let id = passkey.id;

    let save = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            match rename_passkey(id, name()).await {
                Ok(renamed) => {
                    editing.set(false);
                    error.set(None);
                    on_renamed.call(renamed);
                }
                Err(err) => error.set(Some(err.message)),
            }
        });

        #[cfg(not(feature = "web"))]
        let _ = (id, &mut error, on_renamed);
    };

    let created = passkey.created_at.format("%Y-%m-%d").to_string();
    let last_used = passkey
        .last_used_at
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string());
    let label = display_name(&passkey);

    rsx! {
        li {
            class: "py-2 flex flex-col gap-1",
            if editing() {
                form {
                    class: "flex gap-2",
                    onsubmit: save,
                    input {
                        class: "input input-bordered input-sm grow",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                        autofocus: true,
                    }
                    button { r#type: "submit", class: "btn btn-primary btn-sm", "Save" }
                    button {
                        r#type: "button",
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                }
            } else {
                div {
                    class: "flex items-center justify-between gap-2",
                    div {
                        p { class: "font-medium", "{label}" }
                        p { class: "text-xs opacity-70", "Added {created}, last used {last_used}" }
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| editing.set(true),
                            "Rename"
                        }
                        button {
                            class: "btn btn-error btn-sm",
                            onclick: move |_| on_delete.call(passkey.clone()),
                            "Remove"
                        }
                    }
                }
            }
            if let Some(error) = error() {
                p { class: "text-error text-sm", "{error}" }
            }
        }
    }
}

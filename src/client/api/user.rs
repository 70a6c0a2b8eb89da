use crate::{
    client::{
        api::helper::{
            browser_error, delete, get, parse_empty_response, parse_response, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::user::{ChangePasswordDto, ProfileDto, UpdateProfileDto},
};

pub async fn get_profile() -> Result<ProfileDto, ApiError> {
    let response = send_request(get("/api/user/profile")).await?;
    parse_response(response).await
}

pub async fn update_profile(payload: UpdateProfileDto) -> Result<ProfileDto, ApiError> {
    let body = serialize_json(&payload)?;

    let response = send_request(put("/api/user/profile").body(body)).await?;
    parse_response(response).await
}

pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<(), ApiError> {
    let body = serialize_json(&ChangePasswordDto {
        current_password,
        new_password,
    })?;

    let response = send_request(put("/api/user/password").body(body)).await?;
    parse_empty_response(response).await
}

/// Uploads the file selected in the `<input type="file">` with the given element id.
///
/// The multipart body is built by the browser's `FormData`, so the request goes through
/// `fetch` directly instead of the JSON helpers.
pub async fn upload_avatar(input_id: &str) -> Result<ProfileDto, ApiError> {
    use dioxus::prelude::document;

    let script = r#"
        const inputId = await dioxus.recv();
        const input = document.getElementById(inputId);
        if (!input || !input.files || input.files.length === 0) {
            dioxus.send({ status: 400, body: JSON.stringify({ error: "No file selected" }) });
        } else {
            const form = new FormData();
            form.append("avatar", input.files[0]);
            try {
                const response = await fetch("/api/user/avatar", {
                    method: "POST",
                    body: form,
                    credentials: "include",
                });
                dioxus.send({ status: response.status, body: await response.text() });
            } catch (e) {
                dioxus.send({ status: 500, body: JSON.stringify({ error: String(e) }) });
            }
        }
    "#;

    let mut eval = document::eval(script);
    eval.send(input_id.to_string()).map_err(browser_error)?;
    let reply: FetchReply = eval.recv().await.map_err(browser_error)?;

    reply.into_result()
}

pub async fn delete_avatar() -> Result<(), ApiError> {
    let response = send_request(delete("/api/user/avatar")).await?;
    parse_empty_response(response).await
}

#[derive(serde::Deserialize)]
struct FetchReply {
    status: u64,
    body: String,
}

impl FetchReply {
    fn into_result<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError> {
        if (200..300).contains(&self.status) {
            return serde_json::from_str(&self.body).map_err(|e| ApiError {
                status: 500,
                message: format!("Failed to parse response: {}", e),
            });
        }

        let message = serde_json::from_str::<crate::model::api::ErrorDto>(&self.body)
            .map(|dto| dto.error)
            .unwrap_or(self.body);

        Err(ApiError {
            status: self.status,
            message,
        })
    }
}

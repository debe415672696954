// handlers/protected/contact.rs - POST /contact

use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::handlers::public::pages::FORM_SUCCESS_PATH;
use crate::handlers::validate::FieldErrors;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::SubmissionService;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST /contact - record a contact message from the signed-in user
pub async fn contact_post(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<ContactRequest>,
) -> ApiResult<Value> {
    let mut form = FieldErrors::new();
    form.require("name", &payload.name)
        .max_len("name", &payload.name, 20)
        .require("email", &payload.email)
        .email("email", &payload.email)
        .require("message", &payload.message);
    form.into_result()?;

    let service = SubmissionService::new().await?;
    let submission = service
        .contact(user.user_id, &payload.name, &payload.email, &payload.message)
        .await?;

    Ok(ApiResponse::created(json!({
        "submission": submission,
        "redirect": FORM_SUCCESS_PATH,
    })))
}

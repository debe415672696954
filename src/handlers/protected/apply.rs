// handlers/protected/apply.rs - POST /post/:id/apply

use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::public::pages::FORM_SUCCESS_PATH;
use crate::handlers::validate::FieldErrors;
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::{AppliedForm, SubmissionError, SubmissionService};

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub address: String,
}

/// POST /post/:id/apply - submit an application for a post.
///
/// A second attempt by the same user against the same post writes nothing
/// and answers 303 See Other to the confirmation page with a user-facing
/// message, matching the non-fatal duplicate outcome. Unknown post: 404.
pub async fn apply_post(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApplyRequest>,
) -> Result<Response, ApiError> {
    let mut form = FieldErrors::new();
    form.require("name", &payload.name)
        .max_len("name", &payload.name, 20)
        .require("email", &payload.email)
        .email("email", &payload.email)
        .require("phone", &payload.phone)
        .max_len("phone", &payload.phone, 10)
        .require("skills", &payload.skills)
        .require("address", &payload.address);
    form.into_result()?;

    let service = SubmissionService::new().await?;
    let applied = AppliedForm {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        skills: payload.skills,
        address: payload.address,
    };

    match service.apply(id, user.user_id, applied).await {
        Ok(submission) => Ok(ApiResponse::created(json!({
            "submission": submission,
            "redirect": FORM_SUCCESS_PATH,
        }))
        .into_response()),
        Err(SubmissionError::AlreadyApplied) => Ok(ApiResponse::see_other(
            json!({
                "message": "You have already submitted the form for this post.",
                "redirect": FORM_SUCCESS_PATH,
            }),
            FORM_SUCCESS_PATH,
        )
        .into_response()),
        Err(other) => Err(other.into()),
    }
}

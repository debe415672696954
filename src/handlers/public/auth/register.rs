// handlers/public/auth/register.rs - POST /auth/register

use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::PublicUser;
use crate::error::ApiError;
use crate::handlers::validate::FieldErrors;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// "student" (default) or "staff"
    pub role: Option<String>,
}

/// POST /auth/register - Create a new user account.
/// 409 when the username is already taken.
pub async fn register_post(Json(payload): Json<RegisterRequest>) -> ApiResult<Value> {
    let mut form = FieldErrors::new();
    form.require("username", &payload.username)
        .max_len("username", &payload.username, 50)
        .require("email", &payload.email)
        .email("email", &payload.email)
        .require("password", &payload.password);
    form.into_result()?;

    let role = payload.role.as_deref().unwrap_or("student");
    if role != "student" && role != "staff" {
        return Err(ApiError::bad_request(format!("Unknown role: {}", role)));
    }

    let service = UserService::new().await?;
    let user = service
        .register(&payload.username, &payload.email, &payload.password, role)
        .await?;

    Ok(ApiResponse::created(json!({ "user": PublicUser::from(user) })))
}

// handlers/public/auth/login.rs - POST /auth/login

use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::models::PublicUser;
use crate::handlers::validate::FieldErrors;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login - Authenticate user credentials and receive a JWT
pub async fn login_post(Json(payload): Json<LoginRequest>) -> ApiResult<Value> {
    let mut form = FieldErrors::new();
    form.require("username", &payload.username).require("password", &payload.password);
    form.into_result()?;

    let service = UserService::new().await?;
    let user = service.authenticate(&payload.username, &payload.password).await?;

    let claims = Claims::new(user.id, user.username.clone(), user.role.clone());
    let token = generate_jwt(&claims)?;
    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(ApiResponse::success(json!({
        "token": token,
        "user": PublicUser::from(user),
        "expires_in": expires_in,
    })))
}

// handlers/protected/auth/whoami.rs - GET /api/auth/whoami

use axum::Extension;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, AuthUser};

/// GET /api/auth/whoami - the caller's identity as carried by their token
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> ApiResponse<Value> {
    ApiResponse::success(json!({
        "id": user.user_id,
        "username": user.username,
        "role": user.role,
    }))
}

// handlers/protected/posts/create.rs - POST /post/new

use axum::response::Json;
use axum::Extension;

use super::PostForm;
use crate::database::models::Post;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::PostService;

/// POST /post/new - create a post authored by the caller.
/// The sequential board number is assigned here and never changes afterwards.
pub async fn create_post(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<PostForm>,
) -> ApiResult<Post> {
    payload.validate()?;

    let service = PostService::new().await?;
    let post = service.create(user.user_id, &payload.title, &payload.content).await?;

    Ok(ApiResponse::created(post))
}

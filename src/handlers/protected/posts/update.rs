// handlers/protected/posts/update.rs - PUT /post/:id/update

use axum::extract::Path;
use axum::response::Json;
use axum::Extension;
use uuid::Uuid;

use super::PostForm;
use crate::database::models::Post;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::PostService;

/// PUT /post/:id/update - author-only edit of title/content.
/// 403 for anyone other than the author; the board number is left untouched.
pub async fn update_put(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PostForm>,
) -> ApiResult<Post> {
    payload.validate()?;

    let service = PostService::new().await?;
    let post = service.update(id, user.user_id, &payload.title, &payload.content).await?;

    Ok(ApiResponse::success(post))
}

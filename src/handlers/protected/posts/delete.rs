// handlers/protected/posts/delete.rs - DELETE /post/:id/delete

use axum::extract::Path;
use axum::Extension;
use uuid::Uuid;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::PostService;

/// DELETE /post/:id/delete - author-only removal.
/// Applications against the post are removed with it (cascade).
pub async fn delete_post(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    let service = PostService::new().await?;
    service.delete(id, user.user_id).await?;

    Ok(ApiResponse::<()>::no_content())
}

// handlers/protected/posts/detail.rs - GET /post/:id

use axum::extract::Path;
use axum::Extension;
use serde::Serialize;
use uuid::Uuid;

use crate::database::models::PostView;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{PostService, SubmissionService};

#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: PostView,
    /// Whether the caller has already applied to this post (display only;
    /// the hard gate is the apply handler)
    pub has_applied: bool,
}

/// GET /post/:id - post detail plus the caller's applied flag
pub async fn detail_get(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<PostDetail> {
    let posts = PostService::new().await?;
    let post = posts.detail(id).await?;

    let submissions = SubmissionService::new().await?;
    let has_applied = submissions.has_applied(id, user.user_id).await?;

    Ok(ApiResponse::success(PostDetail { post, has_applied }))
}

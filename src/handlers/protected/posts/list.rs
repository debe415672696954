// handlers/protected/posts/list.rs - GET /home

use axum::extract::Query;
use axum::Extension;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::models::PostPage;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{PostService, SubmissionService};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// One page of the home listing. For student callers, submitted_post_ids
/// carries the posts they have already applied to so the client can disable
/// the apply action.
#[derive(Debug, Serialize)]
pub struct HomePage {
    #[serde(flatten)]
    pub page: PostPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_post_ids: Option<Vec<Uuid>>,
}

/// GET /home - all posts, newest first, 6 per page
pub async fn home_get(
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PageQuery>,
) -> ApiResult<HomePage> {
    let posts = PostService::new().await?;
    let page = posts.list(query.page.unwrap_or(1)).await?;

    let submitted_post_ids = if user.is_student() {
        let submissions = SubmissionService::new().await?;
        Some(submissions.applied_post_ids(user.user_id).await?)
    } else {
        None
    };

    Ok(ApiResponse::success(HomePage { page, submitted_post_ids }))
}

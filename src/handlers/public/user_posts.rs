// handlers/public/user_posts.rs - GET /user/:username

use axum::extract::{Path, Query};
use serde::Deserialize;

use crate::database::models::PostPage;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::PostService;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// GET /user/:username - posts by one author, newest first, paginated.
/// 404 when the username does not exist.
pub async fn user_posts_get(
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<PostPage> {
    let service = PostService::new().await?;
    let page = service.list_by_author(&username, query.page.unwrap_or(1)).await?;

    Ok(ApiResponse::success(page))
}

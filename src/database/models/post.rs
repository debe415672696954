use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub author_id: Uuid,
    /// Sequential board number. Assigned once at creation, never reassigned,
    /// never reused while any post remains.
    pub unique_number: i32,
}

/// Post as rendered on listings and detail pages, with the author joined in
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date_posted: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_username: String,
    pub unique_number: i32,
}

/// One page of a post listing, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<PostView>,
    pub page: i64,
    pub total_pages: i64,
    pub total: i64,
}

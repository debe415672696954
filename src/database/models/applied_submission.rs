use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's application against a specific post.
/// At most one row exists per (author_id, post_id); see the duplicate guard
/// in SubmissionService and the UNIQUE constraint backing it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppliedSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub address: String,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Record of a contact-form message, attributed to the signed-in sender
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

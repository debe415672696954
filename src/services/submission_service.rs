use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::{is_unique_violation, DatabaseError, DatabaseManager};
use crate::database::models::{AppliedSubmission, ContactSubmission};

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("You have already submitted the form for this post.")]
    AlreadyApplied,

    #[error("Post not found")]
    PostNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database manager error: {0}")]
    DatabaseManager(#[from] DatabaseError),
}

/// Fields supplied by the applicant
#[derive(Debug, Clone)]
pub struct AppliedForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub address: String,
}

pub struct SubmissionService {
    pool: PgPool,
}

impl SubmissionService {
    pub async fn new() -> Result<Self, SubmissionError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Has this user already applied to this post?
    pub async fn has_applied(&self, post_id: Uuid, user_id: Uuid) -> Result<bool, SubmissionError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM applied_submissions WHERE post_id = $1 AND author_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Ids of every post this user has applied to (drives listing display)
    pub async fn applied_post_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, SubmissionError> {
        let ids = sqlx::query_scalar("SELECT post_id FROM applied_submissions WHERE author_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// Create an application for (user, post).
    ///
    /// Guard: if an application by this user against this post already exists,
    /// nothing is written and AlreadyApplied is returned. The existence check
    /// is the primary gate; the UNIQUE (author_id, post_id) constraint closes
    /// the window between check and insert, and a violation there collapses to
    /// the same outcome.
    pub async fn apply(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        form: AppliedForm,
    ) -> Result<AppliedSubmission, SubmissionError> {
        let post_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;
        if !post_exists {
            return Err(SubmissionError::PostNotFound);
        }

        if self.has_applied(post_id, user_id).await? {
            return Err(SubmissionError::AlreadyApplied);
        }

        let inserted = sqlx::query_as::<_, AppliedSubmission>(
            "INSERT INTO applied_submissions (name, email, phone, skills, address, post_id, author_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.skills)
        .bind(&form.address)
        .bind(post_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(submission) => Ok(submission),
            Err(e) if is_unique_violation(&e) => Err(SubmissionError::AlreadyApplied),
            Err(e) => Err(e.into()),
        }
    }

    /// Record a contact-form message from the signed-in user
    pub async fn contact(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactSubmission, SubmissionError> {
        let submission = sqlx::query_as::<_, ContactSubmission>(
            "INSERT INTO contact_submissions (name, email, message, author_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }
}

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::database::manager::{is_unique_violation, DatabaseError, DatabaseManager};
use crate::database::models::{Post, PostPage, PostView};

/// Attempts before giving up when concurrent creations collide on a number
const UNIQUE_NUMBER_RETRIES: u32 = 3;

const POST_VIEW_COLUMNS: &str = "p.id, p.title, p.content, p.date_posted, p.author_id, \
     u.username AS author_username, p.unique_number";

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Post not found")]
    NotFound,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Only the author may modify this post")]
    NotAuthor,

    #[error("Could not assign a post number, please try again")]
    NumberContention,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database manager error: {0}")]
    DatabaseManager(#[from] DatabaseError),
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub async fn new() -> Result<Self, PostError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// All posts, newest first, one page at a time
    pub async fn list(&self, page: i64) -> Result<PostPage, PostError> {
        let per_page = crate::config::config().api.posts_per_page;
        let (limit, offset) = page_bounds(page, per_page);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM posts p JOIN users u ON u.id = p.author_id \
             ORDER BY p.date_posted DESC LIMIT $1 OFFSET $2",
            POST_VIEW_COLUMNS
        );
        let posts = sqlx::query_as::<_, PostView>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(PostPage {
            posts,
            page: page.max(1),
            total_pages: total_pages(total, per_page),
            total,
        })
    }

    /// Posts by a single author, newest first; 404s on an unknown username
    pub async fn list_by_author(&self, username: &str, page: i64) -> Result<PostPage, PostError> {
        let author_id: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        let author_id = author_id.ok_or_else(|| PostError::UserNotFound(username.to_string()))?;

        let per_page = crate::config::config().api.posts_per_page;
        let (limit, offset) = page_bounds(page, per_page);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            "SELECT {} FROM posts p JOIN users u ON u.id = p.author_id \
             WHERE p.author_id = $1 ORDER BY p.date_posted DESC LIMIT $2 OFFSET $3",
            POST_VIEW_COLUMNS
        );
        let posts = sqlx::query_as::<_, PostView>(&sql)
            .bind(author_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(PostPage {
            posts,
            page: page.max(1),
            total_pages: total_pages(total, per_page),
            total,
        })
    }

    pub async fn get(&self, post_id: Uuid) -> Result<Post, PostError> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PostError::NotFound)
    }

    /// Post detail with the author's username joined in
    pub async fn detail(&self, post_id: Uuid) -> Result<PostView, PostError> {
        let sql = format!(
            "SELECT {} FROM posts p JOIN users u ON u.id = p.author_id WHERE p.id = $1",
            POST_VIEW_COLUMNS
        );
        sqlx::query_as::<_, PostView>(&sql)
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PostError::NotFound)
    }

    /// Create a post, assigning the next sequential board number.
    ///
    /// The number is max(unique_number) + 1, or 1 for the first post, and is
    /// assigned exactly once. Compute and insert run in one transaction; the
    /// UNIQUE column rejects a concurrent assignment of the same number, in
    /// which case the computation is retried.
    pub async fn create(
        &self,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post, PostError> {
        for _ in 0..UNIQUE_NUMBER_RETRIES {
            let mut tx = self.pool.begin().await?;

            let next_number: i32 =
                sqlx::query_scalar("SELECT COALESCE(MAX(unique_number), 0) + 1 FROM posts")
                    .fetch_one(&mut *tx)
                    .await?;

            let inserted = sqlx::query_as::<_, Post>(
                "INSERT INTO posts (title, content, author_id, unique_number) \
                 VALUES ($1, $2, $3, $4) RETURNING *",
            )
            .bind(title)
            .bind(content)
            .bind(author_id)
            .bind(next_number)
            .fetch_one(&mut *tx)
            .await;

            match inserted {
                Ok(post) => {
                    tx.commit().await?;
                    return Ok(post);
                }
                Err(e) if is_unique_violation(&e) => {
                    tx.rollback().await?;
                    warn!("unique_number {} already taken, retrying", next_number);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(PostError::NumberContention)
    }

    /// Update title/content. The board number is never touched on update.
    pub async fn update(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Post, PostError> {
        let post = self.get(post_id).await?;
        self.ensure_author(&post, user_id)?;

        let updated = sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = $1, content = $2 WHERE id = $3 RETURNING *",
        )
        .bind(title)
        .bind(content)
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a post. Applications against it go with it (ON DELETE CASCADE).
    pub async fn delete(&self, post_id: Uuid, user_id: Uuid) -> Result<(), PostError> {
        let post = self.get(post_id).await?;
        self.ensure_author(&post, user_id)?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Authorization predicate: mutations are allowed only for the post's author
    pub fn ensure_author(&self, post: &Post, user_id: Uuid) -> Result<(), PostError> {
        if post.author_id == user_id {
            Ok(())
        } else {
            Err(PostError::NotAuthor)
        }
    }
}

/// LIMIT/OFFSET for a 1-based page number. Pages below 1 clamp to the first;
/// the offset saturates so an absurd page value stays a valid (empty) query
/// instead of overflowing.
fn page_bounds(page: i64, per_page: i64) -> (i64, i64) {
    let page = page.max(1);
    (per_page, (page - 1).saturating_mul(per_page))
}

fn total_pages(total: i64, per_page: i64) -> i64 {
    ((total + per_page - 1) / per_page).max(1)
}
